//! Content loaders for reading planner data from files.
//!
//! This module provides loaders that convert RON/JSON/TOML files into
//! planner-core types. Formats are detected via [`crate::format`].

pub mod config;
pub mod factory;
pub mod materials;
pub mod roster;
pub mod subject;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use materials::MaterialLoader;
pub use roster::RosterLoader;
pub use subject::SubjectLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::format::DataFormat;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and deserializes `path`, picking the parser from its extension.
pub(crate) fn read_data<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let format = DataFormat::from_path(path)
        .ok_or_else(|| anyhow::anyhow!("Unsupported data file extension: {}", path.display()))?;
    let content = read_file(path)?;

    tracing::trace!(path = %path.display(), %format, bytes = content.len(), "parsing data file");

    match format {
        DataFormat::Ron => ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse RON at {}: {}", path.display(), e)),
        DataFormat::Json => serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON at {}: {}", path.display(), e)),
        DataFormat::Toml => toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML at {}: {}", path.display(), e)),
    }
}
