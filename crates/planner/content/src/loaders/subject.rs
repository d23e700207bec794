//! Subject bundle loader.

use std::path::Path;

use planner_core::SubjectBundle;

use crate::loaders::{LoadResult, read_data};

/// Loader for per-subject cost tables and level options.
pub struct SubjectLoader;

impl SubjectLoader {
    /// Load and validate a subject bundle from a RON, JSON or TOML file.
    ///
    /// File format (RON):
    /// ```ron
    /// (
    ///     name: "Amber",
    ///     level_costs: [
    ///         [],
    ///         [(name: "Mora", count: 20000), (name: "Agnidus Agate Sliver", count: 1)],
    ///     ],
    ///     level_options: [(label: "1", value: 0), (label: "20+", value: 1)],
    ///     talent_costs: [[], []],
    ///     talent_options: [(label: "1", value: 0)],
    /// )
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if the bundle does not
    /// pass [`SubjectBundle::validate`].
    pub fn load(path: &Path) -> LoadResult<SubjectBundle> {
        let bundle: SubjectBundle = read_data(path)?;
        bundle
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid subject bundle {}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            subject = %bundle.name,
            levels = bundle.level_costs.len(),
            talents = bundle.talent_costs.len(),
            "loaded subject bundle"
        );

        Ok(bundle)
    }
}
