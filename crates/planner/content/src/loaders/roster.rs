//! Character roster loader.

use std::path::Path;

use planner_core::CharacterSummary;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_data};

/// Roster structure for data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterCatalog {
    pub characters: Vec<CharacterSummary>,
}

/// Loader for the character roster.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the roster from a RON or JSON file containing a RosterCatalog.
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterSummary>> {
        let catalog: RosterCatalog = read_data(path)?;
        tracing::debug!(
            path = %path.display(),
            characters = catalog.characters.len(),
            "loaded roster"
        );
        Ok(catalog.characters)
    }
}
