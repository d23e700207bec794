//! Content factory for loading planner data from a data directory.

use std::path::{Path, PathBuf};

use planner_core::{CharacterSummary, MaterialCatalog, PlannerConfig, SubjectBundle};

use crate::format::DataFormat;
use crate::loaders::{ConfigLoader, LoadResult, MaterialLoader, RosterLoader, SubjectLoader};

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── materials.ron
/// ├── roster.ron
/// └── subjects/
///     ├── amber.ron
///     └── lisa.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load planner configuration from `config.toml` (defaults when absent).
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    /// Load the material catalog from `materials.ron`.
    pub fn load_materials(&self) -> LoadResult<MaterialCatalog> {
        MaterialLoader::load(&self.data_dir.join("materials.ron"))
    }

    /// Load the character roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<CharacterSummary>> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load `subjects/{name}.{ron,json,toml}`, preferring RON.
    ///
    /// The name is matched case-insensitively against file stems.
    pub fn load_subject(&self, name: &str) -> LoadResult<SubjectBundle> {
        let path = self.subject_path(name)?;
        SubjectLoader::load(&path)
    }

    /// Subject names available under `subjects/`, sorted and deduplicated.
    pub fn subject_names(&self) -> LoadResult<Vec<String>> {
        let mut names: Vec<String> = self
            .subject_files()?
            .into_iter()
            .filter_map(|path| Some(path.file_stem()?.to_str()?.to_owned()))
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn subjects_dir(&self) -> PathBuf {
        self.data_dir.join("subjects")
    }

    fn subject_path(&self, name: &str) -> LoadResult<PathBuf> {
        let files = self.subject_files()?;

        DataFormat::PREFERENCE
            .into_iter()
            .find_map(|format| {
                files.iter().find(|path| {
                    DataFormat::from_path(path) == Some(format)
                        && path
                            .file_stem()
                            .and_then(|stem| stem.to_str())
                            .is_some_and(|stem| stem.eq_ignore_ascii_case(name))
                })
            })
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Subject '{}' not found in {}",
                    name,
                    self.subjects_dir().display()
                )
            })
    }

    fn subject_files(&self) -> LoadResult<Vec<PathBuf>> {
        let dir = self.subjects_dir();
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && DataFormat::from_path(&path).is_some() {
                files.push(path);
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.subjects_dir(), Path::new("/tmp/data/subjects"));
    }

    #[test]
    fn test_missing_subjects_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert!(factory.subject_names().is_err());
        assert!(factory.load_subject("amber").is_err());
    }
}
