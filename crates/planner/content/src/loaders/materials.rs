//! Material catalog loader.

use std::path::Path;

use planner_core::MaterialCatalog;

use crate::loaders::{LoadResult, read_data};

/// Loader for the shared material catalog.
pub struct MaterialLoader;

impl MaterialLoader {
    /// Load the catalog from a RON or JSON file mapping material names to
    /// metadata.
    ///
    /// Example:
    /// ```ron
    /// {
    ///     "Mora": (sort_order: 0, rarity: "3"),
    ///     "Agnidus Agate Sliver": (sort_order: 100, rarity: "2"),
    /// }
    /// ```
    pub fn load(path: &Path) -> LoadResult<MaterialCatalog> {
        let catalog: MaterialCatalog = read_data(path)?;
        tracing::debug!(path = %path.display(), materials = catalog.len(), "loaded material catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_material_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("materials.ron");
        std::fs::write(
            &path,
            r#"{
                "Mora": (sort_order: 0, rarity: "3"),
                "Crown of Insight": (sort_order: 900, rarity: "5"),
            }"#,
        )
        .unwrap();

        let catalog = MaterialLoader::load(&path).expect("Failed to load material catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Crown of Insight").unwrap().sort_order, 900);
        assert_eq!(catalog.get("Mora").unwrap().rarity, "3");
    }
}
