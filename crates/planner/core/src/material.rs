//! Material cost tables, metadata and aggregated totals.
//!
//! A [`MaterialCostTable`] lists, per level, the materials consumed to advance
//! from that level to the next. Index 0 is the starting level and never costs
//! anything. [`AggregatedMaterials`] is the derived name → count mapping that
//! the aggregator produces from one or more tables.

use std::collections::BTreeMap;

/// A single material entry within a level of a cost table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialCost {
    pub name: String,
    pub count: u32,
}

impl MaterialCost {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Per-level material costs for one progression table.
///
/// `levels[i]` holds the materials required to reach level `i` from level
/// `i - 1`. Level 0 is the "no cost" entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MaterialCostTable {
    levels: Vec<Vec<MaterialCost>>,
}

impl MaterialCostTable {
    pub fn new(levels: Vec<Vec<MaterialCost>>) -> Self {
        Self { levels }
    }

    /// Number of levels, including level 0.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Costs for a single level, or `None` past the end of the table.
    pub fn level(&self, index: usize) -> Option<&[MaterialCost]> {
        self.levels.get(index).map(Vec::as_slice)
    }

    pub fn levels(&self) -> impl Iterator<Item = &[MaterialCost]> {
        self.levels.iter().map(Vec::as_slice)
    }
}

/// Static display metadata for a material.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialInfo {
    pub sort_order: i32,
    /// Rarity as a decimal string ("1".."5"). Compared numerically.
    pub rarity: String,
}

impl MaterialInfo {
    pub fn new(sort_order: i32, rarity: impl Into<String>) -> Self {
        Self {
            sort_order,
            rarity: rarity.into(),
        }
    }

    /// Numeric value of the rarity string, if it parses.
    pub fn rarity_value(&self) -> Option<f64> {
        self.rarity.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
    }
}

/// Material metadata keyed by material name.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MaterialCatalog {
    entries: BTreeMap<String, MaterialInfo>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, info: MaterialInfo) {
        self.entries.insert(name.into(), info);
    }

    pub fn get(&self, name: &str) -> Option<&MaterialInfo> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, MaterialInfo)> for MaterialCatalog {
    fn from_iter<I: IntoIterator<Item = (String, MaterialInfo)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Total required count per material name.
///
/// Counts are always positive; a material that is absent requires zero.
/// Values are derived by [`crate::aggregate`] and never edited in place by
/// callers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregatedMaterials {
    counts: BTreeMap<String, u32>,
}

impl AggregatedMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required count for `name` (zero when absent).
    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Adds `count` to `name`. Zero counts are ignored so absent keys keep
    /// meaning "zero".
    pub(crate) fn add(&mut self, name: &str, count: u32) {
        if count == 0 {
            return;
        }
        match self.counts.get_mut(name) {
            Some(total) => *total = total.saturating_add(count),
            None => {
                self.counts.insert(name.to_owned(), count);
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for AggregatedMaterials {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut materials = Self::new();
        for (name, count) in iter {
            materials.add(name.as_ref(), count);
        }
        materials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregated_ignores_zero_counts() {
        let materials: AggregatedMaterials = [("Mora", 0), ("Crown", 1)].into_iter().collect();
        assert!(!materials.contains("Mora"));
        assert_eq!(materials.get("Mora"), 0);
        assert_eq!(materials.get("Crown"), 1);
    }

    #[test]
    fn aggregated_sums_duplicate_keys() {
        let materials: AggregatedMaterials = [("Mora", 20_000), ("Mora", 5_000)]
            .into_iter()
            .collect();
        assert_eq!(materials.get("Mora"), 25_000);
        assert_eq!(materials.len(), 1);
    }

    #[test]
    fn rarity_value_parses_numeric_strings() {
        assert_eq!(MaterialInfo::new(0, "10").rarity_value(), Some(10.0));
        assert_eq!(MaterialInfo::new(0, " 4 ").rarity_value(), Some(4.0));
        assert_eq!(MaterialInfo::new(0, "rare").rarity_value(), None);
    }
}
