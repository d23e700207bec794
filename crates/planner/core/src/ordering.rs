//! Presentation ordering for aggregated materials.
//!
//! Tiers, each consulted only when the previous one ties:
//! 1. character (level) materials before talent-only materials
//! 2. ascending sort order
//! 3. ascending rarity, compared as numbers
//!
//! Materials without metadata sort after those with it. A final tie on name
//! keeps the listing deterministic.

use std::cmp::Ordering;

use crate::material::{AggregatedMaterials, MaterialCatalog, MaterialInfo};

/// Compares two rarity strings by their numeric value.
///
/// Unparseable rarities sort after every numeric one and tie with each other.
pub fn compare_rarity(a: &str, b: &str) -> Ordering {
    let a = MaterialInfo::new(0, a).rarity_value();
    let b = MaterialInfo::new(0, b).rarity_value();
    compare_optional(a, b, |a, b| a.total_cmp(b))
}

/// Orders `total` for display, giving priority to names in `character`.
pub fn sort_materials(
    total: &AggregatedMaterials,
    character: &AggregatedMaterials,
    catalog: &MaterialCatalog,
) -> Vec<(String, u32)> {
    let mut entries: Vec<(&str, u32)> = total.iter().collect();

    entries.sort_by(|(a, _), (b, _)| {
        let a_is_char = character.contains(a);
        let b_is_char = character.contains(b);

        // `true` first
        b_is_char
            .cmp(&a_is_char)
            .then_with(|| compare_info(catalog.get(a), catalog.get(b)))
            .then_with(|| a.cmp(b))
    });

    entries
        .into_iter()
        .map(|(name, count)| (name.to_owned(), count))
        .collect()
}

fn compare_info(a: Option<&MaterialInfo>, b: Option<&MaterialInfo>) -> Ordering {
    let sort_order = compare_optional(a.map(|i| i.sort_order), b.map(|i| i.sort_order), Ord::cmp);

    sort_order.then_with(|| {
        compare_optional(
            a.and_then(MaterialInfo::rarity_value),
            b.and_then(MaterialInfo::rarity_value),
            |a, b| a.total_cmp(b),
        )
    })
}

/// `Some` values before `None`, `Some` pairs by `cmp`.
fn compare_optional<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
