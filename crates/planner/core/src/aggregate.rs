//! Ranged material aggregation.
//!
//! [`compute_range`] sums a cost table over the half-open-then-inclusive
//! range `(start, end]`; [`merge`] unions several aggregates. Both are pure
//! and never fail: empty or inverted ranges simply require nothing.

use crate::material::{AggregatedMaterials, MaterialCostTable};

/// Sums every positive material count for levels `start + 1 ..= end`.
///
/// Returns an empty aggregate when `start >= end`. Levels past the end of
/// the table contribute nothing.
///
/// # Example
/// ```
/// # use planner_core::{MaterialCost, MaterialCostTable, compute_range};
/// let table = MaterialCostTable::new(vec![
///     vec![],
///     vec![MaterialCost::new("Mora", 20_000)],
///     vec![MaterialCost::new("Mora", 40_000), MaterialCost::new("Crown", 1)],
/// ]);
///
/// let materials = compute_range(&table, 0, 2);
/// assert_eq!(materials.get("Mora"), 60_000);
/// assert_eq!(materials.get("Crown"), 1);
///
/// assert!(compute_range(&table, 2, 2).is_empty());
/// ```
pub fn compute_range(table: &MaterialCostTable, start: usize, end: usize) -> AggregatedMaterials {
    let mut materials = AggregatedMaterials::new();

    if start < end {
        for level in table.levels().skip(start + 1).take(end - start) {
            for cost in level {
                materials.add(&cost.name, cost.count);
            }
        }
    }

    materials
}

/// Unions all inputs, summing counts for names present in more than one.
pub fn merge<'a, I>(aggregates: I) -> AggregatedMaterials
where
    I: IntoIterator<Item = &'a AggregatedMaterials>,
{
    let mut merged = AggregatedMaterials::new();

    for aggregate in aggregates {
        for (name, count) in aggregate.iter() {
            merged.add(name, count);
        }
    }

    merged
}
