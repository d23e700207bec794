//! Structural validation errors for loaded subject bundles.
//!
//! Aggregation itself never fails. These errors only surface when a data
//! bundle is checked after loading, so broken data is rejected at the
//! boundary instead of silently producing empty listings.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    /// An option points past the end of the cost table it selects from.
    #[error(
        "{table} option '{label}' points at level {value}, but the cost table has {len} levels"
    )]
    OptionOutOfRange {
        table: &'static str,
        label: String,
        value: usize,
        len: usize,
    },

    /// A cost table without the level-0 "no cost" entry.
    #[error("{table} cost table is empty (missing level 0)")]
    EmptyCostTable { table: &'static str },

    /// Level 0 must not cost anything.
    #[error("{table} cost table level 0 lists '{material}'")]
    StartingLevelHasCost { table: &'static str, material: String },
}

impl BundleError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OptionOutOfRange { .. } => "option_out_of_range",
            Self::EmptyCostTable { .. } => "empty_cost_table",
            Self::StartingLevelHasCost { .. } => "starting_level_has_cost",
        }
    }
}
