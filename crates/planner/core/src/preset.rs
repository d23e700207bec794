//! Range-selection presets.
//!
//! Presets only choose options; they carry no aggregation logic. Every
//! lookup falls back to [`LevelOption::minimal`] when the option list is too
//! short, so a partially loaded subject never fails.

use crate::selection::LevelOption;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Preset {
    /// Every track collapses to `(0, 0)`.
    #[default]
    None,
    /// Maximums snap near the end of each option list.
    Recommended,
    /// Maximums snap to the last option of each list.
    Maximum,
}

/// The option `n_to_last` positions from the end (`1` is the last one).
///
/// ```
/// # use planner_core::{LevelOption, preset::option_from_end};
/// let options: Vec<_> = (0..5).map(|i| LevelOption::new(i.to_string(), i)).collect();
/// assert_eq!(option_from_end(&options, 3).value, 2);
/// assert_eq!(option_from_end(&[], 3), LevelOption::minimal());
/// ```
pub fn option_from_end(options: &[LevelOption], n_to_last: usize) -> LevelOption {
    options
        .len()
        .checked_sub(n_to_last)
        .filter(|_| n_to_last > 0)
        .and_then(|index| options.get(index))
        .cloned()
        .unwrap_or_else(LevelOption::minimal)
}

/// The last option, or the minimal option for an empty list.
pub fn max_option(options: &[LevelOption]) -> LevelOption {
    option_from_end(options, 1)
}
