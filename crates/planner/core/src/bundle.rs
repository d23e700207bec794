//! Per-subject data bundle.

use crate::error::BundleError;
use crate::material::MaterialCostTable;
use crate::selection::{LevelOption, Track};

/// Cost tables and selectable options for a single subject (character).
///
/// The talent table and options are shared by all three talent tracks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectBundle {
    pub name: String,
    pub level_costs: MaterialCostTable,
    pub level_options: Vec<LevelOption>,
    pub talent_costs: MaterialCostTable,
    pub talent_options: Vec<LevelOption>,
}

impl SubjectBundle {
    /// Cost table used by `track`.
    pub fn costs(&self, track: Track) -> &MaterialCostTable {
        if track.is_talent() {
            &self.talent_costs
        } else {
            &self.level_costs
        }
    }

    /// Option list used by `track`.
    pub fn options(&self, track: Track) -> &[LevelOption] {
        if track.is_talent() {
            &self.talent_options
        } else {
            &self.level_options
        }
    }

    /// Checks that both tables start with a free level 0 and that every
    /// option points inside its table.
    ///
    /// A bundle with no options at all is accepted (presets fall back to the
    /// minimal option).
    pub fn validate(&self) -> Result<(), BundleError> {
        for track in [Track::Level, Track::Attack] {
            let table = track.table_name();
            let costs = self.costs(track);
            let Some(start) = costs.level(0) else {
                if self.options(track).is_empty() {
                    continue;
                }
                return Err(BundleError::EmptyCostTable { table });
            };

            if let Some(cost) = start.iter().find(|cost| cost.count > 0) {
                return Err(BundleError::StartingLevelHasCost {
                    table,
                    material: cost.name.clone(),
                });
            }

            if let Some(option) = self
                .options(track)
                .iter()
                .find(|option| option.value >= costs.len())
            {
                return Err(BundleError::OptionOutOfRange {
                    table,
                    label: option.label.clone(),
                    value: option.value,
                    len: costs.len(),
                });
            }
        }

        Ok(())
    }
}
