//! Progression tracks and their selected level ranges.

/// One of the four independently selected progression tracks.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Track {
    /// Character level / ascension.
    Level,
    /// Normal attack talent.
    Attack,
    /// Elemental skill talent.
    Skill,
    /// Elemental burst talent.
    Burst,
}

impl Track {
    pub const COUNT: usize = 4;

    /// Talent tracks share the talent cost table and option list.
    pub const fn is_talent(self) -> bool {
        !matches!(self, Self::Level)
    }

    /// Name of the cost table the track reads from.
    pub const fn table_name(self) -> &'static str {
        if self.is_talent() { "talent" } else { "level" }
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// A selectable level: display label plus the cost-table index it maps to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelOption {
    pub label: String,
    pub value: usize,
}

impl LevelOption {
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The starting level: index 0, no materials.
    pub fn minimal() -> Self {
        Self::new("1", 0)
    }
}

impl Default for LevelOption {
    fn default() -> Self {
        Self::minimal()
    }
}

/// Cost-table indices `(min, max)` of a selection.
///
/// `min >= max` is an empty range, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LevelRange {
    pub min: usize,
    pub max: usize,
}

impl LevelRange {
    pub const NONE: Self = Self { min: 0, max: 0 };

    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn is_empty(&self) -> bool {
        self.min >= self.max
    }
}

/// The selected minimum and maximum options for one track.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackSelection {
    pub min: LevelOption,
    pub max: LevelOption,
}

impl TrackSelection {
    pub fn new(min: LevelOption, max: LevelOption) -> Self {
        Self { min, max }
    }

    /// Both ends at the minimal option.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn range(&self) -> LevelRange {
        LevelRange::new(self.min.value, self.max.value)
    }
}
