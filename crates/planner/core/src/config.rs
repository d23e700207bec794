use crate::preset::Preset;

/// Planner tunables, loaded from `config.toml` by the content loaders.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Preset applied whenever a new subject is loaded.
    pub default_preset: Preset,
    /// Position from the end of the level options used by the recommended
    /// preset (`1` is the last option).
    pub level_recommended_from_end: usize,
    /// Position from the end of the talent options used by the recommended
    /// preset.
    pub talent_recommended_from_end: usize,
}

impl PlannerConfig {
    pub const DEFAULT_LEVEL_RECOMMENDED_FROM_END: usize = 2;
    pub const DEFAULT_TALENT_RECOMMENDED_FROM_END: usize = 3;

    pub fn new() -> Self {
        Self {
            default_preset: Preset::None,
            level_recommended_from_end: Self::DEFAULT_LEVEL_RECOMMENDED_FROM_END,
            talent_recommended_from_end: Self::DEFAULT_TALENT_RECOMMENDED_FROM_END,
        }
    }

    pub fn with_default_preset(mut self, preset: Preset) -> Self {
        self.default_preset = preset;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
