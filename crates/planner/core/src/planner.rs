//! Material planner view-model.
//!
//! [`MaterialPlanner`] owns everything the material calculator needs: the
//! current subject's cost tables and options, the shared material catalog,
//! and the selected range of each [`Track`]. Derived aggregates are memoized
//! and dropped whenever one of their inputs changes, so reads after a
//! mutation always reflect the new selection.

use std::cell::OnceCell;

use crate::aggregate::{compute_range, merge};
use crate::bundle::SubjectBundle;
use crate::config::PlannerConfig;
use crate::material::{AggregatedMaterials, MaterialCatalog, MaterialInfo};
use crate::ordering::sort_materials;
use crate::preset::{Preset, max_option, option_from_end};
use crate::selection::{LevelOption, LevelRange, Track, TrackSelection};

/// Memoized derived values.
#[derive(Debug, Default)]
struct Derived {
    character: OnceCell<AggregatedMaterials>,
    talent: OnceCell<AggregatedMaterials>,
    total: OnceCell<AggregatedMaterials>,
    sorted: OnceCell<Vec<(String, u32)>>,
}

impl Derived {
    fn invalidate_character(&mut self) {
        self.character.take();
        self.invalidate_total();
    }

    fn invalidate_talent(&mut self) {
        self.talent.take();
        self.invalidate_total();
    }

    fn invalidate_total(&mut self) {
        self.total.take();
        self.invalidate_sorted();
    }

    fn invalidate_sorted(&mut self) {
        self.sorted.take();
    }

    fn invalidate_all(&mut self) {
        self.character.take();
        self.talent.take();
        self.invalidate_total();
    }
}

#[derive(Debug)]
pub struct MaterialPlanner {
    config: PlannerConfig,
    catalog: MaterialCatalog,
    subject: SubjectBundle,
    selections: [TrackSelection; Track::COUNT],
    derived: Derived,
}

impl MaterialPlanner {
    /// Creates a planner with no subject loaded and default config.
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self::with_config(PlannerConfig::default(), catalog)
    }

    pub fn with_config(config: PlannerConfig, catalog: MaterialCatalog) -> Self {
        Self {
            config,
            catalog,
            subject: SubjectBundle::default(),
            selections: Default::default(),
            derived: Derived::default(),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    // ========================================================================
    // Subject lifecycle
    // ========================================================================

    /// Replaces the subject and applies the configured default preset.
    pub fn load_subject(&mut self, subject: SubjectBundle) {
        let preset = self.config.default_preset;
        self.load_subject_with_preset(subject, preset);
    }

    /// Replaces the subject wholesale, resets every track to `(0, 0)`, then
    /// applies `preset`.
    pub fn load_subject_with_preset(&mut self, subject: SubjectBundle, preset: Preset) {
        tracing::debug!(
            subject = %subject.name,
            level_options = subject.level_options.len(),
            talent_options = subject.talent_options.len(),
            %preset,
            "loading subject"
        );

        self.subject = subject;
        self.selections = Default::default();
        self.derived.invalidate_all();
        self.apply_preset(preset);
    }

    /// Replaces the material metadata used for ordering.
    pub fn set_catalog(&mut self, catalog: MaterialCatalog) {
        self.catalog = catalog;
        self.derived.invalidate_sorted();
    }

    pub fn subject(&self) -> &SubjectBundle {
        &self.subject
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn material_info(&self, name: &str) -> Option<&MaterialInfo> {
        self.catalog.get(name)
    }

    pub fn level_options(&self) -> &[LevelOption] {
        &self.subject.level_options
    }

    pub fn talent_options(&self) -> &[LevelOption] {
        &self.subject.talent_options
    }

    pub fn options(&self, track: Track) -> &[LevelOption] {
        self.subject.options(track)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selection(&self, track: Track) -> &TrackSelection {
        &self.selections[track.as_index()]
    }

    pub fn range(&self, track: Track) -> LevelRange {
        self.selection(track).range()
    }

    pub fn set_min(&mut self, track: Track, option: LevelOption) {
        self.selections[track.as_index()].min = option;
        self.invalidate_track(track);
    }

    pub fn set_max(&mut self, track: Track, option: LevelOption) {
        self.selections[track.as_index()].max = option;
        self.invalidate_track(track);
    }

    /// Applies a preset to every track.
    ///
    /// `Recommended` and `Maximum` move only maximums; `None` collapses both
    /// ends of every track to the minimal option.
    pub fn apply_preset(&mut self, preset: Preset) {
        tracing::debug!(subject = %self.subject.name, %preset, "applying preset");

        match preset {
            Preset::None => {
                self.selections = Default::default();
                self.derived.invalidate_all();
            }
            Preset::Recommended => {
                let level = option_from_end(
                    &self.subject.level_options,
                    self.config.level_recommended_from_end,
                );
                let talent = option_from_end(
                    &self.subject.talent_options,
                    self.config.talent_recommended_from_end,
                );
                self.set_maximums(level, talent);
            }
            Preset::Maximum => {
                let level = max_option(&self.subject.level_options);
                let talent = max_option(&self.subject.talent_options);
                self.set_maximums(level, talent);
            }
        }
    }

    fn set_maximums(&mut self, level: LevelOption, talent: LevelOption) {
        self.set_max(Track::Level, level);
        for track in [Track::Attack, Track::Skill, Track::Burst] {
            self.set_max(track, talent.clone());
        }
    }

    fn invalidate_track(&mut self, track: Track) {
        if track.is_talent() {
            self.derived.invalidate_talent();
        } else {
            self.derived.invalidate_character();
        }
    }

    // ========================================================================
    // Derived materials
    // ========================================================================

    /// Materials for the level track.
    pub fn character_materials(&self) -> &AggregatedMaterials {
        self.derived.character.get_or_init(|| {
            let range = self.range(Track::Level);
            compute_range(&self.subject.level_costs, range.min, range.max)
        })
    }

    /// Materials for the three talent tracks combined.
    pub fn talent_materials(&self) -> &AggregatedMaterials {
        self.derived.talent.get_or_init(|| {
            let per_track: Vec<AggregatedMaterials> = [Track::Attack, Track::Skill, Track::Burst]
                .into_iter()
                .map(|track| {
                    let range = self.range(track);
                    compute_range(&self.subject.talent_costs, range.min, range.max)
                })
                .collect();
            merge(&per_track)
        })
    }

    pub fn total_materials(&self) -> &AggregatedMaterials {
        self.derived
            .total
            .get_or_init(|| merge([self.character_materials(), self.talent_materials()]))
    }

    /// Total materials in display order.
    pub fn sorted_materials(&self) -> &[(String, u32)] {
        self.derived.sorted.get_or_init(|| {
            sort_materials(
                self.total_materials(),
                self.character_materials(),
                &self.catalog,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{MaterialCost, MaterialCostTable};

    fn level_table() -> MaterialCostTable {
        MaterialCostTable::new(vec![
            vec![],
            vec![MaterialCost::new("Mora", 20_000), MaterialCost::new("Gem", 1)],
            vec![MaterialCost::new("Mora", 40_000), MaterialCost::new("Gem", 3)],
            vec![MaterialCost::new("Mora", 60_000), MaterialCost::new("Boss", 2)],
        ])
    }

    fn talent_table() -> MaterialCostTable {
        MaterialCostTable::new(
            std::iter::once(vec![])
                .chain((1..=5).map(|i| {
                    vec![
                        MaterialCost::new("Mora", 12_500 * i),
                        MaterialCost::new("Book", i),
                    ]
                }))
                .collect(),
        )
    }

    fn options(len: usize) -> Vec<LevelOption> {
        (0..len)
            .map(|i| LevelOption::new((i + 1).to_string(), i))
            .collect()
    }

    fn subject(name: &str) -> SubjectBundle {
        SubjectBundle {
            name: name.into(),
            level_costs: level_table(),
            level_options: options(4),
            talent_costs: talent_table(),
            talent_options: options(6),
        }
    }

    fn catalog() -> MaterialCatalog {
        [
            ("Mora", MaterialInfo::new(0, "3")),
            ("Gem", MaterialInfo::new(10, "2")),
            ("Boss", MaterialInfo::new(20, "4")),
            ("Book", MaterialInfo::new(5, "2")),
        ]
        .into_iter()
        .map(|(name, info)| (name.to_owned(), info))
        .collect()
    }

    fn planner() -> MaterialPlanner {
        let mut planner = MaterialPlanner::new(catalog());
        planner.load_subject(subject("Amber"));
        planner
    }

    #[test]
    fn loading_resets_to_none() {
        let mut planner = planner();
        planner.apply_preset(Preset::Maximum);
        assert_ne!(planner.range(Track::Level), LevelRange::NONE);

        planner.load_subject(subject("Lisa"));
        for track in [Track::Level, Track::Attack, Track::Skill, Track::Burst] {
            assert_eq!(planner.range(track), LevelRange::NONE);
        }
        assert!(planner.total_materials().is_empty());
    }

    #[test]
    fn reset_to_none_clears_minimums_too() {
        let mut planner = planner();
        planner.set_min(Track::Skill, LevelOption::new("3", 2));
        planner.set_max(Track::Skill, LevelOption::new("5", 4));

        planner.apply_preset(Preset::None);

        assert_eq!(planner.range(Track::Skill), LevelRange::NONE);
        assert!(planner.sorted_materials().is_empty());
    }

    #[test]
    fn recommended_picks_from_end() {
        let mut planner = planner();
        planner.apply_preset(Preset::Recommended);

        // 4 level options: second-to-last. 6 talent options: third-to-last.
        assert_eq!(planner.range(Track::Level), LevelRange::new(0, 2));
        for track in [Track::Attack, Track::Skill, Track::Burst] {
            assert_eq!(planner.range(track), LevelRange::new(0, 3));
        }
    }

    #[test]
    fn maximum_picks_last() {
        let mut planner = planner();
        planner.apply_preset(Preset::Maximum);

        assert_eq!(planner.range(Track::Level), LevelRange::new(0, 3));
        assert_eq!(planner.range(Track::Burst), LevelRange::new(0, 5));
        assert_eq!(planner.selection(Track::Burst).max.label, "6");
    }

    #[test]
    fn presets_on_empty_options_fall_back_to_minimal() {
        let mut planner = MaterialPlanner::new(MaterialCatalog::new());
        planner.load_subject_with_preset(SubjectBundle::default(), Preset::Recommended);

        assert_eq!(planner.selection(Track::Level).max, LevelOption::minimal());
        assert_eq!(planner.selection(Track::Attack).max, LevelOption::minimal());

        planner.apply_preset(Preset::Maximum);
        assert_eq!(planner.range(Track::Attack), LevelRange::NONE);
    }

    #[test]
    fn presets_keep_minimums() {
        let mut planner = planner();
        planner.set_min(Track::Attack, LevelOption::new("2", 1));
        planner.apply_preset(Preset::Maximum);

        assert_eq!(planner.range(Track::Attack), LevelRange::new(1, 5));
    }

    #[test]
    fn tracks_are_independent() {
        let mut planner = planner();
        planner.set_max(Track::Skill, LevelOption::new("3", 2));

        assert_eq!(planner.range(Track::Skill), LevelRange::new(0, 2));
        assert_eq!(planner.range(Track::Attack), LevelRange::NONE);
        assert_eq!(planner.range(Track::Burst), LevelRange::NONE);
        assert_eq!(planner.range(Track::Level), LevelRange::NONE);
    }

    #[test]
    fn talent_tracks_sum_over_shared_table() {
        let mut planner = planner();
        planner.set_max(Track::Attack, LevelOption::new("2", 1));
        planner.set_max(Track::Skill, LevelOption::new("3", 2));
        planner.set_max(Track::Burst, LevelOption::new("3", 2));

        // attack: 1 book; skill and burst: 1 + 2 books each
        assert_eq!(planner.talent_materials().get("Book"), 7);
        assert_eq!(planner.talent_materials().get("Mora"), 12_500 * 7);
        assert!(planner.character_materials().is_empty());
    }

    #[test]
    fn derived_values_follow_mutations() {
        let mut planner = planner();
        planner.set_max(Track::Level, LevelOption::new("2", 1));
        assert_eq!(planner.total_materials().get("Mora"), 20_000);

        planner.set_max(Track::Level, LevelOption::new("3", 2));
        assert_eq!(planner.total_materials().get("Mora"), 60_000);

        planner.set_max(Track::Attack, LevelOption::new("2", 1));
        assert_eq!(planner.total_materials().get("Mora"), 72_500);
        assert_eq!(planner.character_materials().get("Mora"), 60_000);
    }

    #[test]
    fn listing_puts_character_materials_first() {
        let mut planner = planner();
        planner.set_max(Track::Level, LevelOption::new("4", 3));
        planner.set_max(Track::Burst, LevelOption::new("2", 1));

        let names: Vec<&str> = planner
            .sorted_materials()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();

        // Book has a lower sort order than Gem but is talent-only.
        assert_eq!(names, ["Mora", "Gem", "Boss", "Book"]);
    }

    #[test]
    fn catalog_change_reorders_listing() {
        let mut planner = planner();
        planner.set_max(Track::Level, LevelOption::new("4", 3));

        let mut reversed = catalog();
        reversed.insert("Boss", MaterialInfo::new(-1, "4"));
        planner.set_catalog(reversed);

        assert_eq!(planner.sorted_materials()[0].0, "Boss");
    }

    #[test]
    fn configured_default_preset_applies_on_load() {
        let config = PlannerConfig::default().with_default_preset(Preset::Maximum);
        let mut planner = MaterialPlanner::with_config(config, catalog());
        planner.load_subject(subject("Kaeya"));

        assert_eq!(planner.range(Track::Level), LevelRange::new(0, 3));
        assert_eq!(planner.config().default_preset, Preset::Maximum);
    }
}
