use std::path::PathBuf;

use planner_content::ContentFactory;
use planner_core::{Element, MaterialPlanner, Preset, RosterQuery, SortKey, Track};

fn factory() -> ContentFactory {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    ContentFactory::new(data_dir)
}

fn planner_for(subject: &str, preset: Preset) -> MaterialPlanner {
    let factory = factory();
    let config = factory.load_config().expect("Failed to load config");
    let catalog = factory.load_materials().expect("Failed to load materials");
    let bundle = factory.load_subject(subject).expect("Failed to load subject");

    let mut planner = MaterialPlanner::with_config(config, catalog);
    planner.load_subject_with_preset(bundle, preset);
    planner
}

#[test]
fn lists_bundled_subjects() {
    assert_eq!(factory().subject_names().unwrap(), ["amber", "lisa"]);
}

#[test]
fn subject_lookup_is_case_insensitive() {
    let bundle = factory().load_subject("Amber").unwrap();
    assert_eq!(bundle.name, "Amber");
    assert_eq!(bundle.level_options.len(), 14);
}

#[test]
fn amber_maximum_totals() {
    let planner = planner_for("amber", Preset::Maximum);
    let total = planner.total_materials();

    assert_eq!(planner.character_materials().get("Mora"), 1_883_000);
    assert_eq!(total.get("Mora"), 1_883_000 + 3 * 1_652_500);
    assert_eq!(total.get("Hero's Wit"), 363);
    assert_eq!(total.get("Everflame Seed"), 46);
    assert_eq!(total.get("Crown of Insight"), 3);
}

#[test]
fn amber_recommended_stops_at_80_plus_and_talent_8() {
    let planner = planner_for("amber", Preset::Recommended);

    assert_eq!(planner.selection(Track::Level).max.label, "80+");
    assert_eq!(planner.selection(Track::Skill).max.label, "8");
    assert!(!planner.total_materials().contains("Crown of Insight"));
    assert_eq!(planner.talent_materials().get("Mora"), 3 * 502_500);
}

#[test]
fn amber_listing_starts_with_character_materials() {
    let planner = planner_for("amber", Preset::Maximum);
    let names: Vec<&str> = planner
        .sorted_materials()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();

    assert_eq!(&names[..3], ["Mora", "Hero's Wit", "Agnidus Agate Sliver"]);
    assert_eq!(names.last(), Some(&"Crown of Insight"));

    // Firm Arrowhead is used by both ascension and talents: character tier.
    let firm = names.iter().position(|n| *n == "Firm Arrowhead").unwrap();
    let teachings = names.iter().position(|n| *n == "Teachings of Freedom").unwrap();
    assert!(firm < teachings);
}

#[test]
fn json_subject_loads_with_defaults() {
    let planner = planner_for("lisa", Preset::None);
    assert!(planner.sorted_materials().is_empty());
    assert_eq!(planner.talent_options().len(), 3);
}

#[test]
fn roster_query_over_bundled_roster() {
    let roster = factory().load_roster().unwrap();
    let query = RosterQuery::new()
        .with_search("a")
        .with_sort_key(SortKey::Rarity);

    let result = query.apply(&roster);
    assert_eq!(result[0].name, "Ganyu");
    assert!(result.iter().all(|c| c.name.to_lowercase().contains('a')));
    assert!(roster.iter().any(|c| c.element == Element::Dendro));
}
