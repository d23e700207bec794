//! Plain-text rendering of a planner state.

use std::fmt::Write;

use planner_core::{MaterialPlanner, Track};
use strum::IntoEnumIterator;

/// Renders the selected ranges followed by the ordered material listing.
pub fn render(planner: &MaterialPlanner) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", planner.subject().name);

    for track in Track::iter() {
        let selection = planner.selection(track);
        let _ = writeln!(
            out,
            "  {:<7} {:>4} -> {}",
            track.to_string(),
            selection.min.label,
            selection.max.label
        );
    }

    let materials = planner.sorted_materials();
    if materials.is_empty() {
        out.push_str("\nNo materials required.\n");
        return out;
    }

    let width = materials
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    out.push('\n');
    for (name, count) in materials {
        let _ = writeln!(out, "  {:<width$}  {:>9}", name, group_thousands(*count));
    }
    out
}

/// `1883000` -> `1,883,000`.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{
        LevelOption, MaterialCatalog, MaterialCost, MaterialCostTable, Preset, SubjectBundle,
    };

    fn subject() -> SubjectBundle {
        SubjectBundle {
            name: "Amber".into(),
            level_costs: MaterialCostTable::new(vec![
                vec![],
                vec![MaterialCost::new("Mora", 20_000)],
            ]),
            level_options: vec![LevelOption::new("1", 0), LevelOption::new("20+", 1)],
            talent_costs: MaterialCostTable::new(vec![
                vec![],
                vec![],
                vec![MaterialCost::new("Mora", 12_500)],
            ]),
            talent_options: vec![LevelOption::new("1", 1), LevelOption::new("2", 2)],
        }
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_883_000), "1,883,000");
    }

    #[test]
    fn renders_ranges_and_listing() {
        let mut planner = MaterialPlanner::new(MaterialCatalog::new());
        planner.load_subject_with_preset(subject(), Preset::Maximum);

        let text = render(&planner);
        assert!(text.starts_with("Amber\n"));
        assert!(text.contains("level      1 -> 20+"));
        assert!(text.contains("burst      1 -> 2"));
        assert!(text.contains("Mora     57,500"));
    }

    #[test]
    fn renders_empty_listing() {
        let mut planner = MaterialPlanner::new(MaterialCatalog::new());
        planner.load_subject_with_preset(subject(), Preset::None);
        assert!(render(&planner).ends_with("No materials required.\n"));
    }
}
