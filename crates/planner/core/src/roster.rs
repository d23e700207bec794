//! Character roster browsing: search, attribute filters and sorting.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::element::{Element, ElementSet, WeaponKind, WeaponSet};

/// Browse-list entry for one character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSummary {
    pub name: String,
    pub element: Element,
    pub weapon: WeaponKind,
    pub region: String,
    pub rarity: u8,
}

/// Accepted attribute values. Each empty set accepts everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeFilter {
    pub elements: ElementSet,
    pub weapons: WeaponSet,
    pub regions: BTreeSet<String>,
    pub rarities: BTreeSet<u8>,
}

impl AttributeFilter {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
            && self.weapons.is_empty()
            && self.regions.is_empty()
            && self.rarities.is_empty()
    }

    pub fn matches(&self, character: &CharacterSummary) -> bool {
        self.elements.accepts(character.element)
            && self.weapons.accepts(character.weapon)
            && (self.regions.is_empty() || self.regions.contains(&character.region))
            && (self.rarities.is_empty() || self.rarities.contains(&character.rarity))
    }
}

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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    Name,
    Rarity,
    Element,
    Weapon,
    Region,
}

impl SortKey {
    /// Label shown by the sort dropdown ("Sort by {label}").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Rarity => "Rarity",
            Self::Element => "Element",
            Self::Weapon => "Weapon",
            Self::Region => "Region",
        }
    }

    fn compare(self, a: &CharacterSummary, b: &CharacterSummary) -> Ordering {
        let primary = match self {
            Self::Name => Ordering::Equal,
            // Highest rarity first
            Self::Rarity => b.rarity.cmp(&a.rarity),
            Self::Element => a.element.cmp(&b.element),
            Self::Weapon => a.weapon.cmp(&b.weapon),
            Self::Region => a.region.cmp(&b.region),
        };
        primary.then_with(|| compare_names(&a.name, &b.name))
    }
}

/// Search, filter and ordering state of the roster page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterQuery {
    pub search: String,
    pub filter: AttributeFilter,
    pub sort_key: SortKey,
    pub reversed: bool,
}

impl RosterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, filter: AttributeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn toggle_reversed(&mut self) {
        self.reversed = !self.reversed;
    }

    /// Case-insensitive substring match on the character name.
    pub fn matches_search(&self, character: &CharacterSummary) -> bool {
        let needle = self.search.trim();
        needle.is_empty() || character.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Returns the matching characters in display order.
    pub fn apply<'a>(&self, roster: &'a [CharacterSummary]) -> Vec<&'a CharacterSummary> {
        let mut matches: Vec<&CharacterSummary> = roster
            .iter()
            .filter(|character| self.matches_search(character) && self.filter.matches(character))
            .collect();

        matches.sort_by(|a, b| self.sort_key.compare(a, b));
        if self.reversed {
            matches.reverse();
        }

        tracing::trace!(
            search = %self.search,
            sort_key = %self.sort_key,
            reversed = self.reversed,
            matched = matches.len(),
            total = roster.len(),
            "applied roster query"
        );

        matches
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
