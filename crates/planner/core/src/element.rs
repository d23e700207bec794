//! Elements and weapon kinds, plus the bit sets used by roster filters.

use bitflags::bitflags;

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
#[strum(ascii_case_insensitive)]
pub enum Element {
    Pyro,
    Hydro,
    Dendro,
    Electro,
    Anemo,
    Cryo,
    Geo,
}

impl Element {
    /// Lower-case element name, used for styling class names.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Pyro => "pyro",
            Self::Hydro => "hydro",
            Self::Dendro => "dendro",
            Self::Electro => "electro",
            Self::Anemo => "anemo",
            Self::Cryo => "cryo",
            Self::Geo => "geo",
        }
    }

    pub const fn flag(self) -> ElementSet {
        match self {
            Self::Pyro => ElementSet::PYRO,
            Self::Hydro => ElementSet::HYDRO,
            Self::Dendro => ElementSet::DENDRO,
            Self::Electro => ElementSet::ELECTRO,
            Self::Anemo => ElementSet::ANEMO,
            Self::Cryo => ElementSet::CRYO,
            Self::Geo => ElementSet::GEO,
        }
    }
}

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
#[strum(ascii_case_insensitive)]
pub enum WeaponKind {
    Sword,
    Claymore,
    Polearm,
    Bow,
    Catalyst,
}

impl WeaponKind {
    pub const fn flag(self) -> WeaponSet {
        match self {
            Self::Sword => WeaponSet::SWORD,
            Self::Claymore => WeaponSet::CLAYMORE,
            Self::Polearm => WeaponSet::POLEARM,
            Self::Bow => WeaponSet::BOW,
            Self::Catalyst => WeaponSet::CATALYST,
        }
    }
}

bitflags! {
    /// Set of accepted elements. Empty accepts every element.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ElementSet: u8 {
        const PYRO = 1 << 0;
        const HYDRO = 1 << 1;
        const DENDRO = 1 << 2;
        const ELECTRO = 1 << 3;
        const ANEMO = 1 << 4;
        const CRYO = 1 << 5;
        const GEO = 1 << 6;
    }
}

bitflags! {
    /// Set of accepted weapon kinds. Empty accepts every weapon.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WeaponSet: u8 {
        const SWORD = 1 << 0;
        const CLAYMORE = 1 << 1;
        const POLEARM = 1 << 2;
        const BOW = 1 << 3;
        const CATALYST = 1 << 4;
    }
}

impl ElementSet {
    pub fn accepts(&self, element: Element) -> bool {
        self.is_empty() || self.contains(element.flag())
    }
}

impl WeaponSet {
    pub fn accepts(&self, weapon: WeaponKind) -> bool {
        self.is_empty() || self.contains(weapon.flag())
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, element| set | element.flag())
    }
}

impl FromIterator<WeaponKind> for WeaponSet {
    fn from_iter<I: IntoIterator<Item = WeaponKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, weapon| set | weapon.flag())
    }
}
