//! Pure material planning logic shared by every front end.
//!
//! `planner-core` defines the cost-table data model, the ranged aggregation
//! engine, presentation ordering and range presets, and wraps them in the
//! [`planner::MaterialPlanner`] view-model. It also carries the roster query
//! used by the character browser. Nothing here performs I/O; data arrives
//! already parsed from `planner-content`.
pub mod aggregate;
pub mod bundle;
pub mod config;
pub mod element;
pub mod error;
pub mod material;
pub mod ordering;
pub mod planner;
pub mod preset;
pub mod roster;
pub mod selection;

pub use aggregate::{compute_range, merge};
pub use bundle::SubjectBundle;
pub use config::PlannerConfig;
pub use element::{Element, ElementSet, WeaponKind, WeaponSet};
pub use error::BundleError;
pub use material::{AggregatedMaterials, MaterialCatalog, MaterialCost, MaterialCostTable, MaterialInfo};
pub use ordering::{compare_rarity, sort_materials};
pub use planner::MaterialPlanner;
pub use preset::Preset;
pub use roster::{AttributeFilter, CharacterSummary, RosterQuery, SortKey};
pub use selection::{LevelOption, LevelRange, Track, TrackSelection};
