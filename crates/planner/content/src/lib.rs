//! Data-driven content loaders for the material planner.
//!
//! This crate reads planner data files from a data directory:
//! - Subject bundles: cost tables and level options (RON or JSON)
//! - Material catalog: sort order and rarity per material (RON)
//! - Character roster for the browse page (RON)
//! - Planner configuration (TOML)
//!
//! Content is handed to `planner-core` already parsed; the core never sees a
//! file format.
//!
//! All loaders deserialize planner-core types directly with serde.

pub mod format;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use format::DataFormat;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MaterialLoader, RosterLoader, SubjectLoader,
};
