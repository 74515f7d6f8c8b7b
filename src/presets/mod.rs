//! Presets module - box category preset engine
//!
//! Maps each category to a fixed attribute bundle and applies it to scene
//! objects: reserved metadata keys, a shared category material, and a
//! category name prefix. The table can be overridden from
//! assets/box_presets.toml at startup.

mod apply;
mod database;
mod types;

pub use apply::{
    TaggedSummary, TaggingContext, apply_preset, clear_preset, list_tagged, prefixed_name,
};
pub use database::PresetTable;
pub use types::{Category, PresetAttributes};
