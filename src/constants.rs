//! Fixed values for box tagging
//!
//! Metadata key names here are the schema read by the export pipeline.
//! Do not rename them.

use bevy::math::Vec3;

use crate::presets::Category;

// =============================================================================
// RESERVED METADATA KEYS
// =============================================================================

pub const KEY_IS_ENVIRONMENT: &str = "isEnvironment";
pub const KEY_HEALTH: &str = "health";
pub const KEY_DESTRUCTIBLE: &str = "destructible";
pub const KEY_MASS: &str = "mass";
pub const KEY_EXPLOSIVE: &str = "explosive";
pub const KEY_RESTITUTION: &str = "restitution";
pub const KEY_FRICTION: &str = "friction";

/// All keys written by a preset, in the order the export pipeline lists them
pub const RESERVED_KEYS: [&str; 7] = [
    KEY_IS_ENVIRONMENT,
    KEY_HEALTH,
    KEY_DESTRUCTIBLE,
    KEY_MASS,
    KEY_EXPLOSIVE,
    KEY_RESTITUTION,
    KEY_FRICTION,
];

// =============================================================================
// PHYSICS CONSTANTS (same for every category)
// =============================================================================

pub const BOX_RESTITUTION: f64 = 0.3; // Bounciness
pub const BOX_FRICTION: f64 = 0.8; // Surface friction

// =============================================================================
// MATERIALS
// =============================================================================

/// Suffix appended to the category name: `armored` -> `armored_box_material`
pub const MATERIAL_SUFFIX: &str = "_box_material";

pub const EXPLOSIVE_EMISSION_STRENGTH: f32 = 0.2;
pub const EXPLOSIVE_EMISSION_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const ARMORED_METALLIC: f32 = 0.8;
pub const ARMORED_ROUGHNESS: f32 = 0.2;

// =============================================================================
// DEMO SCENE LAYOUT
// =============================================================================

/// Category and location of each demo box, in creation order.
/// The last three entries are stacked on top of the first row.
pub const DEMO_BOX_LAYOUT: [(Category, Vec3); 7] = [
    (Category::Light, Vec3::new(0.0, 0.0, 0.0)),
    (Category::Heavy, Vec3::new(3.0, 0.0, 0.0)),
    (Category::Explosive, Vec3::new(6.0, 0.0, 0.0)),
    (Category::Armored, Vec3::new(9.0, 0.0, 0.0)),
    (Category::Light, Vec3::new(0.0, 0.0, 2.0)),
    (Category::Light, Vec3::new(0.0, 0.0, 4.0)),
    (Category::Explosive, Vec3::new(6.0, 0.0, 2.0)),
];

// =============================================================================
// FILES
// =============================================================================

/// Optional preset override file, read once at startup
pub const PRESETS_FILE: &str = "assets/box_presets.toml";
