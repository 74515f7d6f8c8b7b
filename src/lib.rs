//! Box Tagger - tags scene meshes with destructible-box presets for export
//!
//! This crate provides the preset engine, the per-category material cache and
//! the selection operators, plus a Bevy plugin that wires them to the ECS.

pub mod constants;
pub mod error;
pub mod materials;
pub mod metadata;
pub mod operators;
pub mod plugin;
pub mod presets;
pub mod scene;
pub mod settings;

// Re-export commonly used types for convenience
pub use error::TagError;
pub use materials::{
    BoxMaterial, MaterialCache, MaterialHandle, ShadingParams, ShadingSlot, ShadingValue,
    SurfaceLayout, SurfaceNode, material_name,
};
pub use metadata::{Metadata, PropValue, ReservedProps};
pub use operators::{
    OperatorStatus, clear_properties, create_test_boxes, list_objects, set_properties,
};
pub use plugin::{BoxTaggingPlugin, LastOperatorReport, Selected, TagRequest, process_tag_requests};
pub use presets::{
    Category, PresetAttributes, PresetTable, TaggedSummary, TaggingContext, apply_preset,
    clear_preset, list_tagged,
};
pub use scene::{ObjectKind, SceneObject, TaggableObject};
pub use settings::{SETTINGS_FILE, TaggerSettings};
