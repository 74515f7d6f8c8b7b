//! Error taxonomy for tagging operations

use crate::materials::ShadingSlot;
use crate::scene::ObjectKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TagError {
    #[error("No objects selected! Please select objects and run again.")]
    NoTargets,
    #[error("Invalid box type '{0}'! Choose from: light, heavy, explosive, armored")]
    UnknownCategory(String),
    #[error("'{name}' is a {kind} object, only meshes can be tagged")]
    UnsupportedTargetKind { name: String, kind: ObjectKind },
    /// Soft failure, swallowed while building a material
    #[error("shading slot {0:?} is not available on this surface")]
    ShadingSlotUnavailable(ShadingSlot),
    #[error("metadata key '{key}' is reserved and must hold a {expected}")]
    ReservedKeyType { key: String, expected: &'static str },
}
