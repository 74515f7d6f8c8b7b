//! Materials module - cached per-category box materials

mod cache;
mod shading;

pub use cache::{BoxMaterial, MaterialCache, MaterialHandle, material_name};
pub use shading::{ShaderInput, ShadingParams, ShadingSlot, ShadingValue, SurfaceLayout, SurfaceNode};
