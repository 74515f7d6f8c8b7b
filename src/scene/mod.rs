//! Scene module - the objects the tagging engine works on

mod object;

pub use object::{ObjectKind, SceneObject, TaggableObject};
