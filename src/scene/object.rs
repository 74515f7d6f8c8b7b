//! Scene objects that presets are applied to

use bevy::prelude::*;
use std::fmt;

use crate::materials::MaterialHandle;
use crate::metadata::Metadata;

/// Object type as reported by the host scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Mesh,
    Empty,
    Camera,
    Light,
    Curve,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Mesh => "MESH",
            ObjectKind::Empty => "EMPTY",
            ObjectKind::Camera => "CAMERA",
            ObjectKind::Light => "LIGHT",
            ObjectKind::Curve => "CURVE",
        };
        f.write_str(name)
    }
}

/// Anything the preset engine can tag. The engine only mutates name,
/// metadata and material slots; it never creates or destroys objects.
pub trait TaggableObject {
    fn kind(&self) -> ObjectKind;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn metadata(&self) -> &Metadata;
    fn metadata_mut(&mut self) -> &mut Metadata;
    fn materials_mut(&mut self) -> &mut Vec<MaterialHandle>;
}

/// In-scene object: a named entity with a metadata bag and material slots
#[derive(Component, Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    pub location: Vec3,
    pub metadata: Metadata,
    pub materials: Vec<MaterialHandle>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            location: Vec3::ZERO,
            metadata: Metadata::default(),
            materials: Vec::new(),
        }
    }

    /// Default cube primitive at a location, as the add-mesh operator makes it
    pub fn cube_at(location: Vec3) -> Self {
        Self {
            location,
            ..Self::new("Cube", ObjectKind::Mesh)
        }
    }

    pub fn with_location(mut self, location: Vec3) -> Self {
        self.location = location;
        self
    }
}

impl TaggableObject for SceneObject {
    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn materials_mut(&mut self) -> &mut Vec<MaterialHandle> {
        &mut self.materials
    }
}
