//! Preset application - writes a category's tags, material and name onto a target

use bevy::prelude::*;
use std::fmt;

use crate::constants::*;
use crate::error::TagError;
use crate::materials::{MaterialCache, MaterialHandle};
use crate::metadata::ReservedProps;
use crate::presets::PresetTable;
use crate::presets::types::Category;
use crate::scene::{ObjectKind, TaggableObject};

/// Everything an engine call needs: the preset table and the material cache
/// it may populate
pub struct TaggingContext<'a> {
    pub presets: &'a PresetTable,
    pub materials: &'a mut MaterialCache,
}

impl<'a> TaggingContext<'a> {
    pub fn new(presets: &'a PresetTable, materials: &'a mut MaterialCache) -> Self {
        Self { presets, materials }
    }

    /// Cached material for `category`, created on first use
    pub fn resolve_material(&mut self, category: Category) -> MaterialHandle {
        let tint = self.presets.get(category).tint;
        self.materials.resolve(category, tint)
    }
}

/// Name after tagging: `"{category}_{name}"` unless already prefixed
pub fn prefixed_name(category: Category, name: &str) -> Option<String> {
    if name.starts_with(category.name()) {
        None
    } else {
        Some(format!("{}_{}", category.name(), name))
    }
}

/// Tag one mesh with `category`. Returns the object's final name.
///
/// All values are computed before the first write, so a non-mesh target is
/// left completely untouched.
pub fn apply_preset<T: TaggableObject + ?Sized>(
    ctx: &mut TaggingContext,
    category: Category,
    target: &mut T,
) -> Result<String, TagError> {
    if target.kind() != ObjectKind::Mesh {
        return Err(TagError::UnsupportedTargetKind {
            name: target.name().to_string(),
            kind: target.kind(),
        });
    }

    let preset = ctx.presets.get(category);
    let props = ReservedProps {
        is_environment: Some(true),
        health: Some(preset.health),
        destructible: Some(preset.destructible),
        mass: Some(preset.mass),
        explosive: Some(preset.explosive),
        restitution: Some(BOX_RESTITUTION),
        friction: Some(BOX_FRICTION),
    };
    let material = ctx.resolve_material(category);
    let new_name = prefixed_name(category, target.name());

    target.metadata_mut().reserved = props;

    let slots = target.materials_mut();
    match slots.first_mut() {
        Some(slot) => *slot = material,
        None => slots.push(material),
    }

    if let Some(name) = new_name {
        target.set_name(name);
    }

    info!("Set {} properties on {}", category, target.name());
    Ok(target.name().to_string())
}

/// Remove the seven preset keys. Name and material are left as they are.
///
/// Returns how many of the keys were present.
pub fn clear_preset<T: TaggableObject + ?Sized>(target: &mut T) -> Result<usize, TagError> {
    let metadata = target.metadata_mut();
    let removed = RESERVED_KEYS
        .iter()
        .filter(|key| metadata.remove(key).is_some())
        .count();
    Ok(removed)
}

/// One line of the tagged-object report
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedSummary {
    pub name: String,
    pub health: Option<i64>,
    pub mass: Option<f64>,
    pub explosive: bool,
}

impl fmt::Display for TaggedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let health = self.health.map_or("N/A".to_string(), |h| h.to_string());
        // Debug keeps the ".0" on whole masses
        let mass = self.mass.map_or("N/A".to_string(), |m| format!("{:?}", m));
        write!(
            f,
            "{}: health={}, mass={}, explosive={}",
            self.name, health, mass, self.explosive
        )
    }
}

/// Meshes carrying the `isEnvironment` marker, summarized. Never fails on
/// partially tagged objects.
pub fn list_tagged<'a, T, I>(objects: I) -> Vec<TaggedSummary>
where
    T: TaggableObject + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    objects
        .into_iter()
        .filter(|o| o.kind() == ObjectKind::Mesh && o.metadata().contains(KEY_IS_ENVIRONMENT))
        .map(|o| {
            let tags = &o.metadata().reserved;
            TaggedSummary {
                name: o.name().to_string(),
                health: tags.health,
                mass: tags.mass,
                explosive: tags.explosive.unwrap_or(false),
            }
        })
        .collect()
}
