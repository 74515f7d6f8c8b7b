//! Per-category material cache

use bevy::color::Srgba;
use bevy::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::*;
use crate::materials::shading::{ShadingParams, ShadingSlot, ShadingValue, SurfaceLayout, SurfaceNode};
use crate::presets::Category;

/// Shared material bound to every box of one category
#[derive(Debug)]
pub struct BoxMaterial {
    pub name: String,
    /// Viewport color, always opaque
    pub base_color: Srgba,
    pub surface: SurfaceNode,
}

pub type MaterialHandle = Arc<BoxMaterial>;

/// `"{category}_box_material"`
pub fn material_name(category: Category) -> String {
    format!("{}{}", category.name(), MATERIAL_SUFFIX)
}

/// Materials by name. At most one handle per category; entries are never
/// rebuilt once created.
#[derive(Resource, Debug, Default)]
pub struct MaterialCache {
    layout: SurfaceLayout,
    materials: HashMap<String, MaterialHandle>,
}

impl MaterialCache {
    /// Empty cache whose new surfaces use `layout`
    pub fn new(layout: SurfaceLayout) -> Self {
        Self {
            layout,
            materials: HashMap::new(),
        }
    }

    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    /// Look up or create the material for `category`.
    ///
    /// A cache hit returns the stored handle unchanged, even if `tint` differs
    /// from the color it was built with.
    pub fn resolve(&mut self, category: Category, tint: Srgba) -> MaterialHandle {
        let layout = self.layout;
        self.materials
            .entry(material_name(category))
            .or_insert_with_key(|name| {
                debug!("Creating material {}", name);
                Arc::new(build_material(name.clone(), category, tint, layout))
            })
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<&MaterialHandle> {
        self.materials.get(name)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

fn build_material(name: String, category: Category, tint: Srgba, layout: SurfaceLayout) -> BoxMaterial {
    let base_color = Srgba { alpha: 1.0, ..tint };
    let mut surface = SurfaceNode::new(layout);

    set_best_effort(&mut surface, &name, ShadingSlot::BaseColor, ShadingValue::Color(base_color));
    for (slot, value) in category_variation(category) {
        set_best_effort(&mut surface, &name, slot, value);
    }

    BoxMaterial {
        name,
        base_color,
        surface,
    }
}

/// Extra surface settings on top of the base color
fn category_variation(category: Category) -> Vec<(ShadingSlot, ShadingValue)> {
    match category {
        Category::Explosive => {
            let [r, g, b, a] = EXPLOSIVE_EMISSION_COLOR;
            vec![
                (
                    ShadingSlot::EmissionStrength,
                    ShadingValue::Scalar(EXPLOSIVE_EMISSION_STRENGTH),
                ),
                (
                    ShadingSlot::EmissionColor,
                    ShadingValue::Color(Srgba::new(r, g, b, a)),
                ),
            ]
        }
        Category::Armored => vec![
            (ShadingSlot::Metallic, ShadingValue::Scalar(ARMORED_METALLIC)),
            (ShadingSlot::Roughness, ShadingValue::Scalar(ARMORED_ROUGHNESS)),
        ],
        Category::Light | Category::Heavy => Vec::new(),
    }
}

fn set_best_effort(surface: &mut impl ShadingParams, material: &str, slot: ShadingSlot, value: ShadingValue) {
    if let Err(e) = surface.set(slot, value) {
        debug!("{}: skipping {}", material, e);
    }
}
