//! Shading parameters of a box material surface
//!
//! Hosts expose different input sets on their surface shader (older versions
//! lack emission strength, flat viewport shading only has a base color).
//! Setters report a missing slot instead of failing, so callers can skip it.

use bevy::color::Srgba;
use serde::{Deserialize, Serialize};

use crate::error::TagError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadingSlot {
    BaseColor,
    Metallic,
    Roughness,
    EmissionColor,
    EmissionStrength,
}

impl ShadingSlot {
    /// Input names this slot is known by, newest first
    fn input_names(self) -> &'static [&'static str] {
        match self {
            ShadingSlot::BaseColor => &["Base Color"],
            ShadingSlot::Metallic => &["Metallic"],
            ShadingSlot::Roughness => &["Roughness"],
            ShadingSlot::EmissionColor => &["Emission Color", "Emission"],
            ShadingSlot::EmissionStrength => &["Emission Strength"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadingValue {
    Scalar(f32),
    Color(Srgba),
}

/// Named-setter access to a surface shader
pub trait ShadingParams {
    fn has_slot(&self, slot: ShadingSlot) -> bool;

    /// Set a slot, or `TagError::ShadingSlotUnavailable` if the surface has no such input
    fn set(&mut self, slot: ShadingSlot, value: ShadingValue) -> Result<(), TagError>;

    fn value(&self, slot: ShadingSlot) -> Option<ShadingValue>;
}

/// Which inputs a freshly created surface exposes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceLayout {
    /// Current principled surface: every slot
    #[default]
    Principled,
    /// Older principled surface: emission color is named "Emission", no strength input
    Legacy,
    /// Base color only
    Flat,
}

impl SurfaceLayout {
    fn inputs(self) -> Vec<ShaderInput> {
        let white = ShadingValue::Color(Srgba::WHITE);
        let black = ShadingValue::Color(Srgba::BLACK);
        let mut inputs = vec![ShaderInput::new("Base Color", white)];
        match self {
            SurfaceLayout::Principled => {
                inputs.push(ShaderInput::new("Metallic", ShadingValue::Scalar(0.0)));
                inputs.push(ShaderInput::new("Roughness", ShadingValue::Scalar(0.5)));
                inputs.push(ShaderInput::new("Emission Color", black));
                inputs.push(ShaderInput::new("Emission Strength", ShadingValue::Scalar(0.0)));
            }
            SurfaceLayout::Legacy => {
                inputs.push(ShaderInput::new("Metallic", ShadingValue::Scalar(0.0)));
                inputs.push(ShaderInput::new("Roughness", ShadingValue::Scalar(0.5)));
                inputs.push(ShaderInput::new("Emission", black));
            }
            SurfaceLayout::Flat => {}
        }
        inputs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShaderInput {
    pub name: &'static str,
    pub value: ShadingValue,
}

impl ShaderInput {
    fn new(name: &'static str, value: ShadingValue) -> Self {
        Self { name, value }
    }
}

/// Surface shader node with an ordered list of named inputs
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceNode {
    inputs: Vec<ShaderInput>,
}

impl SurfaceNode {
    pub fn new(layout: SurfaceLayout) -> Self {
        Self {
            inputs: layout.inputs(),
        }
    }

    pub fn inputs(&self) -> &[ShaderInput] {
        &self.inputs
    }

    fn find(&self, slot: ShadingSlot) -> Option<usize> {
        slot.input_names()
            .iter()
            .find_map(|name| self.inputs.iter().position(|i| i.name == *name))
    }
}

impl ShadingParams for SurfaceNode {
    fn has_slot(&self, slot: ShadingSlot) -> bool {
        self.find(slot).is_some()
    }

    fn set(&mut self, slot: ShadingSlot, value: ShadingValue) -> Result<(), TagError> {
        let index = self
            .find(slot)
            .ok_or(TagError::ShadingSlotUnavailable(slot))?;
        self.inputs[index].value = value;
        Ok(())
    }

    fn value(&self, slot: ShadingSlot) -> Option<ShadingValue> {
        self.find(slot).map(|i| self.inputs[i].value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principled_has_every_slot() {
        let node = SurfaceNode::new(SurfaceLayout::Principled);
        for slot in [
            ShadingSlot::BaseColor,
            ShadingSlot::Metallic,
            ShadingSlot::Roughness,
            ShadingSlot::EmissionColor,
            ShadingSlot::EmissionStrength,
        ] {
            assert!(node.has_slot(slot), "missing {:?}", slot);
        }
    }

    #[test]
    fn test_legacy_emission_alias() {
        let mut node = SurfaceNode::new(SurfaceLayout::Legacy);
        let red = ShadingValue::Color(Srgba::new(1.0, 0.0, 0.0, 1.0));
        node.set(ShadingSlot::EmissionColor, red).unwrap();
        assert_eq!(node.value(ShadingSlot::EmissionColor), Some(red));
        assert!(node.inputs().iter().any(|i| i.name == "Emission" && i.value == red));
        assert!(!node.has_slot(ShadingSlot::EmissionStrength));
    }

    #[test]
    fn test_missing_slot_reports_error() {
        let mut node = SurfaceNode::new(SurfaceLayout::Flat);
        let err = node
            .set(ShadingSlot::Metallic, ShadingValue::Scalar(0.8))
            .unwrap_err();
        assert_eq!(err, TagError::ShadingSlotUnavailable(ShadingSlot::Metallic));
        assert_eq!(node.inputs().len(), 1);
    }
}
