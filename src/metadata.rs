//! Object metadata bag
//!
//! Seven keys are reserved for box tagging and stored as typed fields. Any
//! other custom property the host attaches lives in `extra` and is never
//! touched by preset operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::*;
use crate::error::TagError;

/// Scalar value of a custom property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// The reserved schema. `None` means the key is absent and is not written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_environment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destructible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explosive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restitution: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f64>,
}

impl ReservedProps {
    /// Number of reserved keys currently present
    pub fn present_count(&self) -> usize {
        [
            self.is_environment.is_some(),
            self.health.is_some(),
            self.destructible.is_some(),
            self.mass.is_some(),
            self.explosive.is_some(),
            self.restitution.is_some(),
            self.friction.is_some(),
        ]
        .into_iter()
        .filter(|p| *p)
        .count()
    }
}

/// Serializes as one flat object: reserved keys and custom keys side by side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(flatten)]
    pub reserved: ReservedProps,
    #[serde(flatten)]
    pub extra: BTreeMap<String, PropValue>,
}

fn expect_bool(key: &str, value: PropValue) -> Result<bool, TagError> {
    match value {
        PropValue::Bool(b) => Ok(b),
        _ => Err(TagError::ReservedKeyType {
            key: key.to_string(),
            expected: "bool",
        }),
    }
}

fn expect_int(key: &str, value: PropValue) -> Result<i64, TagError> {
    match value {
        PropValue::Int(i) => Ok(i),
        _ => Err(TagError::ReservedKeyType {
            key: key.to_string(),
            expected: "int",
        }),
    }
}

// Ints are accepted for float keys, custom property editors often drop the ".0"
fn expect_float(key: &str, value: PropValue) -> Result<f64, TagError> {
    match value {
        PropValue::Float(x) => Ok(x),
        PropValue::Int(i) => Ok(i as f64),
        _ => Err(TagError::ReservedKeyType {
            key: key.to_string(),
            expected: "float",
        }),
    }
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<PropValue> {
        let r = &self.reserved;
        match key {
            KEY_IS_ENVIRONMENT => r.is_environment.map(PropValue::Bool),
            KEY_HEALTH => r.health.map(PropValue::Int),
            KEY_DESTRUCTIBLE => r.destructible.map(PropValue::Bool),
            KEY_MASS => r.mass.map(PropValue::Float),
            KEY_EXPLOSIVE => r.explosive.map(PropValue::Bool),
            KEY_RESTITUTION => r.restitution.map(PropValue::Float),
            KEY_FRICTION => r.friction.map(PropValue::Float),
            _ => self.extra.get(key).cloned(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a property. Reserved keys only accept their schema type.
    pub fn insert(&mut self, key: &str, value: PropValue) -> Result<(), TagError> {
        let r = &mut self.reserved;
        match key {
            KEY_IS_ENVIRONMENT => r.is_environment = Some(expect_bool(key, value)?),
            KEY_HEALTH => r.health = Some(expect_int(key, value)?),
            KEY_DESTRUCTIBLE => r.destructible = Some(expect_bool(key, value)?),
            KEY_MASS => r.mass = Some(expect_float(key, value)?),
            KEY_EXPLOSIVE => r.explosive = Some(expect_bool(key, value)?),
            KEY_RESTITUTION => r.restitution = Some(expect_float(key, value)?),
            KEY_FRICTION => r.friction = Some(expect_float(key, value)?),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// Remove a property, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let old = self.get(key);
        let r = &mut self.reserved;
        match key {
            KEY_IS_ENVIRONMENT => r.is_environment = None,
            KEY_HEALTH => r.health = None,
            KEY_DESTRUCTIBLE => r.destructible = None,
            KEY_MASS => r.mass = None,
            KEY_EXPLOSIVE => r.explosive = None,
            KEY_RESTITUTION => r.restitution = None,
            KEY_FRICTION => r.friction = None,
            _ => {
                self.extra.remove(key);
            }
        }
        old
    }

    /// Total number of keys present, reserved and custom
    pub fn len(&self) -> usize {
        self.reserved.present_count() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys_route_to_typed_fields() {
        let mut meta = Metadata::default();
        meta.insert(KEY_HEALTH, PropValue::Int(40)).unwrap();
        meta.insert(KEY_MASS, PropValue::Int(3)).unwrap();
        meta.insert("spawnGroup", PropValue::Str("east".to_string())).unwrap();

        assert_eq!(meta.reserved.health, Some(40));
        assert_eq!(meta.reserved.mass, Some(3.0));
        assert_eq!(meta.get(KEY_MASS), Some(PropValue::Float(3.0)));
        assert_eq!(meta.extra.len(), 1);
        assert_eq!(meta.len(), 3);
    }

    #[test]
    fn test_reserved_key_type_mismatch() {
        let mut meta = Metadata::default();
        let err = meta.insert(KEY_HEALTH, PropValue::Str("lots".to_string())).unwrap_err();
        assert_eq!(
            err,
            TagError::ReservedKeyType {
                key: KEY_HEALTH.to_string(),
                expected: "int",
            }
        );
        assert!(meta.is_empty());

        assert!(meta.insert(KEY_EXPLOSIVE, PropValue::Int(1)).is_err());
        assert!(meta.insert(KEY_FRICTION, PropValue::Bool(true)).is_err());
    }

    #[test]
    fn test_remove() {
        let mut meta = Metadata::default();
        meta.insert(KEY_EXPLOSIVE, PropValue::Bool(true)).unwrap();
        meta.insert("note", PropValue::Str("keep".to_string())).unwrap();

        assert_eq!(meta.remove(KEY_EXPLOSIVE), Some(PropValue::Bool(true)));
        assert_eq!(meta.remove(KEY_EXPLOSIVE), None);
        assert_eq!(meta.remove("missing"), None);
        assert!(meta.contains("note"));
        assert!(!meta.contains(KEY_EXPLOSIVE));
    }

    #[test]
    fn test_serializes_as_flat_schema() {
        let mut meta = Metadata::default();
        meta.insert(KEY_IS_ENVIRONMENT, PropValue::Bool(true)).unwrap();
        meta.insert("lootTable", PropValue::Str("x".to_string())).unwrap();

        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json, serde_json::json!({"isEnvironment": true, "lootTable": "x"}));
        assert!(json.get(KEY_HEALTH).is_none());
        assert!(json.get("reserved").is_none());
    }

    #[test]
    fn test_deserializes_flat_document() {
        let meta: Metadata =
            serde_json::from_str(r#"{"isEnvironment": true, "health": 40, "mass": 20.0, "lootTable": "x"}"#)
                .unwrap();

        assert_eq!(meta.reserved.health, Some(40));
        assert_eq!(meta.reserved.mass, Some(20.0));
        assert_eq!(meta.reserved.friction, None);
        assert_eq!(meta.extra.len(), 1);
        assert_eq!(meta.get("lootTable"), Some(PropValue::Str("x".to_string())));
    }
}
