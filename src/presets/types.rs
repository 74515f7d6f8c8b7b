//! Preset data structures for box categories

use bevy::color::Srgba;
use std::fmt;
use std::str::FromStr;

use crate::error::TagError;

/// Box category driving preset selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Light,
    Heavy,
    Explosive,
    Armored,
}

impl Category {
    /// Every category, in panel order
    pub const ALL: [Category; 4] = [
        Category::Light,
        Category::Heavy,
        Category::Explosive,
        Category::Armored,
    ];

    /// Lowercase name used for prefixes, material names and the presets file
    pub fn name(self) -> &'static str {
        match self {
            Category::Light => "light",
            Category::Heavy => "heavy",
            Category::Explosive => "explosive",
            Category::Armored => "armored",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Category::Light => "Light Box",
            Category::Heavy => "Heavy Box",
            Category::Explosive => "Explosive Box",
            Category::Armored => "Armored Box",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Light => "Fast moving, low health",
            Category::Heavy => "Slow moving, medium health",
            Category::Explosive => "Chain reactions, low health",
            Category::Armored => "Very durable, high health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| TagError::UnknownCategory(s.to_string()))
    }
}

/// Fixed attribute bundle for one category
#[derive(Debug, Clone, PartialEq)]
pub struct PresetAttributes {
    pub mass: f64,
    pub health: i64,
    pub destructible: bool,
    pub explosive: bool,
    /// Base color of the category material
    pub tint: Srgba,
}

impl PresetAttributes {
    pub fn new(mass: f64, health: i64, destructible: bool, explosive: bool, tint: [f32; 4]) -> Self {
        Self {
            mass,
            health,
            destructible,
            explosive,
            tint: Srgba::new(tint[0], tint[1], tint[2], tint[3]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.name());
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "wooden".parse::<Category>().unwrap_err();
        assert_eq!(err, TagError::UnknownCategory("wooden".to_string()));
        // Names are case sensitive, same as the panel enum
        assert!("Light".parse::<Category>().is_err());
    }
}
