//! Preset table - the category to attributes lookup

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::presets::types::{Category, PresetAttributes};

/// One record per category, fixed once built
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PresetTable {
    // Indexed by `Category as usize`, so the table is total by construction
    presets: [PresetAttributes; 4],
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::default_presets()
    }
}

/// On-disk layout: one TOML table per category, all four required
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetFile {
    light: PresetEntry,
    heavy: PresetEntry,
    explosive: PresetEntry,
    armored: PresetEntry,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetEntry {
    mass: f64,
    health: i64,
    destructible: bool,
    explosive: bool,
    tint: [f32; 4],
}

impl PresetEntry {
    fn into_attributes(self, category: Category) -> Result<PresetAttributes, String> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(format!("{category}: mass must be > 0, got {}", self.mass));
        }
        if self.health < 0 {
            return Err(format!("{category}: health must be >= 0, got {}", self.health));
        }
        if self.tint.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(format!("{category}: tint components must be in [0, 1], got {:?}", self.tint));
        }
        Ok(PresetAttributes::new(
            self.mass,
            self.health,
            self.destructible,
            self.explosive,
            self.tint,
        ))
    }
}

impl PresetTable {
    /// Load presets from file, or return the built-in table if the file is
    /// missing or invalid
    pub fn load_from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No presets file at {}, using built-in presets", path.display());
            return Self::default_presets();
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Could not read presets file {}: {}, using defaults", path.display(), e);
                return Self::default_presets();
            }
        };

        match Self::parse(&content) {
            Ok(table) => {
                info!("Loaded box presets from {}", path.display());
                table
            }
            Err(e) => {
                warn!("Invalid presets file {}: {}, using defaults", path.display(), e);
                Self::default_presets()
            }
        }
    }

    /// Parse a presets document. Every category must be present and valid.
    pub fn parse(content: &str) -> Result<Self, String> {
        let file: PresetFile = toml::from_str(content).map_err(|e| e.to_string())?;
        Ok(Self {
            presets: [
                file.light.into_attributes(Category::Light)?,
                file.heavy.into_attributes(Category::Heavy)?,
                file.explosive.into_attributes(Category::Explosive)?,
                file.armored.into_attributes(Category::Armored)?,
            ],
        })
    }

    /// Built-in presets
    pub fn default_presets() -> Self {
        Self {
            presets: [
                // Light brown
                PresetAttributes::new(5.0, 30, true, false, [0.8, 0.6, 0.4, 1.0]),
                // Gray
                PresetAttributes::new(20.0, 50, true, false, [0.4, 0.4, 0.4, 1.0]),
                // Red
                PresetAttributes::new(15.0, 25, true, true, [1.0, 0.0, 0.0, 1.0]),
                // Blue
                PresetAttributes::new(25.0, 100, true, false, [0.2, 0.2, 0.8, 1.0]),
            ],
        }
    }

    pub fn get(&self, category: Category) -> &PresetAttributes {
        &self.presets[category as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &PresetAttributes)> {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::color::Srgba;
    use std::time::{SystemTime, UNIX_EPOCH};

    const FULL_FILE: &str = r#"
[light]
mass = 2.5
health = 10
destructible = true
explosive = false
tint = [0.9, 0.9, 0.9, 1.0]

[heavy]
mass = 40.0
health = 80
destructible = false
explosive = false
tint = [0.1, 0.1, 0.1, 1.0]

[explosive]
mass = 15.0
health = 25
destructible = true
explosive = true
tint = [1.0, 0.5, 0.0, 0.5]

[armored]
mass = 25.0
health = 100
destructible = true
explosive = false
tint = [0.2, 0.2, 0.8, 1.0]
"#;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("box_presets_{}_{}.toml", tag, nanos))
    }

    #[test]
    fn test_default_table_values() {
        let table = PresetTable::default();

        let armored = table.get(Category::Armored);
        assert_eq!(armored.mass, 25.0);
        assert_eq!(armored.health, 100);
        assert!(armored.destructible);
        assert!(!armored.explosive);

        let explosive = table.get(Category::Explosive);
        assert_eq!(explosive.mass, 15.0);
        assert_eq!(explosive.health, 25);
        assert!(explosive.explosive);
        assert_eq!(explosive.tint, Srgba::new(1.0, 0.0, 0.0, 1.0));

        assert_eq!(table.get(Category::Light).health, 30);
        assert_eq!(table.get(Category::Heavy).mass, 20.0);
    }

    #[test]
    fn test_iter_is_total() {
        let table = PresetTable::default();
        let categories: Vec<Category> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_parse_full_file() {
        let table = PresetTable::parse(FULL_FILE).unwrap();
        assert_eq!(table.get(Category::Light).mass, 2.5);
        assert!(!table.get(Category::Heavy).destructible);
        assert_eq!(table.get(Category::Explosive).tint.alpha, 0.5);
    }

    #[test]
    fn test_parse_rejects_missing_category() {
        let partial = FULL_FILE.split("[armored]").next().unwrap();
        assert!(PresetTable::parse(partial).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        let zero_mass = FULL_FILE.replace("mass = 2.5", "mass = 0.0");
        assert!(PresetTable::parse(&zero_mass).is_err());

        let negative_health = FULL_FILE.replace("health = 10", "health = -1");
        assert!(PresetTable::parse(&negative_health).is_err());

        let bright = FULL_FILE.replace("[0.9, 0.9, 0.9, 1.0]", "[1.5, 0.9, 0.9, 1.0]");
        assert!(PresetTable::parse(&bright).is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let table = PresetTable::load_from_file(temp_path("missing"));
        assert_eq!(table, PresetTable::default_presets());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("full");
        fs::write(&path, FULL_FILE).unwrap();
        let table = PresetTable::load_from_file(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(table.get(Category::Heavy).mass, 40.0);
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let path = temp_path("invalid");
        fs::write(&path, "[light]\nmass = \"heavy\"\n").unwrap();
        let table = PresetTable::load_from_file(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(table, PresetTable::default_presets());
    }
}
