//! Persistent settings for the tagger
//!
//! Saves and loads user preferences (presets file location, surface layout)
//! to/from a tagger_settings.json file in the config directory.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::PRESETS_FILE;
use crate::materials::SurfaceLayout;

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/tagger_settings.json";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerSettings {
    /// Preset override file, read once at startup
    pub presets_file: String,
    /// Inputs available on newly created material surfaces
    pub surface_layout: SurfaceLayout,
}

impl Default for TaggerSettings {
    fn default() -> Self {
        Self {
            presets_file: PRESETS_FILE.to_string(),
            surface_layout: SurfaceLayout::Principled,
        }
    }
}

impl TaggerSettings {
    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load settings from file, or return defaults if the file doesn't exist
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(SETTINGS_FILE)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }
}
