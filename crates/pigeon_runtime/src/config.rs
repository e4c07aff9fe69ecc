//! Game configuration and bootstrap settings
//!
//! Two files are involved:
//! - `config.pmgf` - JSON game config (screen size), always required
//! - `pigeon.toml` - optional TOML file overriding where bootstrap looks for
//!   its inputs

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional settings file in the asset root
pub const SETTINGS_FILE: &str = "pigeon.toml";

/// Game configuration read from `config.pmgf`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Resource)]
pub struct GameConfig {
    /// Screen width in pixels
    pub width: u32,
    /// Screen height in pixels
    pub height: u32,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Where bootstrap finds its input files, relative to the asset root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapSettings {
    pub config_file: String,
    pub images_file: String,
    pub project_file: String,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            config_file: "config.pmgf".to_string(),
            images_file: "images.json".to_string(),
            project_file: "project.ldtk".to_string(),
        }
    }
}

impl BootstrapSettings {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `pigeon.toml` from the asset root, or defaults if it doesn't exist
    pub fn load_or_default(root: &Path) -> Result<Self, crate::BootstrapError> {
        let path = root.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|source| crate::BootstrapError::Io {
                path: path.clone(),
                source,
            })?;
        Self::from_toml(&content).map_err(|source| crate::BootstrapError::Settings { path, source })
    }
}
