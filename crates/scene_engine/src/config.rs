//! Scene configuration
//!
//! Small TOML-backed configuration for scene runs: where texture files live
//! and whether lighting is enabled at setup. Everything has sensible
//! defaults so a missing config file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Where scene assets are found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding the scene's texture image files
    pub texture_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            texture_dir: PathBuf::from("textures"),
        }
    }
}

impl AssetConfig {
    /// Full path for a texture file name
    #[must_use]
    pub fn texture_path(&self, file_name: &str) -> PathBuf {
        self.texture_dir.join(file_name)
    }
}

/// Top-level configuration for a scene run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Asset locations
    pub assets: AssetConfig,
    /// Whether custom lighting is enabled at scene setup
    pub lighting_enabled: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            assets: AssetConfig::default(),
            lighting_enabled: true,
        }
    }
}

impl SceneConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file is unreadable, [`ConfigError::Parse`]
    /// if it is not valid TOML for this schema.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Save configuration to a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Serialize`] on encoding failure, [`ConfigError::Io`]
    /// if the file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|err| ConfigError::Serialize(err.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from `path` when it exists, falling back to defaults otherwise
    ///
    /// A malformed file is logged and also falls back to defaults; scene
    /// startup never fails on configuration.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}; using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring config {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_lighting_and_texture_dir() {
        let config = SceneConfig::default();
        assert!(config.lighting_enabled);
        assert_eq!(
            config.assets.texture_path("wood.jpg"),
            PathBuf::from("textures/wood.jpg")
        );
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = SceneConfig::default();
        config.assets.texture_dir = PathBuf::from("assets/tex");
        config.lighting_enabled = false;

        let encoded = toml::to_string_pretty(&config).expect("encodes");
        let decoded: SceneConfig = toml::from_str(&encoded).expect("decodes");
        assert_eq!(decoded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let decoded: SceneConfig = toml::from_str("").expect("empty toml decodes");
        assert_eq!(decoded, SceneConfig::default());
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let config = SceneConfig::load_or_default(Path::new("no/such/config.toml"));
        assert_eq!(config, SceneConfig::default());
    }
}
