//! Run configuration
//!
//! Loaded from a RON file, with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for a run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    /// Dungeon grid side length
    pub dungeon_size: usize,
    /// Chance of a wandering monster in an empty room, per turn
    pub encounter_chance: f64,
    pub flee_chance: f64,
    /// Every n-th stage is a boss stage
    pub boss_interval: u32,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Hero".to_string(),
            dungeon_size: 5,
            encounter_chance: 0.2,
            flee_chance: 0.5,
            boss_interval: 5,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a RON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_ron(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, or fall back to defaults if it is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Using default config: {}", e);
            Self::default()
        })
    }

    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dungeon_size < 2 {
            return Err(ConfigError::Invalid(format!(
                "dungeon_size must be at least 2, got {}",
                self.dungeon_size
            )));
        }
        for (name, p) in [
            ("encounter_chance", self.encounter_chance),
            ("flee_chance", self.flee_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!("{} must be within 0..=1, got {}", name, p)));
            }
        }
        if self.boss_interval == 0 {
            return Err(ConfigError::Invalid("boss_interval must be positive".to_string()));
        }
        Ok(())
    }
}

/// Platform config file location, e.g. ~/.config/portalcrawl/config.ron
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "portalcrawl").map(|dirs| dirs.config_dir().join("config.ron"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let config = GameConfig::from_ron("(player_name: \"Ayla\", seed: Some(7))").unwrap();
        assert_eq!(config.player_name, "Ayla");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.dungeon_size, 5);
        assert_eq!(config.flee_chance, 0.5);
    }

    #[test]
    fn test_rejects_tiny_dungeon() {
        let err = GameConfig::from_ron("(dungeon_size: 1)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = GameConfig::from_ron("(flee_chance: 1.5)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron("(dungeon_size: \"big\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default(Path::new("/nonexistent/portalcrawl.ron"));
        assert_eq!(config, GameConfig::default());
    }
}
