//! Game settings
//!
//! Loaded from an optional JSON file; any missing key keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::Bounds;

/// Runtime configuration for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Large asteroids on the field at start
    pub asteroid_count: u32,
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Timer delay between ticks
    pub tick_delay: u32,
    /// Playfield for displays that don't impose their own
    pub bounds: Bounds,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            asteroid_count: DEFAULT_ASTEROIDS_NUM,
            seed: None,
            tick_delay: TICK_DELAY,
            bounds: Bounds::default(),
        }
    }
}

impl GameSettings {
    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if self.tick_delay == 0 {
            return Err(GameError::InvalidTickDelay);
        }
        Ok(())
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.asteroid_count, 5);
        assert_eq!(settings.tick_delay, 5);
        assert_eq!(settings.bounds.max_x, 500.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{ "asteroid_count": 8, "seed": 42 }"#).unwrap();
        assert_eq!(settings.asteroid_count, 8);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.resolve_seed(), 42);
        assert_eq!(settings.tick_delay, TICK_DELAY);
    }

    #[test]
    fn test_validate_rejects_zero_delay() {
        let settings = GameSettings {
            tick_delay: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(GameError::InvalidTickDelay)));
    }

    #[test]
    fn test_load_round_trip() {
        let path = std::env::temp_dir().join(format!("rock_split_settings_{}.json", std::process::id()));
        let settings = GameSettings {
            asteroid_count: 2,
            seed: Some(7),
            tick_delay: 10,
            bounds: Bounds::new(-100.0, 100.0, -50.0, 50.0),
        };
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

        let loaded = GameSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_errors() {
        let missing = GameSettings::load("/definitely/not/here.json");
        assert!(matches!(missing, Err(GameError::Io { .. })));

        let path = std::env::temp_dir().join(format!("rock_split_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(GameSettings::load(&path), Err(GameError::Parse(_))));
        std::fs::remove_file(&path).unwrap();
    }
}
