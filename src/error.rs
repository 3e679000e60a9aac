//! Error types for configuration and entity construction.
//!
//! The simulation itself never fails: every in-game edge case has a defined
//! fallback. Errors only surface when loading settings or converting raw
//! values into typed game data.

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// Settings file could not be read.
    Io {
        /// File that was being read.
        path: PathBuf,
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for [`crate::GameSettings`].
    Parse(serde_json::Error),

    /// Playfield bounds are empty or inverted on one axis.
    InvalidBounds {
        axis: char,
        min: f32,
        max: f32,
    },

    /// Tick delay of zero would starve the display's event loop.
    InvalidTickDelay,

    /// Asteroid size tier outside `1..=3`.
    InvalidAsteroidSize(u8),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            GameError::Parse(e) => write!(f, "invalid settings: {}", e),
            GameError::InvalidBounds { axis, min, max } => write!(
                f,
                "invalid {} bounds: min {} must be less than max {}",
                axis, min, max
            ),
            GameError::InvalidTickDelay => write!(f, "tick delay must be at least 1"),
            GameError::InvalidAsteroidSize(size) => {
                write!(f, "asteroid size {} out of range (expected 1..=3)", size)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io { source, .. } => Some(source),
            GameError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Parse(e)
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
