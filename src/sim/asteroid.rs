//! Asteroids and their fragmentation rules

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::collision::Circle;
use crate::error::GameError;

/// Size tier. Larger tiers split into two of the next tier down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AsteroidSize {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl AsteroidSize {
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// Collision radius: `size * 10 - 5`
    pub fn radius(self) -> f32 {
        self.tier() as f32 * 10.0 - 5.0
    }

    /// Points awarded for destroying an asteroid of this size
    pub fn score(self) -> u64 {
        match self {
            AsteroidSize::Large => 20,
            AsteroidSize::Medium => 50,
            AsteroidSize::Small => 100,
        }
    }

    /// Tier of the fragments, or None if this tier doesn't split
    pub fn smaller(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

impl TryFrom<u8> for AsteroidSize {
    type Error = GameError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(AsteroidSize::Small),
            2 => Ok(AsteroidSize::Medium),
            3 => Ok(AsteroidSize::Large),
            other => Err(GameError::InvalidAsteroidSize(other)),
        }
    }
}

impl From<AsteroidSize> for u8 {
    fn from(size: AsteroidSize) -> u8 {
        size.tier()
    }
}

/// An asteroid entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub body: KinematicBody,
    pub size: AsteroidSize,
}

impl Asteroid {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, size: AsteroidSize) -> Self {
        Self {
            id,
            body: KinematicBody::new(pos, vel),
            size,
        }
    }
}

impl Circle for Asteroid {
    fn center(&self) -> Vec2 {
        self.body.pos
    }

    fn radius(&self) -> f32 {
        self.size.radius()
    }
}

/// Velocities of the two fragments produced when a torpedo with velocity
/// `torpedo_vel` hits an asteroid moving at `parent_vel`.
///
/// Both are `(torpedo_vel ± parent_vel) / |parent_vel|`. A parent at rest
/// would divide by zero, so its speed is taken as 1.0 instead.
pub fn fragment_velocities(parent_vel: Vec2, torpedo_vel: Vec2) -> (Vec2, Vec2) {
    let mut speed = parent_vel.length();
    if speed < f32::EPSILON {
        log::warn!("Fragmenting an asteroid at rest; using unit speed divisor");
        speed = 1.0;
    }
    (
        (torpedo_vel + parent_vel) / speed,
        (torpedo_vel - parent_vel) / speed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_table() {
        assert_eq!(AsteroidSize::Large.radius(), 25.0);
        assert_eq!(AsteroidSize::Medium.radius(), 15.0);
        assert_eq!(AsteroidSize::Small.radius(), 5.0);

        let total: u64 = [AsteroidSize::Large, AsteroidSize::Medium, AsteroidSize::Small]
            .iter()
            .map(|s| s.score())
            .sum();
        assert_eq!(total, 170);
    }

    #[test]
    fn test_size_conversion() {
        assert_eq!(AsteroidSize::try_from(2).unwrap(), AsteroidSize::Medium);
        assert!(matches!(
            AsteroidSize::try_from(0),
            Err(GameError::InvalidAsteroidSize(0))
        ));
        assert!(AsteroidSize::try_from(4).is_err());
        assert_eq!(AsteroidSize::Small.smaller(), None);
        assert_eq!(AsteroidSize::Large.smaller(), Some(AsteroidSize::Medium));
    }

    #[test]
    fn test_fragment_velocities() {
        let (a, b) = fragment_velocities(Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0));
        assert_eq!(a, Vec2::new(1.0, 2.0));
        assert_eq!(b, Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn test_fragment_scaled_by_parent_speed() {
        let (a, b) = fragment_velocities(Vec2::new(3.0, 4.0), Vec2::new(2.0, 1.0));
        assert!((a - Vec2::new(1.0, 1.0)).length() < 1e-6);
        assert!((b - Vec2::new(-0.2, -0.6)).length() < 1e-6);
    }

    #[test]
    fn test_fragment_parent_at_rest() {
        let (a, b) = fragment_velocities(Vec2::ZERO, Vec2::new(0.5, -2.0));
        assert!(a.is_finite() && b.is_finite());
        assert_eq!(a, Vec2::new(0.5, -2.0));
        assert_eq!(b, Vec2::new(0.5, -2.0));
    }

    #[test]
    fn test_size_serializes_as_tier() {
        let json = serde_json::to_string(&AsteroidSize::Medium).unwrap();
        assert_eq!(json, "2");
        let back: AsteroidSize = serde_json::from_str("3").unwrap();
        assert_eq!(back, AsteroidSize::Large);
        assert!(serde_json::from_str::<AsteroidSize>("9").is_err());
    }
}
