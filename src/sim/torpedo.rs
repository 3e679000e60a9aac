//! Torpedoes: straight shots and the orbiting special burst

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Bounds, KinematicBody};
use super::collision::Circle;
use crate::consts::*;

/// Torpedo variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TorpedoKind {
    /// Flies in a straight line
    Standard,
    /// Circles with the ship along a fixed orbit angle (radians)
    Orbiting { orbit_angle: f32 },
}

/// A torpedo entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Torpedo {
    pub id: u32,
    pub kind: TorpedoKind,
    pub body: KinematicBody,
    /// Visual heading in degrees
    pub direction: f32,
    /// Ticks survived so far
    pub life_time: u32,
}

impl Torpedo {
    pub fn standard(id: u32, pos: Vec2, vel: Vec2, direction: f32) -> Self {
        Self {
            id,
            kind: TorpedoKind::Standard,
            body: KinematicBody::new(pos, vel),
            direction,
            life_time: 0,
        }
    }

    /// Orbiting torpedo launched along `direction` degrees
    pub fn orbiting(id: u32, pos: Vec2, vel: Vec2, direction: f32) -> Self {
        Self {
            id,
            kind: TorpedoKind::Orbiting {
                orbit_angle: direction.to_radians(),
            },
            body: KinematicBody::new(pos, vel),
            direction,
            life_time: 0,
        }
    }

    /// Tick count at which this torpedo is removed
    pub fn max_life_time(&self) -> u32 {
        match self.kind {
            TorpedoKind::Standard => MAX_LIFE_TIME,
            TorpedoKind::Orbiting { .. } => SPECIAL_MAX_LIFE_TIME,
        }
    }

    /// Advance one tick. Orbiting torpedoes first re-derive their velocity
    /// from the ship and spin.
    ///
    /// Returns false once the lifetime is used up; the caller removes it.
    pub fn advance(&mut self, bounds: &Bounds, ship_vel: Vec2) -> bool {
        if let TorpedoKind::Orbiting { orbit_angle } = self.kind {
            self.body.vel =
                ship_vel + Vec2::new(orbit_angle.cos(), orbit_angle.sin()) * TORPEDO_SPEED;
        }
        self.body.advance(bounds);
        if matches!(self.kind, TorpedoKind::Orbiting { .. }) {
            self.direction += SPECIAL_SPIN_DEGREES;
        }

        if self.life_time == self.max_life_time() {
            false
        } else {
            self.life_time += 1;
            true
        }
    }
}

impl Circle for Torpedo {
    fn center(&self) -> Vec2 {
        self.body.pos
    }

    fn radius(&self) -> f32 {
        TORPEDO_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lifetime() {
        let bounds = Bounds::default();
        let mut torpedo = Torpedo::standard(1, Vec2::ZERO, Vec2::new(2.0, 0.0), 0.0);
        for _ in 0..MAX_LIFE_TIME {
            assert!(torpedo.advance(&bounds, Vec2::ZERO));
        }
        assert_eq!(torpedo.life_time, MAX_LIFE_TIME);
        assert!(!torpedo.advance(&bounds, Vec2::ZERO));
    }

    #[test]
    fn test_orbiting_tracks_ship() {
        let bounds = Bounds::default();
        let mut torpedo = Torpedo::orbiting(1, Vec2::ZERO, Vec2::ZERO, 90.0);
        let ship_vel = Vec2::new(3.0, 0.0);

        assert!(torpedo.advance(&bounds, ship_vel));
        assert!((torpedo.body.vel - Vec2::new(3.0, 2.0)).length() < 1e-5);
        assert!((torpedo.body.pos - Vec2::new(3.0, 2.0)).length() < 1e-5);
        assert_eq!(torpedo.direction, 95.0);

        // Orbit angle is fixed even though the visual heading spins
        assert!(torpedo.advance(&bounds, Vec2::ZERO));
        assert!((torpedo.body.vel - Vec2::new(0.0, 2.0)).length() < 1e-5);
        assert_eq!(torpedo.direction, 100.0);
    }

    #[test]
    fn test_orbiting_lifetime() {
        let bounds = Bounds::default();
        let mut torpedo = Torpedo::orbiting(1, Vec2::ZERO, Vec2::ZERO, 0.0);
        for _ in 0..SPECIAL_MAX_LIFE_TIME {
            assert!(torpedo.advance(&bounds, Vec2::ZERO));
        }
        assert!(!torpedo.advance(&bounds, Vec2::ZERO));
    }
}
