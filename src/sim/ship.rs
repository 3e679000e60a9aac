//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::collision::Circle;
use crate::consts::*;
use crate::heading;

/// The player's ship. Never destroyed; collisions cost lives instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: KinematicBody,
    /// Heading in degrees. Accumulates without normalization.
    pub direction: f32,
}

impl Ship {
    /// A ship at rest facing east
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: KinematicBody::new(pos, Vec2::ZERO),
            direction: 0.0,
        }
    }

    pub fn turn_left(&mut self) {
        self.direction += TURN_DEGREES;
    }

    pub fn turn_right(&mut self) {
        self.direction -= TURN_DEGREES;
    }

    /// Add one unit of thrust along the current heading (no speed cap)
    pub fn speed_up(&mut self) {
        self.body.vel += heading(self.direction);
    }

    /// Velocity of a torpedo launched along `direction` degrees
    pub fn launch_velocity(&self, direction: f32) -> Vec2 {
        self.body.vel + heading(direction) * TORPEDO_SPEED
    }
}

impl Circle for Ship {
    fn center(&self) -> Vec2 {
        self.body.pos
    }

    fn radius(&self) -> f32 {
        SHIP_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turning_accumulates() {
        let mut ship = Ship::new(Vec2::ZERO);
        for _ in 0..60 {
            ship.turn_left();
        }
        assert_eq!(ship.direction, 420.0);
        ship.turn_right();
        assert_eq!(ship.direction, 413.0);
    }

    #[test]
    fn test_speed_up_adds_unit_thrust() {
        let mut ship = Ship::new(Vec2::ZERO);
        ship.speed_up();
        ship.speed_up();
        assert!((ship.body.vel - Vec2::new(2.0, 0.0)).length() < 1e-6);

        ship.direction = 90.0;
        ship.speed_up();
        assert!((ship.body.vel - Vec2::new(2.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_launch_velocity_inherits_ship_motion() {
        let mut ship = Ship::new(Vec2::ZERO);
        ship.body.vel = Vec2::new(1.0, 1.0);
        ship.direction = 180.0;
        let vel = ship.launch_velocity(ship.direction);
        assert!((vel - Vec2::new(-1.0, 1.0)).length() < 1e-6);
    }
}
