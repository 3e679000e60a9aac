//! Shared kinematics for every moving entity
//!
//! The playfield is a torus: leaving one edge re-enters from the opposite one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::wrap_coord;

/// Inclusive playfield rectangle reported by the display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: SCREEN_MIN_X,
            max_x: SCREEN_MAX_X,
            min_y: SCREEN_MIN_Y,
            max_y: SCREEN_MAX_Y,
        }
    }
}

impl Bounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Reject empty or inverted axes (wrapping needs a positive span)
    pub fn validate(&self) -> Result<()> {
        if !(self.min_x < self.max_x) {
            return Err(GameError::InvalidBounds {
                axis: 'x',
                min: self.min_x,
                max: self.max_x,
            });
        }
        if !(self.min_y < self.max_y) {
            return Err(GameError::InvalidBounds {
                axis: 'y',
                min: self.min_y,
                max: self.max_y,
            });
        }
        Ok(())
    }

    /// Wrap a point onto the torus
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            wrap_coord(pos.x, self.min_x, self.max_x),
            wrap_coord(pos.y, self.min_y, self.max_y),
        )
    }

    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }
}

/// Position + velocity pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl KinematicBody {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Move by one tick of velocity, wrapping each axis independently
    #[inline]
    pub fn advance(&mut self, bounds: &Bounds) {
        self.pos = bounds.wrap(self.pos + self.vel);
    }
}
