//! Rock Split - A toroidal asteroid-splitting arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (kinematics, collisions, fragmentation, game state)
//! - `platform`: Display surface abstraction (draw commands, input, timer)
//! - `runner`: Tick scheduling handshake between the simulation and a display
//! - `settings`: Runtime configuration

pub mod error;
pub mod platform;
pub mod runner;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use runner::GameRunner;
pub use settings::GameSettings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield bounds (inclusive)
    pub const SCREEN_MIN_X: f32 = -500.0;
    pub const SCREEN_MAX_X: f32 = 500.0;
    pub const SCREEN_MIN_Y: f32 = -500.0;
    pub const SCREEN_MAX_Y: f32 = 500.0;

    /// Delay between ticks, in display timer units
    pub const TICK_DELAY: u32 = 5;

    /// Asteroids on the field at game start
    pub const DEFAULT_ASTEROIDS_NUM: u32 = 5;
    /// Initial asteroid speed range (per axis, integer units)
    pub const AST_MIN_SPEED: i32 = 1;
    pub const AST_MAX_SPEED: i32 = 4;

    /// Ship defaults
    pub const SHIP_LIFE: u32 = 3;
    pub const SHIP_RADIUS: f32 = 1.0;
    /// Degrees per turn command
    pub const TURN_DEGREES: f32 = 7.0;

    /// Torpedo defaults
    pub const TORPEDO_RADIUS: f32 = 4.0;
    /// Torpedo speed relative to the ship
    pub const TORPEDO_SPEED: f32 = 2.0;
    pub const MAX_TORPEDOS: usize = 10;
    pub const MAX_LIFE_TIME: u32 = 200;

    /// Special (orbiting) torpedo burst
    pub const SPECIAL_TORPEDOS_AMOUNT: usize = 8;
    pub const MAX_SPECIAL_TORPEDOS: usize = 5;
    pub const SPECIAL_MAX_LIFE_TIME: u32 = 150;
    /// Visual spin per tick (degrees)
    pub const SPECIAL_SPIN_DEGREES: f32 = 5.0;

    /// Rejection-sampling ceiling for teleport and initial placement
    pub const PLACEMENT_MAX_ATTEMPTS: u32 = 1000;

    /// Modal messages (title, body)
    pub const COLLISION_MSG: (&str, &str) = (
        "Collision!",
        "You hit an asteroid! You've got one less lives. Be careful!",
    );
    pub const WIN_MSG: (&str, &str) = ("Winner!", "Good job! you won the game :)");
    pub const EXIT_MSG: (&str, &str) = ("Exit", "See you next time!");
    pub const GAME_OVER_MSG: (&str, &str) = ("Game Over", "You ran out of lives :(");
}

/// Unit vector for a heading given in degrees
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Wrap a coordinate into `[min, max)` on a torus of width `max - min`.
///
/// Uses a euclidean remainder so negative offsets re-enter from the far edge.
#[inline]
pub fn wrap_coord(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    let wrapped = (value - min).rem_euclid(span) + min;
    // rem_euclid can round up to exactly `span` for tiny negative inputs
    if wrapped >= max { min } else { wrapped }
}
