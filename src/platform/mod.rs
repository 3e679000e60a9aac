//! Platform abstraction layer
//!
//! The simulation never renders, reads devices or owns a clock. It talks to a
//! [`DisplaySurface`] that:
//! - Reports the playfield bounds
//! - Accepts draw/undraw commands keyed by entity ID
//! - Answers input queries once per tick
//! - Drives the timer that calls the next tick

pub mod headless;

pub use headless::{DisplayCommand, HeadlessDisplay};

use crate::sim::{Bounds, TickInput};

/// Everything the simulation needs from a window/renderer/input backend
pub trait DisplaySurface {
    /// Inclusive playfield rectangle
    fn bounds(&self) -> Bounds;

    // === Drawing (idempotent, redraw in place) ===
    fn draw_ship(&mut self, x: f32, y: f32, direction: f32);
    fn draw_asteroid(&mut self, id: u32, x: f32, y: f32);
    fn draw_torpedo(&mut self, id: u32, x: f32, y: f32, direction: f32);

    // === Lifecycle (exactly once per creation/destruction) ===
    fn register_asteroid(&mut self, id: u32, size: u8);
    fn unregister_asteroid(&mut self, id: u32);
    fn register_torpedo(&mut self, id: u32);
    fn unregister_torpedo(&mut self, id: u32);

    // === Input ===
    fn is_thrust_pressed(&mut self) -> bool;
    fn is_left_pressed(&mut self) -> bool;
    fn is_right_pressed(&mut self) -> bool;
    fn is_teleport_pressed(&mut self) -> bool;
    fn is_fire_pressed(&mut self) -> bool;
    fn is_special_pressed(&mut self) -> bool;
    fn should_end(&mut self) -> bool;

    /// Sample every input query once
    fn poll_input(&mut self) -> TickInput {
        TickInput {
            thrust: self.is_thrust_pressed(),
            turn_left: self.is_left_pressed(),
            turn_right: self.is_right_pressed(),
            teleport: self.is_teleport_pressed(),
            fire: self.is_fire_pressed(),
            fire_special: self.is_special_pressed(),
            quit: self.should_end(),
        }
    }

    // === HUD ===
    /// Modal message; must not block the simulation
    fn show_message(&mut self, title: &str, body: &str);
    fn set_score(&mut self, score: u64);
    fn remove_life(&mut self);
    /// No further draw calls will follow
    fn end_game(&mut self);

    // === Timer ===
    /// Call the runner's `step` again after `delay` timer units
    fn schedule_tick(&mut self, delay: u32);
    /// Flush the frame drawn during the tick
    fn refresh_frame(&mut self);
}
