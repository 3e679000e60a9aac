//! Simulation core
//!
//! All gameplay logic lives here:
//! - Integer-seeded RNG only
//! - Stable iteration order (creation order, which is ID order)
//! - No rendering; output goes through a `DisplaySurface`

pub mod asteroid;
pub mod autopilot;
pub mod body;
pub mod collision;
pub mod ship;
pub mod state;
pub mod tick;
pub mod torpedo;

pub use asteroid::{Asteroid, AsteroidSize, fragment_velocities};
pub use body::{Bounds, KinematicBody};
pub use collision::{Circle, has_intersection};
pub use ship::Ship;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, fire_special_burst, fire_torpedo, tick};
pub use torpedo::{Torpedo, TorpedoKind};
