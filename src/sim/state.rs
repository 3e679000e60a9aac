//! Game state and entity bookkeeping
//!
//! Everything a tick reads or mutates lives in [`GameState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidSize};
use super::body::Bounds;
use super::collision::has_intersection;
use super::ship::Ship;
use super::torpedo::Torpedo;
use crate::consts::*;
use crate::platform::DisplaySurface;

/// Current phase of the game. Everything but `Running` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Every asteroid destroyed
    Won,
    /// Player asked to leave
    Quit,
    /// Out of lives
    GameOver,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Running
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield the entities wrap around
    pub bounds: Bounds,
    /// Player lives
    pub lives: u32,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub ship: Ship,
    /// Live asteroids, in creation order
    pub asteroids: Vec<Asteroid>,
    /// Live standard torpedoes, in creation order
    pub torpedoes: Vec<Torpedo>,
    /// Live orbiting torpedoes, in creation order
    pub special_torpedoes: Vec<Torpedo>,
    #[serde(skip)]
    rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game: ship at a random spot, `asteroid_count` large
    /// asteroids placed clear of it.
    pub fn new(seed: u64, bounds: Bounds, asteroid_count: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ship_pos = random_point(&mut rng, &bounds);
        let mut state = Self::with_ship_and_rng(seed, bounds, ship_pos, rng);

        for _ in 0..asteroid_count {
            let vel = Vec2::new(
                state.rng.random_range(AST_MIN_SPEED..=AST_MAX_SPEED) as f32,
                state.rng.random_range(AST_MIN_SPEED..=AST_MAX_SPEED) as f32,
            );
            let id = state.next_entity_id();
            let mut asteroid = Asteroid::new(id, Vec2::ZERO, vel, AsteroidSize::Large);
            let mut placed = false;
            for _ in 0..PLACEMENT_MAX_ATTEMPTS {
                asteroid.body.pos = state.random_point();
                if !has_intersection(&asteroid, &state.ship) {
                    placed = true;
                    break;
                }
            }
            if !placed {
                log::warn!(
                    "Asteroid {} placed on top of the ship after {} attempts",
                    id,
                    PLACEMENT_MAX_ATTEMPTS
                );
            }
            state.asteroids.push(asteroid);
        }

        state
    }

    /// Empty field with the ship at `ship_pos`. Used to set up scenarios.
    pub fn with_ship(seed: u64, bounds: Bounds, ship_pos: Vec2) -> Self {
        Self::with_ship_and_rng(seed, bounds, ship_pos, Pcg32::seed_from_u64(seed))
    }

    fn with_ship_and_rng(seed: u64, bounds: Bounds, ship_pos: Vec2, rng: Pcg32) -> Self {
        Self {
            seed,
            bounds,
            lives: SHIP_LIFE,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            ship: Ship::new(ship_pos),
            asteroids: Vec::new(),
            torpedoes: Vec::new(),
            special_torpedoes: Vec::new(),
            rng,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an asteroid without notifying any display. Returns its ID.
    pub fn add_asteroid(&mut self, pos: Vec2, vel: Vec2, size: AsteroidSize) -> u32 {
        let id = self.next_entity_id();
        self.asteroids.push(Asteroid::new(id, pos, vel, size));
        id
    }

    pub fn asteroid(&self, id: u32) -> Option<&Asteroid> {
        self.asteroids.iter().find(|a| a.id == id)
    }

    /// Uniformly random integer point inside the bounds
    pub fn random_point(&mut self) -> Vec2 {
        random_point(&mut self.rng, &self.bounds)
    }

    /// Move the ship to a random point that doesn't overlap any asteroid.
    ///
    /// Gives up after [`PLACEMENT_MAX_ATTEMPTS`] and keeps the last sample.
    pub fn teleport_ship(&mut self) {
        for _ in 0..PLACEMENT_MAX_ATTEMPTS {
            self.ship.body.pos = self.random_point();
            if !self.asteroids.iter().any(|a| has_intersection(a, &self.ship)) {
                return;
            }
        }
        log::warn!(
            "Teleport found no clear spot after {} attempts",
            PLACEMENT_MAX_ATTEMPTS
        );
    }

    /// Total live torpedoes of both kinds
    pub fn torpedo_count(&self) -> usize {
        self.torpedoes.len() + self.special_torpedoes.len()
    }

    /// Tell a freshly attached display about every entity on the field
    pub fn announce(&self, display: &mut impl DisplaySurface) {
        let ship = &self.ship;
        display.draw_ship(ship.body.pos.x, ship.body.pos.y, ship.direction);
        for asteroid in &self.asteroids {
            display.register_asteroid(asteroid.id, asteroid.size.tier());
            display.draw_asteroid(asteroid.id, asteroid.body.pos.x, asteroid.body.pos.y);
        }
        for torpedo in self.torpedoes.iter().chain(&self.special_torpedoes) {
            display.register_torpedo(torpedo.id);
            display.draw_torpedo(
                torpedo.id,
                torpedo.body.pos.x,
                torpedo.body.pos.y,
                torpedo.direction,
            );
        }
    }
}

/// Integer coordinates on the playfield grid. Falls back to a
/// continuous sample when the bounds contain no integer point.
fn random_point(rng: &mut Pcg32, bounds: &Bounds) -> Vec2 {
    Vec2::new(
        random_coord(rng, bounds.min_x, bounds.max_x),
        random_coord(rng, bounds.min_y, bounds.max_y),
    )
}

fn random_coord(rng: &mut Pcg32, min: f32, max: f32) -> f32 {
    let lo = min.ceil() as i32;
    let hi = max.floor() as i32;
    if lo <= hi {
        rng.random_range(lo..=hi) as f32
    } else {
        rng.random_range(min..=max)
    }
}
