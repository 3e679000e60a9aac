//! Per-tick simulation step
//!
//! Phase order matters and is fixed: movement, input, ship collisions,
//! torpedo collisions, then the terminal check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, fragment_velocities};
use super::body::Bounds;
use super::collision::has_intersection;
use super::state::{GamePhase, GameState};
use super::torpedo::Torpedo;
use crate::consts::*;
use crate::platform::DisplaySurface;

/// Input intents sampled once per tick. Any combination may be active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub thrust: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub teleport: bool,
    /// Fire a standard torpedo
    pub fire: bool,
    /// Fire an orbiting burst
    pub fire_special: bool,
    /// Player asked to leave
    pub quit: bool,
}

/// Advance the game by one tick, issuing draw commands along the way.
///
/// Returns the phase after the tick. Once terminal, further calls are no-ops.
pub fn tick(state: &mut GameState, display: &mut impl DisplaySurface) -> GamePhase {
    if state.phase.is_terminal() {
        return state.phase;
    }
    state.time_ticks += 1;

    move_ship(state, display);
    move_asteroids(state, display);
    move_torpedoes(state, display);
    move_special_torpedoes(state, display);

    let input = display.poll_input();
    apply_input(state, &input, display);

    ship_hit_asteroid(state, display);
    torpedo_hit_asteroid(state, display, TorpedoSet::Standard);
    torpedo_hit_asteroid(state, display, TorpedoSet::Special);

    state.phase = check_end(state, &input, display);
    state.phase
}

fn draw_ship(state: &GameState, display: &mut impl DisplaySurface) {
    let ship = &state.ship;
    display.draw_ship(ship.body.pos.x, ship.body.pos.y, ship.direction);
}

fn draw_torpedo(torpedo: &Torpedo, display: &mut impl DisplaySurface) {
    display.draw_torpedo(
        torpedo.id,
        torpedo.body.pos.x,
        torpedo.body.pos.y,
        torpedo.direction,
    );
}

fn move_ship(state: &mut GameState, display: &mut impl DisplaySurface) {
    state.ship.body.advance(&state.bounds);
    draw_ship(state, display);
}

fn move_asteroids(state: &mut GameState, display: &mut impl DisplaySurface) {
    for asteroid in &mut state.asteroids {
        asteroid.body.advance(&state.bounds);
        display.draw_asteroid(asteroid.id, asteroid.body.pos.x, asteroid.body.pos.y);
    }
}

fn move_torpedoes(state: &mut GameState, display: &mut impl DisplaySurface) {
    let bounds = state.bounds;
    let ship_vel = state.ship.body.vel;
    state
        .torpedoes
        .retain_mut(|torpedo| advance_torpedo(torpedo, &bounds, ship_vel, display));
}

fn move_special_torpedoes(state: &mut GameState, display: &mut impl DisplaySurface) {
    let bounds = state.bounds;
    let ship_vel = state.ship.body.vel;
    state
        .special_torpedoes
        .retain_mut(|torpedo| advance_torpedo(torpedo, &bounds, ship_vel, display));
}

/// Move one torpedo; expired ones are unregistered and dropped
fn advance_torpedo(
    torpedo: &mut Torpedo,
    bounds: &Bounds,
    ship_vel: Vec2,
    display: &mut impl DisplaySurface,
) -> bool {
    if torpedo.advance(bounds, ship_vel) {
        draw_torpedo(torpedo, display);
        true
    } else {
        log::debug!("Torpedo {} expired", torpedo.id);
        display.unregister_torpedo(torpedo.id);
        false
    }
}

fn apply_input(state: &mut GameState, input: &TickInput, display: &mut impl DisplaySurface) {
    if input.thrust {
        state.ship.speed_up();
        draw_ship(state, display);
    }
    if input.turn_right {
        state.ship.turn_right();
        draw_ship(state, display);
    }
    if input.turn_left {
        state.ship.turn_left();
        draw_ship(state, display);
    }
    if input.teleport {
        state.teleport_ship();
        draw_ship(state, display);
    }
    if input.fire && state.torpedoes.len() < MAX_TORPEDOS {
        fire_torpedo(state, display);
    }
    if input.fire_special
        && state.special_torpedoes.len() < MAX_SPECIAL_TORPEDOS * SPECIAL_TORPEDOS_AMOUNT
    {
        fire_special_burst(state, display);
    }
}

/// Launch a standard torpedo from the ship along its heading.
///
/// Returns the new torpedo's ID, or None when at the cap.
pub fn fire_torpedo(state: &mut GameState, display: &mut impl DisplaySurface) -> Option<u32> {
    if state.torpedoes.len() >= MAX_TORPEDOS {
        return None;
    }
    let direction = state.ship.direction;
    let vel = state.ship.launch_velocity(direction);
    let id = state.next_entity_id();
    let torpedo = Torpedo::standard(id, state.ship.body.pos, vel, direction);

    display.register_torpedo(id);
    draw_torpedo(&torpedo, display);
    state.torpedoes.push(torpedo);
    Some(id)
}

/// Launch [`SPECIAL_TORPEDOS_AMOUNT`] orbiting torpedoes evenly spread
/// around the ship's heading. Returns how many were launched (0 at the cap).
pub fn fire_special_burst(state: &mut GameState, display: &mut impl DisplaySurface) -> usize {
    if state.special_torpedoes.len() >= MAX_SPECIAL_TORPEDOS * SPECIAL_TORPEDOS_AMOUNT {
        return 0;
    }
    let spacing = 360.0 / SPECIAL_TORPEDOS_AMOUNT as f32;
    for i in 0..SPECIAL_TORPEDOS_AMOUNT {
        let direction = state.ship.direction + i as f32 * spacing;
        let vel = state.ship.launch_velocity(direction);
        let id = state.next_entity_id();
        let torpedo = Torpedo::orbiting(id, state.ship.body.pos, vel, direction);

        display.register_torpedo(id);
        draw_torpedo(&torpedo, display);
        state.special_torpedoes.push(torpedo);
    }
    SPECIAL_TORPEDOS_AMOUNT
}

/// Ship vs asteroids. At most one asteroid is removed and one life lost.
///
/// With lives to spare the first overlapping asteroid is taken; on the last
/// life the scan runs on and the last overlapping one is taken.
fn ship_hit_asteroid(state: &mut GameState, display: &mut impl DisplaySurface) {
    let mut hit = None;
    for asteroid in &state.asteroids {
        if has_intersection(asteroid, &state.ship) {
            hit = Some(asteroid.id);
            if state.lives > 1 {
                display.show_message(COLLISION_MSG.0, COLLISION_MSG.1);
                break;
            }
        }
    }

    if let Some(id) = hit {
        state.lives = state.lives.saturating_sub(1);
        log::debug!("Ship hit asteroid {}, {} lives left", id, state.lives);
        display.remove_life();
        remove_asteroid(state, id, display);
    }
}

#[derive(Debug, Clone, Copy)]
enum TorpedoSet {
    Standard,
    Special,
}

impl TorpedoSet {
    fn of(self, state: &GameState) -> &[Torpedo] {
        match self {
            TorpedoSet::Standard => &state.torpedoes,
            TorpedoSet::Special => &state.special_torpedoes,
        }
    }
}

/// Torpedoes vs asteroids for one torpedo set.
///
/// Every hit on a splittable asteroid spawns its fragments right away and
/// ends that torpedo's scan; hits on the smallest tier don't end the scan.
/// Only the last recorded hit is scored and removed.
fn torpedo_hit_asteroid(
    state: &mut GameState,
    display: &mut impl DisplaySurface,
    set: TorpedoSet,
) {
    let mut hit: Option<(u32, u32)> = None;
    for t in 0..set.of(state).len() {
        let (torpedo_id, torpedo_vel) = {
            let torpedo = &set.of(state)[t];
            (torpedo.id, torpedo.body.vel)
        };

        // Fragments are appended as we go, so later torpedoes can see them
        let mut a = 0;
        while a < state.asteroids.len() {
            let asteroid = &state.asteroids[a];
            if has_intersection(asteroid, &set.of(state)[t]) {
                hit = Some((torpedo_id, asteroid.id));
                if asteroid.size.smaller().is_some() {
                    let parent = asteroid.clone();
                    split_asteroid(state, &parent, torpedo_vel, display);
                    break;
                }
            }
            a += 1;
        }
    }

    if let Some((torpedo_id, asteroid_id)) = hit {
        if let Some(points) = state.asteroid(asteroid_id).map(|a| a.size.score()) {
            state.score += points;
            display.set_score(state.score);
        }
        remove_asteroid(state, asteroid_id, display);
        remove_torpedo(state, torpedo_id, display);
    }
}

/// Spawn the two fragments of `parent` at its position
fn split_asteroid(
    state: &mut GameState,
    parent: &Asteroid,
    torpedo_vel: Vec2,
    display: &mut impl DisplaySurface,
) {
    let Some(size) = parent.size.smaller() else {
        return;
    };
    let (vel_a, vel_b) = fragment_velocities(parent.body.vel, torpedo_vel);
    for vel in [vel_a, vel_b] {
        let id = state.add_asteroid(parent.body.pos, vel, size);
        display.register_asteroid(id, size.tier());
        display.draw_asteroid(id, parent.body.pos.x, parent.body.pos.y);
    }
    log::debug!("Asteroid {} split into two of size {}", parent.id, size.tier());
}

fn remove_asteroid(state: &mut GameState, id: u32, display: &mut impl DisplaySurface) {
    display.unregister_asteroid(id);
    state.asteroids.retain(|a| a.id != id);
}

fn remove_torpedo(state: &mut GameState, id: u32, display: &mut impl DisplaySurface) {
    let before = state.torpedo_count();
    state.torpedoes.retain(|t| t.id != id);
    state.special_torpedoes.retain(|t| t.id != id);
    if state.torpedo_count() < before {
        display.unregister_torpedo(id);
    }
}

/// Terminal check: win beats quit beats game over
fn check_end(
    state: &GameState,
    input: &TickInput,
    display: &mut impl DisplaySurface,
) -> GamePhase {
    let (phase, msg) = if state.asteroids.is_empty() {
        (GamePhase::Won, WIN_MSG)
    } else if input.quit {
        (GamePhase::Quit, EXIT_MSG)
    } else if state.lives == 0 {
        (GamePhase::GameOver, GAME_OVER_MSG)
    } else {
        return GamePhase::Running;
    };

    log::info!(
        "Game ended ({:?}) after {} ticks with score {}",
        phase,
        state.time_ticks,
        state.score
    );
    display.show_message(msg.0, msg.1);
    display.end_game();
    phase
}
