//! Demo pilot: plays the game when nobody is at the controls
//!
//! Turns toward the nearest asteroid, fires when lined up, and teleports out
//! of imminent collisions. Purely a function of the state, so runs stay
//! deterministic.

use super::collision::Circle;
use super::state::GameState;
use super::tick::TickInput;
use crate::consts::*;

/// Angle (degrees) within which the pilot considers itself lined up
const AIM_TOLERANCE: f32 = 10.0;
/// Distance at which the pilot panics and teleports (beyond touching)
const PANIC_MARGIN: f32 = 12.0;
/// Distance at which the pilot fires an orbiting burst
const BURST_RANGE: f32 = 80.0;
/// Speed the pilot cruises at
const CRUISE_SPEED: f32 = 0.75;

/// Signed difference `to - from` in degrees, in `[-180, 180)`
fn angle_delta(from: f32, to: f32) -> f32 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Pick this tick's input
pub fn steer(state: &GameState) -> TickInput {
    let ship = &state.ship;
    let ship_pos = ship.center();

    let Some(target) = state.asteroids.iter().min_by(|a, b| {
        let dist_a = a.center().distance(ship_pos);
        let dist_b = b.center().distance(ship_pos);
        dist_a
            .partial_cmp(&dist_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return TickInput::default();
    };

    let offset = target.center() - ship_pos;
    let distance = offset.length();
    let bearing = offset.y.atan2(offset.x).to_degrees();
    let delta = angle_delta(ship.direction, bearing);

    let mut input = TickInput::default();
    if distance < target.radius() + ship.radius() + PANIC_MARGIN {
        input.teleport = true;
        return input;
    }

    if delta > TURN_DEGREES / 2.0 {
        input.turn_left = true;
    } else if delta < -TURN_DEGREES / 2.0 {
        input.turn_right = true;
    }

    input.fire = delta.abs() < AIM_TOLERANCE && state.torpedoes.len() < MAX_TORPEDOS;
    input.fire_special = distance < BURST_RANGE && state.special_torpedoes.is_empty();
    input.thrust = ship.body.vel.length() < CRUISE_SPEED;
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::AsteroidSize;
    use crate::sim::body::Bounds;
    use glam::Vec2;

    fn state_with_target(target: Vec2) -> GameState {
        let mut state = GameState::with_ship(1, Bounds::default(), Vec2::ZERO);
        state.add_asteroid(target, Vec2::ZERO, AsteroidSize::Large);
        state
    }

    #[test]
    fn test_angle_delta() {
        assert_eq!(angle_delta(0.0, 90.0), 90.0);
        assert_eq!(angle_delta(0.0, -90.0), -90.0);
        assert_eq!(angle_delta(350.0, 10.0), 20.0);
        assert_eq!(angle_delta(720.0, 0.0), 0.0);
    }

    #[test]
    fn test_turns_toward_target() {
        let state = state_with_target(Vec2::new(0.0, 300.0));
        let input = steer(&state);
        assert!(input.turn_left && !input.turn_right);
        assert!(!input.fire);

        let state = state_with_target(Vec2::new(0.0, -300.0));
        let input = steer(&state);
        assert!(input.turn_right && !input.turn_left);
    }

    #[test]
    fn test_fires_when_lined_up() {
        let state = state_with_target(Vec2::new(300.0, 5.0));
        let input = steer(&state);
        assert!(input.fire);
        assert!(!input.turn_left && !input.turn_right);
        assert!(!input.fire_special);
        assert!(input.thrust);
    }

    #[test]
    fn test_bursts_at_close_range() {
        let state = state_with_target(Vec2::new(60.0, 0.0));
        assert!(steer(&state).fire_special);
    }

    #[test]
    fn test_teleports_before_impact() {
        let state = state_with_target(Vec2::new(30.0, 0.0));
        let input = steer(&state);
        assert!(input.teleport);
        assert!(!input.fire);
    }

    #[test]
    fn test_idle_without_asteroids() {
        let state = GameState::with_ship(1, Bounds::default(), Vec2::ZERO);
        assert_eq!(steer(&state), TickInput::default());
    }
}
