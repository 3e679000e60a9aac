//! Tick scheduling between the simulation and a display
//!
//! The display owns the timer. After every running tick the runner flushes
//! the frame and asks for the next tick; once the game is over it stops
//! asking, which is how the loop halts.

use crate::error::Result;
use crate::platform::DisplaySurface;
use crate::settings::GameSettings;
use crate::sim::{GamePhase, GameState, tick};

/// Owns a game and the display it is shown on
pub struct GameRunner<D: DisplaySurface> {
    state: GameState,
    display: D,
    tick_delay: u32,
}

impl<D: DisplaySurface> GameRunner<D> {
    /// Set up a new game on the display's playfield
    pub fn new(settings: &GameSettings, mut display: D) -> Result<Self> {
        settings.validate()?;
        let bounds = display.bounds();
        bounds.validate()?;

        let seed = settings.resolve_seed();
        let state = GameState::new(seed, bounds, settings.asteroid_count);
        state.announce(&mut display);
        log::info!(
            "Game initialized with seed {} and {} asteroids",
            seed,
            state.asteroids.len()
        );

        Ok(Self {
            state,
            display,
            tick_delay: settings.tick_delay,
        })
    }

    /// Run one tick; called by the display's timer
    pub fn step(&mut self) -> GamePhase {
        if self.state.phase.is_terminal() {
            return self.state.phase;
        }
        let phase = tick(&mut self.state, &mut self.display);
        if !phase.is_terminal() {
            self.display.refresh_frame();
            self.display.schedule_tick(self.tick_delay);
        }
        phase
    }

    /// Step until the game ends or `max_ticks` ticks have run
    pub fn run(&mut self, max_ticks: Option<u64>) -> GamePhase {
        let mut ticks = 0;
        loop {
            let phase = self.step();
            ticks += 1;
            if phase.is_terminal() || max_ticks.is_some_and(|max| ticks >= max) {
                return phase;
            }
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_parts(self) -> (GameState, D) {
        (self.state, self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::platform::{DisplayCommand, HeadlessDisplay};
    use crate::sim::{Bounds, TickInput};

    fn settings(asteroids: u32) -> GameSettings {
        GameSettings {
            asteroid_count: asteroids,
            seed: Some(2024),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_announces_entities() {
        let runner = GameRunner::new(&settings(5), HeadlessDisplay::new(Bounds::default())).unwrap();
        let display = runner.display();
        assert_eq!(display.asteroids.len(), 5);
        assert!(matches!(display.commands[0], DisplayCommand::DrawShip { .. }));
        assert!(matches!(
            display.commands[1],
            DisplayCommand::RegisterAsteroid { size: 3, .. }
        ));
        assert_eq!(runner.phase(), GamePhase::Running);
    }

    #[test]
    fn test_step_reschedules_while_running() {
        let mut runner = GameRunner::new(&settings(5), HeadlessDisplay::new(Bounds::default())).unwrap();
        assert_eq!(runner.step(), GamePhase::Running);
        let display = runner.display_mut();
        assert_eq!(display.take_pending_tick(), Some(5));
        assert_eq!(display.frames, 1);
        let tail = &display.commands[display.commands.len() - 2..];
        assert_eq!(tail, &[DisplayCommand::RefreshFrame, DisplayCommand::ScheduleTick(5)]);
    }

    #[test]
    fn test_terminal_stops_scheduling() {
        let mut runner = GameRunner::new(&settings(5), HeadlessDisplay::new(Bounds::default())).unwrap();
        runner.display_mut().push_input(TickInput {
            quit: true,
            ..Default::default()
        });
        assert_eq!(runner.step(), GamePhase::Quit);
        assert_eq!(runner.display_mut().take_pending_tick(), None);
        assert!(runner.display().ended);

        let commands = runner.display().commands.len();
        assert_eq!(runner.step(), GamePhase::Quit);
        assert_eq!(runner.display().commands.len(), commands);
    }

    #[test]
    fn test_empty_field_wins_immediately() {
        let mut runner = GameRunner::new(&settings(0), HeadlessDisplay::new(Bounds::default())).unwrap();
        assert_eq!(runner.run(None), GamePhase::Won);
        assert_eq!(runner.display().frames, 0);
    }

    #[test]
    fn test_run_respects_tick_ceiling() {
        let mut runner = GameRunner::new(&settings(5), HeadlessDisplay::new(Bounds::default())).unwrap();
        assert_eq!(runner.run(Some(3)), GamePhase::Running);
        assert_eq!(runner.state().time_ticks, 3);
        assert_eq!(runner.display().frames, 3);
    }

    #[test]
    fn test_rejects_bad_display_bounds() {
        let display = HeadlessDisplay::new(Bounds::new(0.0, 0.0, -1.0, 1.0));
        let result = GameRunner::new(&settings(5), display);
        assert!(matches!(result, Err(GameError::InvalidBounds { axis: 'x', .. })));
    }
}
