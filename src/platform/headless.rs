//! In-memory display surface
//!
//! Records every command the simulation issues and plays back scripted input.
//! Used by tests and by the native binary, which has no window.

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;

use super::DisplaySurface;
use crate::sim::{Bounds, TickInput};

/// One recorded call into the display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DisplayCommand {
    DrawShip { x: f32, y: f32, direction: f32 },
    DrawAsteroid { id: u32, x: f32, y: f32 },
    DrawTorpedo { id: u32, x: f32, y: f32, direction: f32 },
    RegisterAsteroid { id: u32, size: u8 },
    UnregisterAsteroid { id: u32 },
    RegisterTorpedo { id: u32 },
    UnregisterTorpedo { id: u32 },
    ShowMessage { title: String, body: String },
    SetScore(u64),
    RemoveLife,
    EndGame,
    ScheduleTick(u32),
    RefreshFrame,
}

/// Window-less [`DisplaySurface`]
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    bounds: Bounds,
    /// Recorded commands (empty when recording is off)
    pub commands: Vec<DisplayCommand>,
    recording: bool,
    /// Inputs consumed one per poll, front first
    script: VecDeque<TickInput>,
    /// Input used once the script runs dry
    held: TickInput,
    /// Input being answered during the current poll
    current: TickInput,
    /// Registered asteroids and their sizes
    pub asteroids: BTreeMap<u32, u8>,
    /// Registered torpedoes
    pub torpedoes: Vec<u32>,
    pub score: u64,
    pub lives_lost: u32,
    pub messages: Vec<(String, String)>,
    pub frames: u64,
    /// Delay of the most recent `schedule_tick`, cleared when consumed
    pub pending_tick: Option<u32>,
    pub ended: bool,
}

impl HeadlessDisplay {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
            recording: true,
            script: VecDeque::new(),
            held: TickInput::default(),
            current: TickInput::default(),
            asteroids: BTreeMap::new(),
            torpedoes: Vec::new(),
            score: 0,
            lives_lost: 0,
            messages: Vec::new(),
            frames: 0,
            pending_tick: None,
            ended: false,
        }
    }

    /// Stop keeping a command log (long runs)
    pub fn without_recording(mut self) -> Self {
        self.recording = false;
        self
    }

    /// Queue input for a single future tick
    pub fn push_input(&mut self, input: TickInput) {
        self.script.push_back(input);
    }

    /// Input answered whenever no scripted input is queued
    pub fn hold_input(&mut self, input: TickInput) {
        self.held = input;
    }

    /// Take the scheduled delay, as a timer firing would
    pub fn take_pending_tick(&mut self) -> Option<u32> {
        self.pending_tick.take()
    }

    /// Drop the command log, keeping the tracked HUD/registry state
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: DisplayCommand) {
        if self.recording {
            self.commands.push(command);
        }
    }

    fn begin_poll(&mut self) {
        self.current = self.script.pop_front().unwrap_or_else(|| self.held.clone());
    }
}

impl DisplaySurface for HeadlessDisplay {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw_ship(&mut self, x: f32, y: f32, direction: f32) {
        self.record(DisplayCommand::DrawShip { x, y, direction });
    }

    fn draw_asteroid(&mut self, id: u32, x: f32, y: f32) {
        self.record(DisplayCommand::DrawAsteroid { id, x, y });
    }

    fn draw_torpedo(&mut self, id: u32, x: f32, y: f32, direction: f32) {
        self.record(DisplayCommand::DrawTorpedo { id, x, y, direction });
    }

    fn register_asteroid(&mut self, id: u32, size: u8) {
        if self.asteroids.insert(id, size).is_some() {
            log::warn!("Asteroid {} registered twice", id);
        }
        self.record(DisplayCommand::RegisterAsteroid { id, size });
    }

    fn unregister_asteroid(&mut self, id: u32) {
        if self.asteroids.remove(&id).is_none() {
            log::warn!("Unregistering unknown asteroid {}", id);
        }
        self.record(DisplayCommand::UnregisterAsteroid { id });
    }

    fn register_torpedo(&mut self, id: u32) {
        self.torpedoes.push(id);
        self.record(DisplayCommand::RegisterTorpedo { id });
    }

    fn unregister_torpedo(&mut self, id: u32) {
        match self.torpedoes.iter().position(|&t| t == id) {
            Some(idx) => {
                self.torpedoes.remove(idx);
            }
            None => log::warn!("Unregistering unknown torpedo {}", id),
        }
        self.record(DisplayCommand::UnregisterTorpedo { id });
    }

    fn poll_input(&mut self) -> TickInput {
        self.begin_poll();
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

    fn is_thrust_pressed(&mut self) -> bool {
        self.current.thrust
    }

    fn is_left_pressed(&mut self) -> bool {
        self.current.turn_left
    }

    fn is_right_pressed(&mut self) -> bool {
        self.current.turn_right
    }

    fn is_teleport_pressed(&mut self) -> bool {
        self.current.teleport
    }

    fn is_fire_pressed(&mut self) -> bool {
        self.current.fire
    }

    fn is_special_pressed(&mut self) -> bool {
        self.current.fire_special
    }

    fn should_end(&mut self) -> bool {
        self.current.quit
    }

    fn show_message(&mut self, title: &str, body: &str) {
        log::info!("{}: {}", title, body);
        self.messages.push((title.to_string(), body.to_string()));
        self.record(DisplayCommand::ShowMessage {
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    fn set_score(&mut self, score: u64) {
        self.score = score;
        self.record(DisplayCommand::SetScore(score));
    }

    fn remove_life(&mut self) {
        self.lives_lost += 1;
        self.record(DisplayCommand::RemoveLife);
    }

    fn end_game(&mut self) {
        self.ended = true;
        self.record(DisplayCommand::EndGame);
    }

    fn schedule_tick(&mut self, delay: u32) {
        self.pending_tick = Some(delay);
        self.record(DisplayCommand::ScheduleTick(delay));
    }

    fn refresh_frame(&mut self) {
        self.frames += 1;
        self.record(DisplayCommand::RefreshFrame);
    }
}
