//! Simulation driver
//!
//! Owns the game state together with its clock and audio capabilities. The
//! host calls [`Simulation::step`] once per display refresh and forwards
//! input as it arrives; every input is a single-field write, so ordering
//! against ticks needs no locking.

use crate::audio::{AudioSink, SoundEffect};
use crate::config::{ConfigError, Difficulty, GameConfig};
use crate::platform::Clock;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

pub struct Simulation {
    state: GameState,
    clock: Box<dyn Clock>,
    audio: Box<dyn AudioSink>,
}

impl Simulation {
    pub fn new(
        config: GameConfig,
        seed: u64,
        clock: Box<dyn Clock>,
        audio: Box<dyn AudioSink>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config, seed)?,
            clock,
            audio,
        })
    }

    /// Run one tick at the current clock time and return its events
    pub fn step(&mut self, input: &TickInput) -> &[GameEvent] {
        let now = self.clock.now_ms();
        tick(&mut self.state, input, now);
        for event in &self.state.events {
            self.audio.play(SoundEffect::for_event(event));
        }
        &self.state.events
    }

    pub fn set_player_target(&mut self, y: f32) {
        self.state.set_player_target(y);
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.set_difficulty(difficulty);
    }

    pub fn restart(&mut self) {
        self.state.restart();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }
}
