//! Per-frame simulation tick
//!
//! One tick runs per display refresh and velocities are in units per tick,
//! so game speed scales with the refresh rate. Power-up timers use `now_ms`
//! and are unaffected by the tick cadence.

use super::state::{GameState, MatchPhase};
use super::{collision, kinematics, opponent, powerup};
use crate::config::Difficulty;

/// Input commands applied at the start of a tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer/touch y position to center the player paddle on
    pub player_target: Option<f32>,
    /// Pause toggle
    pub pause: bool,
    /// Restart the match
    pub restart: bool,
    /// Switch difficulty (restarts the match)
    pub difficulty: Option<Difficulty>,
}

/// Advance the game state by one tick
///
/// Order: opponent move, ball update, power-up lifecycle, particle lifecycle.
/// Pause and game over gate the opponent and ball only; power-up timers and
/// particles keep running.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    state.events.clear();

    if let Some(difficulty) = input.difficulty {
        state.set_difficulty(difficulty);
    }
    if input.restart {
        state.restart();
    }
    if input.pause {
        state.toggle_pause();
    }
    if let Some(y) = input.player_target {
        state.set_player_target(y);
    }

    state.time_ticks += 1;

    if state.phase == MatchPhase::Playing {
        let speed = state.profile().opponent_speed;
        opponent::track(&mut state.opponent, &state.ball, &state.config, speed);

        kinematics::advance(&mut state.ball);
        collision::resolve(state, now_ms);
    }

    powerup::update_effect(state, now_ms);
    powerup::maybe_spawn(state, now_ms);
    state.particles.update(&state.config.particles);
}
