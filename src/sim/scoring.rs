//! Scoring and the match state machine
//!
//! `Playing <-> Paused` on toggle, `Playing -> GameOver` when a side reaches
//! the win score, and only `restart` leaves `GameOver`.

use glam::Vec2;

use super::state::{GameEvent, GameState, MatchPhase, Side};
use crate::config::Difficulty;
use crate::consts::SCORE_BURST_COLOR;

impl GameState {
    /// Credit `scorer` after the ball left the field at `exit_point`
    pub fn award_point(&mut self, scorer: Side, exit_point: Vec2) {
        if self.is_game_over() {
            return;
        }

        match scorer {
            Side::Player => self.player_score += 1,
            Side::Opponent => self.opponent_score += 1,
        }
        self.events.push(GameEvent::Score {
            side: scorer,
            point: exit_point,
        });
        log::debug!(
            "{:?} scores: {} - {}",
            scorer,
            self.player_score,
            self.opponent_score
        );

        if self.score(scorer) >= self.config.win_score {
            self.phase = MatchPhase::GameOver;
            self.winner = Some(scorer);
            self.events.push(GameEvent::GameOver { winner: scorer });
            log::info!(
                "Game over, {:?} wins {} - {}",
                scorer,
                self.player_score,
                self.opponent_score
            );
        }

        self.reset_ball(scorer.serve_direction());

        let count = self.config.particles.burst_count;
        self.particles.emit(
            &mut self.rng,
            &self.config.particles,
            exit_point,
            SCORE_BURST_COLOR,
            count,
        );
    }

    /// Flip between playing and paused; no effect once the match is over
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            MatchPhase::Playing => MatchPhase::Paused,
            MatchPhase::Paused => MatchPhase::Playing,
            MatchPhase::GameOver => return,
        };
        log::debug!("Pause toggled: {:?}", self.phase);
    }

    /// Reset scores, paddles and ball, cancel any boost, and serve right
    pub fn restart(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
        self.winner = None;
        let top = self.config.centered_paddle_top();
        self.player.y = top;
        self.opponent.y = top;
        self.phase = MatchPhase::Playing;
        self.effect = None;
        self.ball_speed = self.base_ball_speed();
        self.reset_ball(1.0);
        log::info!("Match restarted ({})", self.difficulty.as_str());
    }

    /// Switch difficulty; always restarts the match
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log::info!(
            "Difficulty {} -> {}",
            self.difficulty.as_str(),
            difficulty.as_str()
        );
        self.difficulty = difficulty;
        self.restart();
    }

    /// Center the player paddle on pointer position `y`. Ignored while paused
    /// or after the match ends.
    pub fn set_player_target(&mut self, y: f32) {
        if self.phase != MatchPhase::Playing {
            return;
        }
        let top = y - self.config.paddle_height / 2.0;
        self.player.set_top(top, &self.config);
    }
}
