//! Collision detection and response
//!
//! Contact tests are pure functions of geometry. `resolve` applies them in a
//! fixed order each tick: walls, left paddle, right paddle, power-up, then
//! out-of-bounds. Every contact clamps the ball to the surface it struck
//! before touching velocity, so the ball can neither tunnel nor stick.

use glam::Vec2;

use super::powerup;
use super::state::{Ball, GameEvent, GameState, Paddle, PowerUp, Side};
use crate::config::GameConfig;
use crate::consts::{PADDLE_SPARK_COLOR, WALL_SPARK_COLOR};

/// Axis-aligned test: the ball's leading edge has crossed the paddle face and
/// the vertical spans overlap
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle, config: &GameConfig) -> bool {
    let face = paddle.face_x(config);
    let crossed = match paddle.side {
        Side::Player => ball.pos.x <= face,
        Side::Opponent => ball.pos.x + ball.size >= face,
    };
    crossed && ball.pos.y + ball.size >= paddle.y && ball.pos.y <= paddle.y + config.paddle_height
}

/// Circle test with the ball treated as a circle of half its size
pub fn ball_hits_power_up(ball: &Ball, power_up: &PowerUp) -> bool {
    ball.center().distance(power_up.pos) < power_up.radius + ball.size / 2.0
}

/// The side that scores if the ball has fully left the field
pub fn out_of_bounds(ball: &Ball, field_width: f32) -> Option<Side> {
    if ball.pos.x < -ball.size {
        Some(Side::Opponent)
    } else if ball.pos.x > field_width + ball.size {
        Some(Side::Player)
    } else {
        None
    }
}

/// Resolve all contacts for this tick
pub fn resolve(state: &mut GameState, now_ms: f64) {
    resolve_walls(state);
    resolve_paddle(state, Side::Player);
    resolve_paddle(state, Side::Opponent);

    if let Some(power_up) = state.power_up {
        if ball_hits_power_up(&state.ball, &power_up) {
            powerup::collect(state, now_ms);
        }
    }

    if let Some(scorer) = out_of_bounds(&state.ball, state.config.field_width) {
        let exit_point = state.ball.center();
        state.award_point(scorer, exit_point);
    }
}

fn resolve_walls(state: &mut GameState) {
    let field_height = state.config.field_height;
    let half = state.ball.size / 2.0;

    if state.ball.pos.y <= 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = -state.ball.vel.y;
        let point = Vec2::new(state.ball.center().x, half);
        wall_hit(state, point);
    }
    if state.ball.pos.y + state.ball.size >= field_height {
        state.ball.pos.y = field_height - state.ball.size;
        state.ball.vel.y = -state.ball.vel.y;
        let point = Vec2::new(state.ball.center().x, field_height - half);
        wall_hit(state, point);
    }
}

fn wall_hit(state: &mut GameState, point: Vec2) {
    state.events.push(GameEvent::WallHit { point });
    let count = state.config.particles.count;
    state.particles.emit(
        &mut state.rng,
        &state.config.particles,
        point,
        WALL_SPARK_COLOR,
        count,
    );
}

fn resolve_paddle(state: &mut GameState, side: Side) {
    let paddle = *state.paddle(side);
    let config = &state.config;
    if !ball_hits_paddle(&state.ball, &paddle, config) {
        return;
    }

    let face = paddle.face_x(config);
    state.ball.pos.x = match side {
        Side::Player => face,
        Side::Opponent => face - state.ball.size,
    };

    let offset = state.ball.center().y - paddle.center_y(config);
    state.ball.vel.x *= -config.paddle_bounce;
    state.ball.vel.y += offset * config.paddle_spin;
    state.renormalize_ball();

    let point = Vec2::new(face, state.ball.center().y);
    state.events.push(GameEvent::PaddleHit { side, point });
    let count = state.config.particles.count;
    state.particles.emit(
        &mut state.rng,
        &state.config.particles,
        point,
        PADDLE_SPARK_COLOR,
        count,
    );
}
