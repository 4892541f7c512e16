//! Ball motion
//!
//! Positions are integrated once per tick with no bounds handling; the
//! collision pass owns containment.

use glam::Vec2;

use super::state::Ball;

/// Integrate one tick of motion
#[inline]
pub fn advance(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Re-derive a velocity with magnitude `speed` and the heading of `vel`.
///
/// The horizontal sign is carried explicitly: when `vx` is exactly zero the
/// result leans toward `fallback_dir` (the serving side). A zero or
/// non-finite velocity has no heading and becomes a flat serve toward
/// `fallback_dir`, so NaN never reaches the ball position.
pub fn with_speed(vel: Vec2, speed: f32, fallback_dir: f32) -> Vec2 {
    let fallback_sign = if fallback_dir < 0.0 { -1.0 } else { 1.0 };

    if !vel.is_finite() {
        log::warn!("Non-finite ball velocity {vel:?}, serving flat");
        return Vec2::new(speed * fallback_sign, 0.0);
    }
    if vel == Vec2::ZERO {
        return Vec2::new(speed * fallback_sign, 0.0);
    }

    let sign = if vel.x > 0.0 {
        1.0
    } else if vel.x < 0.0 {
        -1.0
    } else {
        fallback_sign
    };
    let angle = vel.y.atan2(vel.x);
    Vec2::new((speed * angle.cos()).abs() * sign, speed * angle.sin())
}
