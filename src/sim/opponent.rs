//! Scripted opponent paddle
//!
//! A fixed-step tracker with a dead zone. No prediction and no noise, so it
//! loses to sharp angles and fast balls; difficulty only changes the step.

use super::state::{Ball, Paddle};
use crate::config::GameConfig;

/// Step `paddle` toward the ball's vertical center by at most `speed`
pub fn track(paddle: &mut Paddle, ball: &Ball, config: &GameConfig, speed: f32) {
    let paddle_center = paddle.center_y(config);
    let ball_center = ball.center().y;
    let dead_zone = config.opponent_dead_zone;

    if ball_center < paddle_center - dead_zone {
        paddle.move_by(-speed, config);
    } else if ball_center > paddle_center + dead_zone {
        paddle.move_by(speed, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::Vec2;
    use proptest::prelude::*;

    fn setup(ball_center_y: f32) -> (Paddle, Ball, GameConfig) {
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Opponent, &config);
        let mut ball = Ball::new(config.ball_size);
        ball.pos = Vec2::new(400.0, ball_center_y - config.ball_size / 2.0);
        (paddle, ball, config)
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        // Paddle center is 250
        let (mut paddle, ball, config) = setup(257.0);
        let before = paddle.y;
        track(&mut paddle, &ball, &config, 5.0);
        assert_eq!(paddle.y, before);

        let (mut paddle, ball, config) = setup(242.0);
        track(&mut paddle, &ball, &config, 5.0);
        assert_eq!(paddle.y, before);
    }

    #[test]
    fn test_steps_toward_ball() {
        let (mut paddle, ball, config) = setup(100.0);
        let before = paddle.y;
        track(&mut paddle, &ball, &config, 5.0);
        assert_eq!(paddle.y, before - 5.0);

        let (mut paddle, ball, config) = setup(400.0);
        track(&mut paddle, &ball, &config, 8.0);
        assert_eq!(paddle.y, before + 8.0);
    }

    #[test]
    fn test_stops_at_field_edge() {
        let (mut paddle, ball, config) = setup(0.0);
        for _ in 0..200 {
            track(&mut paddle, &ball, &config, 5.0);
        }
        assert_eq!(paddle.y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_tracking_stays_in_bounds(
            start in -100.0f32..700.0,
            ball_y in -100.0f32..700.0,
            speed in 0.1f32..60.0,
            steps in 1usize..50,
        ) {
            let (mut paddle, mut ball, config) = setup(0.0);
            paddle.set_top(start, &config);
            ball.pos.y = ball_y;
            for _ in 0..steps {
                track(&mut paddle, &ball, &config, speed);
                prop_assert!(paddle.y >= 0.0 && paddle.y <= config.max_paddle_top());
            }
        }
    }
}
