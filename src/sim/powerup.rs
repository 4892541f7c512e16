//! Power-up lifecycle: spawn, collect, and effect expiry
//!
//! Timers compare `now_ms` with stored timestamps, so they stay correct no
//! matter how irregular the tick cadence is.

use glam::Vec2;
use rand::Rng;

use super::state::{ActiveEffect, GameEvent, GameState, PowerUp, PowerUpKind};
use crate::config::GameConfig;

/// Draw the delay before the next spawn, uniform in the configured window
pub fn draw_respawn_delay(rng: &mut impl Rng, config: &GameConfig) -> f64 {
    let pu = &config.power_up;
    if pu.respawn_max_ms > pu.respawn_min_ms {
        rng.random_range(pu.respawn_min_ms..=pu.respawn_max_ms)
    } else {
        pu.respawn_min_ms
    }
}

/// Spawn a power-up if none is active and the respawn delay has elapsed
pub fn maybe_spawn(state: &mut GameState, now_ms: f64) {
    if state.power_up.is_some() {
        return;
    }
    if now_ms - state.last_power_up_ms <= state.respawn_delay_ms {
        return;
    }

    let pu = &state.config.power_up;
    let x = state
        .rng
        .random_range(pu.margin_x..state.config.field_width - pu.margin_x);
    let y = state
        .rng
        .random_range(pu.margin_y..state.config.field_height - pu.margin_y);

    state.power_up = Some(PowerUp {
        kind: PowerUpKind::SpeedBoost,
        pos: Vec2::new(x, y),
        radius: pu.radius,
    });
    log::debug!("Power-up spawned at ({x:.1}, {y:.1})");
}

/// Ball touched the active power-up: apply it and free the slot
pub fn collect(state: &mut GameState, now_ms: f64) {
    let Some(power_up) = state.power_up.take() else {
        return;
    };

    apply_effect(state, power_up.kind, now_ms);
    state.last_power_up_ms = now_ms;
    state.respawn_delay_ms = draw_respawn_delay(&mut state.rng, &state.config);
    state.events.push(GameEvent::PowerUpCollected {
        kind: power_up.kind,
    });
    log::debug!(
        "Power-up {:?} collected, next spawn in {:.0} ms",
        power_up.kind,
        state.respawn_delay_ms
    );
}

/// Apply the effect of a power-up kind
pub fn apply_effect(state: &mut GameState, kind: PowerUpKind, now_ms: f64) {
    match kind {
        PowerUpKind::SpeedBoost => {
            let factor = state.config.power_up.speed_factor;
            state.ball_speed *= factor;
            state.renormalize_ball();
            state.effect = Some(ActiveEffect {
                kind,
                multiplier: factor,
                activated_ms: now_ms,
            });
        }
    }
}

/// Revert an expired effect
pub fn update_effect(state: &mut GameState, now_ms: f64) {
    let Some(effect) = state.effect else {
        return;
    };
    if now_ms - effect.activated_ms <= state.config.power_up.duration_ms {
        return;
    }

    match effect.kind {
        PowerUpKind::SpeedBoost => {
            state.ball_speed = state.base_ball_speed();
            state.renormalize_ball();
        }
    }
    state.effect = None;
    log::debug!("Power-up {:?} expired", effect.kind);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 42).unwrap()
    }

    #[test]
    fn test_respawn_delay_within_window() {
        let mut state = new_state();
        for _ in 0..100 {
            let delay = draw_respawn_delay(&mut state.rng, &state.config);
            assert!((4000.0..=9000.0).contains(&delay));
        }
    }

    #[test]
    fn test_spawn_waits_for_delay() {
        let mut state = new_state();
        let delay = state.respawn_delay_ms;

        maybe_spawn(&mut state, delay);
        assert!(state.power_up.is_none());

        maybe_spawn(&mut state, delay + 1.0);
        let power_up = state.power_up.expect("power-up should spawn");
        assert_eq!(power_up.kind, PowerUpKind::SpeedBoost);
        assert_eq!(power_up.radius, 16.0);
        assert!(power_up.pos.x >= 100.0 && power_up.pos.x < 700.0);
        assert!(power_up.pos.y >= 30.0 && power_up.pos.y < 470.0);
    }

    #[test]
    fn test_only_one_power_up_at_a_time() {
        let mut state = new_state();
        maybe_spawn(&mut state, 20_000.0);
        let first = state.power_up;
        assert!(first.is_some());
        maybe_spawn(&mut state, 40_000.0);
        assert_eq!(state.power_up, first);
    }

    #[test]
    fn test_collect_boosts_and_restarts_countdown() {
        let mut state = new_state();
        maybe_spawn(&mut state, 10_000.0);
        let base = state.base_ball_speed();

        collect(&mut state, 10_000.0);
        assert!(state.power_up.is_none());
        assert_eq!(state.last_power_up_ms, 10_000.0);
        assert!((state.ball.speed() - base * 1.5).abs() < 1e-4);
        assert_eq!(
            state.events,
            vec![GameEvent::PowerUpCollected {
                kind: PowerUpKind::SpeedBoost
            }]
        );

        // Nothing spawns before the minimum respawn delay
        maybe_spawn(&mut state, 10_000.0 + 3999.0);
        assert!(state.power_up.is_none());
        let respawn_delay_ms = state.respawn_delay_ms;
        maybe_spawn(&mut state, 10_000.0 + respawn_delay_ms + 0.5);
        assert!(state.power_up.is_some());
    }

    #[test]
    fn test_boost_expires_after_duration() {
        let mut state = new_state();
        let base = state.base_ball_speed();
        let heading = state.ball.vel.normalize();

        apply_effect(&mut state, PowerUpKind::SpeedBoost, 0.0);
        assert!((state.ball.speed() - base * 1.5).abs() < 1e-4);

        update_effect(&mut state, 4000.0);
        assert!(state.effect.is_some());
        assert!((state.ball.speed() - base * 1.5).abs() < 1e-4);

        update_effect(&mut state, 4001.0);
        assert!(state.effect.is_none());
        assert!((state.ball.speed() - base).abs() < 1e-4);
        assert!((state.ball.vel.normalize() - heading).length() < 1e-4);
    }
}
