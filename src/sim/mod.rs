//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display refresh, velocities in units per tick
//! - Seeded RNG only
//! - Time enters only as the `now_ms` argument to `tick`
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod kinematics;
pub mod opponent;
pub mod particles;
pub mod powerup;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_paddle, ball_hits_power_up, out_of_bounds};
pub use kinematics::{advance, with_speed};
pub use particles::{Particle, ParticleSystem};
pub use state::{
    ActiveEffect, Ball, GameEvent, GameState, MatchPhase, Paddle, PowerUp, PowerUpKind, Side,
    Snapshot,
};
pub use tick::{TickInput, tick};
