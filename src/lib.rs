//! Rally Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, power-ups, particles, match state)
//! - `config`: Static game configuration and difficulty profiles
//! - `platform`: Clock capability (system and manual time sources)
//! - `audio`: Sound cue capability consumed by the simulation driver
//! - `simulation`: Driver that owns the game state and its capabilities

pub mod audio;
pub mod config;
pub mod platform;
pub mod sim;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, Difficulty, DifficultyProfile, GameConfig};
pub use simulation::Simulation;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Playing field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle geometry, margin is the gap between the field edge and the paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball bounding box edge length
    pub const BALL_SIZE: f32 = 14.0;

    /// First side to reach this many points wins
    pub const WIN_SCORE: u32 = 5;

    /// Opponent holds position while the ball center is within this band
    pub const OPPONENT_DEAD_ZONE: f32 = 8.0;

    /// Horizontal velocity multiplier on paddle contact (sign flip applied separately)
    pub const PADDLE_BOUNCE: f32 = 1.05;
    /// Vertical velocity added per unit of offset from the paddle center
    pub const PADDLE_SPIN: f32 = 0.15;

    /// Serve angle is drawn from [-SERVE_SPREAD, SERVE_SPREAD)
    pub const SERVE_SPREAD: f32 = std::f32::consts::PI / 8.0;

    /// Difficulty profiles: (opponent speed, base ball speed), units per tick
    pub const EASY: (f32, f32) = (3.0, 5.0);
    pub const MEDIUM: (f32, f32) = (5.0, 6.0);
    pub const HARD: (f32, f32) = (8.0, 8.0);

    /// Power-up defaults
    pub const POWER_UP_RADIUS: f32 = 16.0;
    pub const POWER_UP_MARGIN_X: f32 = 100.0;
    pub const POWER_UP_MARGIN_Y: f32 = 30.0;
    pub const SPEED_BOOST_FACTOR: f32 = 1.5;
    pub const POWER_UP_DURATION_MS: f64 = 4000.0;
    pub const POWER_UP_RESPAWN_MIN_MS: f64 = 4000.0;
    pub const POWER_UP_RESPAWN_MAX_MS: f64 = 9000.0;

    /// Particle defaults
    pub const PARTICLE_COUNT: usize = 12;
    pub const SCORE_BURST_COUNT: usize = 24;
    pub const PARTICLE_MIN_SPEED: f32 = 2.0;
    pub const PARTICLE_MAX_SPEED: f32 = 5.0;
    pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
    pub const PARTICLE_MAX_RADIUS: f32 = 3.5;
    pub const PARTICLE_DRAG: f32 = 0.96;
    pub const PARTICLE_FADE: f32 = 0.92;
    pub const PARTICLE_CUTOFF: f32 = 0.05;
    pub const MAX_PARTICLES: usize = 512;

    /// Particle colors (0xRRGGBB)
    pub const WALL_SPARK_COLOR: u32 = 0x0000ff;
    pub const PADDLE_SPARK_COLOR: u32 = 0xffffff;
    pub const SCORE_BURST_COLOR: u32 = 0xffdd00;
}
