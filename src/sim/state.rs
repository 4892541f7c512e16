//! Game state and core simulation types
//!
//! Everything a match needs lives in [`GameState`]; the tick functions operate
//! on its fields and nothing else.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::kinematics::with_speed;
use super::particles::{Particle, ParticleSystem};
use crate::config::{ConfigError, Difficulty, DifficultyProfile, GameConfig};

/// Which paddle a thing belongs to. The player defends the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Horizontal serve direction after this side scores: toward the other side
    pub fn serve_direction(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Opponent => -1.0,
        }
    }
}

/// Match state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Playing,
    Paused,
    /// Terminal until restart
    GameOver,
}

/// The ball. `pos` is the top-left corner of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A paddle; only its vertical position moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top edge
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, config: &GameConfig) -> Self {
        Self {
            side,
            y: config.centered_paddle_top(),
        }
    }

    /// Move the top edge and clamp to the field
    pub fn set_top(&mut self, y: f32, config: &GameConfig) {
        // NaN input keeps the paddle where it was
        if y.is_nan() {
            return;
        }
        self.y = y.clamp(0.0, config.max_paddle_top());
    }

    pub fn move_by(&mut self, dy: f32, config: &GameConfig) {
        self.set_top(self.y + dy, config);
    }

    pub fn center_y(&self, config: &GameConfig) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Left edge of the paddle rectangle
    pub fn x(&self, config: &GameConfig) -> f32 {
        match self.side {
            Side::Player => config.paddle_margin,
            Side::Opponent => config.field_width - config.paddle_margin - config.paddle_width,
        }
    }

    /// The x coordinate of the edge facing the field center
    pub fn face_x(&self, config: &GameConfig) -> f32 {
        match self.side {
            Side::Player => config.paddle_margin + config.paddle_width,
            Side::Opponent => self.x(config),
        }
    }
}

/// Power-up kinds. Each kind maps to one effect in `powerup::apply_effect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    SpeedBoost,
}

/// A collectible power-up, at most one on the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Center of the pickup circle
    pub pos: Vec2,
    pub radius: f32,
}

/// The effect granted by the last collected power-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    /// Ball speed multiplier that was applied
    pub multiplier: f32,
    pub activated_ms: f64,
}

/// Events emitted during a tick, for audio and presentation collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    WallHit { point: Vec2 },
    PaddleHit { side: Side, point: Vec2 },
    Score { side: Side, point: Vec2 },
    PowerUpCollected { kind: PowerUpKind },
    GameOver { winner: Side },
}

/// Complete game state (deterministic given the seed and clock samples)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub config: GameConfig,
    pub difficulty: Difficulty,
    pub phase: MatchPhase,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Set when the match ends
    pub winner: Option<Side>,
    pub ball: Ball,
    /// Speed the ball is renormalized to after every speed edit
    pub ball_speed: f32,
    /// Direction of the last serve, fallback for degenerate velocities
    pub serve_direction: f32,
    pub player: Paddle,
    pub opponent: Paddle,
    pub power_up: Option<PowerUp>,
    /// When the last power-up was collected (or the session started)
    pub last_power_up_ms: f64,
    /// Delay after `last_power_up_ms` before the next spawn
    pub respawn_delay_ms: f64,
    pub effect: Option<ActiveEffect>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: ParticleSystem,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate the config and start a fresh match
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let difficulty = config.difficulty;
        let mut rng = Pcg32::seed_from_u64(seed);
        let respawn_delay_ms = super::powerup::draw_respawn_delay(&mut rng, &config);
        let ball_speed = config.profile(difficulty).ball_speed;

        let mut state = Self {
            seed,
            rng,
            difficulty,
            phase: MatchPhase::Playing,
            player_score: 0,
            opponent_score: 0,
            winner: None,
            ball: Ball::new(config.ball_size),
            ball_speed,
            serve_direction: 1.0,
            player: Paddle::new(Side::Player, &config),
            opponent: Paddle::new(Side::Opponent, &config),
            power_up: None,
            last_power_up_ms: 0.0,
            respawn_delay_ms,
            effect: None,
            time_ticks: 0,
            particles: ParticleSystem::default(),
            events: Vec::new(),
            config,
        };
        state.reset_ball(1.0);

        log::info!(
            "New match: seed={} difficulty={} win_score={}",
            seed,
            difficulty.as_str(),
            state.config.win_score
        );
        Ok(state)
    }

    /// Active difficulty tuning
    pub fn profile(&self) -> DifficultyProfile {
        self.config.profile(self.difficulty)
    }

    pub fn base_ball_speed(&self) -> f32 {
        self.profile().ball_speed
    }

    pub fn is_paused(&self) -> bool {
        self.phase == MatchPhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Opponent => self.opponent_score,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Center the ball and serve it in `direction` (sign of vx) at the current speed
    pub fn reset_ball(&mut self, direction: f32) {
        let direction = if direction < 0.0 { -1.0 } else { 1.0 };
        let size = self.config.ball_size;
        self.ball.pos = Vec2::new(
            self.config.field_width / 2.0 - size / 2.0,
            self.config.field_height / 2.0 - size / 2.0,
        );

        let spread = self.config.serve_spread.abs();
        let angle = if spread > 0.0 {
            self.rng.random_range(-spread..spread)
        } else {
            0.0
        };
        let vertical = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel = Vec2::new(
            self.ball_speed * direction * angle.cos(),
            self.ball_speed * vertical * angle.sin().abs(),
        );
        self.serve_direction = direction;
    }

    /// Rewrite the ball velocity to `ball_speed` without changing its heading
    pub fn renormalize_ball(&mut self) {
        self.ball.vel = with_speed(self.ball.vel, self.ball_speed, self.serve_direction);
    }

    /// Read-only view for presentation collaborators
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            ball: self.ball,
            player_paddle_y: self.player.y,
            opponent_paddle_y: self.opponent.y,
            power_up: self.power_up,
            particles: self.particles.as_slice(),
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            paused: self.is_paused(),
            game_over: self.is_game_over(),
            winner: self.winner,
            difficulty: self.difficulty,
        }
    }
}

/// Per-tick read-only view of the game
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub ball: Ball,
    pub player_paddle_y: f32,
    pub opponent_paddle_y: f32,
    pub power_up: Option<PowerUp>,
    pub particles: &'a [Particle],
    pub player_score: u32,
    pub opponent_score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub winner: Option<Side>,
    pub difficulty: Difficulty,
}
