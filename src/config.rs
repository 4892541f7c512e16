//! Game configuration and difficulty profiles
//!
//! Everything the simulation needs to know about geometry, timing and tuning
//! is injected through [`GameConfig`]. Configs are validated once, up front.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration errors, reported before a match starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("paddle height {paddle} does not fit in field height {field}")]
    PaddleTooTall { paddle: f32, field: f32 },
    #[error("paddles ({margin} margin + {width} width per side) leave no room in field width {field}")]
    PaddlesTooWide { margin: f32, width: f32, field: f32 },
    #[error("ball size {ball} does not fit in field height {field}")]
    BallTooLarge { ball: f32, field: f32 },
    #[error("win score must be at least 1")]
    ZeroWinScore,
    #[error("difficulty '{difficulty}' needs a positive finite {name}, got {value}")]
    InvalidDifficulty {
        difficulty: &'static str,
        name: &'static str,
        value: f32,
    },
    #[error("power-up respawn window [{min}, {max}] ms is invalid")]
    InvalidRespawnWindow { min: f64, max: f64 },
    #[error("power-up margins ({x}, {y}) leave no spawn area")]
    InvalidSpawnArea { x: f32, y: f32 },
    #[error("particle {name} range [{min}, {max}) is invalid")]
    InvalidParticleRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("particle {name} must be in (0, 1), got {value}")]
    InvalidParticleFactor { name: &'static str, value: f32 },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Difficulty levels selectable by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Opponent paddle step per tick
    pub opponent_speed: f32,
    /// Ball speed at serve, and the speed restored when a boost expires
    pub ball_speed: f32,
}

impl DifficultyProfile {
    const fn from_pair((opponent_speed, ball_speed): (f32, f32)) -> Self {
        Self {
            opponent_speed,
            ball_speed,
        }
    }
}

/// Named difficulty profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile::from_pair(EASY),
            medium: DifficultyProfile::from_pair(MEDIUM),
            hard: DifficultyProfile::from_pair(HARD),
        }
    }
}

impl DifficultyTable {
    pub fn get(&self, difficulty: Difficulty) -> DifficultyProfile {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Power-up spawn and effect timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpConfig {
    pub radius: f32,
    /// Horizontal inset from the field edges for spawn positions
    pub margin_x: f32,
    /// Vertical inset from the field edges for spawn positions
    pub margin_y: f32,
    /// Ball speed multiplier granted by a speed boost
    pub speed_factor: f32,
    pub duration_ms: f64,
    pub respawn_min_ms: f64,
    pub respawn_max_ms: f64,
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            radius: POWER_UP_RADIUS,
            margin_x: POWER_UP_MARGIN_X,
            margin_y: POWER_UP_MARGIN_Y,
            speed_factor: SPEED_BOOST_FACTOR,
            duration_ms: POWER_UP_DURATION_MS,
            respawn_min_ms: POWER_UP_RESPAWN_MIN_MS,
            respawn_max_ms: POWER_UP_RESPAWN_MAX_MS,
        }
    }
}

/// Particle emission and decay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles per wall/paddle hit
    pub count: usize,
    /// Particles per scoring burst
    pub burst_count: usize,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Velocity multiplier per tick
    pub drag: f32,
    /// Alpha multiplier per tick
    pub fade: f32,
    /// Particles below this alpha are removed
    pub cutoff: f32,
    /// Hard cap on live particles
    pub max_particles: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            burst_count: SCORE_BURST_COUNT,
            min_speed: PARTICLE_MIN_SPEED,
            max_speed: PARTICLE_MAX_SPEED,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
            drag: PARTICLE_DRAG,
            fade: PARTICLE_FADE,
            cutoff: PARTICLE_CUTOFF,
            max_particles: MAX_PARTICLES,
        }
    }
}

/// Complete static game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the field edge and the paddle's back edge
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub win_score: u32,
    pub opponent_dead_zone: f32,
    pub paddle_bounce: f32,
    pub paddle_spin: f32,
    pub serve_spread: f32,
    /// Difficulty used when a session starts
    pub difficulty: Difficulty,
    pub difficulties: DifficultyTable,
    pub power_up: PowerUpConfig,
    pub particles: ParticleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            ball_size: BALL_SIZE,
            win_score: WIN_SCORE,
            opponent_dead_zone: OPPONENT_DEAD_ZONE,
            paddle_bounce: PADDLE_BOUNCE,
            paddle_spin: PADDLE_SPIN,
            serve_spread: SERVE_SPREAD,
            difficulty: Difficulty::default(),
            difficulties: DifficultyTable::default(),
            power_up: PowerUpConfig::default(),
            particles: ParticleConfig::default(),
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

/// Finite `[min, max)` range with `min >= floor`
fn valid_range(min: f32, max: f32, floor: f32) -> bool {
    min.is_finite() && max.is_finite() && min >= floor && min < max
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width as f64)?;
        positive("field_height", self.field_height as f64)?;
        positive("paddle_width", self.paddle_width as f64)?;
        positive("paddle_height", self.paddle_height as f64)?;
        positive("ball_size", self.ball_size as f64)?;
        positive("paddle_bounce", self.paddle_bounce as f64)?;
        non_negative("paddle_margin", self.paddle_margin as f64)?;
        non_negative("opponent_dead_zone", self.opponent_dead_zone as f64)?;
        if !self.paddle_spin.is_finite() || !self.serve_spread.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "paddle_spin/serve_spread",
                value: f64::NAN,
            });
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size >= self.field_width {
            return Err(ConfigError::PaddlesTooWide {
                margin: self.paddle_margin,
                width: self.paddle_width,
                field: self.field_width,
            });
        }
        if self.ball_size >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                field: self.field_height,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        for difficulty in Difficulty::ALL {
            let profile = self.difficulties.get(difficulty);
            if !(profile.opponent_speed > 0.0 && profile.opponent_speed.is_finite()) {
                return Err(ConfigError::InvalidDifficulty {
                    difficulty: difficulty.as_str(),
                    name: "opponent_speed",
                    value: profile.opponent_speed,
                });
            }
            if !(profile.ball_speed > 0.0 && profile.ball_speed.is_finite()) {
                return Err(ConfigError::InvalidDifficulty {
                    difficulty: difficulty.as_str(),
                    name: "ball_speed",
                    value: profile.ball_speed,
                });
            }
        }

        let pu = &self.power_up;
        positive("power_up.radius", pu.radius as f64)?;
        positive("power_up.speed_factor", pu.speed_factor as f64)?;
        positive("power_up.duration_ms", pu.duration_ms)?;
        if !(pu.respawn_min_ms >= 0.0
            && pu.respawn_max_ms.is_finite()
            && pu.respawn_min_ms <= pu.respawn_max_ms)
        {
            return Err(ConfigError::InvalidRespawnWindow {
                min: pu.respawn_min_ms,
                max: pu.respawn_max_ms,
            });
        }
        if !(pu.margin_x >= 0.0
            && pu.margin_y >= 0.0
            && pu.margin_x.is_finite()
            && pu.margin_y.is_finite()
            && 2.0 * pu.margin_x < self.field_width
            && 2.0 * pu.margin_y < self.field_height)
        {
            return Err(ConfigError::InvalidSpawnArea {
                x: pu.margin_x,
                y: pu.margin_y,
            });
        }

        let p = &self.particles;
        if !valid_range(p.min_speed, p.max_speed, 0.0) {
            return Err(ConfigError::InvalidParticleRange {
                name: "speed",
                min: p.min_speed,
                max: p.max_speed,
            });
        }
        if !(valid_range(p.min_radius, p.max_radius, 0.0) && p.min_radius > 0.0) {
            return Err(ConfigError::InvalidParticleRange {
                name: "radius",
                min: p.min_radius,
                max: p.max_radius,
            });
        }
        for (name, value) in [("drag", p.drag), ("fade", p.fade), ("cutoff", p.cutoff)] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::InvalidParticleFactor { name, value });
            }
        }

        Ok(())
    }

    /// Profile for the given difficulty
    pub fn profile(&self, difficulty: Difficulty) -> DifficultyProfile {
        self.difficulties.get(difficulty)
    }

    /// Highest legal paddle top
    pub fn max_paddle_top(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Paddle top that centers a paddle vertically
    pub fn centered_paddle_top(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.win_score, 5);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.profile(Difficulty::Hard).ball_speed, 8.0);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str(" HARD "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("insane"), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config =
            GameConfig::from_json(r#"{ "win_score": 3, "difficulty": "hard" }"#).unwrap();
        assert_eq!(config.win_score, 3);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.power_up, PowerUpConfig::default());
    }

    #[test]
    fn test_rejects_zero_win_score() {
        let config = GameConfig {
            win_score: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWinScore)));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = GameConfig {
            field_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "field_height",
                ..
            })
        ));

        let config = GameConfig {
            ball_size: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let config = GameConfig {
            paddle_height: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_difficulty() {
        let mut config = GameConfig::default();
        config.difficulties.easy.ball_speed = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDifficulty {
                difficulty: "easy",
                name: "ball_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_respawn_window() {
        let mut config = GameConfig::default();
        config.power_up.respawn_min_ms = 10_000.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRespawnWindow { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_particle_fade() {
        let mut config = GameConfig::default();
        config.particles.fade = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParticleFactor { name: "fade", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        // 1e39 overflows f32 to infinity
        assert!(matches!(
            GameConfig::from_json(r#"{ "field_width": 1e39 }"#),
            Err(ConfigError::NonPositive {
                name: "field_width",
                ..
            })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "difficulties": { "medium": { "opponent_speed": 5.0, "ball_speed": 1e39 } } }"#),
            Err(ConfigError::InvalidDifficulty {
                difficulty: "medium",
                name: "ball_speed",
                ..
            })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "particles": { "max_speed": 1e39 } }"#),
            Err(ConfigError::InvalidParticleRange { name: "speed", .. })
        ));

        let mut config = GameConfig::default();
        config.paddle_margin = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.power_up.respawn_max_ms = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRespawnWindow { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
