//! Cosmetic particle bursts
//!
//! Particles never feed back into gameplay. Alpha decays geometrically, so
//! every particle is gone after a bounded number of updates.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ParticleConfig;

/// A particle for visual effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at emission, multiplied by the fade factor each tick
    pub alpha: f32,
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Unordered set of live particles
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Emit `count` particles from `origin` in random directions.
    /// Stops early once the configured cap is reached.
    pub fn emit(
        &mut self,
        rng: &mut impl Rng,
        config: &ParticleConfig,
        origin: Vec2,
        color: u32,
        count: usize,
    ) {
        let room = config.max_particles.saturating_sub(self.particles.len());
        for _ in 0..count.min(room) {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(config.min_speed..config.max_speed);
            let radius = rng.random_range(config.min_radius..config.max_radius);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                alpha: 1.0,
                radius,
                color,
            });
        }
    }

    /// Move, drag, fade, and drop particles that faded out
    pub fn update(&mut self, config: &ParticleConfig) {
        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel *= config.drag;
            p.alpha *= config.fade;
            p.alpha >= config.cutoff
        });
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}
