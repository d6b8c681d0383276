use glam::Vec2;
use rand::Rng;

use crate::{config::Config, types::Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    pub particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Scatters `count` particles uniformly over the viewport.
    ///
    /// Velocity components are drawn from `[-cfg.max_speed, cfg.max_speed)`
    /// and sizes from `[cfg.min_size, cfg.max_size)`. Degenerate ranges
    /// (zero-sized viewport, `min_size == max_size`, zero speed) collapse to
    /// their lower bound instead of panicking.
    pub fn random_in_viewport(
        count: usize,
        viewport: Viewport,
        cfg: &Config,
        rng: &mut impl Rng,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let pos = Vec2::new(
                    sample(rng, 0.0, viewport.width),
                    sample(rng, 0.0, viewport.height),
                );
                let vel = Vec2::new(
                    sample(rng, -cfg.max_speed, cfg.max_speed),
                    sample(rng, -cfg.max_speed, cfg.max_speed),
                );
                let size = sample(rng, cfg.min_size, cfg.max_size);
                Particle::new(pos, vel, size)
            })
            .collect();

        Self::from_particles(particles)
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
}

fn sample(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
