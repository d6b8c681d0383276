use std::sync::Arc;

use rand::Rng;

use crate::{
    config::Config,
    particle::ParticleSet,
    phases,
    pointer::SharedPointer,
    types::Viewport,
};

/// What happened during one [`ParticleField::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Whether a pointer position was present for this tick.
    pub pointer_present: bool,
    /// Particles pushed away from the pointer this tick.
    pub displaced: usize,
}

/// The particle background: its particles, its tunables and the pointer record.
///
/// Nothing lives in globals. The host creates one field, calls
/// [`ParticleField::initialize`] once it knows the surface size, forwards
/// pointer events through [`ParticleField::pointer`], and calls
/// [`ParticleField::tick`] once per frame followed by
/// [`crate::render::render`].
#[derive(Debug)]
pub struct ParticleField {
    particles: ParticleSet,
    cfg: Config,
    pointer: Arc<SharedPointer>,
}

impl ParticleField {
    /// Creates an empty field; call [`ParticleField::initialize`] or
    /// [`ParticleField::reset`] to populate it.
    pub fn new(cfg: Config) -> Self {
        Self {
            particles: ParticleSet::default(),
            cfg,
            pointer: Arc::new(SharedPointer::new()),
        }
    }

    /// Replaces the whole collection with `count` fresh random particles.
    pub fn initialize(&mut self, count: usize, viewport: Viewport, rng: &mut impl Rng) {
        self.particles = ParticleSet::random_in_viewport(count, viewport, &self.cfg, rng);
        tracing::debug!(
            count,
            width = viewport.width,
            height = viewport.height,
            "particle field initialized"
        );
    }

    /// [`ParticleField::initialize`] with the configured particle count.
    pub fn reset(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.initialize(self.cfg.particle_count, viewport, rng);
    }

    /// Advances the field by one frame.
    ///
    /// The pointer is read once, so every particle in this tick sees the
    /// same position even if input arrives mid-frame.
    ///
    /// ### Parameters
    /// - `viewport` - Current surface extent used for the wall checks.
    pub fn tick(&mut self, viewport: Viewport) -> TickStats {
        let pointer = self.pointer.load();

        phases::integrate_phase(&mut self.particles);
        phases::bounce_phase(&mut self.particles, viewport);
        let displaced = match pointer {
            Some(at) => phases::repel_phase(&mut self.particles, at, &self.cfg),
            None => 0,
        };

        TickStats {
            pointer_present: pointer.is_some(),
            displaced,
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn pointer(&self) -> &SharedPointer {
        &self.pointer
    }

    /// A handle for a host that delivers pointer events from another thread.
    pub fn pointer_handle(&self) -> Arc<SharedPointer> {
        Arc::clone(&self.pointer)
    }
}
