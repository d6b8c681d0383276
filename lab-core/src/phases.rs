//! Per-frame update phases for the particle field.
//!
//! One tick runs, in order:
//! 1. [`integrate_phase`] — every particle moves by its velocity.
//! 2. [`bounce_phase`] — particles outside the viewport and moving further
//!    out have the offending velocity component reflected.
//! 3. [`repel_phase`] — if a pointer is present, particles inside the
//!    interaction radius are pushed directly away from it.
//!
//! Particles never interact with each other, so running each phase over the
//! whole set gives the same result as running all three per particle.

use glam::Vec2;

use crate::{config::Config, particle::ParticleSet, types::Viewport};

/// Moves every particle by its velocity (`pos += vel`).
pub fn integrate_phase(set: &mut ParticleSet) {
    for p in &mut set.particles {
        p.pos += p.vel;
    }
}

/// Reflects velocity on any axis where the particle is outside the viewport
/// and still heading away from it.
///
/// This is a plain sign flip: positions are not clamped, so a particle can
/// sit just past a wall for a frame before its new velocity brings it back.
/// The check is strict, a particle exactly on the wall keeps its velocity.
/// A particle outside but already moving inward (e.g. after the pointer
/// pushed it through a wall) is left alone so it can return.
///
/// ### Parameters
/// - `set` - Particles to check; only `vel` is modified.
/// - `viewport` - Current surface extent, read fresh every tick.
pub fn bounce_phase(set: &mut ParticleSet, viewport: Viewport) {
    for p in &mut set.particles {
        if (p.pos.x < 0.0 && p.vel.x < 0.0) || (p.pos.x > viewport.width && p.vel.x > 0.0) {
            p.vel.x = -p.vel.x;
        }
        if (p.pos.y < 0.0 && p.vel.y < 0.0) || (p.pos.y > viewport.height && p.vel.y > 0.0) {
            p.vel.y = -p.vel.y;
        }
    }
}

/// Pushes particles near the pointer away from it.
///
/// For each particle with `|pos - pointer| < cfg.pointer_radius`, the
/// position moves `cfg.repel_step` units along the normalized displacement
/// from the pointer. This is a per-frame displacement, not an impulse:
/// velocity is untouched and the push repeats every frame the particle
/// stays inside the radius.
///
/// A particle exactly on the pointer has no direction to be pushed in and
/// is left where it is.
///
/// ### Returns
/// The number of particles that were displaced.
pub fn repel_phase(set: &mut ParticleSet, pointer: Vec2, cfg: &Config) -> usize {
    let mut displaced = 0;
    for p in &mut set.particles {
        let d = p.pos - pointer;
        let dist = d.length();
        if dist >= cfg.pointer_radius {
            continue;
        }
        if dist == 0.0 {
            tracing::trace!(x = p.pos.x, y = p.pos.y, "particle on pointer, not repelled");
            continue;
        }
        p.pos += d / dist * cfg.repel_step;
        displaced += 1;
    }
    displaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    fn single(pos: Vec2, vel: Vec2) -> ParticleSet {
        ParticleSet::from_particles(vec![Particle::new(pos, vel, 1.0)])
    }

    #[test]
    fn integrate_phase_adds_velocity() {
        let mut set = single(Vec2::new(1.0, 1.0), Vec2::new(0.25, -0.5));
        integrate_phase(&mut set);
        assert_eq!(set.particles[0].pos, Vec2::new(1.25, 0.5));
    }

    #[test]
    fn bounce_phase_reflects_only_the_offending_axis() {
        let vp = Viewport::new(100.0, 100.0);
        let mut set = ParticleSet::from_particles(vec![
            Particle::new(Vec2::new(-0.1, 50.0), Vec2::new(-0.2, 0.1), 1.0),
            Particle::new(Vec2::new(50.0, 100.2), Vec2::new(0.1, 0.3), 1.0),
            Particle::new(Vec2::new(50.0, 50.0), Vec2::new(0.1, 0.1), 1.0),
        ]);

        bounce_phase(&mut set, vp);

        assert_eq!(set.particles[0].vel, Vec2::new(0.2, 0.1));
        assert_eq!(set.particles[1].vel, Vec2::new(0.1, -0.3));
        assert_eq!(set.particles[2].vel, Vec2::new(0.1, 0.1));
    }

    #[test]
    fn bounce_phase_does_not_clamp_position() {
        let mut set = single(Vec2::new(101.0, 10.0), Vec2::new(0.3, 0.0));
        bounce_phase(&mut set, Viewport::new(100.0, 100.0));
        assert_eq!(set.particles[0].pos, Vec2::new(101.0, 10.0));
        assert_eq!(set.particles[0].vel.x, -0.3);
    }

    #[test]
    fn particle_on_the_wall_keeps_its_velocity() {
        let mut set = single(Vec2::new(100.0, 0.0), Vec2::new(0.3, -0.3));
        bounce_phase(&mut set, Viewport::new(100.0, 100.0));
        assert_eq!(set.particles[0].vel, Vec2::new(0.3, -0.3));
    }

    #[test]
    fn bounce_phase_leaves_inbound_particles_alone() {
        let vp = Viewport::new(100.0, 100.0);
        let mut set = ParticleSet::from_particles(vec![
            Particle::new(Vec2::new(-30.0, 50.0), Vec2::new(0.2, 0.1), 1.0),
            Particle::new(Vec2::new(50.0, 140.0), Vec2::new(0.1, -0.3), 1.0),
        ]);

        for _ in 0..3 {
            integrate_phase(&mut set);
            bounce_phase(&mut set, vp);
        }

        assert_eq!(set.particles[0].vel, Vec2::new(0.2, 0.1));
        assert_eq!(set.particles[1].vel, Vec2::new(0.1, -0.3));
        assert!(set.particles[0].pos.x > -30.0);
        assert!(set.particles[1].pos.y < 140.0);
    }

    #[test]
    fn repel_phase_pushes_away_from_pointer() {
        let cfg = Config::default();
        let mut set = single(Vec2::new(10.0, 0.0), Vec2::ZERO);

        let n = repel_phase(&mut set, Vec2::ZERO, &cfg);

        assert_eq!(n, 1);
        assert_eq!(set.particles[0].pos, Vec2::new(12.0, 0.0));
        assert_eq!(set.particles[0].vel, Vec2::ZERO);
    }

    #[test]
    fn repel_phase_ignores_particles_at_or_beyond_radius() {
        let cfg = Config::default();
        let mut set = ParticleSet::from_particles(vec![
            Particle::new(Vec2::new(120.0, 0.0), Vec2::ZERO, 1.0),
            Particle::new(Vec2::new(0.0, 500.0), Vec2::ZERO, 1.0),
        ]);

        let n = repel_phase(&mut set, Vec2::ZERO, &cfg);

        assert_eq!(n, 0);
        assert_eq!(set.particles[0].pos, Vec2::new(120.0, 0.0));
        assert_eq!(set.particles[1].pos, Vec2::new(0.0, 500.0));
    }

    #[test]
    fn repel_phase_compounds_across_frames() {
        let cfg = Config::default();
        let mut set = single(Vec2::new(0.0, 3.0), Vec2::ZERO);

        for _ in 0..5 {
            repel_phase(&mut set, Vec2::ZERO, &cfg);
        }

        assert_eq!(set.particles[0].pos, Vec2::new(0.0, 13.0));
    }

    #[test]
    fn repel_phase_skips_coincident_particle() {
        let cfg = Config::default();
        let pointer = Vec2::new(5.0, 5.0);
        let mut set = single(pointer, Vec2::ZERO);

        let n = repel_phase(&mut set, pointer, &cfg);

        assert_eq!(n, 0);
        assert_eq!(set.particles[0].pos, pointer);
        assert!(!set.particles[0].pos.is_nan());
    }
}
