//! Drawing contract between the field and whatever surface hosts it.
//!
//! [`render`] only borrows the field, so drawing can never change
//! simulation state and [`crate::field::ParticleField::tick`] can be tested
//! without any surface at all.

use glam::Vec2;

use crate::{field::ParticleField, types::Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Sky blue at 70% opacity.
pub const PARTICLE_COLOR: Rgba = Rgba::new(56, 189, 248, 179);

/// A 2D surface the field can be drawn onto.
pub trait Canvas {
    /// Wipes the visible area before a new frame.
    fn clear(&mut self, viewport: Viewport);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Clears the canvas and draws every particle as a filled circle.
pub fn render(field: &ParticleField, viewport: Viewport, canvas: &mut impl Canvas) {
    canvas.clear(viewport);
    for p in field.particles().iter() {
        canvas.fill_circle(p.pos, p.size, PARTICLE_COLOR);
    }
}
