/// Size of the drawing surface the field lives on.
///
/// The host owns resizing; the simulator only reads the current extent
/// each tick for its wall checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if `p` lies inside the closed rectangle `[0, w] x [0, h]`.
    #[cfg(test)]
    pub(crate) fn contains(&self, p: glam::Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn contains_includes_edges() {
        let vp = Viewport::new(100.0, 50.0);
        assert!(vp.contains(Vec2::new(0.0, 0.0)));
        assert!(vp.contains(Vec2::new(100.0, 50.0)));
        assert!(!vp.contains(Vec2::new(-0.1, 10.0)));
        assert!(!vp.contains(Vec2::new(10.0, 50.1)));
    }

    #[test]
    fn zero_sized_viewport_is_empty() {
        assert!(Viewport::new(0.0, 10.0).is_empty());
        assert!(!Viewport::new(1.0, 1.0).is_empty());
    }
}
