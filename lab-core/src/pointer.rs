use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;

/// Bit pattern meaning "no pointer". Both halves are NaN payloads, which a
/// stored position can never produce because NaN positions are rejected.
const ABSENT: u64 = u64::MAX;

/// Latest pointer position, shared between input delivery and the frame update.
///
/// Both coordinates are packed into a single [`AtomicU64`], so every
/// write is one atomic swap. A reader on another thread sees either the
/// previous position, the new position, or "absent", never an `x` from
/// one event paired with a `y` from another.
///
/// The interaction radius is not stored here; it is a fixed value in
/// [`crate::config::Config::pointer_radius`].
#[derive(Debug)]
pub struct SharedPointer {
    bits: AtomicU64,
}

impl Default for SharedPointer {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedPointer {
    /// Creates a pointer record with no position.
    pub fn new() -> Self {
        Self {
            bits: AtomicU64::new(ABSENT),
        }
    }

    /// Stores a new pointer position.
    ///
    /// A position with a NaN coordinate is stored as absent.
    ///
    /// ### Parameters
    /// - `pos` - Pointer position in viewport coordinates.
    pub fn set(&self, pos: Vec2) {
        let bits = if pos.is_nan() { ABSENT } else { pack(pos) };
        self.bits.store(bits, Ordering::Release);
    }

    /// Forgets the pointer position (pointer left the surface).
    pub fn clear(&self) {
        self.bits.store(ABSENT, Ordering::Release);
    }

    /// Returns a consistent snapshot of the pointer position, if any.
    pub fn load(&self) -> Option<Vec2> {
        let bits = self.bits.load(Ordering::Acquire);
        (bits != ABSENT).then(|| unpack(bits))
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.load().is_some()
    }
}

#[inline]
fn pack(pos: Vec2) -> u64 {
    (u64::from(pos.x.to_bits()) << 32) | u64::from(pos.y.to_bits())
}

#[inline]
fn unpack(bits: u64) -> Vec2 {
    Vec2::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn new_pointer_is_absent() {
        let p = SharedPointer::new();
        assert_eq!(p.load(), None);
        assert!(!p.is_present());
    }

    #[test]
    fn set_then_load_returns_same_position() {
        let p = SharedPointer::new();
        p.set(Vec2::new(12.5, -3.0));
        assert_eq!(p.load(), Some(Vec2::new(12.5, -3.0)));
    }

    #[test]
    fn origin_is_a_present_position() {
        // x == 0 is a real pointer position, not "no pointer".
        let p = SharedPointer::new();
        p.set(Vec2::ZERO);
        assert_eq!(p.load(), Some(Vec2::ZERO));
    }

    #[test]
    fn clear_forgets_position() {
        let p = SharedPointer::new();
        p.set(Vec2::new(1.0, 2.0));
        p.clear();
        assert_eq!(p.load(), None);
    }

    #[test]
    fn nan_position_is_stored_as_absent() {
        let p = SharedPointer::new();
        p.set(Vec2::new(f32::NAN, 4.0));
        assert_eq!(p.load(), None);
    }

    #[test]
    fn readers_never_see_torn_positions() {
        let p = Arc::new(SharedPointer::new());
        let writer = {
            let p = Arc::clone(&p);
            std::thread::spawn(move || {
                for i in 0..10_000 {
                    let v = i as f32;
                    p.set(Vec2::new(v, v));
                }
            })
        };

        for _ in 0..10_000 {
            if let Some(pos) = p.load() {
                assert_eq!(pos.x, pos.y);
            }
        }
        writer.join().unwrap();
    }
}
