// File: crates/riemann-core/src/transform.rs
// Summary: Real <-> screen coordinate transform driven by a per-axis scale and a pan anchor.

use crate::geometry::{Axis, Vec2};

/// Maps real (mathematical) coordinates to canvas pixels.
///
/// The anchor is the real-space point drawn at the centre of the canvas. Scale is
/// pixels per real unit; `scale.y` is negative so increasing real y moves up the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub size: Vec2,
    pub scale: Vec2,
    pub anchor: Vec2,
}

impl Transform {
    pub fn new(size: Vec2, scale: Vec2, anchor: Vec2) -> Self {
        Self { size, scale, anchor }
    }

    #[inline]
    pub fn to_screen(&self, real: f64, axis: Axis) -> f64 {
        0.5 * self.size.get(axis) + self.scale.get(axis) * (real - self.anchor.get(axis))
    }

    #[inline]
    pub fn to_real(&self, screen: f64, axis: Axis) -> f64 {
        self.anchor.get(axis) + (screen - 0.5 * self.size.get(axis)) / self.scale.get(axis)
    }

    pub fn point_to_screen(&self, real: Vec2) -> Vec2 {
        Vec2::new(self.to_screen(real.x, Axis::X), self.to_screen(real.y, Axis::Y))
    }

    pub fn point_to_real(&self, screen: Vec2) -> Vec2 {
        Vec2::new(self.to_real(screen.x, Axis::X), self.to_real(screen.y, Axis::Y))
    }

    /// Real-space range covered by the canvas along `axis`, as `(low, high)`.
    pub fn visible_range(&self, axis: Axis) -> (f64, f64) {
        let a = self.to_real(0.0, axis);
        let b = self.to_real(self.size.get(axis), axis);
        (a.min(b), a.max(b))
    }
}
