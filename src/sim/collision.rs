//! Circle-vs-circle overlap tests
//!
//! Every entity collides as a circle; positions are compared directly
//! (no wraparound distance, matching how entities are drawn).

use glam::Vec2;

/// Anything with a circular collision footprint
pub trait Circle {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
}

/// True iff the centers are no farther apart than the sum of the radii
#[inline]
pub fn has_intersection(a: &impl Circle, b: &impl Circle) -> bool {
    a.center().distance(b.center()) <= a.radius() + b.radius()
}
