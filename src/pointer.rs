// Pointer tracking in surface-local coordinates.
// Visual: with no pointer over the surface every dot shows its base color.

use std::cell::Cell;

use crate::types::{Bounds, Point};

/// "No pointer" position: far enough off-surface that no proximity radius reaches it.
pub const SENTINEL: Point = Point::new(-10_000.0, -10_000.0);

#[derive(Debug)]
pub struct PointerTracker {
    position: Cell<Point>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { position: Cell::new(SENTINEL) }
    }

    /// Latest local position, or [`SENTINEL`].
    #[inline]
    pub fn position(&self) -> Point {
        self.position.get()
    }

    /// Translate viewport coordinates into the surface's local space.
    pub fn move_to(&self, client_x: f32, client_y: f32, surface: Bounds) {
        // both coordinates land in one store
        self.position.set(Point::new(client_x - surface.x, client_y - surface.y));
    }

    pub fn leave(&self) {
        self.position.set(SENTINEL);
    }

    /// False while the pointer sits at [`SENTINEL`].
    pub fn is_present(&self) -> bool {
        self.position.get() != SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_sentinel() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.position(), SENTINEL);
        assert!(!tracker.is_present());
    }

    #[test]
    fn subtracts_surface_origin() {
        let tracker = PointerTracker::new();
        tracker.move_to(150.0, 80.0, Bounds::new(100.0, 50.0, 400.0, 300.0));
        assert_eq!(tracker.position(), Point::new(50.0, 30.0));
        assert!(tracker.is_present());

        // scrolled container (origin above the viewport)
        tracker.move_to(10.0, 10.0, Bounds::new(0.0, -200.0, 400.0, 900.0));
        assert_eq!(tracker.position(), Point::new(10.0, 210.0));
    }

    #[test]
    fn leave_resets_to_sentinel() {
        let tracker = PointerTracker::new();
        tracker.move_to(1.0, 2.0, Bounds::default());
        tracker.leave();
        assert_eq!(tracker.position(), SENTINEL);
    }

    #[test]
    fn sentinel_is_outside_any_plausible_radius() {
        let corner = Point::new(0.0, 0.0);
        let radius = 120.0_f32;
        assert!(SENTINEL.distance_squared(corner) > radius * radius * 1000.0);
    }
}
