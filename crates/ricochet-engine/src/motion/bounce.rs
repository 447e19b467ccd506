use crate::coords::Vec2;
use crate::geometry::BoundingBox;

/// Axes flipped by a single [`BounceController::reflect`] call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Per-tick translation vector that reflects off the viewport edges.
///
/// Each axis is handled independently: an axis flips only when the box
/// touches an edge on that axis *and* the direction still points past it.
/// After a flip the direction points inward, so reflecting again against the
/// same box is a no-op.
#[derive(Debug, Clone)]
pub struct BounceController {
    direction: Vec2,
    viewport: BoundingBox,
}

impl BounceController {
    #[inline]
    pub fn new(direction: Vec2, viewport: BoundingBox) -> Self {
        Self { direction, viewport }
    }

    /// Updates the direction for the next tick from the shape's current box.
    pub fn reflect(&mut self, bounds: BoundingBox) -> Reflection {
        let (vp, d) = (self.viewport, self.direction);
        let x = should_flip(d.x, bounds.min.x, bounds.max.x, vp.min.x, vp.max.x);
        let y = should_flip(d.y, bounds.min.y, bounds.max.y, vp.min.y, vp.max.y);

        if x {
            self.direction.x = -self.direction.x;
        }
        if y {
            self.direction.y = -self.direction.y;
        }

        let r = Reflection { x, y };
        if r.any() {
            log::debug!("bounce x={} y={} direction now {:?}", x, y, self.direction);
        }
        r
    }

    /// Current per-tick translation.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn viewport(&self) -> BoundingBox {
        self.viewport
    }
}

/// A box touching both edges of an axis has no inward direction; leave it be.
fn should_flip(d: f32, min: f32, max: f32, lo: f32, hi: f32) -> bool {
    let past_hi = max >= hi;
    let past_lo = min <= lo;
    match (past_lo, past_hi) {
        (false, true) => d > 0.0,
        (true, false) => d < 0.0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x0: f32, y0: f32, x1: f32, y1: f32) -> BoundingBox {
        BoundingBox::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    fn controller(dx: f32, dy: f32) -> BounceController {
        BounceController::new(Vec2::new(dx, dy), BoundingBox::NDC)
    }

    // ── reflect ───────────────────────────────────────────────────────────

    #[test]
    fn inside_viewport_never_flips() {
        let mut c = controller(0.01, -0.02);
        assert_eq!(c.reflect(bbox(-0.5, -0.5, 0.5, 0.5)), Reflection::default());
        assert_eq!(c.translation(), Vec2::new(0.01, -0.02));
    }

    #[test]
    fn right_edge_flips_x_only() {
        let mut c = controller(0.01, 0.01);
        let r = c.reflect(bbox(0.8, 0.2, 1.0, 0.4));
        assert_eq!(r, Reflection { x: true, y: false });
        assert_eq!(c.translation(), Vec2::new(-0.01, 0.01));
    }

    #[test]
    fn bottom_edge_flips_y_when_moving_down() {
        let mut c = controller(0.01, -0.01);
        let r = c.reflect(bbox(0.0, -1.05, 0.2, -0.85));
        assert_eq!(r, Reflection { x: false, y: true });
        assert_eq!(c.translation(), Vec2::new(0.01, 0.01));
    }

    #[test]
    fn edge_contact_moving_inward_does_not_flip() {
        let mut c = controller(-0.01, 0.01);
        assert!(!c.reflect(bbox(0.9, 0.0, 1.2, 0.2)).any());
        assert_eq!(c.translation(), Vec2::new(-0.01, 0.01));
    }

    #[test]
    fn corner_contact_flips_both_axes() {
        let mut c = controller(0.02, 0.03);
        let r = c.reflect(bbox(0.9, 0.9, 1.0, 1.0));
        assert_eq!(r, Reflection { x: true, y: true });
        assert_eq!(c.translation(), Vec2::new(-0.02, -0.03));
    }

    #[test]
    fn reflect_is_idempotent_for_same_box() {
        let b = bbox(0.85, 0.1, 1.01, 0.3);
        let mut c = controller(0.01, 0.01);
        assert!(c.reflect(b).x);
        assert!(!c.reflect(b).x);
        assert_eq!(c.translation(), Vec2::new(-0.01, 0.01));
    }

    #[test]
    fn box_spanning_both_edges_is_left_alone() {
        let b = bbox(-1.2, -0.1, 1.2, 0.1);
        let mut c = controller(0.01, 0.01);
        assert!(!c.reflect(b).x);
        assert!(!c.reflect(b).x);
        assert_eq!(c.translation().x, 0.01);
    }

    #[test]
    fn zero_direction_never_flips() {
        let mut c = controller(0.0, 0.0);
        assert!(!c.reflect(bbox(0.9, 0.9, 1.1, 1.1)).any());
    }

    #[test]
    fn custom_viewport_bounds_are_respected() {
        let vp = bbox(-0.5, -0.5, 0.5, 0.5);
        let mut c = BounceController::new(Vec2::new(0.01, 0.0), vp);
        assert!(c.reflect(bbox(0.3, 0.0, 0.5, 0.1)).x);
        assert_eq!(c.viewport(), vp);
    }
}
