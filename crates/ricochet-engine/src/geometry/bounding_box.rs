use crate::coords::Vec2;

use super::GeometryError;

/// Axis-aligned bounding box with inclusive corners.
///
/// `center()` is the midpoint of the box, not the area centroid of the shape
/// it was computed from. It is the pivot used for scaling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// The normalized device coordinate viewport, `[-1, 1]` on both axes.
    pub const NDC: BoundingBox = BoundingBox::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));

    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Computes the componentwise min/max over `points`.
    ///
    /// Fails with [`GeometryError::EmptyVertexSet`] when `points` yields nothing.
    pub fn from_points<I>(points: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(GeometryError::EmptyVertexSet)?;
        Ok(Self::enclose(first, iter))
    }

    /// Smallest box containing `first` and every point in `rest`.
    pub(crate) fn enclose<I>(first: Vec2, rest: I) -> Self
    where
        I: IntoIterator<Item = Vec2>,
    {
        rest.into_iter()
            .fold(BoundingBox::new(first, first), |b, p| b.include(p))
    }

    /// Grows the box so it contains `p`.
    #[inline]
    pub fn include(self, p: Vec2) -> Self {
        BoundingBox::new(self.min.min(p), self.max.max(p))
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.min.midpoint(self.max)
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// True when `min < max` on both axes and every corner is finite.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x < self.max.x
            && self.min.y < self.max.y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::NDC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS
    }

    fn triangle() -> [Vec2; 3] {
        [Vec2::new(-0.1, -0.1), Vec2::new(0.1, -0.1), Vec2::new(0.0, 0.1)]
    }

    // ── from_points ───────────────────────────────────────────────────────

    #[test]
    fn empty_input_is_rejected() {
        let none: [Vec2; 0] = [];
        assert_eq!(BoundingBox::from_points(none), Err(GeometryError::EmptyVertexSet));
    }

    #[test]
    fn single_point_is_degenerate_box() {
        let p = Vec2::new(0.3, -0.2);
        let b = BoundingBox::from_points([p]).unwrap();
        assert_eq!(b.min, p);
        assert_eq!(b.max, p);
        assert_eq!(b.center(), p);
        assert!(!b.is_valid());
    }

    #[test]
    fn triangle_extents_and_center() {
        let b = BoundingBox::from_points(triangle()).unwrap();
        assert_eq!(b.min, Vec2::new(-0.1, -0.1));
        assert_eq!(b.max, Vec2::new(0.1, 0.1));
        assert!(close(b.center(), Vec2::zero()));
        assert!(close(b.size(), Vec2::new(0.2, 0.2)));
    }

    #[test]
    fn center_is_box_midpoint_not_area_centroid() {
        // Area centroid of this triangle is (1/3, 1/3); the box midpoint is (0.5, 0.5).
        let b = BoundingBox::from_points([
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ])
        .unwrap();
        assert!(close(b.center(), Vec2::new(0.5, 0.5)));
    }

    // ── centroid invariance ───────────────────────────────────────────────

    #[test]
    fn center_is_invariant_under_scale_about_center() {
        let points = [
            Vec2::new(0.2, 0.4),
            Vec2::new(0.7, 0.45),
            Vec2::new(0.35, 0.9),
            Vec2::new(0.25, 0.6),
        ];
        let before = BoundingBox::from_points(points).unwrap();
        let c = before.center();

        for m in [0.1_f32, 0.5, 0.99, 1.01, 3.0] {
            let scaled = points.map(|p| (p - c) * m + c);
            let after = BoundingBox::from_points(scaled).unwrap();
            assert!(close(after.center(), c), "multiplier {m}: {:?} vs {:?}", after.center(), c);
        }
    }

    // ── ndc ───────────────────────────────────────────────────────────────

    #[test]
    fn ndc_spans_unit_square() {
        assert_eq!(BoundingBox::NDC.min, Vec2::new(-1.0, -1.0));
        assert_eq!(BoundingBox::NDC.max, Vec2::new(1.0, 1.0));
        assert!(BoundingBox::NDC.is_valid());
        assert_eq!(BoundingBox::default(), BoundingBox::NDC);
    }
}
