use crate::coords::Vec2;

use super::{BoundingBox, GeometryError, Vertex};

/// Ordered, fixed-size vertex sequence of a single shape.
///
/// Invariants:
/// - at least [`Polygon::MIN_VERTICES`] vertices, all finite at construction
/// - vertex count and order never change after construction
/// - transforms only write `position`; per-vertex attributes are left alone
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(vertices: Vec<Vertex>) -> Result<Self, GeometryError> {
        match vertices.len() {
            0 => return Err(GeometryError::EmptyVertexSet),
            n if n < Self::MIN_VERTICES => return Err(GeometryError::TooFewVertices { count: n }),
            _ => {}
        }
        if !vertices.iter().all(Vertex::is_finite) {
            return Err(GeometryError::NonFinite { what: "vertex" });
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of the current vertex positions.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn bounds(&self) -> BoundingBox {
        // Never empty: `new` rejects fewer than three vertices.
        BoundingBox::enclose(
            self.vertices[0].position,
            self.vertices[1..].iter().map(|v| v.position),
        )
    }

    /// Scales every position by `multiplier` around `pivot`.
    ///
    /// Per vertex: move to pivot-relative space, scale, move back. The pivot
    /// itself does not move.
    pub fn scale_about(&mut self, pivot: Vec2, multiplier: f32) {
        for v in &mut self.vertices {
            v.position -= pivot;
            v.position = v.position * multiplier;
            v.position += pivot;
        }
    }

    /// Shifts every position by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            v.position += delta;
        }
    }
}
