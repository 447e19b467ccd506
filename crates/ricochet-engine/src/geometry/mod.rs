//! Polygon geometry.
//!
//! Responsibilities:
//! - own the ordered vertex sequence of a shape (`Polygon`)
//! - derive axis-aligned bounds and the scale pivot (`BoundingBox`)
//! - report precondition violations as `GeometryError`

mod bounding_box;
mod error;
mod polygon;
mod vertex;

pub use bounding_box::BoundingBox;
pub use error::GeometryError;
pub use polygon::Polygon;
pub use vertex::Vertex;
