//! Coordinate and color value types shared by the engine and renderers.
//!
//! Canonical space is normalized device coordinates:
//! - both axes span [-1, 1]
//! - origin at the viewport center
//! - +X right, +Y up
//!
//! Vertices are kept in NDC on the CPU, so renderers pass positions through.

mod color;
mod vec2;

pub use color::ColorRgba;
pub use vec2::Vec2;
