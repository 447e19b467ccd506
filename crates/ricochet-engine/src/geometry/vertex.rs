use crate::coords::{ColorRgba, Vec2};

/// One polygon corner.
///
/// Only `position` is touched by transforms; `color` travels with the vertex
/// unchanged. `None` means "use the renderer's fill color".
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Option<ColorRgba>,
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: Vec2::new(x, y), color: None }
    }

    #[inline]
    pub const fn colored(x: f32, y: f32, color: ColorRgba) -> Self {
        Self { position: Vec2::new(x, y), color: Some(color) }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.color.is_none_or(|c| c.is_finite())
    }
}

impl From<Vec2> for Vertex {
    fn from(position: Vec2) -> Self {
        Self { position, color: None }
    }
}
