//! GPU rendering subsystem.
//!
//! `PolygonRenderer` is the engine's GPU vertex sink: it receives the vertex
//! sequence once per tick, packs it into a GPU-compatible layout, and draws it
//! as a triangle list.
//!
//! Convention: CPU geometry is already in NDC, so the vertex shader passes
//! positions through untouched.

mod ctx;
mod packing;
mod polygon;

pub use ctx::{RenderCtx, RenderTarget};
pub use packing::{fan_indices, pack_vertices, GpuVertex, MAX_FAN_VERTICES};
pub use polygon::PolygonRenderer;
