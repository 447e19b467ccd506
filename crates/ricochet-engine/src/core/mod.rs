//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application driving the animation, without leaking winit or surface
//! handling into application code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
