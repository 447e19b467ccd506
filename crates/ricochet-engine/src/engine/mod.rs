//! Polygon transform engine.
//!
//! One `PolygonTransformEngine` exclusively owns one polygon. Each tick runs to
//! completion before anything else can observe the vertices:
//! scale about the box center, translate, reflect, publish.
//!
//! The engine talks to the outside world through two small traits so it can be
//! driven by the windowed runtime or headless in tests:
//! - `VertexSink` receives the finished vertex sequence once per tick
//! - `StopSignal` is polled between ticks, never inside one

mod signal;
mod transform;

pub use signal::{StopSignal, TickLimit, VertexSink};
pub use transform::PolygonTransformEngine;
