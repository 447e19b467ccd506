//! Per-tick motion state.
//!
//! Two independent pieces of state drive a shape each tick:
//! - `ScaleOscillator`: a multiplier that shrinks then grows the shape forever
//! - `BounceController`: a direction vector reflected at the viewport edges
//!
//! Both are plain state machines with no knowledge of vertices; the transform
//! engine combines them.

mod bounce;
mod config;
mod oscillator;

pub use bounce::{BounceController, Reflection};
pub use config::{MotionConfig, ScaleBounds, ScaleRates};
pub use oscillator::ScaleOscillator;
