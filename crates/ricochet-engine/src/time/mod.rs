//! Time subsystem.
//!
//! `TickClock` measures frame-to-frame time and decides how many engine ticks a
//! frame should run:
//! - default: exactly one tick per presented frame
//! - fixed rate: ticks at a configured frequency, independent of refresh rate
//!
//! Call `tick()` once per presented frame.

mod tick_clock;

pub use tick_clock::{FrameTime, TickClock};
