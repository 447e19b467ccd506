//! Ricochet engine crate.
//!
//! Platform-independent polygon animation (geometry, motion, the transform
//! engine) plus the winit/wgpu runtime that presents it.

pub mod coords;
pub mod geometry;
pub mod motion;
pub mod engine;

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
