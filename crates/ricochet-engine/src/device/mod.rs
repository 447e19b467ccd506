//! wgpu device and window surface.
//!
//! `Gpu` creates the device/queue, keeps the surface configured across resizes
//! and hands out one `GpuFrame` per presented frame.

mod context;
mod init;
mod surface;

pub use context::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
