use winit::window::Window;

use crate::coords::ColorRgba;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputState;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// `'a` is the callback invocation, `'w` the window borrow held by `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears to `clear`, lets `draw` record into the frame, then presents.
    ///
    /// A frame that cannot be acquired is skipped; only an unrecoverable
    /// surface error returns [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: ColorRgba, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.acquire_frame() {
            Ok(frame) => frame,
            Err(SurfaceErrorAction::Fatal) => return AppControl::Exit,
            Err(SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame) => {
                return AppControl::Continue;
            }
        };

        frame.clear(clear);
        {
            let rctx = RenderCtx::from_gpu(self.gpu);
            let mut target = RenderTarget::from_frame(&mut frame);
            draw(&rctx, &mut target);
        }

        self.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}
