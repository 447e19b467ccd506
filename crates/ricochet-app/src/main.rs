mod config;

use anyhow::Context;

use ricochet_engine::coords::ColorRgba;
use ricochet_engine::core::{App, AppControl, FrameCtx};
use ricochet_engine::engine::PolygonTransformEngine;
use ricochet_engine::logging::init_logging;
use ricochet_engine::render::PolygonRenderer;
use ricochet_engine::window::Runtime;

use crate::config::AppConfig;

/// Drives the transform engine once per scheduled tick and draws the result.
struct BounceApp {
    engine: PolygonTransformEngine,
    renderer: PolygonRenderer,
    clear: ColorRgba,
}

impl App for BounceApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.wants_close() {
            log::info!("escape pressed");
            return AppControl::Exit;
        }

        for _ in 0..ctx.time.ticks_due {
            if let Err(err) = self.engine.advance(&mut self.renderer) {
                log::error!("{err:#}");
                return AppControl::Exit;
            }
        }

        let renderer = &mut self.renderer;
        ctx.render(self.clear, |rctx, target| renderer.render(rctx, target))
    }

    fn on_exit(&mut self) {
        log::info!(
            "stopped after {} ticks at scale {:.4}",
            self.engine.tick_count(),
            self.engine.current_scale()
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::default();
    init_logging(cfg.logging.clone());

    let engine = PolygonTransformEngine::new(cfg.vertices, cfg.motion)
        .context("invalid initial polygon or motion config")?;

    let app = BounceApp {
        engine,
        renderer: PolygonRenderer::new(cfg.fill),
        clear: cfg.clear,
    };

    Runtime::run(cfg.runtime, cfg.gpu, app)
}
