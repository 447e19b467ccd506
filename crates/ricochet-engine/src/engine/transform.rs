use anyhow::Context;

use crate::coords::Vec2;
use crate::geometry::{BoundingBox, GeometryError, Polygon, Vertex};
use crate::motion::{BounceController, MotionConfig, ScaleOscillator};

use super::{StopSignal, VertexSink};

/// Animates one polygon: scale oscillation about its box center, directional
/// translation, and edge reflection.
///
/// The engine is the only writer of its vertices. Reads between ticks always
/// see a fully transformed state.
#[derive(Debug, Clone)]
pub struct PolygonTransformEngine {
    polygon: Polygon,
    oscillator: ScaleOscillator,
    bounce: BounceController,
    ticks: u64,
}

impl PolygonTransformEngine {
    /// Validates `config` and takes ownership of `vertices`.
    ///
    /// Fails on an empty or too-small vertex set, non-finite input, or invalid
    /// scale/viewport parameters. No engine exists after a failure.
    pub fn new(vertices: Vec<Vertex>, config: MotionConfig) -> Result<Self, GeometryError> {
        config.validate()?;
        let polygon = Polygon::new(vertices)?;
        let oscillator = ScaleOscillator::new(config.scale_bounds, config.scale_rates)?;
        let bounce = BounceController::new(config.direction, config.viewport);

        log::info!(
            "polygon engine: {} vertices, scale [{}, {}], rates grow={} shrink={}, direction {:?}",
            polygon.len(),
            config.scale_bounds.min,
            config.scale_bounds.max,
            config.scale_rates.grow,
            config.scale_rates.shrink,
            config.direction,
        );

        Ok(Self { polygon, oscillator, bounce, ticks: 0 })
    }

    /// Runs one tick and returns the updated vertices.
    ///
    /// Order matters:
    /// 1. box center of the current vertices
    /// 2. scale about that center by this tick's multiplier
    /// 3. translate by the current direction
    /// 4. reflect the direction against the new box, for the next tick
    pub fn tick(&mut self) -> &[Vertex] {
        let center = self.polygon.bounds().center();
        let multiplier = self.oscillator.tick();
        self.polygon.scale_about(center, multiplier);

        self.polygon.translate(self.bounce.translation());

        let bounds = self.polygon.bounds();
        self.bounce.reflect(bounds);

        self.ticks = self.ticks.wrapping_add(1);
        log::trace!(
            "tick {}: scale {:.4} bounds {:?}..{:?}",
            self.ticks,
            self.oscillator.current_scale(),
            bounds.min,
            bounds.max,
        );

        self.polygon.vertices()
    }

    /// Runs one tick and publishes the result to `sink`.
    pub fn advance<S>(&mut self, sink: &mut S) -> anyhow::Result<()>
    where
        S: VertexSink + ?Sized,
    {
        let tick = self.ticks.wrapping_add(1);
        let vertices = self.tick();
        sink.upload(vertices)
            .with_context(|| format!("vertex upload failed on tick {tick}"))
    }

    /// Ticks until `stop` fires. `stop` is polled before every tick.
    ///
    /// Returns the number of ticks run. A sink error ends the loop.
    pub fn run_until<S, T>(&mut self, sink: &mut S, stop: &mut T) -> anyhow::Result<u64>
    where
        S: VertexSink + ?Sized,
        T: StopSignal + ?Sized,
    {
        let mut ran = 0u64;
        while !stop.should_stop() {
            self.advance(sink)?;
            ran += 1;
        }
        log::debug!("stopped after {ran} ticks");
        Ok(ran)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        self.polygon.vertices()
    }

    #[inline]
    pub fn current_scale(&self) -> f32 {
        self.oscillator.current_scale()
    }

    /// Bounding box of the current vertices.
    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.polygon.bounds()
    }

    /// Translation the next tick will apply.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.bounce.translation()
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}
