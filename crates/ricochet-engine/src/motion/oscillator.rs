use crate::geometry::GeometryError;

use super::{ScaleBounds, ScaleRates};

/// Bounded, self-reversing scale multiplier.
///
/// `current_scale` is the product of every multiplier handed out so far
/// (starting at 1.0). The first multiplier is the shrink rate.
///
/// The bound check runs after `current_scale` is updated, so the new rate only
/// takes effect on the following tick. This one-tick lag lets the scale
/// overshoot a bound by at most one step, and fixes the oscillation period.
#[derive(Debug, Clone)]
pub struct ScaleOscillator {
    current_scale: f32,
    multiplier: f32,
    bounds: ScaleBounds,
    rates: ScaleRates,
}

impl ScaleOscillator {
    pub fn new(bounds: ScaleBounds, rates: ScaleRates) -> Result<Self, GeometryError> {
        bounds.validate()?;
        rates.validate()?;
        Ok(Self {
            current_scale: 1.0,
            multiplier: rates.shrink,
            bounds,
            rates,
        })
    }

    /// Advances one tick and returns the multiplier to apply this tick.
    pub fn tick(&mut self) -> f32 {
        let applied = self.multiplier;
        self.current_scale *= applied;

        if self.current_scale <= self.bounds.min {
            self.multiplier = self.rates.grow;
        }
        if self.current_scale >= self.bounds.max {
            self.multiplier = self.rates.shrink;
        }

        if self.multiplier != applied {
            log::debug!(
                "scale {} at {:.4}; multiplier now {}",
                if self.is_growing() { "reached min" } else { "reached max" },
                self.current_scale,
                self.multiplier,
            );
        }

        applied
    }

    #[inline]
    pub fn current_scale(&self) -> f32 {
        self.current_scale
    }

    /// Multiplier the next `tick` will hand out.
    #[inline]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    #[inline]
    pub fn is_growing(&self) -> bool {
        self.multiplier > 1.0
    }

    #[inline]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }
}
