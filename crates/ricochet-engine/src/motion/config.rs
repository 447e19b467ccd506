use crate::coords::Vec2;
use crate::geometry::{BoundingBox, GeometryError};

/// Closed band the cumulative scale oscillates in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleBounds {
    pub min: f32,
    pub max: f32,
}

impl ScaleBounds {
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Requires `0 < min < max`, both finite.
    pub fn validate(self) -> Result<(), GeometryError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min < self.max;
        if ok {
            Ok(())
        } else {
            Err(GeometryError::InvalidScaleBounds { min: self.min, max: self.max })
        }
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}

/// Per-tick multipliers used while growing and while shrinking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleRates {
    pub grow: f32,
    pub shrink: f32,
}

impl ScaleRates {
    #[inline]
    pub const fn new(grow: f32, shrink: f32) -> Self {
        Self { grow, shrink }
    }

    /// Requires `grow > 1` and `0 < shrink < 1`, both finite.
    pub fn validate(self) -> Result<(), GeometryError> {
        let ok = self.grow.is_finite()
            && self.shrink.is_finite()
            && self.grow > 1.0
            && self.shrink > 0.0
            && self.shrink < 1.0;
        if ok {
            Ok(())
        } else {
            Err(GeometryError::InvalidScaleRates { grow: self.grow, shrink: self.shrink })
        }
    }
}

impl Default for ScaleRates {
    fn default() -> Self {
        Self::new(1.001, 0.999)
    }
}

/// Motion parameters for one polygon.
///
/// Defaults: scale band `[0.5, 1.0]`, rates `1.001 / 0.999`, direction
/// `(0.01, 0.01)` per tick, NDC viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionConfig {
    pub scale_bounds: ScaleBounds,
    pub scale_rates: ScaleRates,

    /// Translation applied per tick before any reflection.
    pub direction: Vec2,

    /// Edges the shape bounces off.
    pub viewport: BoundingBox,
}

impl MotionConfig {
    pub fn with_scale_bounds(mut self, min: f32, max: f32) -> Self {
        self.scale_bounds = ScaleBounds::new(min, max);
        self
    }

    pub fn with_scale_rates(mut self, grow: f32, shrink: f32) -> Self {
        self.scale_rates = ScaleRates::new(grow, shrink);
        self
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_viewport(mut self, viewport: BoundingBox) -> Self {
        self.viewport = viewport;
        self
    }

    /// Checks every construction precondition.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.scale_bounds.validate()?;
        self.scale_rates.validate()?;
        if !self.direction.is_finite() {
            return Err(GeometryError::NonFinite { what: "direction" });
        }
        if !self.viewport.is_valid() {
            return Err(GeometryError::InvalidViewport);
        }
        Ok(())
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scale_bounds: ScaleBounds::default(),
            scale_rates: ScaleRates::default(),
            direction: Vec2::new(0.01, 0.01),
            viewport: BoundingBox::NDC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(MotionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_min_scale_is_rejected() {
        let cfg = MotionConfig::default().with_scale_bounds(0.0, 1.0);
        assert_eq!(cfg.validate(), Err(GeometryError::InvalidScaleBounds { min: 0.0, max: 1.0 }));
    }

    #[test]
    fn inverted_scale_bounds_are_rejected() {
        assert!(ScaleBounds::new(1.0, 0.5).validate().is_err());
        assert!(ScaleBounds::new(0.5, 0.5).validate().is_err());
        assert!(ScaleBounds::new(-0.5, 1.0).validate().is_err());
    }

    #[test]
    fn rates_must_straddle_one() {
        assert!(ScaleRates::new(1.01, 0.99).validate().is_ok());
        assert!(ScaleRates::new(1.0, 0.99).validate().is_err());
        assert!(ScaleRates::new(1.01, 1.0).validate().is_err());
        assert!(ScaleRates::new(1.01, 0.0).validate().is_err());
        assert!(ScaleRates::new(f32::INFINITY, 0.5).validate().is_err());
    }

    #[test]
    fn non_finite_direction_is_rejected() {
        let cfg = MotionConfig::default().with_direction(Vec2::new(f32::NAN, 0.0));
        assert_eq!(cfg.validate(), Err(GeometryError::NonFinite { what: "direction" }));
    }

    #[test]
    fn degenerate_viewport_is_rejected() {
        let flat = BoundingBox::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let cfg = MotionConfig::default().with_viewport(flat);
        assert_eq!(cfg.validate(), Err(GeometryError::InvalidViewport));
    }
}
