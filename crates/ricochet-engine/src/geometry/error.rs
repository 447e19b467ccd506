use std::fmt;

/// Precondition and domain errors raised by geometry and motion types.
///
/// All of these are construction-time failures: once an engine exists, ticking
/// it cannot produce one.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    EmptyVertexSet,
    TooFewVertices { count: usize },
    NonFinite { what: &'static str },
    InvalidScaleBounds { min: f32, max: f32 },
    InvalidScaleRates { grow: f32, shrink: f32 },
    InvalidViewport,
    DivideByZero,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVertexSet => write!(f, "vertex set is empty"),
            Self::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            Self::NonFinite { what } => write!(f, "{what} is not finite"),
            Self::InvalidScaleBounds { min, max } => write!(
                f,
                "scale bounds must satisfy 0 < min < max (min = {min}, max = {max})"
            ),
            Self::InvalidScaleRates { grow, shrink } => write!(
                f,
                "scale rates must satisfy grow > 1 and 0 < shrink < 1 \
                 (grow = {grow}, shrink = {shrink})"
            ),
            Self::InvalidViewport => {
                write!(f, "viewport bounds must have min < max on both axes")
            }
            Self::DivideByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_offending_values() {
        let e = GeometryError::TooFewVertices { count: 2 };
        assert_eq!(e.to_string(), "polygon needs at least 3 vertices, got 2");

        let e = GeometryError::NonFinite { what: "direction" };
        assert_eq!(e.to_string(), "direction is not finite");
    }

    #[test]
    fn converts_into_anyhow() {
        let e: anyhow::Error = GeometryError::DivideByZero.into();
        assert_eq!(format!("{e}"), "division by zero");
    }
}
