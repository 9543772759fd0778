//! Crate-level error types.

use std::fmt;

/// Errors produced by the molrender crate.
///
/// Degenerate-but-valid geometry (zero-extent molecules, isolated atoms,
/// collinear point sets) is handled by fallback substitutions and never
/// surfaces here; these variants cover genuinely malformed input.
#[derive(Debug)]
pub enum RenderError {
    /// A bounding-region or convex-hull computation received no points.
    EmptyPointSet,
    /// A coordinate reaching the geometry kernel was NaN or infinite.
    NonFiniteCoordinate {
        /// The offending x coordinate.
        x: f64,
        /// The offending y coordinate.
        y: f64,
    },
    /// A bond endpoint or group member referenced a nonexistent atom.
    InvalidAtomIndex {
        /// The out-of-range atom index.
        index: usize,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure (options preset files).
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPointSet => {
                write!(f, "geometry computation requires at least one point")
            }
            Self::NonFiniteCoordinate { x, y } => {
                write!(f, "coordinates must be finite, got ({x}, {y})")
            }
            Self::InvalidAtomIndex { index } => {
                write!(f, "atom index {index} is out of range")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
