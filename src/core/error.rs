//! Engine error type.
//!
//! Every rejected call returns a `LifeError` and leaves the grid untouched.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors reported by the engine.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LifeError {
    /// Grid construction with a non-positive extent.
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: i64, cols: i64 },

    /// Coordinate outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// Numeric parameter outside its allowed range.
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Malformed `B../S..` rulestring.
    #[error("invalid rulestring: {0}")]
    InvalidRule(String),

    /// Malformed text pattern.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}
