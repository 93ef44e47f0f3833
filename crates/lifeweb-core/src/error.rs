//! Error types for grid construction and cell addressing.
//!
//! Every variant describes a caller mistake rather than a transient
//! failure, so none of them carries retry semantics.

use std::error::Error;
use std::fmt;

/// Errors from [`World`](crate::World) construction and direct cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// A dimension is zero or does not fit the `i32` coordinate space.
    InvalidDimension {
        /// Requested width.
        width: u64,
        /// Requested height.
        height: u64,
    },
    /// A strict coordinate lies outside `[0, width) x [0, height)`.
    OutOfRange {
        /// Horizontal coordinate.
        x: i64,
        /// Vertical coordinate.
        y: i64,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A supplied matrix row does not have the expected length.
    ShapeMismatch {
        /// Index of the offending row.
        row: usize,
        /// Length every row must have.
        expected: usize,
        /// Length actually found.
        found: usize,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "invalid dimensions {width}x{height}: both must be in [1, {}]",
                    i32::MAX
                )
            }
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "cell ({x}, {y}) out of range: [0, {width}) x [0, {height})"
                )
            }
            Self::ShapeMismatch {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {row} has {found} cells, expected {expected}"
                )
            }
        }
    }
}

impl Error for WorldError {}
