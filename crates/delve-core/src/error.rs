//! Error types for grid access.

use crate::coord::{Coordinate, Dimension};
use std::fmt;

/// Errors arising from grid reads, writes, and merges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside the bounds of the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coordinate,
        /// Dimension of the grid that rejected it.
        bounds: Dimension,
    },
    /// A grid being merged holds a coordinate the receiver cannot contain.
    MergeOutOfBounds {
        /// The first offending coordinate found in the merged grid.
        coord: Coordinate,
        /// Dimension of the receiving grid.
        bounds: Dimension,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: [0, {}) x [0, {})", bounds.w, bounds.h)
            }
            Self::MergeOutOfBounds { coord, bounds } => {
                write!(
                    f,
                    "cannot merge grid: coordinate {coord} falls outside {bounds}"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
