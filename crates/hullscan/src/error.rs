//! Error type shared by all engines.

use thiserror::Error;

use crate::geom2::Point;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// An input coordinate is NaN or infinite; orientation signs would be meaningless.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    /// Accepted edges could not be walked into a single closed boundary.
    #[error("edge set does not close into one boundary (stuck at ({}, {}))", at.x, at.y)]
    UnclosedBoundary { at: Point },

    #[error("unknown algorithm `{0}` (expected brute-force, quickhull or graham)")]
    UnknownAlgorithm(String),
}

pub type HullResult<T> = Result<T, HullError>;
