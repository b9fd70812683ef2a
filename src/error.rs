//! Errors returned by dimension estimation.
//!
//! Every variant belongs to one of three kinds (see [ErrorKind]):
//!  - precondition failures, detected before any computation,
//!  - convergence failures of the root finder used by the capacity estimator,
//!  - numeric domain failures (division by zero, log of a non positive value...).
//!
//! All errors are terminal for the estimator call, no partial result is returned.

use thiserror::Error;

/// coarse classification of a [DimError]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Precondition,
    Convergence,
    NumericDomain,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimError {
    /// not enough points to get one sample anchor
    #[error("dataset has {nb_points} points, at least {min_points} are needed")]
    TooFewPoints { nb_points: usize, min_points: usize },

    /// a k-nn query asks for more points than the dataset holds
    #[error("k+1 = {asked} neighbours asked, dataset has only {nb_points} points")]
    TooManyNeighbours { asked: usize, nb_points: usize },

    /// distance restricted to more coordinates than points have
    #[error("dimension {dim} exceeds point length {point_len}")]
    DimensionTooLarge { dim: usize, point_len: usize },

    /// points of a dataset must all have the same length
    #[error("point {node} has length {len}, expected {expected}")]
    RaggedPoint { node: usize, len: usize, expected: usize },

    /// NaN or infinite coordinate
    #[error("point {node} has a non finite coordinate at position {coord}")]
    NonFinite { node: usize, coord: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// the root finder could not bracket a sign change. target is the value to invert (L_CAP)
    #[error("no sign change: target {target:.6e} not between {low_value:.6e} and {high_value:.6e}")]
    NoSignChange {
        target: f64,
        low_value: f64,
        high_value: f64,
    },

    /// the root finder reached its iteration cap before tolerance was met
    #[error("no convergence after {nb_iter} iterations for target {target:.6e}")]
    IterationCap { target: f64, nb_iter: usize },

    #[error("numeric domain error: {0}")]
    NumericDomain(String),
}

impl DimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DimError::TooFewPoints { .. }
            | DimError::TooManyNeighbours { .. }
            | DimError::DimensionTooLarge { .. }
            | DimError::RaggedPoint { .. }
            | DimError::NonFinite { .. }
            | DimError::InvalidParameter(_) => ErrorKind::Precondition,
            DimError::NoSignChange { .. } | DimError::IterationCap { .. } => {
                ErrorKind::Convergence
            }
            DimError::NumericDomain(_) => ErrorKind::NumericDomain,
        }
    }

    /// For a convergence error, returns the value the solver tried to invert.
    pub fn get_target(&self) -> Option<f64> {
        match self {
            DimError::NoSignChange { target, .. } | DimError::IterationCap { target, .. } => {
                Some(*target)
            }
            _ => None,
        }
    }
} // end of impl DimError

// end of mod tests
