//! Error types for the lie-rotation library
//!
//! Numerical edge cases (near-zero angles, angles near π, accumulated drift) are
//! handled inside the maps and the reprojection policy, so the only user-visible
//! failure is malformed input to a vector-based constructor.

use thiserror::Error;

/// Result type used throughout the lie-rotation library
pub type RotationResult<T> = Result<T, RotationError>;

/// Main error type for the lie-rotation library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// A vector-based constructor received a vector of the wrong length
    #[error("Invalid dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },
}
