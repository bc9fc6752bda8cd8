//! Error taxonomy for Taylor expansion requests.

use thiserror::Error;

/// Everything that can go wrong while building a Taylor approximation.
///
/// Degree and point problems are rejected before any differentiation starts,
/// so a returned polynomial is always internally consistent.
#[derive(Debug, Error, PartialEq)]
pub enum TaylorError {
    /// The tangent plane (degree 2) is the lowest supported approximation.
    #[error("expansion degree must be at least 2, got {degree}")]
    InvalidDegree { degree: usize },

    /// The expansion point must bind exactly two variables.
    #[error("expansion point must bind exactly 2 variables, got {found}")]
    InvalidPointArity { found: usize },

    /// The function string could not be parsed into an expression.
    #[error("failed to parse function: {0}")]
    Parse(String),
}
