use crate::math::Real;
use thiserror::Error;

/// Errors raised when building [`GjkOptions`](crate::query::gjk::GjkOptions) or
/// [`EpaOptions`](crate::query::epa::EpaOptions).
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum OptionsError {
    /// The iteration limit is zero.
    #[error("at least one iteration must be allowed")]
    ZeroIterations,
    /// The vertex budget cannot hold the initial tetrahedron plus one support point.
    #[error("EPA needs room for at least 5 vertices, got {0}")]
    TooFewVertices(usize),
    /// The face budget cannot hold the initial tetrahedron.
    #[error("EPA needs room for at least 4 faces, got {0}")]
    TooFewFaces(usize),
    /// The convergence tolerance is not a positive finite number.
    #[error("the tolerance must be positive and finite, got {0}")]
    InvalidTolerance(Real),
}
