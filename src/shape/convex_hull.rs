use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;
use thiserror::Error;

/// Errors raised when building a [`ConvexHull`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConvexHullError {
    /// No point was given.
    #[error("a convex hull needs at least one point")]
    Empty,
    /// One of the points has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the faulty point in the input.
        index: usize,
    },
}

/// The convex hull of a set of points, represented only by the points themselves.
///
/// Points lying strictly inside the hull are allowed: the support function ignores them
/// naturally. Callers with a non-convex mesh must decompose it into several hulls first.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
}

impl ConvexHull {
    /// Creates a convex hull from a set of points.
    pub fn try_new(points: Vec<Point<Real>>) -> Result<Self, ConvexHullError> {
        if points.is_empty() {
            return Err(ConvexHullError::Empty);
        }

        if let Some(index) = points
            .iter()
            .position(|pt| pt.coords.iter().any(|e| !e.is_finite()))
        {
            return Err(ConvexHullError::NonFinitePoint { index });
        }

        Ok(ConvexHull { points })
    }

    /// The points this hull is built from.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, self.points())
    }
}
