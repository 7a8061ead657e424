//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Trait implemented by convex shapes representable by a support mapping function.
///
/// The support function maps a direction to the point of the shape that maximizes its dot
/// product with that direction. It is the only information the GJK and EPA algorithms need
/// about a shape, so any convex shape implementing this trait can be tested against any other.
///
/// # Implementation notes
///
/// - The result must be exact for the shape geometry: GJK and EPA cannot recover from a
///   support point that lies inside the shape.
/// - A zero direction is a caller error, but implementations must not return NaN for it.
pub trait SupportMap {
    /// Evaluates the support function of this shape, in its local-space.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as [`SupportMap::support_point`] except that `dir` is normalized.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
