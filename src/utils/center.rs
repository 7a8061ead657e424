use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// # Panics
///
/// Panics if the input slice is empty.
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom = 1.0 / pts.len() as Real;

    pts[1..]
        .iter()
        .fold(pts[0] * denom, |acc, pt| acc + pt.coords * denom)
}
