use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Computes an arbitrary unit vector orthogonal to `v`.
///
/// The cross product is taken with the coordinate axis least aligned with `v`,
/// so the result is well-conditioned. Returns the X axis if `v` is zero.
#[inline]
pub fn orthogonal_direction(v: &Vector<Real>) -> UnitVector<Real> {
    let abs = v.abs();
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vector::x()
    } else if abs.y <= abs.z {
        Vector::y()
    } else {
        Vector::z()
    };

    UnitVector::try_new(v.cross(&axis), DEFAULT_EPSILON).unwrap_or_else(Vector::x_axis)
}
