use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{ContactPoint, ContactQuality};
use crate::shape::Ball;
use na::{self, ComplexField, Unit};
use num::Zero;

/// Contact between two balls, computed in closed form.
///
/// The second ball is placed in the local-space of the first one by `pos12`, and the
/// returned contact is expressed in the same space. Touching balls give a contact with
/// a zero depth.
#[inline]
pub fn contact_ball_ball(pos12: &Isometry<Real>, b1: &Ball, b2: &Ball) -> Option<ContactPoint> {
    let r1 = b1.radius;
    let r2 = b2.radius;
    let center2_1 = pos12.translation.vector;
    let distance_squared = center2_1.norm_squared();
    let sum_radius = r1 + r2;

    if distance_squared <= sum_radius * sum_radius {
        let normal = if !distance_squared.is_zero() {
            Unit::new_normalize(center2_1)
        } else {
            Vector::x_axis()
        };
        let point1 = Point::from(*normal * r1);
        let point2 = Point::from(center2_1 - *normal * r2);
        let depth = sum_radius - ComplexField::sqrt(distance_squared);

        Some(ContactPoint::new(
            point1,
            point2,
            normal,
            depth.max(0.0),
            ContactQuality::Converged,
        ))
    } else {
        None
    }
}
