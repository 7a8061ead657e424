use crate::math::{Isometry, Real};
use crate::query::epa::EPA;
use crate::query::gjk::GjkOptions;
use crate::query::{details, ContactPoint, DefaultQueryDispatcher, QueryDispatcher};
use crate::shape::{Shape, SupportMap};

/// Computes the contact between two intersecting convex shapes, given in world-space.
///
/// Runs GJK, then EPA from the tetrahedron left by GJK. The returned contact is
/// expressed in world-space. Returns `None` if the shapes do not intersect.
pub fn intersect_with_contact<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    gjk_options: &GjkOptions,
    epa: &mut EPA,
) -> Option<ContactPoint>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pos12 = pos1.inv_mul(pos2);
    details::contact_support_map_support_map(&pos12, g1, g2, gjk_options, epa)
        .map(|contact| contact.transform_by(pos1))
}

/// Computes the world-space contact between two shapes, using the
/// [`DefaultQueryDispatcher`].
pub fn contact(
    pos1: &Isometry<Real>,
    g1: &Shape,
    pos2: &Isometry<Real>,
    g2: &Shape,
    epa: &mut EPA,
) -> Option<ContactPoint> {
    let pos12 = pos1.inv_mul(pos2);
    DefaultQueryDispatcher::default()
        .contact(&pos12, g1, g2, epa)
        .map(|contact| contact.transform_by(pos1))
}
