use crate::math::{Isometry, Real, Vector};
use crate::query::epa::EPA;
use crate::query::gjk::{GJKResult, GjkOptions, Simplex};
use crate::query::intersection_test::intersection_test_support_map_support_map_with_params;
use crate::query::ContactPoint;
use crate::shape::SupportMap;

use na::Unit;

/// Contact between support-map shapes (`Cuboid`, `ConvexHull`, etc.)
///
/// The second shape is placed in the local-space of the first one by `pos12`, and the
/// returned contact is expressed in the same space. Returns `None` if the shapes do not
/// intersect.
pub fn contact_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    gjk_options: &GjkOptions,
    epa: &mut EPA,
) -> Option<ContactPoint>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    contact_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        &mut Simplex::new(),
        None,
        gjk_options,
        epa,
    )
}

/// Contact between support-map shapes (`Cuboid`, `ConvexHull`, etc.)
///
/// This allows a more fine grained control other the underlying GJK algorigtm: the
/// simplex and the initial search direction are given by the caller.
pub fn contact_support_map_support_map_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    init_dir: Option<Unit<Vector<Real>>>,
    gjk_options: &GjkOptions,
    epa: &mut EPA,
) -> Option<ContactPoint>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    match intersection_test_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        simplex,
        init_dir,
        gjk_options,
    ) {
        GJKResult::Intersection => Some(epa.closest_points(pos12, g1, g2, simplex).into()),
        GJKResult::NoIntersection(_) | GJKResult::IterationLimitReached => None,
    }
}
