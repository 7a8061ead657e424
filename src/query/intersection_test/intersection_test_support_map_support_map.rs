use na::Unit;

use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{self, GJKResult, GjkOptions, Simplex};
use crate::shape::SupportMap;

/// Intersection test between support-mapped shapes (`Cuboid`, `ConvexHull`, etc.)
///
/// The second shape is placed in the local-space of the first one by `pos12`. Reaching
/// the GJK iteration limit counts as no intersection.
pub fn intersection_test_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    gjk_options: &GjkOptions,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersection_test_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        &mut Simplex::new(),
        None,
        gjk_options,
    )
    .is_intersection()
}

/// Intersection test between support-mapped shapes (`Cuboid`, `ConvexHull`, etc.)
///
/// The search starts along `init_dir` if given, otherwise along the translation from
/// the first shape to the second one. On intersection the `simplex` is left enclosing
/// the origin, ready for EPA.
pub fn intersection_test_support_map_support_map_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    init_dir: Option<Unit<Vector<Real>>>,
    gjk_options: &GjkOptions,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let dir = if let Some(init_dir) = init_dir {
        init_dir
    } else if let Some(init_dir) = Unit::try_new(pos12.translation.vector, DEFAULT_EPSILON) {
        init_dir
    } else {
        Vector::x_axis()
    };

    gjk::intersect_support_maps(pos12, g1, g2, simplex, dir, gjk_options)
}
