//! The Gilbert-Johnson-Keerthi intersection algorithm.
//!
//! GJK works on the Minkowski difference (the CSO) of two convex shapes: the shapes
//! intersect if and only if the origin lies inside their CSO. The algorithm grows a
//! simplex of CSO support points toward the origin until it either encloses the origin
//! or finds a direction along which the whole CSO lies on the other side of the origin.

use na::Unit;

use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CSOPoint, Simplex, SimplexStep};
use crate::query::OptionsError;
use crate::shape::SupportMap;

/// Results of the GJK algorithm.
///
/// Directions are expressed in the local-space of the first shape.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The origin is enclosed by the CSO: the shapes are intersecting.
    ///
    /// The simplex used by the algorithm is left with exactly four points, ready to be
    /// expanded by EPA.
    Intersection,
    /// The shapes are not intersecting.
    ///
    /// The direction is a separating axis: every point of the CSO has a non-positive dot
    /// product with it.
    NoIntersection(Unit<Vector<Real>>),
    /// The iteration limit was reached before any conclusion.
    ///
    /// The boolean queries treat this as a non-intersection.
    IterationLimitReached,
}

impl GJKResult {
    /// Whether this result states that the shapes are intersecting.
    pub fn is_intersection(&self) -> bool {
        matches!(self, GJKResult::Intersection)
    }
}

/// Parameters of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkOptions {
    /// The maximum number of support point evaluations.
    pub max_iterations: usize,
}

impl GjkOptions {
    /// The default maximum number of iterations.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    /// Creates new GJK options, checking that at least one iteration is allowed.
    pub fn new(max_iterations: usize) -> Result<Self, OptionsError> {
        if max_iterations == 0 {
            return Err(OptionsError::ZeroIterations);
        }

        Ok(GjkOptions { max_iterations })
    }
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// The absolute tolerance used by the GJK algorithm.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// Tests whether two support-mapped shapes intersect.
///
/// The second shape is placed in the local-space of the first one by `pos12`. The
/// simplex is reset before use. The search starts along `init_dir`, which does not need
/// to be accurate.
pub fn intersect_support_maps<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    init_dir: Unit<Vector<Real>>,
    options: &GjkOptions,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    simplex.reset();
    let mut dir = init_dir;

    for _ in 0..options.max_iterations {
        let support = CSOPoint::from_shapes_toward(pos12, g1, g2, &dir);
        let advance = support.point.coords.dot(&dir);

        assert!(
            advance.is_finite(),
            "The support point of a shape must be finite."
        );

        if advance <= 0.0 {
            return GJKResult::NoIntersection(dir);
        }

        if simplex.contains(&support) {
            // No progress can be made: the origin lies on the boundary of the CSO.
            log::debug!("GJK stalled on a duplicate support point, reporting no intersection.");
            return GJKResult::NoIntersection(dir);
        }

        simplex.push(support);

        match simplex.reduce() {
            SimplexStep::ContainsOrigin => return GJKResult::Intersection,
            SimplexStep::Search(new_dir) => dir = new_dir,
        }
    }

    log::debug!(
        "GJK reached its iteration limit ({}) with {} simplex points.",
        options.max_iterations,
        simplex.len()
    );
    GJKResult::IterationLimitReached
}
