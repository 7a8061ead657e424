//! Dispatch of pairwise queries on the shape types.
//!
//! A query dispatcher picks the algorithm used for a pair of [`Shape`]s: a closed-form
//! test when one exists for the pair, the GJK/EPA kernel otherwise. Implement this trait
//! to plug specialized algorithms for some pairs while delegating the others to the
//! [`DefaultQueryDispatcher`](crate::query::DefaultQueryDispatcher).

use crate::math::{Isometry, Real};
use crate::query::epa::EPA;
use crate::query::ContactPoint;
use crate::shape::Shape;

/// Dispatcher for pairwise queries.
///
/// The second shape is always placed in the local-space of the first one by `pos12`,
/// and the results are expressed in the same space.
pub trait QueryDispatcher: Send + Sync {
    /// Tests whether two shapes are intersecting.
    fn intersection_test(&self, pos12: &Isometry<Real>, g1: &Shape, g2: &Shape) -> bool;

    /// Computes the contact between two intersecting shapes.
    ///
    /// Returns `None` if the shapes do not intersect. `epa` provides the scratch
    /// buffers used when a penetration depth has to be computed iteratively.
    fn contact(
        &self,
        pos12: &Isometry<Real>,
        g1: &Shape,
        g2: &Shape,
        epa: &mut EPA,
    ) -> Option<ContactPoint>;
}
