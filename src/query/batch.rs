//! Queries on lists of shape pairs.
//!
//! Every pair is independent. The sequential functions reuse a single [`EPA`] for the
//! whole list; with the `parallel` feature, [`contacts_par`] gives each worker thread its
//! own.

use crate::math::{Isometry, Real};
use crate::query::epa::EPA;
use crate::query::{ContactPoint, QueryDispatcher};
use crate::shape::Shape;

#[cfg(feature = "parallel")]
use {crate::query::epa::EpaOptions, rayon::prelude::*};

/// Two shapes placed in world-space.
#[derive(Copy, Clone, Debug)]
pub struct ShapePair<'a> {
    /// The position of the first shape.
    pub pos1: Isometry<Real>,
    /// The first shape.
    pub shape1: &'a Shape,
    /// The position of the second shape.
    pub pos2: Isometry<Real>,
    /// The second shape.
    pub shape2: &'a Shape,
}

impl<'a> ShapePair<'a> {
    /// Creates a new pair of placed shapes.
    pub fn new(
        pos1: Isometry<Real>,
        shape1: &'a Shape,
        pos2: Isometry<Real>,
        shape2: &'a Shape,
    ) -> Self {
        ShapePair {
            pos1,
            shape1,
            pos2,
            shape2,
        }
    }

    /// The position of the second shape relative to the first one.
    #[inline]
    pub fn pos12(&self) -> Isometry<Real> {
        self.pos1.inv_mul(&self.pos2)
    }

    fn contact(&self, dispatcher: &impl QueryDispatcher, epa: &mut EPA) -> Option<ContactPoint> {
        dispatcher
            .contact(&self.pos12(), self.shape1, self.shape2, epa)
            .map(|contact| contact.transform_by(&self.pos1))
    }
}

/// Tests every pair for intersection.
pub fn intersection_tests(dispatcher: &impl QueryDispatcher, pairs: &[ShapePair]) -> Vec<bool> {
    pairs
        .iter()
        .map(|pair| dispatcher.intersection_test(&pair.pos12(), pair.shape1, pair.shape2))
        .collect()
}

/// Computes the world-space contact of every pair, `None` for the pairs that do not
/// intersect.
pub fn contacts(
    dispatcher: &impl QueryDispatcher,
    pairs: &[ShapePair],
    epa: &mut EPA,
) -> Vec<Option<ContactPoint>> {
    pairs.iter().map(|pair| pair.contact(dispatcher, epa)).collect()
}

/// Parallel version of [`contacts`].
///
/// Each rayon worker allocates its own [`EPA`] configured with `epa_options`.
#[cfg(feature = "parallel")]
pub fn contacts_par(
    dispatcher: &impl QueryDispatcher,
    pairs: &[ShapePair],
    epa_options: EpaOptions,
) -> Vec<Option<ContactPoint>> {
    pairs
        .par_iter()
        .map_init(
            || EPA::with_options(epa_options),
            |epa, pair| pair.contact(dispatcher, epa),
        )
        .collect()
}
