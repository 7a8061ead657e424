use crate::math::{Isometry, Point, Real};
use crate::query::epa::EPA;
use crate::query::gjk::GjkOptions;
use crate::query::{details, ContactPoint, QueryDispatcher};
use crate::shape::Shape;

/// A dispatcher that exposes built-in queries
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DefaultQueryDispatcher {
    /// The options of the GJK runs performed by this dispatcher.
    pub gjk: GjkOptions,
}

impl DefaultQueryDispatcher {
    /// Creates a dispatcher running GJK with the given options.
    pub fn new(gjk: GjkOptions) -> Self {
        DefaultQueryDispatcher { gjk }
    }
}

impl QueryDispatcher for DefaultQueryDispatcher {
    fn intersection_test(&self, pos12: &Isometry<Real>, shape1: &Shape, shape2: &Shape) -> bool {
        if let (Some(b1), Some(b2)) = (shape1.as_ball(), shape2.as_ball()) {
            let p12 = Point::from(pos12.translation.vector);
            details::intersection_test_ball_ball(&p12, b1, b2)
        } else {
            details::intersection_test_support_map_support_map(
                pos12,
                shape1.as_support_map(),
                shape2.as_support_map(),
                &self.gjk,
            )
        }
    }

    fn contact(
        &self,
        pos12: &Isometry<Real>,
        shape1: &Shape,
        shape2: &Shape,
        epa: &mut EPA,
    ) -> Option<ContactPoint> {
        if let (Some(b1), Some(b2)) = (shape1.as_ball(), shape2.as_ball()) {
            details::contact_ball_ball(pos12, b1, b2)
        } else {
            details::contact_support_map_support_map(
                pos12,
                shape1.as_support_map(),
                shape2.as_support_map(),
                &self.gjk,
                epa,
            )
        }
    }
}
