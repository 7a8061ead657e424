//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`intersect()`] to determine if two convex shapes are intersecting or not, using GJK.
//! * [`intersect_with_contact()`] to compute the penetration depth, contact normal and contact points
//!   of two intersecting convex shapes, using GJK then EPA.
//! * [`intersection_test()`] and [`contact()`] to do the same on [`Shape`](crate::shape::Shape)s,
//!   through the [`DefaultQueryDispatcher`].
//!
//! The [`batch`] module runs those queries on lists of shape pairs.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! They work in the local-space of the first shape and have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `contact` or `intersection_test`.
//! * `[shape1]` is the type of the first shape passed to the function, e.g., `ball`. Can also identify a trait
//!   implemented by supported shapes, e.g., `support_map`.
//! * `[shape2]` is the type of the second shape passed to the function.

pub use self::contact::{contact, intersect_with_contact, ContactPoint, ContactQuality};
pub use self::default_query_dispatcher::DefaultQueryDispatcher;
pub use self::error::OptionsError;
pub use self::intersection_test::{intersect, intersection_test};
pub use self::query_dispatcher::QueryDispatcher;

pub mod batch;
mod contact;
mod default_query_dispatcher;
pub mod epa;
mod error;
pub mod gjk;
mod intersection_test;
mod query_dispatcher;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact::{
        contact_ball_ball, contact_support_map_support_map,
        contact_support_map_support_map_with_params,
    };
    pub use super::intersection_test::{
        intersection_test_ball_ball, intersection_test_support_map_support_map,
        intersection_test_support_map_support_map_with_params,
    };
}
