//! Implementation details of the `intersect_with_contact` and `contact` functions.

pub use self::contact::{ContactPoint, ContactQuality};
pub use self::contact_ball_ball::contact_ball_ball;
pub use self::contact_shape_shape::{contact, intersect_with_contact};
pub use self::contact_support_map_support_map::{
    contact_support_map_support_map, contact_support_map_support_map_with_params,
};

mod contact;
mod contact_ball_ball;
mod contact_shape_shape;
mod contact_support_map_support_map;
