//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::orthogonal_direction::orthogonal_direction;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod ccw_face_normal;
mod center;
mod orthogonal_direction;
mod point_cloud_support_point;
