//! Implementation details of the `intersect` and `intersection_test` functions.

pub use self::intersection_test::{intersect, intersection_test};
pub use self::intersection_test_ball_ball::intersection_test_ball_ball;
pub use self::intersection_test_support_map_support_map::{
    intersection_test_support_map_support_map,
    intersection_test_support_map_support_map_with_params,
};

mod intersection_test_ball_ball;
mod intersection_test_support_map_support_map;
