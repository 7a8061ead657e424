//! Shapes supported by contact3d.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::convex_hull::{ConvexHull, ConvexHullError};
pub use self::cuboid::Cuboid;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod ball;
mod capsule;
mod convex_hull;
mod cuboid;
mod segment;
mod shape;
mod support_map;
mod triangle;
