/*!
contact3d
=========

**contact3d** is the narrow-phase convex collision kernel of a 3-dimensional
engine: it tells whether two convex shapes intersect (GJK) and, when they
do, recovers a contact point, a contact normal and a penetration depth
(EPA).

```
use contact3d::na::{Isometry3, Vector3};
use contact3d::query::{self, epa::EPA, gjk::GjkOptions};
use contact3d::shape::Cuboid;

let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
let pos1 = Isometry3::identity();
let pos2 = Isometry3::translation(0.5, 0.0, 0.0);
let options = GjkOptions::default();

assert!(query::intersect(&pos1, &cuboid, &pos2, &cuboid, &options));

let mut epa = EPA::new();
let contact = query::intersect_with_contact(&pos1, &cuboid, &pos2, &cuboid, &options, &mut epa)
    .expect("the cuboids overlap");
assert!((contact.depth - 1.5).abs() < 1.0e-4);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Isometry3, Point3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
