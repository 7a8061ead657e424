//! The GJK algorithm for intersection tests.

pub use self::cso_point::CSOPoint;
pub use self::gjk::*;
pub use self::simplex::{Simplex, SimplexStep};

mod cso_point;
mod gjk;
mod simplex;
