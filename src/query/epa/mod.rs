//! The EPA algorithm for penetration depth computation.

pub use self::epa3::{EpaOptions, EpaResult, EPA};
pub use self::polytope::{Edge, Face, Polytope};

pub mod epa3;
mod polytope;
