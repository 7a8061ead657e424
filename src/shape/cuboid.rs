//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// Shape of a box.
///
/// The box is centered at the origin of its local frame; its pose decides its orientation,
/// so the same shape is used for axis-aligned and oriented boxes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The eight vertices of this cuboid, in its local frame.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let he = self.half_extents;
        core::array::from_fn(|i| {
            let sign = |bit: usize| if i & (1 << bit) != 0 { -1.0 } else { 1.0 };
            Point::new(he.x * sign(0), he.y * sign(1), he.z * sign(2))
        })
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // NOTE: `copysign` keeps the sign of negative zeros, so opposite directions always
        //       select opposite corners, even on the degenerate axes.
        Point::new(
            self.half_extents.x.copysign(dir.x),
            self.half_extents.y.copysign(dir.y),
            self.half_extents.z.copysign(dir.z),
        )
    }
}
