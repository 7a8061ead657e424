use crate::math::{Isometry, Point, Real, Vector};
use crate::query::epa::EpaResult;
use na::{self, Unit};
use std::mem;

/// How reliable a computed contact is.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ContactQuality {
    /// The penetration depth was computed within the requested tolerance.
    Converged,
    /// The vertex or face budget of EPA was exhausted.
    CapacityExceeded,
    /// EPA stopped after its maximum number of iterations.
    IterationLimitReached,
    /// The polytope became numerically degenerate, or GJK did not provide a usable
    /// tetrahedron.
    DegenerateTopology,
}

impl ContactQuality {
    /// Whether the contact is only a best-effort estimate.
    #[inline]
    pub fn is_approximate(self) -> bool {
        self != ContactQuality::Converged
    }
}

/// Geometric description of a contact between two intersecting shapes.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactPoint {
    /// The deepest point of the first shape inside of the second one.
    pub point1: Point<Real>,

    /// The deepest point of the second shape inside of the first one.
    pub point2: Point<Real>,

    /// Contact normal, pointing from the first shape toward the second one.
    ///
    /// Translating the second shape by `normal * depth` separates both shapes.
    pub normal: Unit<Vector<Real>>,

    /// Penetration depth. Never negative.
    pub depth: Real,

    /// Whether `depth` and `normal` are exact or only an estimate.
    pub quality: ContactQuality,
}

impl ContactPoint {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        point1: Point<Real>,
        point2: Point<Real>,
        normal: Unit<Vector<Real>>,
        depth: Real,
        quality: ContactQuality,
    ) -> Self {
        ContactPoint {
            point1,
            point2,
            normal,
            depth,
            quality,
        }
    }

    /// The midpoint between the two contact points.
    #[inline]
    pub fn point(&self) -> Point<Real> {
        na::center(&self.point1, &self.point2)
    }

    /// Transforms every point and vector of this contact by `pos`.
    #[inline]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        ContactPoint {
            point1: pos * self.point1,
            point2: pos * self.point2,
            normal: pos * self.normal,
            ..*self
        }
    }

    /// Swaps the roles of both shapes, reversing the normal.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.point1, &mut self.point2);
        self.normal = -self.normal;
    }

    /// Returns a copy of this contact with the roles of both shapes swapped.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}

impl From<EpaResult> for ContactPoint {
    fn from(res: EpaResult) -> Self {
        ContactPoint::new(res.point1, res.point2, res.normal, res.depth, res.quality)
    }
}
