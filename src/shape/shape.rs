use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Ball, Capsule, ConvexHull, Cuboid, Segment, SupportMap, Triangle};
use na::Unit;

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A segment shape.
    Segment,
    /// A triangle shape.
    Triangle,
    /// The convex hull of a point cloud.
    ConvexHull,
}

/// A convex shape, as a closed set of variants.
///
/// Queries dispatch on the variants of this enum instead of going through trait objects, so
/// the pairwise tests of [`crate::query::DefaultQueryDispatcher`] are resolved statically.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A ball shape.
    Ball(Ball),
    /// A cuboid shape.
    Cuboid(Cuboid),
    /// A capsule shape.
    Capsule(Capsule),
    /// A segment shape.
    Segment(Segment),
    /// A triangle shape.
    Triangle(Triangle),
    /// The convex hull of a point cloud.
    ConvexHull(ConvexHull),
}

impl Shape {
    /// The type tag of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Ball(_) => ShapeType::Ball,
            Shape::Cuboid(_) => ShapeType::Cuboid,
            Shape::Capsule(_) => ShapeType::Capsule,
            Shape::Segment(_) => ShapeType::Segment,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::ConvexHull(_) => ShapeType::ConvexHull,
        }
    }

    /// Converts this shape into a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            Shape::Ball(b) => Some(b),
            _ => None,
        }
    }

    /// The shape as a support map, for the algorithms that only need the support function.
    pub fn as_support_map(&self) -> &dyn SupportMap {
        match self {
            Shape::Ball(s) => s,
            Shape::Cuboid(s) => s,
            Shape::Capsule(s) => s,
            Shape::Segment(s) => s,
            Shape::Triangle(s) => s,
            Shape::ConvexHull(s) => s,
        }
    }
}

impl SupportMap for Shape {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.as_support_map().local_support_point(dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.as_support_map().local_support_point_toward(dir)
    }

    #[inline]
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        self.as_support_map().support_point(transform, dir)
    }

    #[inline]
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        self.as_support_map().support_point_toward(transform, dir)
    }
}

macro_rules! impl_from_shape(
    ($($variant: ident),*) => {$(
        impl From<$variant> for Shape {
            #[inline]
            fn from(shape: $variant) -> Self {
                Shape::$variant(shape)
            }
        }
    )*}
);

impl_from_shape!(Ball, Cuboid, Capsule, Segment, Triangle, ConvexHull);
