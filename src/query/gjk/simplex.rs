use crate::math::{Real, Vector};
use crate::query::gjk::{self, CSOPoint};
use crate::utils;
use arrayvec::ArrayVec;
use na::Unit;

/// Outcome of one reduction of the simplex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimplexStep {
    /// The simplex is a tetrahedron enclosing the origin.
    ContainsOrigin,
    /// The simplex was reduced to the feature closest to the origin and the next support
    /// point must be searched along this direction.
    Search(Unit<Vector<Real>>),
}

/// A simplex of at most four CSO points, used by the boolean GJK algorithm.
///
/// The most recently added point is always the last one.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    points: ArrayVec<CSOPoint, 4>,
}

// Strictly positive, beyond a tolerance relative to `scale`.
#[inline]
fn exceeds(value: Real, scale: Real) -> bool {
    value > gjk::eps_tol() * scale
}

// Non-negative, within a tolerance relative to `scale`.
#[inline]
fn reaches(value: Real, scale: Real) -> bool {
    value >= -gjk::eps_tol() * scale
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every point from this simplex.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// The number of points of this simplex.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this simplex has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points of this simplex, oldest first.
    pub fn points(&self) -> &[CSOPoint] {
        &self.points
    }

    /// The i-th point of this simplex.
    pub fn point(&self, i: usize) -> &CSOPoint {
        &self.points[i]
    }

    /// Adds a point to this simplex.
    ///
    /// Panics if the simplex already has four points.
    pub fn push(&mut self, pt: CSOPoint) {
        self.points.push(pt);
    }

    /// Whether `pt` is already one of the vertices of this simplex.
    pub fn contains(&self, pt: &CSOPoint) -> bool {
        self.points
            .iter()
            .any(|p| relative_eq!(p.point, pt.point, epsilon = gjk::eps_tol()))
    }

    /// Reduces this simplex to its sub-simplex closest to the origin and returns the
    /// next search direction.
    ///
    /// # Panics
    ///
    /// Panics if the simplex is empty.
    pub fn reduce(&mut self) -> SimplexStep {
        match self.points.len() {
            1 => self.reduce_point(),
            2 => self.reduce_line(),
            3 => self.reduce_triangle(),
            4 => self.reduce_tetrahedron(),
            n => panic!("Cannot reduce a simplex with {} points.", n),
        }
    }

    fn set(&mut self, pts: &[CSOPoint]) {
        self.points.clear();
        self.points.extend(pts.iter().copied());
    }

    fn reduce_point(&mut self) -> SimplexStep {
        let ao = -self.points[0].point.coords;
        let dir = Unit::try_new(ao, 0.0).unwrap_or_else(Vector::x_axis);
        SimplexStep::Search(dir)
    }

    fn reduce_line(&mut self) -> SimplexStep {
        let b = self.points[0];
        let a = self.points[1];
        let ab = b - a;
        let ao = -a.point.coords;
        let ab_norm = ab.norm();
        let ao_norm = ao.norm();

        if exceeds(ab.dot(&ao), ab_norm * ao_norm) {
            let dir = ab.cross(&ao).cross(&ab);

            if exceeds(dir.norm(), ab_norm * ab_norm * ao_norm) {
                SimplexStep::Search(Unit::new_normalize(dir))
            } else {
                // The origin lies on the segment.
                SimplexStep::Search(utils::orthogonal_direction(&ab))
            }
        } else {
            self.set(&[a]);

            match Unit::try_new(ao, 0.0) {
                Some(dir) => SimplexStep::Search(dir),
                None => SimplexStep::Search(utils::orthogonal_direction(&ab)),
            }
        }
    }

    fn reduce_triangle(&mut self) -> SimplexStep {
        let c = self.points[0];
        let b = self.points[1];
        let a = self.points[2];
        let ab = b - a;
        let ac = c - a;
        let ao = -a.point.coords;
        let abc = ab.cross(&ac);
        let ab_norm = ab.norm();
        let ac_norm = ac.norm();
        let abc_norm = abc.norm();
        let ao_norm = ao.norm();

        if !exceeds(abc_norm, ab_norm * ac_norm) {
            // Collinear points: keep the longest edge.
            if ab_norm >= ac_norm {
                self.set(&[b, a]);
            } else {
                self.set(&[c, a]);
            }

            return self.reduce_line();
        }

        if reaches(abc.cross(&ac).dot(&ao), abc_norm * ac_norm * ao_norm) {
            if exceeds(ac.dot(&ao), ac_norm * ao_norm) {
                self.set(&[c, a]);
            } else {
                self.set(&[b, a]);
            }

            return self.reduce_line();
        }

        if reaches(ab.cross(&abc).dot(&ao), ab_norm * abc_norm * ao_norm) {
            self.set(&[b, a]);
            return self.reduce_line();
        }

        if abc.dot(&ao) >= 0.0 {
            SimplexStep::Search(Unit::new_unchecked(abc / abc_norm))
        } else {
            // Keep the winding such that the origin is above the triangle.
            self.set(&[b, c, a]);
            SimplexStep::Search(Unit::new_unchecked(-abc / abc_norm))
        }
    }

    fn reduce_tetrahedron(&mut self) -> SimplexStep {
        let d = self.points[0];
        let c = self.points[1];
        let b = self.points[2];
        let a = self.points[3];
        let ab = b - a;
        let ac = c - a;
        let ad = d - a;
        let ao = -a.point.coords;
        let ao_norm = ao.norm();

        let volume = ab.dot(&ac.cross(&ad));

        if !exceeds(volume.abs(), ab.norm() * ac.norm() * ad.norm()) {
            // `a` barely left the plane of the triangle the origin projects on: the
            // origin is on the CSO boundary, within tolerance.
            return SimplexStep::ContainsOrigin;
        }

        // Faces containing `a`, with the vertex opposite to each of them.
        let faces = [([a, b, c], d), ([a, c, d], b), ([a, d, b], c)];

        for (face, opposite) in faces {
            let mut n = (face[1] - face[0]).cross(&(face[2] - face[0]));

            if n.dot(&(opposite - face[0])) > 0.0 {
                n = -n;
            }

            if exceeds(n.dot(&ao), n.norm() * ao_norm) {
                self.set(&[face[2], face[1], face[0]]);
                return self.reduce_triangle();
            }
        }

        // The face opposite to `a` was already known to face the origin, but rounding
        // errors may have moved it.
        let mut n = (c - b).cross(&(d - b));

        if n.dot(&(a - b)) > 0.0 {
            n = -n;
        }

        let bo = -b.point.coords;

        if exceeds(n.dot(&bo), n.norm() * bo.norm()) {
            self.set(&[d, c, b]);
            return self.reduce_triangle();
        }

        SimplexStep::ContainsOrigin
    }
}
