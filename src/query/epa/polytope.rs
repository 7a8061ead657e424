//! The polytope expanded by EPA.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::CSOPoint;
use crate::utils;
use na::Unit;
use ordered_float::OrderedFloat;

// Relative tolerance of the visibility and orientation tests.
pub(crate) fn eps_tol() -> Real {
    DEFAULT_EPSILON * 100.0
}

/// A triangular face of the polytope.
///
/// The vertices are wound counter-clockwise when seen from outside of the polytope. Faces
/// are never removed from the face buffer: they are flagged as dead instead, so face
/// indices remain stable during the expansion.
#[derive(Clone, Debug)]
pub struct Face {
    /// Indices of the three vertices of this face.
    pub pts: [usize; 3],
    /// The outward unit normal of this face.
    ///
    /// Arbitrary if the face is dead.
    pub normal: Unit<Vector<Real>>,
    /// The distance from the origin to the plane of this face. Never negative.
    pub dist: Real,
    /// Whether this face is no longer part of the polytope boundary.
    pub dead: bool,
}

impl Face {
    /// Creates the face with the given vertices.
    ///
    /// The face is created dead if it is degenerate or if its normal points toward the
    /// origin, which would mean the polytope is no longer a valid enclosure of the origin.
    pub fn new(vertices: &[CSOPoint], pts: [usize; 3]) -> Self {
        let p0 = &vertices[pts[0]].point;
        let normal = utils::ccw_face_normal([p0, &vertices[pts[1]].point, &vertices[pts[2]].point]);

        match normal {
            Some(normal) => {
                let dist = normal.dot(&p0.coords);
                let dead = dist < -eps_tol() * p0.coords.norm().max(1.0);

                Face {
                    pts,
                    normal,
                    dist: dist.max(0.0),
                    dead,
                }
            }
            None => Face {
                pts,
                normal: Vector::x_axis(),
                dist: 0.0,
                dead: true,
            },
        }
    }

    /// Whether the point `pt` lies strictly in front of this face.
    pub fn can_be_seen_by(&self, vertices: &[CSOPoint], pt: &Point<Real>) -> bool {
        let p0 = &vertices[self.pts[0]].point;
        let scale = (pt - p0).norm().max(1.0);
        (pt - p0).dot(&self.normal) > eps_tol() * scale
    }

    /// Projects the origin on the plane of this face and maps it back to both shapes.
    ///
    /// Returns the points on the first and second shapes, computed from the barycentric
    /// coordinates of the projection. Coordinates are clamped to the triangle.
    pub fn closest_points(&self, vertices: &[CSOPoint]) -> (Point<Real>, Point<Real>) {
        let [a, b, c] = self.pts.map(|i| vertices[i]);
        let proj = self.normal.into_inner() * self.dist;
        let v0 = b - a;
        let v1 = c - a;
        let v2 = proj - a.point.coords;
        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);
        let denom = d00 * d11 - d01 * d01;

        let mut bcoords = if denom > 0.0 {
            let v = (d11 * d20 - d01 * d21) / denom;
            let w = (d00 * d21 - d01 * d20) / denom;
            [1.0 - v - w, v, w]
        } else {
            [1.0, 0.0, 0.0]
        };

        for coord in &mut bcoords {
            *coord = coord.max(0.0);
        }

        let sum: Real = bcoords.iter().sum();

        if sum > 0.0 {
            for coord in &mut bcoords {
                *coord /= sum;
            }
        } else {
            bcoords = [1.0, 0.0, 0.0];
        }

        (
            a.orig1 * bcoords[0] + b.orig1.coords * bcoords[1] + c.orig1.coords * bcoords[2],
            a.orig2 * bcoords[0] + b.orig2.coords * bcoords[1] + c.orig2.coords * bcoords[2],
        )
    }
}

/// A directed edge of a face of the polytope.
///
/// Two edges are equal if they join the same vertices, in either order.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    /// The first vertex index.
    pub a: usize,
    /// The second vertex index.
    pub b: usize,
    /// The face this edge was taken from.
    pub face: usize,
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Edge {}

/// The vertices and faces of the convex polytope expanded by EPA.
#[derive(Clone, Debug, Default)]
pub struct Polytope {
    /// The vertices of the polytope.
    pub vertices: Vec<CSOPoint>,
    /// Every face created since the last reset, including dead ones.
    pub faces: Vec<Face>,
    /// The horizon computed by the last call to `carve`.
    pub horizon: Vec<Edge>,
}

impl Polytope {
    /// Creates an empty polytope able to hold the given number of vertices and faces
    /// without reallocating.
    pub fn with_capacity(max_vertices: usize, max_faces: usize) -> Self {
        Polytope {
            vertices: Vec::with_capacity(max_vertices),
            faces: Vec::with_capacity(max_faces),
            horizon: Vec::new(),
        }
    }

    /// Removes all the vertices and faces of this polytope.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.horizon.clear();
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, pt: CSOPoint) -> usize {
        self.vertices.push(pt);
        self.vertices.len() - 1
    }

    /// Creates a face from three vertex indices and returns its index.
    pub fn push_face(&mut self, pts: [usize; 3]) -> usize {
        let face = Face::new(&self.vertices, pts);
        self.faces.push(face);
        self.faces.len() - 1
    }

    /// The number of faces that are still part of the boundary.
    pub fn num_live_faces(&self) -> usize {
        self.faces.iter().filter(|f| !f.dead).count()
    }

    /// The live face closest to the origin.
    pub fn closest_face(&self) -> Option<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.dead)
            .min_by_key(|(_, f)| OrderedFloat(f.dist))
            .map(|(i, _)| i)
    }

    /// Kills every live face seen by the vertex `pt_id` and computes the horizon.
    ///
    /// The horizon is the set of edges bordering exactly one killed face. It is found by
    /// cancelling the edges shared by two killed faces.
    pub fn carve(&mut self, pt_id: usize) -> &[Edge] {
        self.horizon.clear();
        let pt = self.vertices[pt_id].point;

        for (face_id, face) in self.faces.iter_mut().enumerate() {
            if face.dead || !face.can_be_seen_by(&self.vertices, &pt) {
                continue;
            }

            face.dead = true;

            for i in 0..3 {
                let edge = Edge {
                    a: face.pts[i],
                    b: face.pts[(i + 1) % 3],
                    face: face_id,
                };

                if let Some(pos) = self.horizon.iter().position(|e| *e == edge) {
                    let _ = self.horizon.swap_remove(pos);
                } else {
                    self.horizon.push(edge);
                }
            }
        }

        &self.horizon
    }

    /// Closes the hole left by `carve` with one face per horizon edge, all sharing the
    /// vertex `pt_id`.
    ///
    /// Returns the range of the created face indices.
    pub fn patch(&mut self, pt_id: usize) -> core::ops::Range<usize> {
        let first = self.faces.len();

        for i in 0..self.horizon.len() {
            let edge = self.horizon[i];
            debug_assert!(self.faces[edge.face].dead);
            let _ = self.push_face([edge.a, edge.b, pt_id]);
        }

        first..self.faces.len()
    }
}
