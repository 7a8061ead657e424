//! Three-dimensional penetration depth queries using the Expanding Polytope Algorithm.

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::epa::Polytope;
use crate::query::gjk::{CSOPoint, Simplex};
use crate::query::{ContactQuality, OptionsError};
use crate::shape::SupportMap;
use crate::utils;
use na::Unit;

/// Parameters of the EPA algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaOptions {
    /// The maximum number of vertices of the expanded polytope.
    pub max_vertices: usize,
    /// The maximum number of faces, dead ones included, of the expanded polytope.
    pub max_faces: usize,
    /// The maximum number of expansion steps.
    pub max_iterations: usize,
    /// The expansion stops once a support point improves the closest face by less
    /// than this distance.
    pub tolerance: Real,
}

impl EpaOptions {
    /// Creates new EPA options after checking they are usable.
    ///
    /// The initial tetrahedron already needs four vertices and four faces, so at least
    /// five vertices are required for a single expansion step.
    pub fn new(
        max_vertices: usize,
        max_faces: usize,
        max_iterations: usize,
        tolerance: Real,
    ) -> Result<Self, OptionsError> {
        if max_vertices < 5 {
            return Err(OptionsError::TooFewVertices(max_vertices));
        }

        if max_faces < 4 {
            return Err(OptionsError::TooFewFaces(max_faces));
        }

        if max_iterations == 0 {
            return Err(OptionsError::ZeroIterations);
        }

        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(OptionsError::InvalidTolerance(tolerance));
        }

        Ok(EpaOptions {
            max_vertices,
            max_faces,
            max_iterations,
            tolerance,
        })
    }
}

impl Default for EpaOptions {
    fn default() -> Self {
        EpaOptions {
            max_vertices: 1000,
            max_faces: 8000,
            max_iterations: 1000,
            tolerance: 1.0e-4,
        }
    }
}

/// The penetration computed by EPA.
///
/// Everything is expressed in the local-space of the first shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpaResult {
    /// The deepest point of the first shape inside of the second one.
    pub point1: Point<Real>,
    /// The deepest point of the second shape inside of the first one.
    pub point2: Point<Real>,
    /// The unit contact normal, pointing from the first shape toward the second one.
    pub normal: Unit<Vector<Real>>,
    /// The penetration depth. Never negative.
    pub depth: Real,
    /// How reliable this result is.
    pub quality: ContactQuality,
}

/// The Expanding Polytope Algorithm in 3D.
///
/// This structure holds the buffers of the polytope so they can be reused from one
/// query to the next.
#[derive(Clone, Debug)]
pub struct EPA {
    options: EpaOptions,
    polytope: Polytope,
}

impl Default for EPA {
    fn default() -> Self {
        Self::new()
    }
}

impl EPA {
    /// Creates a new instance of the 3D Expanding Polytope Algorithm with default options.
    pub fn new() -> Self {
        Self::with_options(EpaOptions::default())
    }

    /// Creates a new instance of the 3D Expanding Polytope Algorithm.
    ///
    /// The polytope buffers are allocated once, for the capacities set by `options`.
    pub fn with_options(options: EpaOptions) -> Self {
        EPA {
            options,
            polytope: Polytope::with_capacity(options.max_vertices, options.max_faces),
        }
    }

    /// The options of this EPA instance.
    pub fn options(&self) -> &EpaOptions {
        &self.options
    }

    fn degenerate_result(simplex: &Simplex) -> EpaResult {
        let points = simplex.points();
        let (point1, point2) = if points.is_empty() {
            (Point::origin(), Point::origin())
        } else {
            let orig1: Vec<_> = points.iter().map(|p| p.orig1).collect();
            let orig2: Vec<_> = points.iter().map(|p| p.orig2).collect();
            (utils::center(&orig1), utils::center(&orig2))
        };
        let normal = if points.len() >= 3 {
            utils::ccw_face_normal([&points[0].point, &points[1].point, &points[2].point])
        } else {
            None
        };

        EpaResult {
            point1,
            point2,
            normal: normal.unwrap_or_else(Vector::x_axis),
            depth: 0.0,
            quality: ContactQuality::DegenerateTopology,
        }
    }

    fn result_from_face(&self, face_id: usize, quality: ContactQuality) -> EpaResult {
        let face = &self.polytope.faces[face_id];
        let (point1, point2) = face.closest_points(&self.polytope.vertices);

        EpaResult {
            point1,
            point2,
            // Moving the second shape by `normal * depth` pushes the origin out of the CSO.
            normal: face.normal,
            depth: face.dist.max(0.0),
            quality,
        }
    }

    fn finish(best: Option<EpaResult>, simplex: &Simplex, quality: ContactQuality) -> EpaResult {
        match best {
            Some(res) => EpaResult { quality, ..res },
            None => Self::degenerate_result(simplex),
        }
    }

    /// Computes the penetration depth and contact points of two intersecting shapes.
    ///
    /// The `simplex` must be the tetrahedron enclosing the origin left by a GJK
    /// intersection test. The second shape is placed in the local-space of the first one
    /// by `pos12`. This never fails: if the expansion cannot complete, the best estimate
    /// found so far is returned and flagged by its `quality`.
    pub fn closest_points<G1, G2>(
        &mut self,
        pos12: &Isometry<Real>,
        g1: &G1,
        g2: &G2,
        simplex: &Simplex,
    ) -> EpaResult
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        self.polytope.reset();

        if simplex.len() != 4 {
            log::debug!(
                "EPA needs a tetrahedron, got a simplex with {} points.",
                simplex.len()
            );
            return Self::degenerate_result(simplex);
        }

        let pts = simplex.points();
        let [p0, p1, p2, p3] = [pts[0].point, pts[1].point, pts[2].point, pts[3].point];
        let (e1, e2, e3) = (p1 - p0, p2 - p0, p3 - p0);
        let volume = e1.dot(&e2.cross(&e3));

        if volume.abs() <= crate::query::gjk::eps_tol() * e1.norm() * e2.norm() * e3.norm() {
            log::debug!("EPA was given a flat tetrahedron.");
            return Self::degenerate_result(simplex);
        }

        for pt in pts {
            let _ = self.polytope.push_vertex(*pt);
        }

        let centroid = utils::center(&[p0, p1, p2, p3]);

        for mut face in [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]] {
            let v = &self.polytope.vertices;
            let n = (v[face[1]].point - v[face[0]].point)
                .cross(&(v[face[2]].point - v[face[0]].point));

            if n.dot(&(centroid - v[face[0]].point)) > 0.0 {
                face.swap(1, 2);
            }

            let _ = self.polytope.push_face(face);
        }

        let mut best = None;

        for niter in 0..self.options.max_iterations {
            let Some(face_id) = self.polytope.closest_face() else {
                log::debug!("EPA ran out of live faces after {} iterations.", niter);
                return Self::finish(best, simplex, ContactQuality::DegenerateTopology);
            };

            let face = self.polytope.faces[face_id].clone();
            let candidate = self.result_from_face(face_id, ContactQuality::Converged);
            best = Some(candidate);

            let support = CSOPoint::from_shapes_toward(pos12, g1, g2, &face.normal);
            let support_dist = support.point.coords.dot(&face.normal);

            log::trace!(
                "EPA iteration {}: closest face {} at {}, support at {}.",
                niter,
                face_id,
                face.dist,
                support_dist
            );

            if support_dist - face.dist <= self.options.tolerance {
                return candidate;
            }

            if self.polytope.vertices.len() >= self.options.max_vertices {
                log::debug!("EPA exhausted its vertex capacity.");
                return Self::finish(best, simplex, ContactQuality::CapacityExceeded);
            }

            let pt_id = self.polytope.push_vertex(support);
            let horizon_len = self.polytope.carve(pt_id).len();

            if horizon_len == 0 {
                log::debug!("EPA found an empty horizon.");
                return Self::finish(best, simplex, ContactQuality::DegenerateTopology);
            }

            if self.polytope.faces.len() + horizon_len > self.options.max_faces {
                log::debug!("EPA exhausted its face capacity.");
                return Self::finish(best, simplex, ContactQuality::CapacityExceeded);
            }

            let created = self.polytope.patch(pt_id);
            let mut num_live = 0;

            for new_face in &self.polytope.faces[created] {
                if new_face.dead {
                    continue;
                }

                if new_face.dist < face.dist - self.options.tolerance {
                    log::debug!(
                        "EPA created a face closer than the current best ({} < {}).",
                        new_face.dist,
                        face.dist
                    );
                    return Self::finish(best, simplex, ContactQuality::DegenerateTopology);
                }

                num_live += 1;
            }

            if num_live == 0 {
                log::debug!("EPA could not create any valid face.");
                return Self::finish(best, simplex, ContactQuality::DegenerateTopology);
            }
        }

        log::debug!(
            "EPA reached its iteration limit ({}).",
            self.options.max_iterations
        );
        Self::finish(best, simplex, ContactQuality::IterationLimitReached)
    }
}
