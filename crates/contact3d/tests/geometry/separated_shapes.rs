use contact3d::na::{Isometry3, Point3, Vector3};
use contact3d::query::{self, epa::EPA, gjk::GjkOptions};
use contact3d::shape::{Capsule, ConvexHull, Cuboid, Segment, Triangle};

fn unit_tetrahedron() -> ConvexHull {
    ConvexHull::try_new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn cuboid_capsule_with_small_gap() {
    let cuboid = Cuboid::new(Vector3::new(1.0, 2.0, 0.5));
    let capsule = Capsule::new_x(1.0, 0.5);
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.0, 2.6, 0.0);
    let options = GjkOptions::default();

    assert!(!query::intersect(&pos1, &cuboid, &pos2, &capsule, &options));
    assert!(
        query::intersect_with_contact(&pos1, &cuboid, &pos2, &capsule, &options, &mut EPA::new())
            .is_none()
    );
}

#[test]
fn segment_above_triangle() {
    let triangle = Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    let segment = Segment::new(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0));
    let pos2 = Isometry3::rotation(Vector3::x() * 0.3) * Isometry3::translation(0.0, 0.0, 0.5);

    assert!(!query::intersect(
        &Isometry3::identity(),
        &triangle,
        &pos2,
        &segment,
        &GjkOptions::default()
    ));
}

#[test]
fn hulls_separated_by_a_plane() {
    let hull = unit_tetrahedron();
    let pos1 = Isometry3::identity();
    let options = GjkOptions::default();

    // Across the slanted face.
    let pos2 = Isometry3::translation(0.6, 0.6, 0.6);
    assert!(!query::intersect(&pos1, &hull, &pos2, &hull, &options));

    // Across a face aligned with an axis.
    let pos2 = Isometry3::translation(1.1, 0.0, 0.0);
    assert!(!query::intersect(&pos1, &hull, &pos2, &hull, &options));

    // Overlapping control case.
    let pos2 = Isometry3::translation(0.1, 0.1, 0.1);
    assert!(query::intersect(&pos1, &hull, &pos2, &hull, &options));
}
