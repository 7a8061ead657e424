use contact3d::na::{Isometry3, Point3, Vector3};
use contact3d::query::{self, epa::EPA, gjk::GjkOptions};
use contact3d::shape::{ConvexHull, ConvexHullError, Cuboid};

#[test]
fn hull_validation() {
    assert_eq!(ConvexHull::try_new(vec![]), Err(ConvexHullError::Empty));
    assert_eq!(
        ConvexHull::try_new(vec![Point3::origin(), Point3::new(0.0, f32::NAN, 0.0)]),
        Err(ConvexHullError::NonFinitePoint { index: 1 })
    );
}

#[test]
fn hull_of_cuboid_vertices_behaves_like_the_cuboid() {
    let cuboid = Cuboid::new(Vector3::new(1.0, 0.5, 0.25));
    // Interior points must not change anything.
    let mut points = cuboid.vertices().to_vec();
    points.push(Point3::origin());
    points.push(Point3::new(0.1, 0.2, -0.1));
    let hull = ConvexHull::try_new(points).unwrap();

    let pos1 = Isometry3::rotation(Vector3::new(0.1, 0.2, 0.3));
    let pos2 = pos1 * Isometry3::translation(1.8, 0.0, 0.0);
    let options = GjkOptions::default();
    let mut epa = EPA::new();

    let with_cuboid =
        query::intersect_with_contact(&pos1, &cuboid, &pos2, &cuboid, &options, &mut epa)
            .expect("Penetration not found.");
    let with_hull = query::intersect_with_contact(&pos1, &hull, &pos2, &hull, &options, &mut epa)
        .expect("Penetration not found.");

    assert_relative_eq!(with_cuboid.depth, 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(with_hull.depth, with_cuboid.depth, epsilon = 1.0e-3);
    assert_relative_eq!(
        with_hull.normal.into_inner(),
        with_cuboid.normal.into_inner(),
        epsilon = 1.0e-3
    );
}
