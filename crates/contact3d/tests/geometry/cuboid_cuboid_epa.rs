use contact3d::na::{Isometry3, Vector3};
use contact3d::query::{self, epa::EPA, gjk::GjkOptions, ContactQuality};
use contact3d::shape::Cuboid;

#[test]
#[allow(non_snake_case)]
fn cuboid_cuboid_EPA() {
    let c = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.5, 0.0, 0.0);
    let mut epa = EPA::new();

    let res = query::intersect_with_contact(&pos1, &c, &pos2, &c, &GjkOptions::default(), &mut epa)
        .expect("Penetration not found.");

    assert_eq!(res.quality, ContactQuality::Converged);
    assert_relative_eq!(res.depth, 1.5, epsilon = 1.0e-4);
    assert_relative_eq!(res.normal.x.abs(), 1.0, epsilon = 1.0e-4);
    // Moving the second cuboid along the normal by the depth separates them.
    assert_relative_eq!(res.normal.into_inner(), Vector3::x(), epsilon = 1.0e-4);
}

#[test]
fn rotated_pair_gives_rotated_normal() {
    let c = Cuboid::new(Vector3::new(2.0, 1.0, 1.0));
    let pos1 = Isometry3::rotation(Vector3::z() * 0.5);
    let pos2 = pos1 * Isometry3::translation(0.0, 1.8, 0.0);
    let mut epa = EPA::new();

    let res = query::intersect_with_contact(&pos1, &c, &pos2, &c, &GjkOptions::default(), &mut epa)
        .expect("Penetration not found.");
    let expected_normal = pos1 * Vector3::y();

    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal.into_inner(), expected_normal, epsilon = 1.0e-3);
}

#[test]
fn contact_points_lie_on_both_cuboids() {
    let c1 = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let c2 = Cuboid::new(Vector3::new(0.5, 0.5, 0.5));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.0, 0.0, 1.3);
    let mut epa = EPA::new();

    let res = query::intersect_with_contact(&pos1, &c1, &pos2, &c2, &GjkOptions::default(), &mut epa)
        .expect("Penetration not found.");

    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(res.point1.z, 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.point2.z, 0.8, epsilon = 1.0e-3);
    assert_relative_eq!((res.point1 - res.point2).norm(), res.depth, epsilon = 1.0e-3);
}
