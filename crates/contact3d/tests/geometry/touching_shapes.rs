use contact3d::na::{Isometry3, Vector3};
use contact3d::query::{self, epa::EPA, gjk::GjkOptions};
use contact3d::shape::{Ball, Cuboid};

// Touching shapes may be reported either way, but the queries must not panic and any
// reported penetration must be (nearly) zero.
fn check_touching<G1, G2>(pos1: &Isometry3<f32>, g1: &G1, pos2: &Isometry3<f32>, g2: &G2)
where
    G1: contact3d::shape::SupportMap,
    G2: contact3d::shape::SupportMap,
{
    let options = GjkOptions::default();
    let mut epa = EPA::new();

    let _ = query::intersect(pos1, g1, pos2, g2, &options);

    if let Some(contact) = query::intersect_with_contact(pos1, g1, pos2, g2, &options, &mut epa) {
        assert!(contact.depth >= 0.0);
        assert!(contact.depth <= 1.0e-3, "depth: {}", contact.depth);
        assert_relative_eq!(contact.normal.norm(), 1.0, epsilon = 1.0e-5);
    }
}

#[test]
fn cuboids_touching_on_a_face() {
    let cuboid = Cuboid::new(Vector3::repeat(1.0));
    check_touching(
        &Isometry3::identity(),
        &cuboid,
        &Isometry3::translation(2.0, 0.0, 0.0),
        &cuboid,
    );
}

#[test]
fn cuboids_touching_on_a_vertex() {
    let cuboid = Cuboid::new(Vector3::repeat(1.0));
    check_touching(
        &Isometry3::identity(),
        &cuboid,
        &Isometry3::translation(2.0, 2.0, 2.0),
        &cuboid,
    );
}

#[test]
fn balls_touching_at_a_point() {
    let ball = Ball::new(1.0);
    check_touching(
        &Isometry3::identity(),
        &ball,
        &Isometry3::translation(0.0, 2.0, 0.0),
        &ball,
    );
}

#[test]
fn coincident_shapes() {
    let cuboid = Cuboid::new(Vector3::repeat(1.0));
    let ball = Ball::new(1.0);
    let pos = Isometry3::translation(1.0, -2.0, 3.0);
    let options = GjkOptions::default();
    let mut epa = EPA::new();

    assert!(query::intersect(&pos, &cuboid, &pos, &cuboid, &options));
    let contact = query::intersect_with_contact(&pos, &cuboid, &pos, &ball, &options, &mut epa)
        .expect("Coincident shapes overlap.");
    assert_relative_eq!(contact.depth, 2.0, epsilon = 1.0e-2);
}
