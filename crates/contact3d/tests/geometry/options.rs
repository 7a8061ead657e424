use contact3d::na::{Isometry3, Vector3};
use contact3d::query::epa::{EpaOptions, EPA};
use contact3d::query::gjk::GjkOptions;
use contact3d::query::{self, OptionsError};
use contact3d::shape::{Ball, Cuboid};

#[test]
fn defaults() {
    assert_eq!(GjkOptions::default().max_iterations, 100);

    let epa = EpaOptions::default();
    assert_eq!(epa.max_vertices, 1000);
    assert_eq!(epa.max_faces, 8000);
    assert_eq!(epa.max_iterations, 1000);
    assert_relative_eq!(epa.tolerance, 1.0e-4);
    assert_eq!(EPA::new().options(), &epa);
}

#[test]
fn invalid_options_are_rejected() {
    assert_eq!(GjkOptions::new(0), Err(OptionsError::ZeroIterations));
    assert!(matches!(
        EpaOptions::new(128, 1024, 100, f32::INFINITY),
        Err(OptionsError::InvalidTolerance(_))
    ));
    assert!(matches!(
        EpaOptions::new(128, 1024, 100, -1.0),
        Err(OptionsError::InvalidTolerance(_))
    ));
    assert_eq!(
        EpaOptions::new(2, 1024, 100, 1.0e-4),
        Err(OptionsError::TooFewVertices(2))
    );
    assert_eq!(
        OptionsError::TooFewFaces(2).to_string(),
        "EPA needs room for at least 4 faces, got 2"
    );
}

#[test]
fn iteration_limit_means_no_intersection() {
    let cuboid = Cuboid::new(Vector3::repeat(1.0));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.5, 0.0, 0.0);
    let options = GjkOptions::new(1).unwrap();

    assert!(!query::intersect(&pos1, &cuboid, &pos2, &cuboid, &options));
    assert!(query::intersect(
        &pos1,
        &cuboid,
        &pos2,
        &cuboid,
        &GjkOptions::default()
    ));
}

#[test]
fn exhausted_epa_budget_is_flagged() {
    let ball = Ball::new(1.0);
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.5, 0.3, -0.2);
    let options = EpaOptions::new(6, 1024, 100, 1.0e-6).unwrap();
    let mut epa = EPA::with_options(options);

    let contact =
        query::intersect_with_contact(&pos1, &ball, &pos2, &ball, &GjkOptions::default(), &mut epa)
            .expect("The balls overlap.");

    assert!(contact.quality.is_approximate());
    assert!(contact.depth >= 0.0);
    assert!(contact.depth <= 2.0 - pos2.translation.vector.norm() + 1.0e-4);
}
