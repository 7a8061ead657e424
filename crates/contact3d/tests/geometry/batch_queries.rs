use contact3d::na::{Isometry3, UnitQuaternion, Vector3};
use contact3d::query::batch::{self, ShapePair};
use contact3d::query::{self, epa::EPA, DefaultQueryDispatcher};
use contact3d::shape::{Ball, Capsule, Cuboid, Shape};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn random_scene(seed: u64) -> (Vec<Shape>, Vec<(Isometry3<f32>, usize, Isometry3<f32>, usize)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let shapes: Vec<Shape> = vec![
        Ball::new(0.8).into(),
        Cuboid::new(Vector3::new(1.0, 0.5, 0.7)).into(),
        Capsule::new_y(0.6, 0.4).into(),
    ];
    let pose = |rng: &mut StdRng| {
        Isometry3::from_parts(
            Vector3::new(
                rng.gen_range(-1.5..1.5),
                rng.gen_range(-1.5..1.5),
                rng.gen_range(-1.5..1.5),
            )
            .into(),
            UnitQuaternion::from_scaled_axis(Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )),
        )
    };
    let placements = (0..64)
        .map(|_| {
            let pos1 = pose(&mut rng);
            let pos2 = pose(&mut rng);
            (pos1, rng.gen_range(0..3), pos2, rng.gen_range(0..3))
        })
        .collect();

    (shapes, placements)
}

#[test]
fn batch_results_match_individual_queries() {
    let (shapes, placements) = random_scene(7);
    let pairs: Vec<_> = placements
        .iter()
        .map(|(pos1, i1, pos2, i2)| ShapePair::new(*pos1, &shapes[*i1], *pos2, &shapes[*i2]))
        .collect();
    let dispatcher = DefaultQueryDispatcher::default();

    let hits = batch::intersection_tests(&dispatcher, &pairs);
    let contacts = batch::contacts(&dispatcher, &pairs, &mut EPA::new());

    assert_eq!(hits.len(), pairs.len());
    assert_eq!(contacts.len(), pairs.len());

    for (i, pair) in pairs.iter().enumerate() {
        let hit = query::intersection_test(&pair.pos1, pair.shape1, &pair.pos2, pair.shape2);
        // A fresh EPA for every pair: reusing the scratch buffers must not change anything.
        let contact = query::contact(
            &pair.pos1,
            pair.shape1,
            &pair.pos2,
            pair.shape2,
            &mut EPA::new(),
        );

        assert_eq!(hits[i], hit);
        assert_eq!(contacts[i], contact);
        assert_eq!(hits[i], contacts[i].is_some());
    }
}
