use super::batch_queries::random_scene;
use contact3d::query::batch::{self, ShapePair};
use contact3d::query::epa::{EpaOptions, EPA};
use contact3d::query::DefaultQueryDispatcher;

#[test]
fn parallel_contacts_match_sequential_ones() {
    let (shapes, placements) = random_scene(11);
    let pairs: Vec<_> = placements
        .iter()
        .map(|(pos1, i1, pos2, i2)| ShapePair::new(*pos1, &shapes[*i1], *pos2, &shapes[*i2]))
        .collect();
    let dispatcher = DefaultQueryDispatcher::default();

    let sequential = batch::contacts(&dispatcher, &pairs, &mut EPA::new());
    let parallel = batch::contacts_par(&dispatcher, &pairs, EpaOptions::default());

    assert_eq!(sequential, parallel);
}
