#[cfg(feature = "parallel")]
mod batch_parallel;
mod batch_queries;
mod convex_hull;
mod cuboid_cuboid_epa;
mod options;
mod separated_shapes;
mod touching_shapes;
