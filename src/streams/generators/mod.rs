mod random_walk;

pub use random_walk::RandomWalkGenerator;
