mod interval;

pub use interval::PredictionInterval;

/// A single integer observation, totally ordered by arrival time.
pub type Sample = i64;
