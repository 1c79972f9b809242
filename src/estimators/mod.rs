mod adaptive_window;
mod estimator;

pub use adaptive_window::{AdaptiveWindowConfig, AdaptiveWindowEstimator, ConfigError};
pub use estimator::IntervalEstimator;
