mod adaptive_window_estimator;
mod config;

pub use adaptive_window_estimator::AdaptiveWindowEstimator;
pub use config::{AdaptiveWindowConfig, ConfigError};
