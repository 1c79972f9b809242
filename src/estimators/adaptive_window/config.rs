use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Constructor-time configuration for [`AdaptiveWindowEstimator`].
///
/// All fields default to the domain values: window in `[5, 20]` starting at
/// 10, variance thresholds 10.0 / 2.0, base delta 1.
///
/// [`AdaptiveWindowEstimator`]: super::AdaptiveWindowEstimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveWindowConfig {
    /// Window capacity at construction.
    pub initial_window_size: usize,
    /// Lower clamp for the window capacity.
    pub min_window_size: usize,
    /// Upper clamp for the window capacity.
    pub max_window_size: usize,
    /// Variance above which the window grows by one.
    pub increase_threshold: f64,
    /// Variance below which the window shrinks by one.
    pub decrease_threshold: f64,
    /// Scale factor for the uncertainty band.
    pub base_delta: i64,
}

impl Default for AdaptiveWindowConfig {
    fn default() -> Self {
        Self {
            initial_window_size: 10,
            min_window_size: 5,
            max_window_size: 20,
            increase_threshold: 10.0,
            decrease_threshold: 2.0,
            base_delta: 1,
        }
    }
}

impl AdaptiveWindowConfig {
    /// Checks internal consistency of the parameters.
    ///
    /// The minimum window must hold at least 2 samples; with a smaller
    /// capacity the buffer could never reach the emission threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_window_size < 2 {
            return Err(ConfigError::InvalidParameter(format!(
                "min_window_size must be >= 2, got {}",
                self.min_window_size
            )));
        }
        if self.min_window_size > self.max_window_size {
            return Err(ConfigError::InvalidParameter(format!(
                "min_window_size {} exceeds max_window_size {}",
                self.min_window_size, self.max_window_size
            )));
        }
        if self.initial_window_size < self.min_window_size
            || self.initial_window_size > self.max_window_size
        {
            return Err(ConfigError::InvalidParameter(format!(
                "initial_window_size {} outside [{}, {}]",
                self.initial_window_size, self.min_window_size, self.max_window_size
            )));
        }
        if !self.increase_threshold.is_finite() || !self.decrease_threshold.is_finite() {
            return Err(ConfigError::InvalidParameter(
                "variance thresholds must be finite".into(),
            ));
        }
        if self.decrease_threshold > self.increase_threshold {
            return Err(ConfigError::InvalidParameter(format!(
                "decrease_threshold {} exceeds increase_threshold {}",
                self.decrease_threshold, self.increase_threshold
            )));
        }
        if self.base_delta < 0 {
            return Err(ConfigError::InvalidParameter(format!(
                "base_delta must be >= 0, got {}",
                self.base_delta
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from a JSON document.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
