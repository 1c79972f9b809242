use std::collections::VecDeque;

use crate::core::{PredictionInterval, Sample};
use crate::estimators::adaptive_window::{AdaptiveWindowConfig, ConfigError};
use crate::estimators::estimator::IntervalEstimator;
use crate::utils::math::{floor_median, iqr_fences, population_variance};

/// Self-contained adaptive-window level tracker.
///
/// Keeps a bounded history of the most recent samples and, per ingested
/// sample, re-derives everything it needs from that history:
///
/// - population variance of the full buffer drives the window capacity up
///   (noisy signal, remember more) or down (quiet signal, react faster),
///   one step per sample within the configured bounds;
/// - index-quartile fences at 1x IQR select the filtered view used for the
///   smoothed mean, leaving the authoritative buffer untouched;
/// - the point estimate averages that smoothed mean with the floor median
///   of the unfiltered buffer;
/// - the band half-width scales `base_delta` by the fraction of the window
///   the filtered view retains.
///
/// Eviction fires only when the buffer length equals the window capacity as
/// it stood *before* this sample's resize. A window that has just shrunk
/// therefore leaves an oversized buffer behind, and nothing is evicted
/// until the lengths re-align; callers must not assume
/// `history_len() <= window_size()`. See
/// `tests::shrunk_window_leaves_oversized_buffer`.
pub struct AdaptiveWindowEstimator {
    history: VecDeque<Sample>,
    window_size: usize,
    config: AdaptiveWindowConfig,
}

impl AdaptiveWindowEstimator {
    pub fn new(config: AdaptiveWindowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            history: VecDeque::with_capacity(config.initial_window_size),
            window_size: config.initial_window_size,
            config,
        })
    }

    pub fn with_defaults() -> Self {
        let config = AdaptiveWindowConfig::default();
        Self {
            history: VecDeque::with_capacity(config.initial_window_size),
            window_size: config.initial_window_size,
            config,
        }
    }

    pub fn config(&self) -> &AdaptiveWindowConfig {
        &self.config
    }

    /// Number of samples currently buffered. May exceed [`window_size`]
    /// after the window shrinks.
    ///
    /// [`window_size`]: IntervalEstimator::window_size
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn resize_window(&mut self, variance: f64) {
        if variance > self.config.increase_threshold && self.window_size < self.config.max_window_size
        {
            self.window_size += 1;
        } else if variance < self.config.decrease_threshold
            && self.window_size > self.config.min_window_size
        {
            self.window_size -= 1;
        }
    }
}

impl IntervalEstimator for AdaptiveWindowEstimator {
    fn ingest(&mut self, sample: Sample) -> Option<PredictionInterval> {
        // Eviction is gated on equality with the pre-resize capacity.
        if self.history.len() == self.window_size {
            self.history.pop_front();
        }
        self.history.push_back(sample);

        if self.history.len() < 2 {
            return None;
        }

        let snapshot: Vec<Sample> = self.history.iter().copied().collect();
        let variance = population_variance(&snapshot);

        let (lower_fence, upper_fence) = iqr_fences(&snapshot)?;
        let filtered: Vec<Sample> = snapshot
            .iter()
            .copied()
            .filter(|&v| v >= lower_fence && v <= upper_fence)
            .collect();

        self.resize_window(variance);

        // Fence endpoints are buffer elements, so the filtered view cannot
        // actually be empty; guard the division all the same.
        if filtered.is_empty() {
            return None;
        }

        let smoothed = filtered
            .iter()
            .sum::<Sample>()
            .div_euclid(filtered.len() as Sample);
        let median = floor_median(&snapshot)?;
        let estimate = (smoothed + median).div_euclid(2);

        let delta =
            (self.config.base_delta * filtered.len() as Sample).div_euclid(self.window_size as Sample);

        Some(PredictionInterval::new(estimate - delta, estimate + delta))
    }

    fn window_size(&self) -> usize {
        self.window_size
    }

    fn reset(&mut self) {
        self.history.clear();
        self.window_size = self.config.initial_window_size;
    }
}
