use crate::core::{PredictionInterval, Sample};

/// Online interval estimator over an ordered stream of integer samples.
///
/// Implementations accept observations one at a time via [`ingest`] and,
/// once they hold enough history, answer each observation with a
/// lower/upper bound on the signal's current level.
pub trait IntervalEstimator {
    /// Incorporates a new observation.
    ///
    /// Returns `None` while the estimator has insufficient history to bound
    /// the signal (this is a defined state, not an error). Once intervals
    /// start flowing, exactly one is produced per ingested sample, in
    /// ingestion order.
    fn ingest(&mut self, sample: Sample) -> Option<PredictionInterval>;

    /// Current window capacity used for retention and band sizing.
    fn window_size(&self) -> usize;

    /// Clears accumulated history (configuration does not change).
    fn reset(&mut self);
}
