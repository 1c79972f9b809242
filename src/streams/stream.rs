use crate::core::Sample;
use std::io::Error;

/// Pull-based interface for ordered sources of integer samples.
///
/// Implementations may represent finite sources (e.g., files) or unbounded
/// generators. Samples are delivered in arrival order, one per call.
pub trait SampleStream {
    /// Indicates whether the stream *may* produce more samples.
    ///
    /// Finite streams should return `false` once exhausted. Unbounded
    /// generators typically return `true` always. Sources that cannot look
    /// ahead cheaply may report `true` until a read actually fails.
    ///
    /// This call should be cheap and side effect free. If it returns
    /// `false`, a subsequent call to [`next_sample`] must return `None`.
    ///
    /// [`next_sample`]: SampleStream::next_sample
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` if the stream is exhausted.
    ///
    /// Implementations should not panic on normal end-of-stream conditions.
    /// For sources that can contain malformed units, implementations may
    /// choose to skip invalid ones and continue, or end the stream
    /// (returning `None`). Malformed input must never reach the consumer.
    fn next_sample(&mut self) -> Option<Sample>;

    /// Resets the stream to its initial state.
    ///
    /// Generators usually re-seed their RNG and clear internal counters;
    /// seekable sources rewind. Returns an error if the underlying source
    /// cannot be rewound.
    fn restart(&mut self) -> Result<(), Error>;
}
