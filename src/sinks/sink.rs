use crate::core::PredictionInterval;
use std::io::Error;

/// Receiver for prediction intervals, in emission order.
///
/// The sink owns all formatting and transport concerns; producers hand it
/// plain interval values and nothing else.
pub trait IntervalSink {
    /// Delivers one interval. Called once per emission, in order.
    fn emit(&mut self, interval: PredictionInterval) -> Result<(), Error>;
}
