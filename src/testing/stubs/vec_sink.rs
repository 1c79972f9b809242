use crate::core::PredictionInterval;
use crate::sinks::IntervalSink;
use std::io::Error;
use std::sync::{Arc, Mutex};

/// Storage handle shared between a [`VecSink`] and the test body that
/// inspects it after the owning task has consumed the sink.
pub type SharedIntervals = Arc<Mutex<Vec<PredictionInterval>>>;

/// Collecting sink for tests.
#[derive(Default)]
pub struct VecSink {
    emitted: SharedIntervals,
}

impl VecSink {
    pub fn shared() -> SharedIntervals {
        Arc::new(Mutex::new(Vec::new()))
    }

    pub fn attached(storage: &SharedIntervals) -> Self {
        Self {
            emitted: Arc::clone(storage),
        }
    }
}

impl IntervalSink for VecSink {
    fn emit(&mut self, interval: PredictionInterval) -> Result<(), Error> {
        self.emitted.lock().unwrap().push(interval);
        Ok(())
    }
}
