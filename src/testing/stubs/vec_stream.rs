use crate::core::Sample;
use crate::streams::SampleStream;
use std::io::Error;

/// In-memory sample source for tests.
pub struct VecStream {
    pub samples: Vec<Sample>,
    idx: usize,
}

impl VecStream {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples, idx: 0 }
    }
}

impl SampleStream for VecStream {
    fn has_more_samples(&self) -> bool {
        self.idx < self.samples.len()
    }

    fn next_sample(&mut self) -> Option<Sample> {
        if !self.has_more_samples() {
            return None;
        }

        let sample = self.samples[self.idx];
        self.idx += 1;
        Some(sample)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
