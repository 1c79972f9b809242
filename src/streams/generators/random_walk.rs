use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Sample;
use crate::streams::stream::SampleStream;

/// Synthetic noisy-level stream for exercising interval estimators.
///
/// Maintains a hidden integer level that occasionally drifts by a uniform
/// step, and emits the level plus uniform observation noise. Deterministic
/// for a fixed seed.
#[derive(Debug)]
pub struct RandomWalkGenerator {
    seed: u64,
    rng: StdRng,
    start_level: Sample,
    level: Sample,
    noise: Sample,
    drift_percentage: u32,
    max_step: Sample,
    max_samples: Option<usize>,
    produced: usize,
}

impl RandomWalkGenerator {
    /// Creates a generator emitting `level +- noise`, where the hidden
    /// level takes a uniform step in `[-max_step, max_step]` with
    /// probability `drift_percentage`% per sample.
    pub fn new(
        start_level: Sample,
        noise: Sample,
        drift_percentage: u32,
        max_step: Sample,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if drift_percentage > 100 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Drift percentage must be in [0, 100]",
            ));
        }
        if noise < 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Noise amplitude must be non-negative",
            ));
        }
        if max_step < 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Maximum drift step must be non-negative",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            start_level,
            level: start_level,
            noise,
            drift_percentage,
            max_step,
            max_samples,
            produced: 0,
        })
    }

    #[inline]
    fn maybe_drift(&mut self) {
        let roll: u32 = self.rng.random_range(1..=100);
        if roll <= self.drift_percentage {
            self.level += self.rng.random_range(-self.max_step..=self.max_step);
        }
    }
}

impl SampleStream for RandomWalkGenerator {
    fn has_more_samples(&self) -> bool {
        self.max_samples.map_or(true, |max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<Sample> {
        if !self.has_more_samples() {
            return None;
        }

        self.maybe_drift();
        let sample = self.level + self.rng.random_range(-self.noise..=self.noise);
        self.produced += 1;
        Some(sample)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.level = self.start_level;
        self.produced = 0;
        Ok(())
    }
}
