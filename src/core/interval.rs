use crate::core::Sample;
use std::fmt::{Display, Formatter, Result};

/// Prediction interval emitted after an ingested sample: the estimator's
/// best guess at the signal's current level, widened by its uncertainty.
///
/// `lower <= upper` holds for every interval produced by this crate; the
/// band collapses to a single point when the uncertainty delta is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionInterval {
    pub lower: Sample,
    pub upper: Sample,
}

impl PredictionInterval {
    /// Convenience constructor
    #[inline]
    pub fn new(lower: Sample, upper: Sample) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn width(&self) -> Sample {
        self.upper - self.lower
    }

    #[inline]
    pub fn contains(&self, value: Sample) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl Display for PredictionInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_upper_minus_lower() {
        assert_eq!(PredictionInterval::new(3, 9).width(), 6);
        assert_eq!(PredictionInterval::new(-4, -4).width(), 0);
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let i = PredictionInterval::new(-2, 2);
        assert!(i.contains(-2));
        assert!(i.contains(0));
        assert!(i.contains(2));
        assert!(!i.contains(-3));
        assert!(!i.contains(3));
    }

    #[test]
    fn display_formats_as_bracketed_pair() {
        assert_eq!(PredictionInterval::new(48, 52).to_string(), "[48, 52]");
    }
}
