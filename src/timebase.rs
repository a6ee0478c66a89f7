//! Per-sample elapsed-time generation.

use crate::error::{Error, Result};

/// Generates the elapsed time of each sample index.
///
/// Sample `i` of a stream at `sample_rate` Hz occurs `i / sample_rate`
/// seconds after the first sample. Both AM stages evaluate the carrier
/// against this sequence, so modulation and coherent detection share the
/// same notion of time. Times are `f64`; only the sample values themselves
/// are single precision.
///
/// # Example
///
/// ```
/// use modwave::timebase::TimeBase;
///
/// let time = TimeBase::new(4.0).unwrap().generate(4);
/// assert_eq!(time, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeBase {
    sample_rate: f64,
}

impl TimeBase {
    /// Create a time base for the given sample rate in Hz.
    pub fn new(sample_rate: f64) -> Result<Self> {
        if sample_rate <= 0.0 {
            return Err(Error::config(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }
        Ok(Self { sample_rate })
    }

    /// Elapsed time of each of the first `n` samples, in seconds.
    pub fn generate(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 / self.sample_rate).collect()
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_values_exact() {
        let time = TimeBase::new(44_100.0).unwrap().generate(1000);
        assert_eq!(time.len(), 1000);
        for (i, &t) in time.iter().enumerate() {
            assert_eq!(t, i as f64 / 44_100.0);
        }
    }

    #[test]
    fn test_strictly_increasing() {
        let time = TimeBase::new(8000.0).unwrap().generate(100);
        for pair in time.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_empty_sequence() {
        let time = TimeBase::new(44_100.0).unwrap().generate(0);
        assert!(time.is_empty());
    }

    #[test]
    fn test_rejects_zero_rate() {
        assert!(TimeBase::new(0.0).is_err());
        assert!(TimeBase::new(-1.0).is_err());
    }
}
