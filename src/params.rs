//! Pipeline configuration.

use tracing::warn;

use crate::error::{Error, Result};

/// Immutable parameter bundle for one pipeline invocation.
///
/// Every run of an AM or FM pipeline is a pure function of its input samples
/// plus one of these; there is no ambient configuration state. The FM
/// pipeline reads `modulation_index` and ignores `filter_window`; the AM
/// pipeline does the opposite.
///
/// # Example
///
/// ```
/// use modwave::ModulationParams;
///
/// let params = ModulationParams::new(44_100.0, 20_000.0, 1.0, 100);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ModulationParams {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Carrier frequency in Hz
    pub carrier_freq: f64,
    /// Frequency deviation per unit message amplitude, in Hz (FM only)
    pub modulation_index: f64,
    /// Moving-average window length in samples (AM only)
    pub filter_window: usize,
}

impl ModulationParams {
    pub fn new(
        sample_rate: f64,
        carrier_freq: f64,
        modulation_index: f64,
        filter_window: usize,
    ) -> Self {
        Self {
            sample_rate,
            carrier_freq,
            modulation_index,
            filter_window,
        }
    }

    /// Check the parameters shared by both pipelines.
    ///
    /// Rejects a non-positive sample rate or carrier frequency. A carrier at
    /// or above the Nyquist frequency is accepted but logged, since the
    /// modulated waveform will alias.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate <= 0.0 {
            return Err(Error::config(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.carrier_freq <= 0.0 {
            return Err(Error::config(format!(
                "carrier frequency must be positive, got {}",
                self.carrier_freq
            )));
        }
        if self.carrier_freq >= self.sample_rate / 2.0 {
            warn!(
                "carrier frequency {} Hz is at or above Nyquist ({} Hz)",
                self.carrier_freq,
                self.sample_rate / 2.0
            );
        }
        Ok(())
    }
}
