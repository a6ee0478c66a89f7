//! Pipeline entry points.
//!
//! [`run_am`] and [`run_fm`] are the only surface the core exposes upward:
//! each validates the configuration, runs one engine over a fully
//! materialized input sequence and returns both the modulated and the
//! demodulated signal. A failed run returns before any computation starts,
//! so no partial output is ever produced.

use tracing::debug;

use crate::am::AmEngine;
use crate::error::{Error, Result};
use crate::fm::{self, FmDemodulator, FmModulator};
use crate::params::ModulationParams;
use crate::timebase::TimeBase;

/// Output of one AM pipeline run.
pub struct AmOutput {
    /// The message multiplied by the carrier
    pub modulated: Vec<f32>,
    /// Coherently detected and low-pass filtered signal, same length as the
    /// input
    pub demodulated: Vec<f32>,
}

/// Output of one FM pipeline run.
pub struct FmOutput {
    /// The phase-accumulated waveform, same length as the input
    pub modulated: Vec<f32>,
    /// Instantaneous-phase estimate, peak-normalized, one sample shorter
    /// than the input
    pub demodulated: Vec<f32>,
}

/// Run the AM pipeline: modulate, then coherently demodulate.
///
/// # Errors
///
/// [`Error::Config`] if the sample rate, carrier frequency or filter window
/// is invalid (`filter_window` must be at least 1 and shorter than the
/// input); [`Error::EmptyInput`] if `samples` is empty.
pub fn run_am(samples: &[f32], params: &ModulationParams) -> Result<AmOutput> {
    params.validate()?;
    if samples.is_empty() {
        return Err(Error::EmptyInput);
    }
    if params.filter_window < 1 {
        return Err(Error::config("filter window must be at least 1"));
    }
    if params.filter_window >= samples.len() {
        return Err(Error::config(format!(
            "filter window {} must be shorter than the input ({} samples)",
            params.filter_window,
            samples.len()
        )));
    }

    let time = TimeBase::new(params.sample_rate)?.generate(samples.len());
    let engine = AmEngine::new(params);

    debug!(
        "AM pipeline: {} samples, carrier {} Hz, window {}",
        samples.len(),
        params.carrier_freq,
        params.filter_window
    );

    let modulated = engine.modulate(samples, &time);
    let demodulated = engine.demodulate(&modulated, &time);
    Ok(AmOutput {
        modulated,
        demodulated,
    })
}

/// Run the FM pipeline: modulate, demodulate, peak-normalize.
///
/// The demodulated sequence is one sample shorter than the input (see
/// [`FmDemodulator::demodulate`]).
///
/// # Errors
///
/// [`Error::Config`] if the sample rate, carrier frequency or modulation
/// index is invalid; [`Error::EmptyInput`] if `samples` is empty.
pub fn run_fm(samples: &[f32], params: &ModulationParams) -> Result<FmOutput> {
    params.validate()?;
    if samples.is_empty() {
        return Err(Error::EmptyInput);
    }
    if params.modulation_index <= 0.0 {
        return Err(Error::config(format!(
            "modulation index must be positive, got {}",
            params.modulation_index
        )));
    }

    debug!(
        "FM pipeline: {} samples, carrier {} Hz, modulation index {}",
        samples.len(),
        params.carrier_freq,
        params.modulation_index
    );

    let modulated = FmModulator::new(params).modulate(samples);
    let mut demodulated = FmDemodulator::new().demodulate(&modulated);
    fm::normalize(&mut demodulated);
    Ok(FmOutput {
        modulated,
        demodulated,
    })
}
