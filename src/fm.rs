//! Frequency modulation blocks.
//!
//! This module provides the FM pipeline stages:
//! - [`FmModulator`]: synthesizes the waveform with a running phase
//!   accumulator
//! - [`FmDemodulator`]: estimates instantaneous phase from consecutive
//!   sample pairs
//! - [`normalize`]: scales a demodulated sequence by its signed peak
//!
//! # Example
//!
//! ```
//! use modwave::fm::{FmDemodulator, FmModulator, normalize};
//! use modwave::ModulationParams;
//!
//! let params = ModulationParams::new(44_100.0, 20_000.0, 1.0, 100);
//! let message = vec![0.1_f32; 64];
//!
//! let modulated = FmModulator::new(&params).modulate(&message);
//! let mut demodulated = FmDemodulator::new().demodulate(&modulated);
//! normalize(&mut demodulated);
//! assert_eq!(demodulated.len(), 63);
//! ```

use std::f64::consts::PI;

use num_complex::Complex;

use crate::params::ModulationParams;

/// Frequency modulator with a running phase accumulator.
///
/// Each input sample advances the accumulated phase by
/// `2π · (fc + k · m[i]) / sample_rate`, where `k` is the modulation index,
/// and emits `cos(phase)`. The accumulator makes the loop strictly
/// sequential: every output depends on the phase left behind by the
/// previous one.
///
/// The phase grows without wraparound. It is an `f64`, so precision loss
/// stays below the `f32` output resolution over any input that fits in
/// memory.
pub struct FmModulator {
    sample_rate: f64,
    carrier_freq: f64,
    modulation_index: f64,
}

impl FmModulator {
    /// Create an FM modulator from a parameter bundle.
    ///
    /// Uses `sample_rate`, `carrier_freq` and `modulation_index`; the
    /// filter window is not consulted.
    pub fn new(params: &ModulationParams) -> Self {
        Self {
            sample_rate: params.sample_rate,
            carrier_freq: params.carrier_freq,
            modulation_index: params.modulation_index,
        }
    }

    /// Synthesize the frequency-modulated waveform.
    ///
    /// The accumulator starts at zero, so the first output sample already
    /// includes one phase increment. Output length equals input length.
    pub fn modulate(&self, samples: &[f32]) -> Vec<f32> {
        let mut phase = 0.0_f64;
        let mut out = Vec::with_capacity(samples.len());
        for &s in samples {
            phase +=
                2.0 * PI * (self.carrier_freq + self.modulation_index * s as f64) / self.sample_rate;
            out.push(phase.cos() as f32);
        }
        out
    }
}

/// Instantaneous-phase estimator over consecutive sample pairs.
///
/// Treats each pair of consecutive real samples as the real and imaginary
/// parts of a complex number and takes its phase angle. This is a cheap
/// stand-in for a true analytic-signal (Hilbert-transform) demodulator: the
/// estimate is noisy, but reproducible.
pub struct FmDemodulator;

impl FmDemodulator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate the instantaneous phase of a modulated sequence.
    ///
    /// `out[i] = atan2(modulated[i+1], modulated[i])` for `i` in
    /// `[0, N − 1)`. The output is one sample shorter than the input;
    /// inputs of fewer than two samples produce an empty output.
    pub fn demodulate(&self, modulated: &[f32]) -> Vec<f32> {
        modulated
            .windows(2)
            .map(|pair| Complex::new(pair[0], pair[1]).arg())
            .collect()
    }
}

impl Default for FmDemodulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale a demodulated sequence by its signed maximum, in place.
///
/// The divisor is the raw maximum, not the maximum magnitude, so the result
/// is only confined to [-1, 1] when the peak happens to be positive; a
/// negative or small signed maximum scales the sequence outside that range.
/// A maximum of exactly zero (or an empty sequence) leaves the values
/// unchanged, guarding the division.
pub fn normalize(samples: &mut [f32]) {
    let Some(max) = samples.iter().copied().reduce(f32::max) else {
        return;
    };
    if max == 0.0 {
        return;
    }
    for s in samples.iter_mut() {
        *s /= max;
    }
}
