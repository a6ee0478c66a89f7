//! Amplitude modulation blocks.
//!
//! This module provides the two halves of the AM pipeline:
//! - [`AmEngine::modulate`]: multiply the message by a cosine carrier
//! - [`AmEngine::demodulate`]: coherent detection followed by a
//!   moving-average low-pass stage
//!
//! Both stages evaluate the carrier against a shared elapsed-time sequence
//! (see [`crate::timebase::TimeBase`]), so the detector's local carrier is
//! phase-aligned with the one used at modulation.
//!
//! # Example
//!
//! ```
//! use modwave::am::AmEngine;
//! use modwave::timebase::TimeBase;
//! use modwave::ModulationParams;
//!
//! let params = ModulationParams::new(1000.0, 100.0, 1.0, 10);
//! let time = TimeBase::new(params.sample_rate).unwrap().generate(100);
//! let message = vec![0.5_f32; 100];
//!
//! let engine = AmEngine::new(&params);
//! let modulated = engine.modulate(&message, &time);
//! let demodulated = engine.demodulate(&modulated, &time);
//! assert_eq!(demodulated.len(), 100);
//! ```

use std::f64::consts::PI;

use crate::dsp::filters::MovingAverage;
use crate::params::ModulationParams;

/// Amplitude modulator and coherent detector over a shared time base.
pub struct AmEngine {
    carrier_freq: f64,
    filter: MovingAverage,
}

impl AmEngine {
    /// Create an AM engine from a parameter bundle.
    ///
    /// Uses `carrier_freq` and `filter_window`; the modulation index is not
    /// consulted.
    ///
    /// # Panics
    ///
    /// Panics if `params.filter_window` is 0. The pipeline entry points
    /// validate the window before constructing an engine.
    pub fn new(params: &ModulationParams) -> Self {
        Self {
            carrier_freq: params.carrier_freq,
            filter: MovingAverage::new(params.filter_window),
        }
    }

    /// Multiply the message by the carrier.
    ///
    /// `modulated[i] = samples[i] * cos(2π · fc · time[i])`. The message
    /// multiplies the carrier directly, with no unity offset ahead of the
    /// cosine: a zero message produces a zero output and the carrier itself
    /// is suppressed (double-sideband, suppressed carrier in effect).
    ///
    /// Output length equals input length. `time` must be at least as long
    /// as `samples`.
    pub fn modulate(&self, samples: &[f32], time: &[f64]) -> Vec<f32> {
        let omega = 2.0 * PI * self.carrier_freq;
        samples
            .iter()
            .zip(time)
            .map(|(&s, &t)| (s as f64 * (omega * t).cos()) as f32)
            .collect()
    }

    /// Recover the message by coherent detection.
    ///
    /// Multiplies the received signal by a locally generated copy of the
    /// carrier, scaled by 2: `raw[i] = modulated[i] * 2 * cos(2π · fc ·
    /// time[i])`. The product carries the message at baseband plus a copy
    /// at twice the carrier frequency; the moving-average stage suppresses
    /// the latter.
    ///
    /// Only indices `[0, N − W)` come out smoothed; the trailing
    /// window-length of samples keeps the raw product value (see
    /// [`MovingAverage`]).
    pub fn demodulate(&self, modulated: &[f32], time: &[f64]) -> Vec<f32> {
        let omega = 2.0 * PI * self.carrier_freq;
        let raw: Vec<f32> = modulated
            .iter()
            .zip(time)
            .map(|(&s, &t)| (s as f64 * 2.0 * (omega * t).cos()) as f32)
            .collect();
        self.filter.process(&raw)
    }

    /// Get the moving-average window length in samples.
    pub fn filter_window(&self) -> usize {
        self.filter.window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timebase::TimeBase;
    use approx::assert_relative_eq;

    fn params(sample_rate: f64, carrier_freq: f64, window: usize) -> ModulationParams {
        ModulationParams::new(sample_rate, carrier_freq, 1.0, window)
    }

    #[test]
    fn test_zero_message_modulates_to_zero() {
        // No unity offset: silence in, silence out, whatever the carrier
        let p = params(4.0, 1.0, 2);
        let time = TimeBase::new(p.sample_rate).unwrap().generate(4);
        let engine = AmEngine::new(&p);

        let modulated = engine.modulate(&[0.0; 4], &time);
        assert_eq!(modulated, vec![0.0; 4]);
    }

    #[test]
    fn test_modulate_length_matches_input() {
        let p = params(44_100.0, 20_000.0, 100);
        let time = TimeBase::new(p.sample_rate).unwrap().generate(500);
        let engine = AmEngine::new(&p);

        let modulated = engine.modulate(&vec![0.3; 500], &time);
        assert_eq!(modulated.len(), 500);
    }

    #[test]
    fn test_modulate_deterministic() {
        let p = params(44_100.0, 20_000.0, 100);
        let time = TimeBase::new(p.sample_rate).unwrap().generate(300);
        let engine = AmEngine::new(&p);
        let message: Vec<f32> = (0..300).map(|i| ((i % 7) as f32 - 3.0) / 4.0).collect();

        let first = engine.modulate(&message, &time);
        let second = engine.modulate(&message, &time);
        assert_eq!(first, second, "modulation must be bit-identical across calls");
    }

    #[test]
    fn test_constant_message_recovered_in_smoothed_region() {
        // 2*fc = 200 Hz at 1 kHz is 5 samples per cycle; a window of 50
        // covers exactly 10 cycles, so the double-frequency term averages
        // out and the smoothed region converges to the message value.
        let p = params(1000.0, 100.0, 50);
        let n = 500;
        let c = 0.5_f32;
        let time = TimeBase::new(p.sample_rate).unwrap().generate(n);
        let engine = AmEngine::new(&p);

        let modulated = engine.modulate(&vec![c; n], &time);
        let demodulated = engine.demodulate(&modulated, &time);

        assert_eq!(demodulated.len(), n);
        for &sample in &demodulated[..n - 50] {
            assert_relative_eq!(sample, c, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_demodulate_tail_is_raw_product() {
        let p = params(1000.0, 100.0, 8);
        let n = 32;
        let time = TimeBase::new(p.sample_rate).unwrap().generate(n);
        let engine = AmEngine::new(&p);
        let message: Vec<f32> = (0..n).map(|i| (i as f32 / n as f32) - 0.5).collect();

        let modulated = engine.modulate(&message, &time);
        let demodulated = engine.demodulate(&modulated, &time);

        let omega = 2.0 * PI * p.carrier_freq;
        for i in n - 8..n {
            let raw = (modulated[i] as f64 * 2.0 * (omega * time[i]).cos()) as f32;
            assert_eq!(demodulated[i], raw);
        }
    }
}
