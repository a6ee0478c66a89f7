//! Test helper utilities for generating synthetic message signals

use std::f32::consts::PI;

/// Generate a sine-wave message signal
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `num_samples` - Number of samples to generate
pub fn generate_sine(frequency: f32, sample_rate: f32, num_samples: usize) -> Vec<f32> {
    let angular_freq = 2.0 * PI * frequency / sample_rate;
    (0..num_samples)
        .map(|n| (angular_freq * n as f32).sin())
        .collect()
}

/// Generate a constant (DC) message signal
pub fn generate_dc(value: f32, num_samples: usize) -> Vec<f32> {
    vec![value; num_samples]
}

/// Serialize samples as the raw little-endian f32 byte layout used by the
/// sample files
pub fn samples_to_bytes(samples: &[f32]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(samples.len() * 4);
    for &sample in samples {
        buffer.extend_from_slice(&sample.to_le_bytes());
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sine_length() {
        let samples = generate_sine(440.0, 44_100.0, 100);
        assert_eq!(samples.len(), 100);
    }

    #[test]
    fn test_generate_sine_starts_at_zero() {
        let samples = generate_sine(440.0, 44_100.0, 10);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_generate_dc() {
        let samples = generate_dc(0.5, 50);
        assert_eq!(samples.len(), 50);
        assert!(samples.iter().all(|&s| s == 0.5));
    }

    #[test]
    fn test_samples_to_bytes_length() {
        let bytes = samples_to_bytes(&[1.0, 2.0, 3.0]);
        assert_eq!(bytes.len(), 12);
    }
}
