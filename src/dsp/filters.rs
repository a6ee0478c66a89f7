//! Smoothing filter implementations.
//!
//! This module provides the moving-average filter used as the low-pass
//! stage of AM coherent detection:
//! - [`MovingAverage`]: fixed-size forward-window mean
//!
//! # Example
//!
//! ```
//! use modwave::dsp::filters::MovingAverage;
//!
//! let filter = MovingAverage::new(4);
//! let input = vec![0.5; 100];
//! let output = filter.process(&input);
//! assert_eq!(output.len(), 100);
//! ```

/// Fixed-size forward-window moving-average filter.
///
/// For an input of length `N` and window `W`, output index `i` in
/// `[0, N − W)` is the mean of the `W` input samples starting at `i`. The
/// window only looks forward (it is neither centered nor zero-padded), so
/// the trailing `W` indices have fewer than `W` samples ahead of them and
/// are passed through unchanged. Callers that need every index smoothed
/// must choose `W` smaller than the shortest input they process.
///
/// A window of `N` or more leaves the entire output identical to the input.
///
/// # Example
///
/// ```
/// use modwave::dsp::filters::MovingAverage;
///
/// let filter = MovingAverage::new(2);
/// let output = filter.process(&[1.0, 3.0, 5.0, 7.0]);
/// // First two indices averaged over [i, i+2); last two untouched
/// assert_eq!(output, vec![2.0, 4.0, 5.0, 7.0]);
/// ```
pub struct MovingAverage {
    window: usize,
}

impl MovingAverage {
    /// Create a moving-average filter with the given window length.
    ///
    /// # Panics
    ///
    /// Panics if `window` is 0.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window length must be greater than 0");
        Self { window }
    }

    /// Smooth a block of samples.
    ///
    /// Returns a vector of the same length as the input: indices
    /// `[0, N − W)` hold the forward-window mean, the rest hold the raw
    /// input value.
    pub fn process(&self, samples: &[f32]) -> Vec<f32> {
        let w = self.window;
        let mut out = samples.to_vec();

        for (i, out_elem) in out
            .iter_mut()
            .enumerate()
            .take(samples.len().saturating_sub(w))
        {
            let mut acc = 0.0f32;
            for &s in &samples[i..i + w] {
                acc += s;
            }
            *out_elem = acc / w as f32;
        }
        out
    }

    /// Get the window length in samples.
    pub fn window(&self) -> usize {
        self.window
    }
}
