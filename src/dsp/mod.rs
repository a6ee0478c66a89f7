/// Digital Signal Processing (DSP) primitives.
///
/// This module holds the reusable building blocks shared by the modulation
/// engines.
///
/// # Modules
/// - `filters`: smoothing filters (the AM low-pass stage).
pub mod filters;
