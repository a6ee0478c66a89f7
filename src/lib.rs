#![doc = include_str!("../readme.md")]

pub mod am;
pub mod dsp;
pub mod error;
pub mod fm;
pub mod params;
pub mod pipeline;
pub mod samples;
pub mod timebase;

pub use error::{Error, Result};
pub use params::ModulationParams;
pub use pipeline::{AmOutput, FmOutput, run_am, run_fm};
