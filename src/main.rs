//! AM/FM modulator and demodulator for raw sample files
//!
//! Reads a mono message signal stored as raw little-endian `f32` samples,
//! runs it through one of the two modulation pipelines and writes the
//! modulated and demodulated signals back out in the same format.
//!
//! # Usage Examples
//!
//! ## FM with the default carrier
//! ```bash
//! modwave audio_samples.raw --mode fm
//! ```
//!
//! ## AM with a wider smoothing window, explicit outputs
//! ```bash
//! modwave audio_samples.raw --mode am --filter-window 200 \
//!     --modulated-out mod.raw --demodulated-out demod.raw -v
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;

use modwave::samples::{SampleReader, SampleWriter};
use modwave::{ModulationParams, run_am, run_fm};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Am,
    Fm,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "AM/FM modulate and demodulate raw f32 sample files", long_about = None)]
struct Args {
    /// Input file of raw little-endian f32 samples
    input: String,

    /// Modulation mode
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Sample rate in Hz
    #[arg(short, long, default_value_t = 44_100.0)]
    sample_rate: f64,

    /// Carrier frequency in Hz
    #[arg(short, long, default_value_t = 20_000.0)]
    carrier_freq: f64,

    /// Frequency deviation per unit message amplitude, in Hz (FM)
    #[arg(short = 'k', long, default_value_t = 1.0)]
    modulation_index: f64,

    /// Moving-average window in samples (AM)
    #[arg(short = 'w', long, default_value_t = 100)]
    filter_window: usize,

    /// Output file for the modulated signal (default: modulated_<mode>.raw)
    #[arg(long)]
    modulated_out: Option<String>,

    /// Output file for the demodulated signal (default: demodulated_<mode>.raw)
    #[arg(long)]
    demodulated_out: Option<String>,

    /// Verbosity level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> modwave::Result<()> {
    let args = Args::parse();

    // 0 = WARN (quiet), 1 = INFO, 2 = DEBUG, 3+ = TRACE
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .try_init();

    let samples = SampleReader::from_file(&args.input)?.read_all()?;
    info!("read {} samples from {}", samples.len(), args.input);

    let params = ModulationParams::new(
        args.sample_rate,
        args.carrier_freq,
        args.modulation_index,
        args.filter_window,
    );

    let (modulated, demodulated, default_stem) = match args.mode {
        Mode::Am => {
            let out = run_am(&samples, &params)?;
            (out.modulated, out.demodulated, "am")
        }
        Mode::Fm => {
            let out = run_fm(&samples, &params)?;
            (out.modulated, out.demodulated, "fm")
        }
    };

    let modulated_path = args
        .modulated_out
        .unwrap_or_else(|| format!("modulated_{}.raw", default_stem));
    SampleWriter::create(&modulated_path)?.write_all(&modulated)?;
    info!(
        "wrote {} modulated samples to {}",
        modulated.len(),
        modulated_path
    );

    let demodulated_path = args
        .demodulated_out
        .unwrap_or_else(|| format!("demodulated_{}.raw", default_stem));
    SampleWriter::create(&demodulated_path)?.write_all(&demodulated)?;
    info!(
        "wrote {} demodulated samples to {}",
        demodulated.len(),
        demodulated_path
    );

    Ok(())
}
