//! Sample Stream Reading and Writing
//!
//! This module provides the sample source and sink collaborators used
//! around the modulation pipelines. A sample stream is stored as a
//! contiguous array of little-endian 32-bit floats, one per sample, mono;
//! the sample count is the byte length divided by four. The pipelines are
//! batch-oriented, so the reader materializes the whole stream at once
//! rather than iterating in chunks.

use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/**
 * Synchronous Sample Source
 */
pub struct SampleReader<R: Read> {
    reader: R,
}

impl SampleReader<BufReader<std::fs::File>> {
    /// Open a raw sample file. Paths starting with `~` are expanded to the
    /// home directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expanduser(path.as_ref().to_path_buf());
        let file = std::fs::File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> SampleReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read every sample from the underlying storage.
    ///
    /// The byte stream is reinterpreted as contiguous little-endian `f32`
    /// values; trailing bytes that do not form a full sample are ignored.
    pub fn read_all(&mut self) -> Result<Vec<f32>> {
        let mut buffer = Vec::new();
        self.reader.read_to_end(&mut buffer)?;
        Ok(convert_bytes_to_samples(&buffer))
    }
}

/**
 * Synchronous Sample Sink
 */
pub struct SampleWriter<W: Write> {
    writer: W,
}

impl SampleWriter<BufWriter<std::fs::File>> {
    /// Create (or truncate) a raw sample file. Paths starting with `~` are
    /// expanded to the home directory.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expanduser(path.as_ref().to_path_buf());
        let file = std::fs::File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SampleWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write samples to the underlying storage as contiguous little-endian
    /// `f32` values, preserving order.
    pub fn write_all(&mut self, samples: &[f32]) -> Result<()> {
        for &sample in samples {
            self.writer.write_all(&sample.to_le_bytes())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn convert_bytes_to_samples(buffer: &[u8]) -> Vec<f32> {
    buffer
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

fn expanduser(path: PathBuf) -> PathBuf {
    // Check if the path starts with "~"
    if let Some(stripped) = path.to_str().and_then(|p| p.strip_prefix("~"))
        && let Some(home_dir) = dirs::home_dir()
    {
        // Join the home directory with the rest of the path
        return home_dir.join(stripped.trim_start_matches('/'));
    }
    path
}
