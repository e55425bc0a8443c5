//! WAV file writer
//!
//! Writes signed 16-bit PCM samples as a RIFF/WAVE file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::buffer::SampleSink;
use crate::error::WavError;

const HEADER_SIZE: u32 = 44;

/// Write a 16-bit PCM WAV file
///
/// # Arguments
/// * `path` - Output file path
/// * `samples` - Interleaved samples
/// * `channel_count` - Number of interleaved channels
/// * `sample_rate` - Sample rate in Hz
///
/// # Example
/// ```
/// use tonesmith::wav::write_wav_16bit;
///
/// let path = std::env::temp_dir().join("tonesmith_doc_silence.wav");
/// let samples = vec![0i16; 24000]; // 1 second of silence at 24kHz
/// write_wav_16bit(&path, &samples, 1, 24000).unwrap();
/// ```
pub fn write_wav_16bit(
    path: impl AsRef<Path>,
    samples: &[i16],
    channel_count: u16,
    sample_rate: u32,
) -> Result<(), WavError> {
    let bits_per_sample: u16 = 16;
    let block_align = channel_count * (bits_per_sample / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_size = samples
        .len()
        .checked_mul(2)
        .and_then(|size| u32::try_from(size).ok())
        .filter(|size| size.checked_add(HEADER_SIZE - 8).is_some())
        .ok_or(WavError::TooLong(samples.len()))?;
    let file_size = HEADER_SIZE - 8 + data_size;

    let mut file = BufWriter::new(File::create(path)?);

    // RIFF chunk
    file.write_all(b"RIFF")?;
    file.write_all(&file_size.to_le_bytes())?;
    file.write_all(b"WAVE")?;

    // fmt subchunk
    file.write_all(b"fmt ")?;
    file.write_all(&16u32.to_le_bytes())?;
    file.write_all(&1u16.to_le_bytes())?; // PCM
    file.write_all(&channel_count.to_le_bytes())?;
    file.write_all(&sample_rate.to_le_bytes())?;
    file.write_all(&byte_rate.to_le_bytes())?;
    file.write_all(&block_align.to_le_bytes())?;
    file.write_all(&bits_per_sample.to_le_bytes())?;

    // data subchunk
    file.write_all(b"data")?;
    file.write_all(&data_size.to_le_bytes())?;
    for sample in samples {
        file.write_all(&sample.to_le_bytes())?;
    }

    file.flush()?;
    Ok(())
}

/// Sink that stores loaded samples as a WAV file
#[derive(Debug, Clone)]
pub struct WavFileSink {
    path: PathBuf,
}

impl WavFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SampleSink for WavFileSink {
    type Error = WavError;

    fn load_from_samples(
        &mut self,
        samples: &[i16],
        channel_count: u16,
        sample_rate: u32,
    ) -> Result<(), Self::Error> {
        log::debug!(
            "writing {} samples to {}",
            samples.len(),
            self.path.display()
        );
        write_wav_16bit(&self.path, samples, channel_count, sample_rate)
    }
}
