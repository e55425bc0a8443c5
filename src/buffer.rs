//! PCM sample buffers
//!
//! Output of synthesis: signed 16-bit samples with their sample rate and
//! channel count, ready to hand to a playback or storage backend.

use std::path::Path;
use std::time::Duration;

use crate::error::WavError;
use crate::wav::write_wav_16bit;

/// Receiver of finished PCM data, e.g. a sound buffer of an audio backend
pub trait SampleSink {
    type Error;

    /// Load interleaved 16-bit samples
    fn load_from_samples(
        &mut self,
        samples: &[i16],
        channel_count: u16,
        sample_rate: u32,
    ) -> Result<(), Self::Error>;
}

/// Signed 16-bit PCM audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
    channel_count: u16,
}

impl SampleBuffer {
    /// Create a mono buffer
    pub fn mono(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            channel_count: 1,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Number of samples over all channels
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    /// Playback duration
    pub fn duration(&self) -> Duration {
        let frames = self.samples.len() as f64 / self.channel_count.max(1) as f64;
        Duration::from_secs_f64(frames / self.sample_rate.max(1) as f64)
    }

    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0)
    }

    /// Hand the samples to a playback or storage backend
    pub fn load_into<S: SampleSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.load_from_samples(&self.samples, self.channel_count, self.sample_rate)
    }

    /// Write the buffer as a 16-bit PCM WAV file
    pub fn save_wav(&self, path: impl AsRef<Path>) -> Result<(), WavError> {
        write_wav_16bit(path, &self.samples, self.channel_count, self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        loaded: Vec<(Vec<i16>, u16, u32)>,
    }

    impl SampleSink for RecordingSink {
        type Error = std::convert::Infallible;

        fn load_from_samples(
            &mut self,
            samples: &[i16],
            channel_count: u16,
            sample_rate: u32,
        ) -> Result<(), Self::Error> {
            self.loaded
                .push((samples.to_vec(), channel_count, sample_rate));
            Ok(())
        }
    }

    #[test]
    fn test_mono_buffer() {
        let buffer = SampleBuffer::mono(vec![0, 1, -1, 0], 24000);
        assert_eq!(buffer.sample_count(), 4);
        assert_eq!(buffer.channel_count(), 1);
        assert_eq!(buffer.sample_rate(), 24000);
        assert!(!buffer.is_silent());
    }

    #[test]
    fn test_duration() {
        let buffer = SampleBuffer::mono(vec![0; 18000], 24000);
        assert_eq!(buffer.duration(), Duration::from_millis(750));
        assert!(buffer.is_silent());
    }

    #[test]
    fn test_load_into_sink() {
        let buffer = SampleBuffer::mono(vec![5, -5], 24000);
        let mut sink = RecordingSink::default();
        buffer.load_into(&mut sink).unwrap();
        assert_eq!(sink.loaded, vec![(vec![5, -5], 1, 24000)]);
    }
}
