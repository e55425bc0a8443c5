//! Song rendering
//!
//! Renders every track of a song into its own buffer and mixes them down
//! into a single mono buffer. Tracks are independent, so they can be
//! synthesized on separate threads.

use std::thread;

use super::song::Song;
use crate::buffer::SampleBuffer;
use crate::error::SynthError;
use crate::generator::{synthesize, SAMPLE_RATE};

/// Configuration for song rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Synthesize tracks on one thread each
    pub parallel: bool,
    /// Gain applied to every track when mixing
    pub mix_gain: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            mix_gain: 1.0,
        }
    }
}

/// Renders songs into PCM buffers
pub struct SongRenderer {
    config: RenderConfig,
}

impl SongRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render each track into its own buffer, in track order
    ///
    /// All tracks are validated before any of them is synthesized.
    pub fn render_tracks(&self, song: &Song) -> Result<Vec<SampleBuffer>, SynthError> {
        song.validate()?;

        log::info!(
            "rendering {} tracks at {} bpm",
            song.tracks.len(),
            song.tempo
        );

        if !self.config.parallel || song.tracks.len() < 2 {
            return song.tracks.iter().map(synthesize).collect();
        }

        thread::scope(|scope| {
            let handles: Vec<_> = song
                .tracks
                .iter()
                .map(|track| scope.spawn(move || synthesize(track)))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }

    /// Render all tracks and mix them into one buffer
    pub fn render_mix(&self, song: &Song) -> Result<SampleBuffer, SynthError> {
        let tracks = self.render_tracks(song)?;
        Ok(mixdown(&tracks, self.config.mix_gain))
    }
}

impl Default for SongRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Sum buffers sample by sample
///
/// The result is as long as the longest input. Each input is scaled by
/// `gain` and the sum is clamped to the 16-bit range.
pub fn mixdown(buffers: &[SampleBuffer], gain: f32) -> SampleBuffer {
    let length = buffers.iter().map(SampleBuffer::sample_count).max().unwrap_or(0);
    let sample_rate = buffers
        .first()
        .map(SampleBuffer::sample_rate)
        .unwrap_or(SAMPLE_RATE);

    let mut mix = vec![0.0f32; length];
    for buffer in buffers {
        for (acc, &sample) in mix.iter_mut().zip(buffer.samples()) {
            *acc += sample as f32 * gain;
        }
    }

    let samples = mix
        .into_iter()
        .map(|sample| sample.clamp(i16::MIN as f32, i16::MAX as f32) as i16)
        .collect();

    SampleBuffer::mono(samples, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Oscillator, Waveform};
    use crate::pipeline::song::Track;

    fn song() -> Song {
        Song {
            tempo: 120.0,
            tracks: vec![
                Track::new(Oscillator::new(Waveform::Sine, 0.2, 10.0), "A4 100 C5 100"),
                Track::new(Oscillator::new(Waveform::Square, 0.0, 0.0), "E4 50"),
                Track::new(Oscillator::new(Waveform::Sine, 0.5, 5.0), "pause 20 G4 80"),
            ],
        }
    }

    #[test]
    fn test_render_tracks_in_order() {
        let renderer = SongRenderer::default();
        let buffers = renderer.render_tracks(&song()).unwrap();
        assert_eq!(buffers.len(), 3);
        assert_eq!(buffers[0].sample_count(), 4800);
        assert_eq!(buffers[1].sample_count(), 1200);
        assert_eq!(buffers[2].sample_count(), 2400);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel = SongRenderer::new(RenderConfig {
            parallel: true,
            ..Default::default()
        });
        let sequential = SongRenderer::new(RenderConfig {
            parallel: false,
            ..Default::default()
        });
        assert_eq!(
            parallel.render_tracks(&song()).unwrap(),
            sequential.render_tracks(&song()).unwrap()
        );
    }

    #[test]
    fn test_invalid_track_fails_before_rendering() {
        let mut song = song();
        let bad = Track::new(Oscillator::new(Waveform::Sine, 0.0, 0.0), "A4 100 X9 1");
        song.tracks.push(bad);
        assert!(SongRenderer::default().render_tracks(&song).is_err());
    }

    #[test]
    fn test_mixdown_sums_and_clamps() {
        let a = SampleBuffer::mono(vec![100, 30000, -30000, 7], SAMPLE_RATE);
        let b = SampleBuffer::mono(vec![-50, 30000, -30000], SAMPLE_RATE);
        let mix = mixdown(&[a, b], 1.0);
        assert_eq!(mix.samples(), &[50, i16::MAX, i16::MIN, 7]);
    }

    #[test]
    fn test_mixdown_gain() {
        let a = SampleBuffer::mono(vec![1000, -1000], SAMPLE_RATE);
        let b = SampleBuffer::mono(vec![1000, 1000], SAMPLE_RATE);
        let mix = mixdown(&[a, b], 0.5);
        assert_eq!(mix.samples(), &[1000, 0]);
    }

    #[test]
    fn test_mixdown_empty() {
        let mix = mixdown(&[], 1.0);
        assert_eq!(mix.sample_count(), 0);
        assert_eq!(mix.sample_rate(), SAMPLE_RATE);
    }

    #[test]
    fn test_render_mix_length() {
        let mix = SongRenderer::default().render_mix(&song()).unwrap();
        assert_eq!(mix.sample_count(), 4800);
    }
}
