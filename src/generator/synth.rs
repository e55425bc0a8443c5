use std::f64::consts::TAU;

use super::envelope::attack_gain;
use super::oscillator::{Oscillator, Waveform};
use crate::buffer::SampleBuffer;
use crate::error::{ConfigError, SynthError};
use crate::pipeline::notes::Tone;
use crate::pipeline::parser::{total_duration, Note};
use crate::pipeline::song::Track;

/// Output sample rate in Hz
pub const SAMPLE_RATE: u32 = 24000;

/// Length in samples of the buffer fades and note crossfades
pub const SMOOTHING: usize = 100;

const FULL_SCALE: f32 = i16::MAX as f32;

const SAMPLES_PER_MS: f32 = SAMPLE_RATE as f32 / 1000.0;

/// Longest buffer a track may render to, the most a 16-bit WAV data chunk holds
pub const MAX_SAMPLES: usize = (u32::MAX / 2) as usize;

/// Number of samples covering `ms` milliseconds, rounded to nearest
pub fn ms_to_samples(ms: f32) -> usize {
    (SAMPLE_RATE as f64 * ms as f64 / 1000.0).round() as usize
}

/// Buffer length for a total duration of `ms` milliseconds
///
/// Fails when the duration is not finite or needs more than [`MAX_SAMPLES`].
pub fn checked_sample_count(ms: f32) -> Result<usize, ConfigError> {
    let samples = (SAMPLE_RATE as f64 * ms as f64 / 1000.0).round();
    if samples.is_finite() && samples >= 0.0 && samples <= MAX_SAMPLES as f64 {
        Ok(samples as usize)
    } else {
        Err(ConfigError::TooLong {
            duration_ms: ms,
            max_samples: MAX_SAMPLES,
        })
    }
}

/// Synthesize a track into a mono buffer
///
/// The note sequence is parsed first, so a bad sequence fails before any
/// sample memory is allocated.
pub fn synthesize(track: &Track) -> Result<SampleBuffer, SynthError> {
    let notes = track.notes()?;
    synthesize_notes(&notes, track.oscillator())
}

/// Synthesize already parsed notes with the given oscillator
pub fn synthesize_notes(
    notes: &[Note],
    oscillator: &Oscillator,
) -> Result<SampleBuffer, SynthError> {
    if notes.is_empty() {
        return Err(ConfigError::EmptySequence.into());
    }
    if let Some((index, note)) = notes
        .iter()
        .enumerate()
        .find(|(_, note)| !(note.duration > 0.0 && note.duration.is_finite()))
    {
        return Err(ConfigError::NonPositiveDuration {
            index,
            duration: note.duration,
        }
        .into());
    }
    let sample_count = checked_sample_count(total_duration(notes))?;
    oscillator.validate()?;

    let waveform = oscillator.waveform();
    if let Waveform::Unknown(tag) = waveform {
        log::warn!("unknown oscillator function `{}`, track will be silent", tag);
    }

    let attack_factor = oscillator.attack_factor();
    let attack_samples = ms_to_samples(oscillator.attack_duration());

    log::debug!(
        "synthesizing {} notes into {} samples ({} attack samples)",
        notes.len(),
        sample_count,
        attack_samples
    );

    let mut samples = vec![0i16; sample_count];
    let mut cursor = NoteCursor::new(notes);

    for (t, sample) in samples.iter_mut().enumerate() {
        cursor.advance(t);

        // Pauses stay silent, without envelope
        if cursor.current.is_pause() {
            continue;
        }

        let shaped = shape(t, sample_count, &cursor, waveform);
        let tau = t - cursor.edge_point;
        *sample = (shaped as f32 * attack_gain(tau, attack_samples, attack_factor)) as i16;
    }

    Ok(SampleBuffer::mono(samples, SAMPLE_RATE))
}

/// Position in the note list while walking the buffer
struct NoteCursor<'a> {
    notes: &'a [Note],
    index: usize,
    /// Milliseconds covered by notes before the current one
    scanned_duration: f32,
    previous: Option<Note>,
    current: Note,
    /// Sample at which the current note began
    edge_point: usize,
}

impl<'a> NoteCursor<'a> {
    fn new(notes: &'a [Note]) -> Self {
        Self {
            notes,
            index: 0,
            scanned_duration: 0.0,
            previous: None,
            current: notes[0],
            edge_point: 0,
        }
    }

    /// Move to the note sounding at sample `t`
    fn advance(&mut self, t: usize) {
        let t_ms = t as f32 / SAMPLES_PER_MS;
        while t_ms > self.scanned_duration + self.current.duration
            && self.index + 1 < self.notes.len()
        {
            self.scanned_duration += self.current.duration;
            self.previous = Some(self.current);
            self.index += 1;
            self.current = self.notes[self.index];
            self.edge_point = t;
        }
    }
}

/// Waveform value of `tone` at sample `t`, scaled by `amplitude` and truncated
fn tone_sample(waveform: &Waveform, tone: Tone, t: usize, amplitude: f32) -> i16 {
    match tone.frequency() {
        Some(frequency) => {
            let phase = t as f64 * frequency as f64 * TAU / SAMPLE_RATE as f64;
            (waveform.evaluate(phase) as f32 * amplitude) as i16
        }
        None => 0,
    }
}

/// Apply buffer-edge fades and the crossfade from the previous note
fn shape(t: usize, sample_count: usize, cursor: &NoteCursor<'_>, waveform: &Waveform) -> i16 {
    let current = cursor.current.tone;

    if t <= SMOOTHING {
        let factor = t as f32 / SMOOTHING as f32;
        return tone_sample(waveform, current, t, factor * FULL_SCALE);
    }

    if let Some(previous) = cursor.previous {
        if t <= cursor.edge_point + SMOOTHING {
            let factor = (t - cursor.edge_point) as f32 / SMOOTHING as f32;
            let from = tone_sample(waveform, previous.tone, t, FULL_SCALE) as f32;
            let to = tone_sample(waveform, current, t, FULL_SCALE) as f32;
            return ((1.0 - factor) * from + factor * to) as i16;
        }
    }

    if t + SMOOTHING + 1 < sample_count {
        tone_sample(waveform, current, t, FULL_SCALE)
    } else {
        let factor = (sample_count - t - 1) as f32 / SMOOTHING as f32;
        tone_sample(waveform, current, t, factor * FULL_SCALE)
    }
}
