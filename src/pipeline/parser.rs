//! Parser for note sequences
//!
//! Format:
//! <note> <duration_ms> <note> <duration_ms> ...
//!
//! Tokens are separated by any whitespace and read in pairs.
//! - Notes: table names such as `A4`, `CSHARP4` or `C#4`, or `pause`
//! - Durations: milliseconds, any positive number (e.g. `250`, `62.5`)

use super::notes::{self, Tone};
use crate::error::{ConfigError, ParseError, SynthError};
use crate::generator::synth::checked_sample_count;

/// A single note of a track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub tone: Tone,
    /// Duration in milliseconds
    pub duration: f32,
}

impl Note {
    pub fn new(tone: Tone, duration: f32) -> Self {
        Self { tone, duration }
    }

    pub fn is_pause(&self) -> bool {
        self.tone.is_pause()
    }
}

/// Parse a note name token
pub fn parse_tone(token: &str, position: usize) -> Result<Tone, ParseError> {
    notes::lookup(token).ok_or_else(|| ParseError::UnknownNote {
        token: token.to_string(),
        position,
    })
}

fn parse_duration(token: &str, position: usize) -> Result<f32, ParseError> {
    token
        .parse::<f32>()
        .map_err(|_| ParseError::InvalidDuration {
            token: token.to_string(),
            position,
        })
}

/// Parse a whole note sequence
///
/// Fails on the first unknown note name or malformed duration, and
/// rejects empty sequences, durations that are not strictly positive, and
/// sequences too long to render.
pub fn parse_note_sequence(text: &str) -> Result<Vec<Note>, SynthError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut result = Vec::with_capacity(tokens.len() / 2);

    for (pair_index, pair) in tokens.chunks(2).enumerate() {
        let position = pair_index * 2;
        let tone = parse_tone(pair[0], position)?;
        let duration_token = pair.get(1).ok_or_else(|| ParseError::MissingDuration {
            token: pair[0].to_string(),
            position,
        })?;
        let duration = parse_duration(duration_token, position + 1)?;

        // NaN fails this comparison too
        if !(duration > 0.0 && duration.is_finite()) {
            return Err(ConfigError::NonPositiveDuration {
                index: pair_index,
                duration,
            }
            .into());
        }

        result.push(Note::new(tone, duration));
    }

    if result.is_empty() {
        return Err(ConfigError::EmptySequence.into());
    }

    checked_sample_count(total_duration(&result))?;

    Ok(result)
}

/// Sum of all note durations in milliseconds
pub fn total_duration(notes: &[Note]) -> f32 {
    notes.iter().map(|note| note.duration).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tone() {
        assert_eq!(parse_tone("A4", 0).unwrap(), Tone::Pitch(0));
        assert_eq!(parse_tone("C#4", 0).unwrap(), Tone::Pitch(-8));
        assert_eq!(parse_tone("pause", 0).unwrap(), Tone::Pause);
        assert!(parse_tone("h4", 0).is_err());
    }

    #[test]
    fn test_parse_sequence() {
        let notes = parse_note_sequence("A4 500 pause 250 C#5 62.5").unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0], Note::new(Tone::Pitch(0), 500.0));
        assert!(notes[1].is_pause());
        assert_eq!(notes[1].duration, 250.0);
        assert_eq!(notes[2], Note::new(Tone::Pitch(4), 62.5));
        assert_eq!(total_duration(&notes), 812.5);
    }

    #[test]
    fn test_mixed_whitespace() {
        let notes = parse_note_sequence("  A4\t100\n\nB4   200 \r\n").unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].tone, Tone::Pitch(2));
    }

    #[test]
    fn test_unknown_note() {
        let err = parse_note_sequence("A4 100 H4 100").unwrap_err();
        match err {
            SynthError::Parse(ParseError::UnknownNote { token, position }) => {
                assert_eq!(token, "H4");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_duration() {
        assert!(matches!(
            parse_note_sequence("A4 long"),
            Err(SynthError::Parse(ParseError::InvalidDuration { position: 1, .. }))
        ));
    }

    #[test]
    fn test_missing_duration() {
        assert!(matches!(
            parse_note_sequence("A4 100 B4"),
            Err(SynthError::Parse(ParseError::MissingDuration { position: 2, .. }))
        ));
    }

    #[test]
    fn test_non_positive_duration() {
        for text in ["A4 0", "A4 -10", "A4 100 B4 NaN", "A4 inf"] {
            assert!(
                matches!(
                    parse_note_sequence(text),
                    Err(SynthError::Config(ConfigError::NonPositiveDuration { .. }))
                ),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_too_long_sequence() {
        // The sum overflows f32, or needs far more samples than a buffer can hold
        for text in ["A4 3e38 A4 3e38", "A4 1e12", "pause 2e11 pause 2e11"] {
            assert!(
                matches!(
                    parse_note_sequence(text),
                    Err(SynthError::Config(ConfigError::TooLong { .. }))
                ),
                "{text} should be rejected"
            );
        }
        // One hour is fine
        assert!(parse_note_sequence("A4 3600000").is_ok());
    }

    #[test]
    fn test_empty_sequence() {
        assert!(matches!(
            parse_note_sequence("   "),
            Err(SynthError::Config(ConfigError::EmptySequence))
        ));
    }
}
