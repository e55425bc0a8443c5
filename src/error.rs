//! Error types
//!
//! Parsing and configuration failures are reported before any sample buffer
//! is allocated. An unknown waveform tag is not an error: it renders silence.

use thiserror::Error;

/// A note sequence that could not be tokenized into notes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Note name not present in the note table
    #[error("unknown note `{token}` at token {position}")]
    UnknownNote { token: String, position: usize },
    /// Duration token that is not a number
    #[error("invalid duration `{token}` at token {position}")]
    InvalidDuration { token: String, position: usize },
    /// Note name at the end of the sequence with no duration after it
    #[error("note `{token}` at token {position} has no duration")]
    MissingDuration { token: String, position: usize },
}

/// A track or song description that cannot be synthesized
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("note sequence is empty")]
    EmptySequence,
    #[error("note {index} has non-positive duration {duration}ms")]
    NonPositiveDuration { index: usize, duration: f32 },
    #[error("note sequence lasts {duration_ms}ms, longer than {max_samples} samples")]
    TooLong { duration_ms: f32, max_samples: usize },
    #[error("attack duration must be a finite, non-negative number of ms (got {0})")]
    InvalidAttackDuration(f32),
    #[error("track {index}: {source}")]
    Track {
        index: usize,
        #[source]
        source: Box<SynthError>,
    },
    /// Malformed song document, including missing required fields
    #[error("invalid song description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read song file: {0}")]
    Io(#[from] std::io::Error),
}

/// Any failure surfaced by synthesis
#[derive(Debug, Error)]
pub enum SynthError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure writing a WAV file
#[derive(Debug, Error)]
pub enum WavError {
    #[error("{0} samples do not fit in a WAV data chunk")]
    TooLong(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
