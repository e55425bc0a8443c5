//! Song descriptions
//!
//! A song is a tempo plus independent tracks that play at the same time.
//! Songs are stored as JSON:
//!
//! ```json
//! {
//!   "tempo": 120,
//!   "tracks": [
//!     {
//!       "oscillator": { "function": "square", "attack_factor": 0.4, "attack_duration": 30 },
//!       "notes": "C4 250 E4 250 G4 500 pause 250"
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::parser::{parse_note_sequence, Note};
use crate::error::{ConfigError, SynthError};
use crate::generator::Oscillator;

/// One melodic line: an oscillator and the notes it plays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    oscillator: Oscillator,
    notes: String,
}

impl Track {
    pub fn new(oscillator: Oscillator, notes: impl Into<String>) -> Self {
        Self {
            oscillator,
            notes: notes.into(),
        }
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// The unparsed note sequence
    pub fn note_sequence(&self) -> &str {
        &self.notes
    }

    /// Parse the note sequence
    pub fn notes(&self) -> Result<Vec<Note>, SynthError> {
        parse_note_sequence(&self.notes)
    }

    /// Check that the track can be synthesized
    pub fn validate(&self) -> Result<(), SynthError> {
        self.oscillator.validate()?;
        self.notes()?;
        Ok(())
    }
}

/// A complete song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Beats per minute; informational, note durations are absolute
    pub tempo: f32,
    pub tracks: Vec<Track>,
}

impl Song {
    /// Parse and validate a JSON song description
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let song: Song = serde_json::from_str(text)?;
        song.validate()?;
        Ok(song)
    }

    /// Load and validate a JSON song file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validate every track, reporting the first bad one
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, track) in self.tracks.iter().enumerate() {
            track.validate().map_err(|err| ConfigError::Track {
                index,
                source: Box::new(err),
            })?;
        }
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
