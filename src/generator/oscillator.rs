//! Oscillator definition
//!
//! A waveform selector plus the attack envelope parameters of a track.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Periodic waveform of an oscillator
///
/// Tags other than `sin`/`sine` and `square` select [`Waveform::Unknown`],
/// which renders silence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Waveform {
    Sine,
    /// Half-amplitude square wave
    Square,
    /// Unrecognized tag, kept for reporting
    Unknown(String),
}

impl Waveform {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "sin" | "sine" => Waveform::Sine,
            "square" => Waveform::Square,
            other => Waveform::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Waveform::Sine => "sin",
            Waveform::Square => "square",
            Waveform::Unknown(tag) => tag,
        }
    }

    /// Evaluate the waveform at `phase` radians
    ///
    /// Range is [-1, 1] for sine and [-0.5, 0.5] for square.
    pub fn evaluate(&self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => phase.sin(),
            Waveform::Square => 0.5 * sign(phase.sin()),
            Waveform::Unknown(_) => 0.0,
        }
    }
}

impl From<String> for Waveform {
    fn from(tag: String) -> Self {
        Waveform::from_tag(&tag)
    }
}

impl From<Waveform> for String {
    fn from(waveform: Waveform) -> Self {
        waveform.tag().to_string()
    }
}

// f64::signum maps 0.0 to 1.0, a square wave needs 0 at the zero crossings
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Oscillator of a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    #[serde(rename = "function")]
    waveform: Waveform,
    /// Fraction of the sustain amplitude suppressed after the attack, in [0, 1]
    attack_factor: f32,
    /// Attack duration in milliseconds
    attack_duration: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform, attack_factor: f32, attack_duration: f32) -> Self {
        Self {
            waveform,
            attack_factor,
            attack_duration,
        }
    }

    /// Check the parameters that would make synthesis meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.attack_duration >= 0.0 && self.attack_duration.is_finite()) {
            return Err(ConfigError::InvalidAttackDuration(self.attack_duration));
        }
        Ok(())
    }

    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    pub fn attack_factor(&self) -> f32 {
        self.attack_factor
    }

    pub fn attack_duration(&self) -> f32 {
        self.attack_duration
    }
}
