//! Note-sequence synthesizer
//!
//! Turns a song description (oscillator settings plus a text sequence of
//! note names and durations) into 16-bit mono PCM at 24 kHz.
//!
//! ```
//! use tonesmith::generator::{synthesize, Oscillator, Waveform};
//! use tonesmith::pipeline::Track;
//!
//! let track = Track::new(Oscillator::new(Waveform::Square, 0.3, 20.0), "C4 250 E4 250 pause 100");
//! let buffer = synthesize(&track).unwrap();
//! assert_eq!(buffer.sample_count(), 14400);
//! ```

pub mod buffer;
pub mod error;
pub mod generator;
pub mod logging;
pub mod pipeline;
pub mod wav;

pub use buffer::{SampleBuffer, SampleSink};
pub use error::{ConfigError, ParseError, SynthError, WavError};
