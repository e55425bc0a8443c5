//! Sound generation
//!
//! - Oscillator: waveform selection and attack parameters
//! - Envelope: attack gain curve applied at each note onset
//! - Synth: renders a whole track into a PCM buffer

pub mod envelope;
pub mod oscillator;
pub mod synth;

pub use envelope::{attack_gain, AttackEnvelope};
pub use oscillator::{Oscillator, Waveform};
pub use synth::{synthesize, synthesize_notes, SAMPLE_RATE, SMOOTHING};

/// Represents the current state of a signal generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Generator is still producing samples
    Running,
    /// Generator has completed; further frames hold its final value
    Complete,
}

/// Core trait for frame-based signal generators
pub trait SignalGenerator {
    /// Process the next frame of samples
    ///
    /// # Arguments
    /// * `buffer` - Mutable slice to write samples into. The length determines frame size.
    ///
    /// # Returns
    /// * `GeneratorState::Running` if the generator is still active
    /// * `GeneratorState::Complete` if the generator has finished
    fn process(&mut self, buffer: &mut [f32]) -> GeneratorState;

    /// Check if this generator has completed
    fn is_complete(&self) -> bool;

    /// Reset the generator to its initial state
    fn reset(&mut self);
}
