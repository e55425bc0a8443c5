use super::{GeneratorState, SignalGenerator};

/// Gain applied `tau` samples after a note onset
///
/// Inside the attack window the curve is a gaussian bump on top of the
/// sustain level `1 - factor`:
///
/// `(1 - factor) + exp(-7.5 * x^2) * factor`, with `x = 2 * tau / (attack_samples - 1) - 1`
///
/// After the window the gain stays at `1 - factor` until the next onset.
pub fn attack_gain(tau: usize, attack_samples: usize, factor: f32) -> f32 {
    let sustain = 1.0 - factor;
    if tau + 1 > attack_samples {
        return sustain;
    }

    // A one-sample window has no span (0/0); its only sample is silenced
    if attack_samples == 1 {
        return 0.0;
    }

    let x = 2.0 * tau as f32 / (attack_samples - 1) as f32 - 1.0;
    sustain + (-7.5 * x * x).exp() * factor
}

/// Attack envelope of a single note onset
///
/// Produces the gain curve of [`attack_gain`] sample by sample. The
/// generator completes when the attack window is over and then holds the
/// sustain level.
pub struct AttackEnvelope {
    attack_samples: usize,
    factor: f32,
    position: usize,
}

impl AttackEnvelope {
    /// Create an envelope for an attack window of `attack_samples` samples
    ///
    /// # Example
    /// ```
    /// use tonesmith::generator::envelope::AttackEnvelope;
    /// use tonesmith::generator::SignalGenerator;
    ///
    /// let mut env = AttackEnvelope::new(240, 0.5); // 10ms at 24kHz
    /// let mut frame = [0.0f32; 64];
    /// env.process(&mut frame);
    /// ```
    pub fn new(attack_samples: usize, factor: f32) -> Self {
        Self {
            attack_samples,
            factor,
            position: 0,
        }
    }

    /// Build from an attack duration in milliseconds
    pub fn from_duration(attack_ms: f32, factor: f32, sample_rate: u32) -> Self {
        let attack_samples = (attack_ms as f64 * sample_rate as f64 / 1000.0).round() as usize;
        Self::new(attack_samples, factor)
    }

    pub fn attack_samples(&self) -> usize {
        self.attack_samples
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Level held once the attack is over
    pub fn sustain_level(&self) -> f32 {
        1.0 - self.factor
    }
}

impl SignalGenerator for AttackEnvelope {
    fn process(&mut self, buffer: &mut [f32]) -> GeneratorState {
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample = attack_gain(self.position + i, self.attack_samples, self.factor);
        }
        self.position += buffer.len();

        if self.is_complete() {
            GeneratorState::Complete
        } else {
            GeneratorState::Running
        }
    }

    fn is_complete(&self) -> bool {
        self.position >= self.attack_samples
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}
