#![forbid(unsafe_code)]

//! Generation parameters and the manual adjustment rules.

use crate::pattern::PatternKind;

/// Lower bound for manually adjusted frequency.
pub const FREQUENCY_MIN: f32 = 0.1;
/// Upper bound for manually adjusted frequency.
pub const FREQUENCY_MAX: f32 = 4.0;
/// Step applied by one increase/decrease command.
pub const FREQUENCY_STEP: f32 = 0.1;

pub const DEFAULT_FREQUENCY: f32 = 1.0;
pub const DEFAULT_NOISE_SCALE: f32 = 0.05;

/// Inputs to the pattern evaluator.
///
/// `frequency` is only clamped on the manual adjustment path; parameter
/// evolution may leave it anywhere in `[0.5, 2.48]`, and directly assigned
/// values are evaluated as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub seed: u32,
    pub pattern: PatternKind,
    pub frequency: f32,
    /// Overlay strength and coordinate scale. Zero disables the overlay.
    pub noise_scale: f32,
    pub invert: bool,
}

impl GenerationParameters {
    /// Startup defaults for the given seed.
    pub const fn new(seed: u32) -> Self {
        Self {
            seed,
            pattern: PatternKind::Horizontal,
            frequency: DEFAULT_FREQUENCY,
            noise_scale: DEFAULT_NOISE_SCALE,
            invert: false,
        }
    }

    /// Builder: set the pattern.
    #[must_use]
    pub const fn with_pattern(mut self, pattern: PatternKind) -> Self {
        self.pattern = pattern;
        self
    }

    /// Builder: set the frequency without clamping.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Builder: set the noise overlay scale.
    #[must_use]
    pub const fn with_noise_scale(mut self, noise_scale: f32) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    /// Builder: set inversion.
    #[must_use]
    pub const fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Raise frequency by one step, staying inside `[0.1, 4.0]`.
    pub fn increase_frequency(&mut self) {
        self.frequency = step_frequency(self.frequency, FREQUENCY_STEP);
    }

    /// Lower frequency by one step, staying inside `[0.1, 4.0]`.
    pub fn decrease_frequency(&mut self) {
        self.frequency = step_frequency(self.frequency, -FREQUENCY_STEP);
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self::new(0)
    }
}

fn step_frequency(current: f32, delta: f32) -> f32 {
    let next = current + delta;
    if next.is_nan() {
        return FREQUENCY_MIN;
    }
    next.clamp(FREQUENCY_MIN, FREQUENCY_MAX)
}

/// Frequency derived from a drawn value: `0.5 + (value % 100) / 50`.
///
/// Always one of the 100 values `0.5, 0.52, ..., 2.48`.
#[inline]
pub fn frequency_from_draw(value: u32) -> f32 {
    0.5 + (value % 100) as f32 / 50.0
}

/// Noise scale derived from a drawn value: `(value % 50) / 1000`.
#[inline]
pub fn noise_scale_from_draw(value: u32) -> f32 {
    (value % 50) as f32 / 1000.0
}
