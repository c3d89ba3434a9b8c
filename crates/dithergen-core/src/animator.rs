#![forbid(unsafe_code)]

//! Frame orchestration and parameter evolution.
//!
//! The [`Animator`] owns the canvas, the generation parameters, and the frame
//! counter. A host drives it with [`Animator::tick`] on its own schedule and
//! forwards user input as [`Command`]s between ticks. The animator has no
//! timers, threads, or I/O of its own.
//!
//! # Frame Cycle
//!
//! 1. Evaluate every pixel into the canvas.
//! 2. Dither the canvas in place.
//! 3. Advance the frame counter (wrapping `u8`).
//! 4. On every 30th frame, evolve the parameters from `seed + frame_count`.

use std::fmt;

use crate::canvas::{Canvas, CanvasSize};
use crate::dither::floyd_steinberg;
use crate::params::{GenerationParameters, frequency_from_draw, noise_scale_from_draw};
use crate::pattern::{PatternKind, fill_canvas};
use crate::rng::XorShift32;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Frames between parameter evolutions.
pub const EVOLVE_EVERY: u8 = 30;
/// Percent chance that an evolution picks a new pattern.
pub const PATTERN_CHANGE_PERCENT: u32 = 20;
/// Percent chance that an evolution toggles inversion.
pub const INVERT_TOGGLE_PERCENT: u32 = 10;

/// Discrete parameter changes forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reseed, then derive pattern and frequency from the new seed.
    /// The host supplies the seed (typically from its clock).
    Randomize { seed: u32 },
    NextPattern,
    PrevPattern,
    IncreaseFrequency,
    DecreaseFrequency,
}

/// Read-only status values for on-screen text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub pattern: u8,
    pub frequency: f32,
    pub frame_count: u8,
}

impl fmt::Display for Diagnostics {
    /// Status line, e.g. `G:4 F:1.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G:{} F:{:.1}", self.pattern, self.frequency)
    }
}

/// Owns the canvas and parameters and produces one dithered frame per tick.
#[derive(Debug, Clone)]
pub struct Animator {
    canvas: Canvas,
    params: GenerationParameters,
    frame_count: u8,
}

impl Animator {
    /// Create an animator with startup defaults. No frame is rendered until
    /// the first [`tick`](Self::tick).
    pub fn new(size: CanvasSize, seed: u32) -> Self {
        Self::with_params(size, GenerationParameters::new(seed))
    }

    /// Create an animator with explicit starting parameters.
    pub fn with_params(size: CanvasSize, params: GenerationParameters) -> Self {
        Self {
            canvas: Canvas::new(size),
            params,
            frame_count: 0,
        }
    }

    /// Render one frame and advance the clock.
    pub fn tick(&mut self) {
        fill_canvas(&mut self.canvas, &self.params);
        floyd_steinberg(&mut self.canvas);
        self.frame_count = self.frame_count.wrapping_add(1);

        #[cfg(feature = "tracing")]
        trace!(
            frame = self.frame_count,
            pattern = self.params.pattern.index(),
            lit = self.canvas.lit_count(),
            "frame rendered"
        );

        if self.frame_count % EVOLVE_EVERY == 0 {
            self.evolve();
        }
    }

    /// Mutate the parameters from a generator seeded with
    /// `seed + frame_count`.
    ///
    /// Draw order is fixed: a gate for the pattern change (plus one more draw
    /// for the new pattern when the gate passes), then frequency, then noise
    /// scale, then the invert gate.
    pub fn evolve(&mut self) {
        let mut rng = XorShift32::new(self.params.seed.wrapping_add(u32::from(self.frame_count)));

        if rng.next_below(100) < PATTERN_CHANGE_PERCENT {
            self.params.pattern = PatternKind::from_index(rng.next_below(10) as u8);
        }
        self.params.frequency = frequency_from_draw(rng.next_u32());
        self.params.noise_scale = noise_scale_from_draw(rng.next_u32());
        if rng.next_below(100) < INVERT_TOGGLE_PERCENT {
            self.params.invert = !self.params.invert;
        }

        #[cfg(feature = "tracing")]
        debug!(
            frame = self.frame_count,
            pattern = self.params.pattern.index(),
            frequency = self.params.frequency,
            noise_scale = self.params.noise_scale,
            invert = self.params.invert,
            "parameters evolved"
        );
    }

    /// Apply a host command immediately.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Randomize { seed } => {
                self.params.seed = seed;
                self.params.pattern = PatternKind::from_index((seed % 10) as u8);
                self.params.frequency = frequency_from_draw(seed);
            }
            Command::NextPattern => self.params.pattern = self.params.pattern.next(),
            Command::PrevPattern => self.params.pattern = self.params.pattern.prev(),
            Command::IncreaseFrequency => self.params.increase_frequency(),
            Command::DecreaseFrequency => self.params.decrease_frequency(),
        }

        #[cfg(feature = "tracing")]
        debug!(
            ?command,
            pattern = self.params.pattern.index(),
            frequency = self.params.frequency,
            "command applied"
        );
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    #[inline]
    pub fn frame_count(&self) -> u8 {
        self.frame_count
    }

    /// True if `(x, y)` is on in the current frame.
    #[inline]
    pub fn is_lit(&self, x: u16, y: u16) -> bool {
        self.canvas.is_lit(x, y)
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            pattern: self.params.pattern.index(),
            frequency: self.params.frequency,
            frame_count: self.frame_count,
        }
    }
}
