#![forbid(unsafe_code)]

//! Procedural 1-bit image generation.
//!
//! # Role
//! `dithergen-core` renders animated monochrome frames from a handful of
//! numeric parameters. Each frame is a synthesized intensity field (one of
//! ten pattern kinds plus an optional hash-noise overlay) quantized to 1-bit
//! with Floyd–Steinberg error diffusion.
//!
//! # Primary responsibilities
//! - **rng / noise / sine**: integer building blocks (xorshift, spatial hash,
//!   64-entry sine table) whose outputs are bit-exact fixtures.
//! - **pattern**: per-pixel field evaluation into a [`Canvas`].
//! - **dither**: in-place error diffusion to `{0, 255}`.
//! - **animator**: frame loop, parameter evolution, and host [`Command`]s.
//!
//! # Determinism
//! Given the same canvas size, starting parameters, and command sequence at
//! the same frame boundaries, every frame is identical across runs. There is
//! no clock, allocation after construction, or I/O in this crate; hosts own
//! timing and presentation.

pub mod animator;
pub mod canvas;
pub mod dither;
pub mod noise;
pub mod params;
pub mod pattern;
pub mod rng;
pub mod sine;

pub use animator::{Animator, Command, Diagnostics};
pub use canvas::{Canvas, CanvasSize};
pub use dither::floyd_steinberg;
pub use noise::hash_noise;
pub use params::GenerationParameters;
pub use pattern::{PatternKind, evaluate, fill_canvas};
pub use rng::XorShift32;
pub use sine::sine_approx;
