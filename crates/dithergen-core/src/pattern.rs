#![forbid(unsafe_code)]

//! Per-pixel scalar field evaluation.
//!
//! Each pixel is evaluated independently: normalize the coordinate, compute
//! the raw field for the selected [`PatternKind`], blend in the hash-noise
//! overlay, clamp, optionally invert, and quantize to a byte.
//!
//! # Determinism
//!
//! All arithmetic is single precision and follows a fixed operation order,
//! including the integer truncation points in the periodic patterns. Given
//! identical inputs the output is identical; no state is shared between
//! pixels.
//!
//! # Coordinate Conventions
//!
//! Normalized coordinates use the pixel's top-left corner, not its center:
//!
//! ```text
//! nx = x / width      ny = y / height
//! ```
//!
//! so `(0, 0)` samples exactly `0.0` and the last column samples
//! `(width - 1) / width`.

use crate::canvas::{Canvas, CanvasSize};
use crate::noise::{hash_noise, hash_noise_unit};
use crate::params::GenerationParameters;
use crate::sine::{QUARTER_TURN, angle_from_f32, sine_approx};

/// Weight of the base field when the noise overlay is active.
const FIELD_WEIGHT: f32 = 0.7;
/// Weight of the noise overlay.
const OVERLAY_WEIGHT: f32 = 0.3;
/// Radial distance scale; `1.414` rather than `SQRT_2` for reproducibility.
const RADIAL_SCALE: f32 = 1.414;
/// Spiral period; `6.28` rather than `TAU` for reproducibility.
const SPIRAL_PERIOD: f32 = 6.28;
const SPIRAL_TWIST: f32 = 10.0;

// ---------------------------------------------------------------------------
// Pattern Kinds
// ---------------------------------------------------------------------------

/// The ten procedural field generators, indexed `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PatternKind {
    /// Left-to-right ramp.
    #[default]
    Horizontal = 0,
    /// Top-to-bottom ramp.
    Vertical = 1,
    /// Distance from the canvas center.
    Radial = 2,
    /// Ramp along the main diagonal.
    Diagonal = 3,
    /// Table sine along x.
    Sine = 4,
    /// Table sine along y, shifted a quarter cycle.
    Cosine = 5,
    /// Product of x and y sines.
    Interference = 6,
    /// Binary XOR checkerboard.
    Checkerboard = 7,
    /// Raw hash noise.
    Noise = 8,
    /// Angle plus twisted distance around the center.
    Spiral = 9,
}

impl PatternKind {
    /// Number of pattern kinds.
    pub const COUNT: u8 = 10;

    /// All kinds in index order.
    pub const ALL: [Self; 10] = [
        Self::Horizontal,
        Self::Vertical,
        Self::Radial,
        Self::Diagonal,
        Self::Sine,
        Self::Cosine,
        Self::Interference,
        Self::Checkerboard,
        Self::Noise,
        Self::Spiral,
    ];

    /// Map an integer index to a kind. Unknown indices fall back to
    /// [`PatternKind::Horizontal`].
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Vertical,
            2 => Self::Radial,
            3 => Self::Diagonal,
            4 => Self::Sine,
            5 => Self::Cosine,
            6 => Self::Interference,
            7 => Self::Checkerboard,
            8 => Self::Noise,
            9 => Self::Spiral,
            _ => Self::Horizontal,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The following kind, wrapping 9 → 0.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT)
    }

    /// The preceding kind, wrapping 0 → 9.
    #[inline]
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::from_index((self.index() + Self::COUNT - 1) % Self::COUNT)
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Radial => "radial",
            Self::Diagonal => "diagonal",
            Self::Sine => "sine",
            Self::Cosine => "cosine",
            Self::Interference => "interference",
            Self::Checkerboard => "checkerboard",
            Self::Noise => "noise",
            Self::Spiral => "spiral",
        }
    }
}

impl From<u8> for PatternKind {
    fn from(index: u8) -> Self {
        Self::from_index(index)
    }
}

// ---------------------------------------------------------------------------
// Field Functions
// ---------------------------------------------------------------------------

/// Normalize a pixel coordinate to `[0.0, 1.0)`. Returns 0.0 if `total` is 0.
#[inline]
pub fn pixel_to_normalized(pixel: u16, total: u16) -> f32 {
    if total == 0 {
        0.0
    } else {
        f32::from(pixel) / f32::from(total)
    }
}

/// Map a table amplitude in `[-64, 64]` to `[0.0, 1.0]`.
#[inline]
fn amplitude_to_unit(amplitude: i32) -> f32 {
    (amplitude + 64) as f32 / 128.0
}

/// Raw field value for `kind`, before overlay, clamping, or inversion.
///
/// `nx`/`ny` are normalized coordinates; `x`/`y` are the integer pixel
/// coordinates (used only by [`PatternKind::Noise`]). The result is roughly
/// in `[0.0, 1.0]`; [`PatternKind::Spiral`] can go negative.
#[inline]
pub fn raw_value(
    kind: PatternKind,
    nx: f32,
    ny: f32,
    x: u32,
    y: u32,
    params: &GenerationParameters,
) -> f32 {
    let freq = params.frequency;
    match kind {
        PatternKind::Horizontal => nx,
        PatternKind::Vertical => ny,
        PatternKind::Radial => {
            let dx = nx - 0.5;
            let dy = ny - 0.5;
            (dx * dx + dy * dy).sqrt() * RADIAL_SCALE
        }
        PatternKind::Diagonal => (nx + ny) / 2.0,
        PatternKind::Sine => {
            let a = sine_approx(angle_from_f32(nx * 64.0 * freq));
            amplitude_to_unit(i32::from(a))
        }
        PatternKind::Cosine => {
            let phase = ny * 64.0 * freq + f32::from(QUARTER_TURN);
            amplitude_to_unit(i32::from(sine_approx(angle_from_f32(phase))))
        }
        PatternKind::Interference => {
            let w1 = i32::from(sine_approx(angle_from_f32(nx * 32.0 * freq)));
            let w2 = i32::from(sine_approx(angle_from_f32(ny * 32.0 * freq)));
            // Integer division truncates toward zero before the offset.
            amplitude_to_unit((w1 * w2) / 64)
        }
        PatternKind::Checkerboard => {
            let cx = angle_from_f32(nx * 8.0 * freq) & 1;
            let cy = angle_from_f32(ny * 8.0 * freq) & 1;
            if cx ^ cy != 0 { 1.0 } else { 0.0 }
        }
        PatternKind::Noise => hash_noise_unit(x, y, params.seed),
        PatternKind::Spiral => {
            let dx = nx - 0.5;
            let dy = ny - 0.5;
            let angle = dy.atan2(dx);
            let dist = (dx * dx + dy * dy).sqrt();
            // `%` keeps the sign of the dividend, like C's fmodf.
            ((angle + dist * SPIRAL_TWIST) % SPIRAL_PERIOD) / SPIRAL_PERIOD
        }
    }
}

/// Blend the hash-noise overlay into `value`. No-op unless `noise_scale > 0`.
///
/// Overlay coordinates are `trunc(x * noise_scale)`, so small scales give
/// coarse blocks of constant noise.
#[inline]
pub fn apply_overlay(value: f32, x: u32, y: u32, params: &GenerationParameters) -> f32 {
    let scale = params.noise_scale;
    if scale > 0.0 {
        let nx = (x as f32 * scale) as u32;
        let ny = (y as f32 * scale) as u32;
        let noise = f32::from(hash_noise(nx, ny, params.seed)) / 255.0;
        value * FIELD_WEIGHT + noise * OVERLAY_WEIGHT
    } else {
        value
    }
}

/// Clamp to `[0, 1]`, invert if requested, and quantize with `floor(v * 255)`.
#[inline]
pub fn finish(value: f32, invert: bool) -> u8 {
    let mut v = value.clamp(0.0, 1.0);
    if invert {
        v = 1.0 - v;
    }
    (v * 255.0) as u8
}

/// Evaluate the full pipeline for one pixel.
///
/// # Determinism
///
/// Given identical inputs, this function always returns the same output.
#[inline]
pub fn evaluate(x: u16, y: u16, size: CanvasSize, params: &GenerationParameters) -> u8 {
    let nx = pixel_to_normalized(x, size.width);
    let ny = pixel_to_normalized(y, size.height);
    let (px, py) = (u32::from(x), u32::from(y));
    let value = raw_value(params.pattern, nx, ny, px, py, params);
    finish(apply_overlay(value, px, py, params), params.invert)
}

/// Evaluate every pixel of `canvas` in row-major order.
pub fn fill_canvas(canvas: &mut Canvas, params: &GenerationParameters) {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "fill_canvas",
        w = canvas.width(),
        h = canvas.height(),
        pattern = params.pattern.name()
    )
    .entered();

    let size = canvas.size();
    let w = size.width as usize;
    if w == 0 {
        return;
    }
    for (row_idx, row) in canvas.pixels_mut().chunks_exact_mut(w).enumerate() {
        let y = row_idx as u16;
        for (col_idx, cell) in row.iter_mut().enumerate() {
            *cell = evaluate(col_idx as u16, y, size, params);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
