#![forbid(unsafe_code)]

//! Floyd–Steinberg error diffusion to 1-bit.
//!
//! Pixels are visited in row-major order. Each one is thresholded to 0 or
//! 255 and its quantization error is pushed to the four neighbours that have
//! not been visited yet:
//!
//! ```text
//!            *    7/16
//!    3/16  5/16   1/16
//! ```
//!
//! Each share is `error * weight / 16` with integer division (truncating
//! toward zero) and the receiving cell is clamped to `[0, 255]` immediately.
//! Neighbours outside the canvas are skipped, so error at the edges is
//! dropped. The scan order is part of the output contract.

use crate::canvas::{Canvas, LIT_THRESHOLD};

/// Error diffusion taps as `(dx, dy, weight)` in sixteenths.
const FLOYD_STEINBERG: [(i32, i32, i32); 4] = [(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)];

/// Quantize one intensity: `> 127` is on.
#[inline]
pub const fn threshold(value: u8) -> u8 {
    if value > LIT_THRESHOLD { 255 } else { 0 }
}

/// Dither `canvas` in place. Afterwards every cell is 0 or 255.
pub fn floyd_steinberg(canvas: &mut Canvas) {
    #[cfg(feature = "tracing")]
    let _span =
        tracing::trace_span!("floyd_steinberg", w = canvas.width(), h = canvas.height()).entered();

    let w = i32::from(canvas.width());
    let h = i32::from(canvas.height());
    let pixels = canvas.pixels_mut();

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            let old = pixels[idx];
            let new = threshold(old);
            pixels[idx] = new;

            let error = i32::from(old) - i32::from(new);
            if error == 0 {
                continue;
            }
            for (dx, dy, weight) in FLOYD_STEINBERG {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || nx >= w || ny >= h {
                    continue;
                }
                let nidx = (ny * w + nx) as usize;
                let spread = i32::from(pixels[nidx]) + error * weight / 16;
                pixels[nidx] = spread.clamp(0, 255) as u8;
            }
        }
    }
}
