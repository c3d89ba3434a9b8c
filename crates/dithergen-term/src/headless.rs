#![forbid(unsafe_code)]

//! Terminal-free frame harness.
//!
//! Runs the animator for a fixed number of frames and writes one JSON object
//! per frame:
//!
//! ```text
//! {"event":"frame","frame":1,"pattern":0,"frequency":1.0,"noise_scale":0.05,
//!  "invert":false,"lit":4093,"checksum":"9a3f..."}
//! ```
//!
//! `checksum` is FNV-1a over the canvas extent and the dithered pixels, as
//! 16 lowercase hex digits. Two runs with the same seed and size produce
//! byte-identical output.

use std::io::{self, Write};

use dithergen_core::{Animator, Canvas};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Frames emitted when no explicit count is given.
pub const DEFAULT_HEADLESS_FRAMES: u64 = 60;

fn fnv1a_update(hash: &mut u64, bytes: &[u8]) {
    for byte in bytes {
        *hash ^= u64::from(*byte);
        *hash = hash.wrapping_mul(FNV_PRIME);
    }
}

/// Stable hash of a frame.
pub fn frame_checksum(canvas: &Canvas) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    fnv1a_update(&mut hash, &canvas.width().to_le_bytes());
    fnv1a_update(&mut hash, &canvas.height().to_le_bytes());
    fnv1a_update(&mut hash, canvas.pixels());
    hash
}

/// JSON record for the animator's current frame.
pub fn frame_record(frame: u64, animator: &Animator) -> serde_json::Value {
    let params = animator.params();
    let canvas = animator.canvas();
    serde_json::json!({
        "event": "frame",
        "frame": frame,
        "pattern": params.pattern.index(),
        "pattern_name": params.pattern.name(),
        "frequency": params.frequency,
        "noise_scale": params.noise_scale,
        "invert": params.invert,
        "lit": canvas.lit_count(),
        "checksum": format!("{:016x}", frame_checksum(canvas)),
    })
}

/// Tick `frames` times (or [`DEFAULT_HEADLESS_FRAMES`] if zero), writing a
/// record after each frame.
///
/// Records carry the parameters in effect *after* the tick, so the line for
/// frame 30 already shows the evolved values.
pub fn run<W: Write>(out: &mut W, animator: &mut Animator, frames: u64) -> io::Result<()> {
    let frames = if frames == 0 {
        DEFAULT_HEADLESS_FRAMES
    } else {
        frames
    };
    tracing::info!(frames, seed = animator.params().seed, "headless run started");
    for frame in 1..=frames {
        animator.tick();
        writeln!(out, "{}", frame_record(frame, animator))?;
    }
    out.flush()
}
