#![forbid(unsafe_code)]

//! Canvas → terminal text encoding and the stateful row presenter.
//!
//! Two encodings are supported:
//!
//! | Mode        | Pixels per cell | 128×64 panel |
//! |-------------|-----------------|--------------|
//! | `Braille`   | 2×4             | 64×16 cells  |
//! | `HalfBlock` | 1×2             | 128×32 cells |
//!
//! Partial cells at the right/bottom edge treat missing pixels as off.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use dithergen_core::{Animator, Canvas, CanvasSize};

/// Unicode braille block base (no dots raised).
const BRAILLE_BASE: u32 = 0x2800;

/// Braille dot bit for sub-pixel `(dx, dy)` within a 2×4 cell.
///
/// ```text
/// 1 4      bit0 bit3
/// 2 5  ->  bit1 bit4
/// 3 6      bit2 bit5
/// 7 8      bit6 bit7
/// ```
const BRAILLE_DOTS: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// How pixels are packed into terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Braille,
    HalfBlock,
}

impl RenderMode {
    /// Parse `braille` or `half` (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "braille" => Some(Self::Braille),
            "half" | "halfblock" | "half-block" => Some(Self::HalfBlock),
            _ => None,
        }
    }

    /// Pixels per terminal cell as `(columns, rows)`.
    pub const fn cell_pixels(self) -> (u16, u16) {
        match self {
            Self::Braille => (2, 4),
            Self::HalfBlock => (1, 2),
        }
    }

    /// Terminal cells needed to show a canvas of `size`.
    pub const fn grid_size(self, size: CanvasSize) -> (u16, u16) {
        let (cw, ch) = self.cell_pixels();
        (size.width.div_ceil(cw), size.height.div_ceil(ch))
    }
}

/// Braille glyph for a dot mask.
#[inline]
pub fn braille_glyph(bits: u8) -> char {
    char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' ')
}

/// Dot mask for the braille cell at `(col, row)`.
pub fn braille_bits(canvas: &Canvas, col: u16, row: u16) -> u8 {
    let mut bits = 0u8;
    for (dy, dots) in BRAILLE_DOTS.iter().enumerate() {
        for (dx, dot) in dots.iter().enumerate() {
            let x = col.saturating_mul(2).saturating_add(dx as u16);
            let y = row.saturating_mul(4).saturating_add(dy as u16);
            if canvas.is_lit(x, y) {
                bits |= dot;
            }
        }
    }
    bits
}

#[inline]
pub const fn half_block_glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => ' ',
        (true, false) => '▀',
        (false, true) => '▄',
        (true, true) => '█',
    }
}

/// Encode one terminal row.
pub fn encode_row(canvas: &Canvas, mode: RenderMode, row: u16) -> String {
    let (cols, _) = mode.grid_size(canvas.size());
    let mut line = String::with_capacity(cols as usize * 3);
    for col in 0..cols {
        let glyph = match mode {
            RenderMode::Braille => braille_glyph(braille_bits(canvas, col, row)),
            RenderMode::HalfBlock => {
                let y = row.saturating_mul(2);
                half_block_glyph(canvas.is_lit(col, y), canvas.is_lit(col, y.saturating_add(1)))
            }
        };
        line.push(glyph);
    }
    line
}

/// Encode the whole canvas, one string per terminal row.
pub fn encode(canvas: &Canvas, mode: RenderMode) -> Vec<String> {
    let (_, rows) = mode.grid_size(canvas.size());
    (0..rows).map(|row| encode_row(canvas, mode, row)).collect()
}

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

/// Writes frames to a terminal, re-emitting only rows that changed.
///
/// The status line sits one row below the image.
#[derive(Debug, Default)]
pub struct Presenter {
    mode: RenderMode,
    previous: Vec<String>,
    previous_status: String,
}

impl Presenter {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            previous: Vec::new(),
            previous_status: String::new(),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Forget what is on screen so the next frame is written in full.
    pub fn invalidate(&mut self) {
        self.previous.clear();
        self.previous_status.clear();
    }

    /// Write the animator's current frame and status line. Returns the
    /// number of rows written.
    pub fn present<W: Write>(&mut self, out: &mut W, animator: &Animator) -> io::Result<usize> {
        let lines = encode(animator.canvas(), self.mode);
        let status = animator.diagnostics().to_string();
        let mut written = 0usize;

        queue!(out, BeginSynchronizedUpdate)?;
        for (row, line) in lines.iter().enumerate() {
            if self.previous.get(row) == Some(line) {
                continue;
            }
            queue!(out, MoveTo(0, row as u16), Print(line))?;
            written += 1;
        }
        if status != self.previous_status {
            let status_row = lines.len() as u16 + 1;
            queue!(
                out,
                MoveTo(0, status_row),
                Clear(ClearType::UntilNewLine),
                Print(&status)
            )?;
            written += 1;
        }
        queue!(out, EndSynchronizedUpdate)?;
        out.flush()?;

        tracing::trace!(rows = written, status = %status, "frame presented");
        self.previous = lines;
        self.previous_status = status;
        Ok(written)
    }
}
