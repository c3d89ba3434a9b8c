#![forbid(unsafe_code)]

//! Fixed-size intensity grid shared by the evaluator and the ditherer.
//!
//! # Two-phase invariant
//!
//! One buffer serves both stages of a frame:
//! - **Before dithering**: every cell holds an arbitrary intensity in `[0, 255]`.
//! - **After dithering**: every cell holds exactly `0` (off) or `255` (on).
//!
//! Cells are stored row-major. The extent is fixed at construction.

/// Canvas extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    pub width: u16,
    pub height: u16,
}

impl CanvasSize {
    /// The device panel: 128×64.
    pub const DEFAULT: Self = Self::new(128, 64);

    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of cells.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Row-major index of `(x, y)`. Caller guarantees the point is inside.
    #[inline]
    pub const fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Intensities above this value count as lit.
pub const LIT_THRESHOLD: u8 = 127;

/// Row-major `u8` pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: CanvasSize,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas with every cell off.
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            pixels: vec![0; size.area()],
        }
    }

    /// Wrap an existing buffer. Returns `None` if the length does not match
    /// the extent.
    pub fn from_pixels(size: CanvasSize, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == size.area()).then_some(Self { size, pixels })
    }

    #[inline]
    pub const fn size(&self) -> CanvasSize {
        self.size
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.size.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.size.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Intensity at `(x, y)`, or `None` outside the canvas.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        self.size
            .contains(x, y)
            .then(|| self.pixels[self.size.index(x, y)])
    }

    /// Write `(x, y)`; points outside the canvas are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, value: u8) {
        if self.size.contains(x, y) {
            let idx = self.size.index(x, y);
            self.pixels[idx] = value;
        }
    }

    /// True if the cell is on (`> 127`). Outside the canvas is off.
    #[inline]
    pub fn is_lit(&self, x: u16, y: u16) -> bool {
        self.get(x, y).is_some_and(|v| v > LIT_THRESHOLD)
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&v| v > LIT_THRESHOLD).count()
    }

    /// True once every cell is exactly 0 or 255.
    pub fn is_binary(&self) -> bool {
        self.pixels.iter().all(|&v| v == 0 || v == 255)
    }

    pub fn fill(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    /// One row of cells. Panics if `y` is out of range.
    #[inline]
    pub fn row(&self, y: u16) -> &[u8] {
        let w = self.size.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}
