#![forbid(unsafe_code)]

//! Xorshift32 pseudo-random source.
//!
//! The generator has no hidden state: [`xorshift32`] maps a state to the next
//! state, and that next state is also the drawn value. [`XorShift32`] wraps a
//! mutable state for callers that draw several values in sequence.
//!
//! A zero state is a fixed point and keeps producing zero.

/// Advance a 32-bit xorshift state by one step.
///
/// Returns the new state, which doubles as the drawn value.
#[inline]
pub const fn xorshift32(state: u32) -> u32 {
    let mut s = state;
    s ^= s << 13;
    s ^= s >> 17;
    s ^= s << 5;
    s
}

/// Stepping wrapper around [`xorshift32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    #[inline]
    pub const fn new(state: u32) -> Self {
        Self { state }
    }

    /// Current state (the last value drawn, or the seed if nothing was drawn).
    #[inline]
    pub const fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = xorshift32(self.state);
        self.state
    }

    /// Draw a value reduced modulo `bound`. `bound` must be non-zero.
    #[inline]
    pub fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

impl Iterator for XorShift32 {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}
