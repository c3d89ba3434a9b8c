#![forbid(unsafe_code)]

//! Fast sine approximation over a 64-step angle domain.
//!
//! One full cycle spans angles `0..64`; the upper two bits of an angle byte
//! are discarded. Amplitudes lie in `[-64, 64]`.
//!
//! The table is fixed data: the falling half is shifted one
//! step early and the cycle ends in a run of zeros. Output reproducibility
//! depends on these exact values.

/// Quarter cycle, in angle steps.
pub const QUARTER_TURN: u8 = 16;

/// Peak amplitude returned by [`sine_approx`].
pub const AMPLITUDE: i8 = 64;

#[rustfmt::skip]
const SINE_TABLE: [i8; 64] = [
      0,   6,  12,  18,  24,  30,  36,  41,  46,  50,  54,  57,  60,  62,  63,  64,
     63,  62,  60,  57,  54,  50,  46,  41,  36,  30,  24,  18,  12,   6,   0,  -6,
    -12, -18, -24, -30, -36, -41, -46, -50, -54, -57, -60, -62, -63, -64,
    -63, -62, -60, -57, -54, -50, -46, -41, -36, -30, -24, -18, -12,  -6,   0,   0,   0,   0,
];

/// Look up the amplitude for `angle & 63`.
#[inline]
pub const fn sine_approx(angle: u8) -> i8 {
    SINE_TABLE[(angle & 63) as usize]
}

/// Convert a float phase to an angle byte.
///
/// Truncates toward zero, then keeps the low eight bits, so negative and
/// oversized phases wrap instead of trapping. NaN maps to 0 and infinities
/// saturate before wrapping.
#[inline]
pub fn angle_from_f32(phase: f32) -> u8 {
    (phase as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_and_zero_crossings() {
        assert_eq!(sine_approx(0), 0);
        assert_eq!(sine_approx(15), AMPLITUDE);
        assert_eq!(sine_approx(30), 0);
        assert_eq!(sine_approx(45), -AMPLITUDE);
        assert_eq!(sine_approx(QUARTER_TURN), 63);
    }

    #[test]
    fn trailing_entries_are_zero() {
        for a in 60..64 {
            assert_eq!(sine_approx(a), 0, "angle {a}");
        }
    }

    #[test]
    fn masking_discards_upper_bits() {
        for a in 0..=u8::MAX {
            assert_eq!(sine_approx(a), sine_approx(a % 64));
            assert!(sine_approx(a).unsigned_abs() <= AMPLITUDE as u8);
        }
    }

    #[test]
    fn angle_conversion_truncates_and_wraps() {
        assert_eq!(angle_from_f32(0.0), 0);
        assert_eq!(angle_from_f32(15.9), 15);
        assert_eq!(angle_from_f32(256.5), 0);
        assert_eq!(angle_from_f32(300.0), 44);
        assert_eq!(angle_from_f32(-1.0), 255);
        assert_eq!(angle_from_f32(-0.5), 0);
    }

    #[test]
    fn angle_conversion_tolerates_non_finite() {
        assert_eq!(angle_from_f32(f32::NAN), 0);
        let _ = angle_from_f32(f32::INFINITY);
        let _ = angle_from_f32(f32::NEG_INFINITY);
    }
}
