//! Property-based invariant tests for frame synthesis and dithering.
//!
//! Verifies structural guarantees that must hold for any parameters:
//!
//! 1. Xorshift never reaches zero from a nonzero state.
//! 2. The sine table stays within its amplitude.
//! 3. Pixel evaluation is deterministic and `fill_canvas` agrees with it.
//! 4. Dithering always yields a binary buffer and is idempotent.
//! 5. Manual frequency adjustment never leaves `[0.1, 4.0]`.
//! 6. Evolution keeps frequency and noise scale inside their drawn ranges.
//! 7. Identical animators stay identical under identical commands.
//! 8. Evaluation never panics on hostile floats.

use dithergen_core::params::{FREQUENCY_MAX, FREQUENCY_MIN};
use dithergen_core::{
    Animator, Canvas, CanvasSize, Command, GenerationParameters, PatternKind, XorShift32,
    evaluate, fill_canvas, floyd_steinberg, sine_approx,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_pattern() -> impl Strategy<Value = PatternKind> {
    (0u8..10).prop_map(PatternKind::from_index)
}

fn arb_size() -> impl Strategy<Value = CanvasSize> {
    (1u16..=48, 1u16..=32).prop_map(|(w, h)| CanvasSize::new(w, h))
}

fn arb_params() -> impl Strategy<Value = GenerationParameters> {
    (
        any::<u32>(),
        arb_pattern(),
        0.1f32..=4.0,
        0.0f32..0.05,
        any::<bool>(),
    )
        .prop_map(|(seed, pattern, frequency, noise_scale, invert)| {
            GenerationParameters::new(seed)
                .with_pattern(pattern)
                .with_frequency(frequency)
                .with_noise_scale(noise_scale)
                .with_invert(invert)
        })
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        any::<u32>().prop_map(|seed| Command::Randomize { seed }),
        Just(Command::NextPattern),
        Just(Command::PrevPattern),
        Just(Command::IncreaseFrequency),
        Just(Command::DecreaseFrequency),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Xorshift stays off the zero fixed point
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn xorshift_nonzero_stays_nonzero(seed in 1u32..=u32::MAX) {
        let mut rng = XorShift32::new(seed);
        for _ in 0..64 {
            prop_assert_ne!(rng.next_u32(), 0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Sine amplitude bound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sine_within_amplitude(angle in any::<u8>()) {
        let v = sine_approx(angle);
        prop_assert!((-64..=64).contains(&v), "sine({}) = {}", angle, v);
        prop_assert_eq!(v, sine_approx(angle & 63));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Evaluation determinism and fill agreement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fill_canvas_matches_evaluate(size in arb_size(), params in arb_params()) {
        let mut canvas = Canvas::new(size);
        fill_canvas(&mut canvas, &params);
        for y in 0..size.height {
            for x in 0..size.width {
                prop_assert_eq!(canvas.get(x, y), Some(evaluate(x, y, size, &params)));
            }
        }
    }

    #[test]
    fn noise_free_checkerboard_is_already_binary(
        size in arb_size(),
        frequency in 0.1f32..=4.0,
        invert in any::<bool>(),
    ) {
        let params = GenerationParameters::new(0)
            .with_pattern(PatternKind::Checkerboard)
            .with_frequency(frequency)
            .with_noise_scale(0.0)
            .with_invert(invert);
        let mut canvas = Canvas::new(size);
        fill_canvas(&mut canvas, &params);
        prop_assert!(canvas.is_binary());
    }

    #[test]
    fn noise_free_horizontal_ramp_is_monotone(width in 2u16..=256, y in 0u16..64) {
        let size = CanvasSize::new(width, 64);
        let params = GenerationParameters::new(0).with_noise_scale(0.0);
        let mut prev = 0u8;
        for x in 0..width {
            let v = evaluate(x, y, size, &params);
            prop_assert!(v >= prev, "x={} v={} prev={}", x, v, prev);
            prev = v;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Dithering output
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dither_output_is_binary(size in arb_size(), seed in any::<u32>()) {
        let mut rng = XorShift32::new(seed | 1);
        let pixels = (0..size.area()).map(|_| rng.next_u32() as u8).collect();
        let mut canvas = Canvas::from_pixels(size, pixels).unwrap();
        floyd_steinberg(&mut canvas);
        prop_assert!(canvas.is_binary());

        let once = canvas.clone();
        floyd_steinberg(&mut canvas);
        prop_assert_eq!(canvas, once);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Manual frequency bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn manual_adjustment_stays_in_bounds(steps in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut params = GenerationParameters::new(0);
        for up in steps {
            if up {
                params.increase_frequency();
            } else {
                params.decrease_frequency();
            }
            prop_assert!(
                (FREQUENCY_MIN..=FREQUENCY_MAX).contains(&params.frequency),
                "frequency {} escaped bounds",
                params.frequency
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Evolution ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn evolution_draws_stay_in_range(seed in any::<u32>()) {
        let mut anim = Animator::new(CanvasSize::new(2, 2), seed);
        for _ in 0..30 {
            anim.tick();
        }
        let p = anim.params();
        prop_assert!((0.5..=2.48 + 1e-6).contains(&p.frequency), "frequency {}", p.frequency);
        prop_assert!((0.0..=0.049 + 1e-6).contains(&p.noise_scale), "noise {}", p.noise_scale);
        prop_assert_eq!(p.seed, seed);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Replay determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_command_streams_replay_identically(
        seed in any::<u32>(),
        script in prop::collection::vec(prop::option::of(arb_command()), 0..40),
    ) {
        let size = CanvasSize::new(12, 6);
        let mut a = Animator::new(size, seed);
        let mut b = Animator::new(size, seed);
        for step in script {
            if let Some(command) = step {
                a.apply(command);
                b.apply(command);
            }
            a.tick();
            b.tick();
            prop_assert_eq!(a.canvas(), b.canvas());
            prop_assert_eq!(a.diagnostics(), b.diagnostics());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Hostile floats never panic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn evaluate_total_on_any_float(
        pattern in arb_pattern(),
        frequency in any::<f32>(),
        noise_scale in any::<f32>(),
        x in 0u16..128,
        y in 0u16..64,
    ) {
        let params = GenerationParameters::new(9)
            .with_pattern(pattern)
            .with_frequency(frequency)
            .with_noise_scale(noise_scale);
        let _ = evaluate(x, y, CanvasSize::DEFAULT, &params);
    }
}
