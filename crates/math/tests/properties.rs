//! Property-based tests for polykern-math
//!
//! Uses proptest to check the algebraic laws the kernels must satisfy in both widths:
//! bit round trips, periodicity, inverse identities, monotonicity and the boundary
//! behaviors.

use core::f32::consts::PI;
use polykern_math::ops::{from_bits, to_bits};
use polykern_math::*;
use proptest::prelude::*;


#[cfg(test)]
use test_utils::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

// ============================================================================
// Bit reinterpretation
// ============================================================================

#[test]
fn test_bits_round_trip_narrow() {
    proptest!(proptest_config(), |(bits in any::<u32>())| {
        prop_assert_eq!(to_bits(from_bits::<f32>(bits)), bits);
    });
}

#[test]
fn test_bits_round_trip_wide() {
    proptest!(proptest_config(), |(bits in any::<u64>())| {
        prop_assert_eq!(to_bits(from_bits::<f64>(bits)), bits);
    });
}

#[test]
fn test_value_round_trip_preserves_sign_and_payload() {
    proptest!(proptest_config(), |(x in any_f32())| {
        let back: f32 = from_bits(to_bits(x));
        prop_assert_eq!(back.to_bits(), x.to_bits());
    });
}

// ============================================================================
// Periodicity and identities
// ============================================================================

#[test]
fn test_sin_cos_periodicity_narrow() {
    proptest!(proptest_config(), |(x in -10.0f32..=10.0, k in -10i32..=10)| {
        let shifted = x + 2.0 * PI * k as f32;
        let sin_error = (sin(shifted) - sin(x)).abs();
        let cos_error = (cos(shifted) - cos(x)).abs();
        prop_assert!(sin_error < 5e-5, "sin({}) vs shift by {} periods: {}", x, k, sin_error);
        prop_assert!(cos_error < 5e-5, "cos({}) vs shift by {} periods: {}", x, k, cos_error);
    });
}

#[test]
fn test_sin_cos_periodicity_wide() {
    proptest!(proptest_config(), |(x in -10.0f64..=10.0, k in -10i32..=10)| {
        let shifted = x + 2.0 * core::f64::consts::PI * k as f64;
        let sin_error = (sin(shifted) - sin(x)).abs();
        let cos_error = (cos(shifted) - cos(x)).abs();
        prop_assert!(sin_error < 1e-12, "sin({}) vs shift by {} periods: {}", x, k, sin_error);
        prop_assert!(cos_error < 1e-12, "cos({}) vs shift by {} periods: {}", x, k, cos_error);
    });
}

#[test]
fn test_tan_periodicity() {
    proptest!(proptest_config(), |(x in -1.2f32..=1.2, k in -5i32..=5)| {
        let base = tan(x);
        let shifted = tan(x + PI * k as f32);
        let error = (shifted - base).abs() / base.abs().max(1.0);
        prop_assert!(error < 2e-4, "tan({}) vs shift by {} periods: {}", x, k, error);
    });
}

#[test]
fn test_pythagorean_identity() {
    proptest!(proptest_config(), |(x in -100.0f32..=100.0)| {
        let (s, c) = sin_cos(x);
        let error = (s * s + c * c - 1.0).abs();
        prop_assert!(error < 1e-5, "sin²+cos² at {}: {}", x, error);
    });
    proptest!(proptest_config(), |(x in -100.0f64..=100.0)| {
        let (s, c) = sin_cos(x);
        let error = (s * s + c * c - 1.0).abs();
        prop_assert!(error < 1e-13, "sin²+cos² at {}: {}", x, error);
    });
}

#[test]
fn test_sin_asin_identity() {
    proptest!(proptest_config(), |(x in small_normal_f32())| {
        let error = (sin(asin(x)) - x).abs();
        prop_assert!(error < 2e-6, "sin(asin({})) error: {}", x, error);
    });
}

#[test]
fn test_tan_atan_identity() {
    proptest!(proptest_config(), |(x in -20.0f32..=20.0)| {
        let error = (tan(atan(x)) - x).abs() / x.abs().max(f32::MIN_POSITIVE);
        prop_assert!(error < 1e-4, "tan(atan({})) relative error: {}", x, error);
    });
}

#[test]
fn test_exp_ln_identity() {
    proptest!(proptest_config(), |(x in log_uniform_f32())| {
        assert_approx_eq(exp(ln(x)), x, "exp(ln(x))");
    });
    proptest!(proptest_config(), |(x in log_uniform_f64())| {
        let error = (exp(ln(x)) - x).abs() / x;
        prop_assert!(error < 1e-13, "exp(ln({})) relative error: {}", x, error);
    });
}

#[test]
fn test_exp2_log2_identity() {
    proptest!(proptest_config(), |(x in log_uniform_f32())| {
        assert_approx_eq(exp2(log2(x)), x, "exp2(log2(x))");
    });
}

// ============================================================================
// Monotonicity (steps larger than the error bound)
// ============================================================================

#[test]
fn test_ln_increasing() {
    proptest!(proptest_config(), |(a in log_uniform_f32(), gap in 1e-3f32..=1.0)| {
        let b = a * (1.0 + gap);
        prop_assert!(ln(a) < ln(b), "ln({}) >= ln({})", a, b);
    });
}

#[test]
fn test_exp_increasing() {
    proptest!(proptest_config(), |(a in -70.0f32..=70.0, step in 1e-3f32..=10.0)| {
        let b = a + step;
        prop_assert!(exp(a) < exp(b), "exp({}) >= exp({})", a, b);
    });
}

#[test]
fn test_atan_increasing() {
    proptest!(proptest_config(), |(a in -100.0f32..=100.0, step in 0.01f32..=10.0)| {
        let b = a + step;
        prop_assert!(atan(a) < atan(b), "atan({}) >= atan({})", a, b);
    });
}

#[test]
fn test_sqrt_increasing() {
    proptest!(proptest_config(), |(a in f32::MIN_POSITIVE..=1.0e6, gap in 1e-3f32..=1.0)| {
        let b = a * (1.0 + gap);
        prop_assert!(sqrt(a) < sqrt(b), "sqrt({}) >= sqrt({})", a, b);
    });
}

#[test]
fn test_cbrt_increasing() {
    proptest!(proptest_config(), |(a in -1.0e6f32..=1.0e6, gap in 1e-3f32..=1.0)| {
        let b = a + a.abs().max(1.0) * gap;
        prop_assert!(cbrt(a) < cbrt(b), "cbrt({}) >= cbrt({})", a, b);
    });
}

// ============================================================================
// Seed-and-refine kernels
// ============================================================================

#[test]
fn test_recip_convergence() {
    proptest!(proptest_config(), |(x in wide_magnitude_f32())| {
        let error = (recip(x) * x - 1.0).abs();
        prop_assert!(error < 1e-6, "recip({}) relative error: {}", x, error);
    });
    proptest!(proptest_config(), |(x in wide_magnitude_f64())| {
        let error = (recip(x) * x - 1.0).abs();
        prop_assert!(error < 1e-15, "recip({}) relative error: {}", x, error);
    });
}

#[test]
fn test_sqrt_squares_back() {
    proptest!(proptest_config(), |(x in positive_f32())| {
        let r = sqrt(x);
        assert_approx_eq(r * r, x, "sqrt(x)²");
    });
}

// ============================================================================
// Boundary behavior
// ============================================================================

#[test]
fn test_hypot_with_zero_is_abs() {
    proptest!(proptest_config(), |(y in normal_f32())| {
        prop_assert_eq!(hypot(0.0, y), y.abs());
        prop_assert_eq!(hypot(y, 0.0), y.abs());
    });
}

#[test]
fn test_powi_zero_exponent_is_one() {
    proptest!(proptest_config(), |(x in any_f32())| {
        prop_assert_eq!(powi(x, 0), 1.0);
    });
}

#[test]
fn test_odd_functions_are_odd() {
    proptest!(proptest_config(), |(x in small_normal_f32())| {
        prop_assert_eq!(sin(-x), -sin(x));
        prop_assert_eq!(atan(-x), -atan(x));
        prop_assert_eq!(asin(-x), -asin(x));
        prop_assert_eq!(cbrt(-x), -cbrt(x));
    });
}
