//! Horner polynomial evaluation
//!
//! Every coefficient table in [`crate::precision`] was fitted against this exact
//! evaluation order: one fused multiply-add per coefficient, highest degree first.
//! Replacing the FMA with a separate multiply and add costs several bits on the
//! larger tables.

use crate::traits::Float;

/// Evaluate `((c0*x + c1)*x + c2)*x + ... + cn` with fused multiply-add
///
/// A single-coefficient table returns that coefficient unchanged; an empty table
/// evaluates to zero.
///
/// # Example
///
/// ```rust
/// use polykern_math::ops::horner;
///
/// // 2x² + 3x + 4 at x = 2
/// assert_eq!(horner(&[2.0f32, 3.0, 4.0], 2.0), 18.0);
/// assert_eq!(horner(&[5.0f64], 123.0), 5.0);
/// ```
#[inline(always)]
pub fn horner<F: Float>(coeffs: &[F], x: F) -> F {
    match coeffs.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &c| acc.fma(x, c)),
        None => F::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horner_degenerate_tables() {
        assert_eq!(horner::<f32>(&[], 3.0), 0.0);
        assert_eq!(horner(&[-7.5f32], 3.0), -7.5);
        assert!(horner(&[1.0f64], f64::NAN) == 1.0);
    }

    #[test]
    fn test_horner_matches_expanded_form() {
        let coeffs = [0.5f64, -1.25, 2.0, 3.0];
        for i in 0..32 {
            let x = -2.0 + i as f64 * 0.125;
            let expected = ((0.5 * x - 1.25) * x + 2.0) * x + 3.0;
            let error = (horner(&coeffs, x) - expected).abs();
            assert!(error < 1e-12, "horner({}) error: {}", x, error);
        }
    }

    #[test]
    fn test_horner_single_rounding_per_step() {
        // (1 + 2^-12)² - (1 + 2^-11) = 2^-24 survives only when the product is not rounded
        let x = 1.0f32 + 1.0 / 4096.0;
        let fused = horner(&[x, -(1.0 + 1.0 / 2048.0)], x);
        assert_eq!(fused, 1.0 / 16_777_216.0);
    }

    #[test]
    fn test_horner_propagates_nan() {
        assert!(horner(&[1.0f32, 2.0], f32::NAN).is_nan());
        assert!(horner(&[f64::INFINITY, 0.0], 0.0).is_nan());
    }
}
