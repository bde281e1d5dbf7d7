//! Power functions
//!
//! `powf` is `exp2(log2(x) · y)` for positive bases. `powi` handles small integer
//! exponents exactly enough by repeated squaring and switches to `powf` for `|n| >= 16`.

use super::exp::exp2;
use super::inverse::recip;
use super::log::log2;
use crate::ops::{negate_on_odd, select};
use crate::precision::Precision;

/// Exponent magnitude from which [`powi`] uses the exp2/log2 path
const POWI_SQUARING_LIMIT: u32 = 16;

/// Real power `x^y` for `x > 0`
///
/// # Error Bounds
///
/// - `f32`: max relative error 5e-7 for `x ∈ [0.1, 10]`, `y = 2.5`
/// - `f64`: max relative error 1e-15 on the same range
/// - The error scales with `|log2(x) · y|`, since the product is rounded once
/// - Non-positive bases produce meaningless values (see [`log2`])
///
/// # Example
///
/// ```rust
/// use polykern_math::powf;
///
/// assert_eq!(powf(2.0f32, 10.0), 1024.0);
/// assert!((powf(9.0f64, 0.5) - 3.0).abs() < 1e-14);
/// ```
#[inline(always)]
pub fn powf<F: Precision>(x: F, y: F) -> F {
    exp2(log2(x).mul(y))
}

/// Integer power `x^n`, any sign of `x`
///
/// For `|n| < 16` the result is the product of `x`, `x²`, `x⁴` and `x⁸` selected by the
/// low four bits of `|n|`, each power squared from the previous one. Larger exponents
/// use `powf(|x|, |n|)` and restore the sign when `x < 0` and `n` is odd. Negative
/// exponents take [`recip`] of the result; when `|x^|n||` is above `1/MIN_POSITIVE`,
/// infinity included, the result is a signed zero instead.
///
/// `powi(x, 0)` is 1 for every `x`, NaN and infinities included.
///
/// # Example
///
/// ```rust
/// use polykern_math::powi;
///
/// assert_eq!(powi(2.0f64, 10), 1024.0);
/// assert_eq!(powi(-2.0f64, 17), -131072.0);
/// assert_eq!(powi(f32::NAN, 0), 1.0);
/// ```
#[inline(always)]
pub fn powi<F: Precision>(x: F, n: i32) -> F {
    let p = n.unsigned_abs();
    let x2 = x.mul(x);
    let x4 = x2.mul(x2);
    let x8 = x4.mul(x4);

    let mut acc = select(p & 1 != 0, x, F::ONE);
    acc = select(p & 2 != 0, acc.mul(x2), acc);
    acc = select(p & 4 != 0, acc.mul(x4), acc);
    acc = select(p & 8 != 0, acc.mul(x8), acc);

    let large = powf(x.abs(), F::from_u32(p));
    let large = select(x.lt(F::ZERO), negate_on_odd(p, large), large);
    let result = select(p >= POWI_SQUARING_LIMIT, large, acc);

    let flushed = result.abs().gt(F::ONE.div(F::MIN_POSITIVE));
    let inverse = select(flushed, F::ZERO.copysign(result), recip(result));
    select(n < 0, inverse, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powi_zero_exponent() {
        for x in [0.0f32, -0.0, 1.5, -7.0, f32::INFINITY, f32::NAN] {
            assert_eq!(powi(x, 0), 1.0, "powi({}, 0)", x);
        }
    }

    // Repeated squaring (x, x², x⁴, x⁸). An accumulator that reuses a stale power
    // instead would give x^7 for n = 15.
    #[test]
    fn test_powi_squaring_chain() {
        assert_eq!(powi(2.0f32, 10), 1024.0);
        assert_eq!(powi(3.0f64, 5), 243.0);
        assert_eq!(powi(-1.5f64, 3), -3.375);
        // All four low bits set: x · x² · x⁴ · x⁸
        let error = ((powi(1.5f64, 15) - libm::pow(1.5, 15.0)) / libm::pow(1.5, 15.0)).abs();
        assert!(error < 1e-15, "powi(1.5, 15) relative error: {}", error);
    }

    #[test]
    fn test_powi_large_exponents() {
        assert_eq!(powi(-2.0f64, 17), -131072.0);
        assert_eq!(powi(-2.0f64, 16), 65536.0);
        let error = ((powi(1.1f32, 40) - libm::powf(1.1, 40.0)) / libm::powf(1.1, 40.0)).abs();
        assert!(error < 2e-6, "powi(1.1, 40) relative error: {}", error);
    }

    #[test]
    fn test_powi_negative_exponents() {
        let error = (powi(2.0f32, -2) - 0.25).abs();
        assert!(error < 1e-7, "powi(2, -2) error: {}", error);
        let error = (powi(-2.0f64, -3) + 0.125).abs();
        assert!(error < 1e-16, "powi(-2, -3) error: {}", error);
        let error = ((powi(1.3f64, -21) - libm::pow(1.3, -21.0)) / libm::pow(1.3, -21.0)).abs();
        assert!(error < 2e-15, "powi(1.3, -21) relative error: {}", error);
    }

    #[test]
    fn test_powi_negative_exponent_underflow() {
        // x^|n| overflows, so 1/x^|n| is below the normal range
        assert_eq!(powi(2.0f32, -130), 0.0);
        assert_eq!(powi(10.0f32, -39), 0.0);
        let odd = powi(-2.0f32, -131);
        assert_eq!(odd, 0.0);
        assert!(odd.is_sign_negative());
        assert_eq!(powi(2.0f64, -1100), 0.0);
        assert!(!powi(3.0f64, -700).is_nan());

        // Still normal
        let expected = libm::ldexpf(1.0, -125);
        let error = (powi(2.0f32, -125) - expected).abs() / expected;
        assert!(error < 1e-6, "powi(2, -125) relative error: {}", error);
        assert!(powi(f32::NAN, -3).is_nan());
    }

    #[test]
    fn test_powf_matches_libm() {
        let mut max_error = 0.0f64;
        for i in 0..=1000 {
            let x = 0.1 + 9.9 * i as f64 / 1000.0;
            let expected = libm::pow(x, 2.5);
            max_error = max_error.max(((powf(x, 2.5) - expected) / expected).abs());
        }
        assert!(max_error < 2e-15, "powf max relative error: {}", max_error);
    }
}
