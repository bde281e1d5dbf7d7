//! Hyperbolic sine and cosine, and the inverse hyperbolic functions
//!
//! `sinh` and `cosh` combine two base-2 exponentials of `±x·log2(e) − 1`; the `− 1`
//! folds the factor ½ into the exponent. The inverse functions have no table of their
//! own and reduce to [`ln_1p`] and [`sqrt`] identities. Past `2^(MANTISSA_BITS/2 + 1)`,
//! where `x²` stops contributing and later overflows, `asinh` and `acosh` switch to
//! `ln(|x|) + ln 2`.
//!
//! # Error Bounds
//!
//! | function | `f32` | `f64` |
//! |----------|-------|-------|
//! | sinh (absolute below 1, relative above) | 4.8e-7 | 8.1e-16 |
//! | cosh (relative) | 5.0e-7 | 8.0e-16 |
//! | asinh, acosh, atanh (absolute) | 4.8e-7 | 1.0e-15 |
//!
//! `sinh` subtracts two values close to ½ near zero, so there its error is absolute
//! (about one ulp of ½) rather than relative.

use super::exp::exp2;
use super::log::{ln, ln_1p};
use super::sqrt::sqrt;
use crate::ops::{pow2, select};
use crate::precision::Precision;

/// `|x|` above which `asinh(x)` and `acosh(x)` equal `ln(2|x|)` to working precision
#[inline(always)]
fn large_threshold<F: Precision>() -> F {
    pow2(F::from_u32(F::MANTISSA_BITS / 2 + 1))
}

/// Hyperbolic sine: `2^(a − 1) − 2^(−a − 1)` with `a = x·log2(e)`
///
/// # Example
///
/// ```rust
/// use polykern_math::sinh;
///
/// assert_eq!(sinh(0.0f32), 0.0);
/// assert!((sinh(1.0f64) - 1.1752011936438014).abs() < 1e-14);
/// ```
#[inline(always)]
pub fn sinh<F: Precision>(x: F) -> F {
    let a = x.mul(F::LOG2_E);
    exp2(a.sub(F::ONE)).sub(exp2(a.neg().sub(F::ONE)))
}

/// Hyperbolic cosine: `2^(a − 1) + 2^(−a − 1)` with `a = x·log2(e)`
///
/// # Example
///
/// ```rust
/// use polykern_math::cosh;
///
/// assert_eq!(cosh(0.0f64), 1.0);
/// ```
#[inline(always)]
pub fn cosh<F: Precision>(x: F) -> F {
    let a = x.mul(F::LOG2_E);
    exp2(a.sub(F::ONE)).add(exp2(a.neg().sub(F::ONE)))
}

/// Inverse hyperbolic sine
///
/// `asinh(x) = sign(x) · ln_1p(|x| + x²/(1 + sqrt(x² + 1)))`, which is
/// `ln(|x| + sqrt(x² + 1))` rewritten so that small arguments keep their precision.
/// Large arguments take `ln(|x|) + ln 2`.
///
/// # Example
///
/// ```rust
/// use polykern_math::asinh;
///
/// assert!((asinh(1.0e20f32) - 46.744_85).abs() < 1e-4);
/// ```
#[inline(always)]
pub fn asinh<F: Precision>(x: F) -> F {
    let ax = x.abs();
    let ax2 = ax.mul(ax);
    let tail = ax2.div(F::ONE.add(sqrt(ax2.add(F::ONE))));
    let small = ln_1p(ax.add(tail));
    let large = ln(ax).add(F::LN_2);
    select(ax.gt(large_threshold()), large, small).copysign(x)
}

/// Inverse hyperbolic cosine, for `x >= 1`
///
/// With `t = x − 1`: `acosh(x) = ln_1p(t + sqrt(t·(t + 2)))`. `acosh(1)` is exactly 0.
/// Large arguments take `ln(x) + ln 2`.
#[inline(always)]
pub fn acosh<F: Precision>(x: F) -> F {
    let t = x.sub(F::ONE);
    let small = ln_1p(t.add(sqrt(t.fma(t, t.add(t)))));
    let large = ln(x).add(F::LN_2);
    select(x.gt(large_threshold()), large, small)
}

/// Inverse hyperbolic tangent, for `|x| < 1`
///
/// `atanh(x) = sign(x) · ½ · ln_1p(2|x| / (1 − |x|))`
///
/// # Example
///
/// ```rust
/// use polykern_math::atanh;
///
/// assert_eq!(atanh(0.0f32), 0.0);
/// assert!((atanh(0.5f64) - 0.5493061443340549).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn atanh<F: Precision>(x: F) -> F {
    let ax = x.abs();
    let ratio = ax.add(ax).div(F::ONE.sub(ax));
    F::HALF.mul(ln_1p(ratio)).copysign(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Absolute error near zero, relative error elsewhere
    fn scaled_error(actual: f64, expected: f64) -> f64 {
        (actual - expected).abs() / expected.abs().max(1.0)
    }

    #[test]
    fn test_sinh_cosh_zero() {
        assert_eq!(sinh(0.0f64), 0.0);
        assert_eq!(cosh(0.0f32), 1.0);
    }

    #[test]
    fn test_sinh_matches_libm() {
        let mut max_error = 0.0f64;
        for i in -1000..=1000 {
            let x = i as f64 * 0.01;
            max_error = max_error.max(scaled_error(sinh(x), libm::sinh(x)));
        }
        assert!(max_error < 4e-15, "sinh max error: {}", max_error);
    }

    #[test]
    fn test_cosh_matches_libm() {
        let mut max_error = 0.0f32;
        for i in -1000..=1000 {
            let x = i as f32 * 0.01;
            let expected = libm::coshf(x);
            max_error = max_error.max(((cosh(x) - expected) / expected).abs());
        }
        assert!(max_error < 7e-7, "cosh max relative error: {}", max_error);
    }

    #[test]
    fn test_cosh_even() {
        for i in 0..100 {
            let x = i as f64 * 0.1;
            assert_eq!(cosh(x), cosh(-x), "cosh not even at {}", x);
        }
    }

    #[test]
    fn test_asinh_matches_libm() {
        let mut max_error = 0.0f64;
        for i in -1000..=1000 {
            let x = i as f64 * 0.1;
            max_error = max_error.max((asinh(x) - libm::asinh(x)).abs());
        }
        assert!(max_error < 2e-15, "asinh max error: {}", max_error);
        assert_eq!(asinh(-0.0f32).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_acosh_matches_libm() {
        assert_eq!(acosh(1.0f32), 0.0);
        let mut max_error = 0.0f32;
        for i in 0..=1000 {
            let x = 1.0 + i as f32 * 0.1;
            max_error = max_error.max((acosh(x) - libm::acoshf(x)).abs());
        }
        assert!(max_error < 8e-7, "acosh max error: {}", max_error);
    }

    #[test]
    fn test_asinh_acosh_large_arguments() {
        assert!((asinh(1.0e20f32) - libm::asinhf(1.0e20)).abs() < 2e-5);
        assert!((asinh(-1.0e20f32) - libm::asinhf(-1.0e20)).abs() < 2e-5);
        assert!((acosh(1.0e20f32) - libm::acoshf(1.0e20)).abs() < 2e-5);
        assert!((asinh(1.0e200f64) - libm::asinh(1.0e200)).abs() < 1e-12);
        assert!((acosh(1.0e200f64) - libm::acosh(1.0e200)).abs() < 1e-12);
        assert!((asinh(f32::MAX) - libm::asinhf(f32::MAX)).abs() < 1e-4);
    }

    #[test]
    fn test_asinh_acosh_across_large_switch() {
        let mut max_error = 0.0f64;
        for i in 0..=3000 {
            let x = libm::pow(10.0, 3.0 + i as f64 * 0.099);
            let expected = libm::asinh(x);
            max_error = max_error.max(scaled_error(asinh(x), expected));
            max_error = max_error.max(scaled_error(acosh(x), libm::acosh(x)));
        }
        assert!(max_error < 8e-16, "large-argument max scaled error: {}", max_error);
    }

    #[test]
    fn test_atanh_matches_libm() {
        let mut max_error = 0.0f64;
        for i in -99..=99 {
            let x = i as f64 * 0.01;
            max_error = max_error.max((atanh(x) - libm::atanh(x)).abs());
        }
        assert!(max_error < 1.5e-15, "atanh max error: {}", max_error);
    }
}
