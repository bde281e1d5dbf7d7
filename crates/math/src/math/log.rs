//! Logarithm functions
//!
//! `log2` splits the IEEE representation into exponent and significand and
//! approximates `log2` of the significand with one polynomial. The other bases
//! multiply by a constant.
//!
//! # Error Bounds
//!
//! Error over `[1e-3, 1e3]` divided by `max(1, |result|)`, so absolute for results
//! below one and relative above:
//!
//! | function | `f32` | `f64` |
//! |----------|-------|-------|
//! | log2 | 8.3e-8 | 1.5e-16 |
//! | ln | 1.0e-7 | 2.0e-16 |
//! | log10 | 1.5e-7 | 2.0e-16 |
//! | ln_1p (`x ∈ [-0.9, 10]`, absolute) | 2.6e-7 | 5.2e-16 |
//!
//! Zero, negative, subnormal and non-finite inputs produce meaningless values; the
//! exponent field is read without checking the sign bit.

use crate::ops::{horner, select};
use crate::precision::Precision;
use crate::reduce::split_log2;

/// Base-2 logarithm
///
/// `log2(x) = P(m − 1.5) + e` for `x = m · 2^e`, `m ∈ [1, 2)`.
///
/// # Example
///
/// ```rust
/// use polykern_math::log2;
///
/// assert_eq!(log2(8.0f32), 3.0);
/// assert_eq!(log2(1.0f64), 0.0);
/// ```
#[inline(always)]
pub fn log2<F: Precision>(x: F) -> F {
    let split = split_log2(x);
    let centred = split.mantissa.sub(F::ONE.add(F::HALF));
    horner(F::LOG2, centred).add(split.exponent)
}

/// Natural logarithm: `log2(x) · ln(2)`
///
/// # Example
///
/// ```rust
/// use polykern_math::ln;
///
/// assert!((ln(2.718281828f32) - 1.0).abs() < 1e-5);
/// ```
#[inline(always)]
pub fn ln<F: Precision>(x: F) -> F {
    log2(x).mul(F::LN_2)
}

/// Base-10 logarithm: `log2(x) · log10(2)`
#[inline(always)]
pub fn log10<F: Precision>(x: F) -> F {
    log2(x).mul(F::LOG10_2)
}

/// Logarithm of `x` in an arbitrary `base`: `log2(x) / log2(base)`
///
/// `base = 1` divides by zero and gives ±inf or NaN.
///
/// # Example
///
/// ```rust
/// use polykern_math::log;
///
/// assert_eq!(log(8.0f64, 2.0), 3.0);
/// ```
#[inline(always)]
pub fn log<F: Precision>(x: F, base: F) -> F {
    log2(x).div(log2(base))
}

/// `ln(1 + x)`, accurate near zero
///
/// When `1 + x` lies in `[1, 2)` the polynomial runs on `x` itself, so no bits are
/// lost forming `1 + x`. Otherwise the significand of `1 + x` is used and its
/// exponent added back: `ln_1p(x) = (t · P(t) + e) · ln(2)`.
///
/// # Example
///
/// ```rust
/// use polykern_math::ln_1p;
///
/// assert_eq!(ln_1p(0.0f32), 0.0);
/// let tiny = ln_1p(1.0e-12f64);
/// assert!(((tiny - 1.0e-12) / 1.0e-12).abs() < 1e-11);
/// ```
#[inline(always)]
pub fn ln_1p<F: Precision>(x: F) -> F {
    let split = split_log2(x.add(F::ONE));
    let t = select(split.exponent.eq(F::ZERO), x, split.mantissa.sub(F::ONE));
    let y = horner(F::LOG2_1P, t).mul(t);
    y.add(split.exponent).mul(F::LN_2)
}
