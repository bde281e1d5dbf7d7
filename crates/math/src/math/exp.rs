//! Exponential functions
//!
//! Everything here is built on base 2: `x = n + f` with `n = round(x)` and
//! `f ∈ [-0.5, 0.5]`, then `2^x = P(f) · 2^n` where `2^n` is written straight into the
//! exponent field. Natural-base variants scale the argument by `log2(e)` first.
//!
//! # Error Bounds
//!
//! Relative error:
//!
//! | function | `f32` | `f64` |
//! |----------|-------|-------|
//! | exp2 | 6.2e-8 | 1.3e-16 |
//! | exp (`\|x\| <= 10`) | 5.0e-7 | 7.6e-16 |
//! | exp_m1 | 2.5e-7 | 4.4e-16 |
//!
//! `exp`'s error grows with `|x|` because the product `x · log2(e)` is rounded once.
//! Results saturate: arguments that round below the smallest exponent give `+0.0`,
//! arguments at or above the infinite exponent give `+inf`. Just below it the last
//! power of two is applied in two steps, so `exp2(127.7f32)` stays finite.

use crate::ops::horner;
use crate::precision::Precision;
use crate::reduce::split_exp2;

/// Base-2 exponential
///
/// # Example
///
/// ```rust
/// use polykern_math::exp2;
///
/// assert_eq!(exp2(3.0f32), 8.0);
/// assert_eq!(exp2(-2.0f64), 0.25);
/// ```
#[inline(always)]
pub fn exp2<F: Precision>(x: F) -> F {
    let split = split_exp2(x);
    horner(F::EXP2, split.fraction).mul(split.scale).mul(split.carry)
}

/// Natural exponential: `exp2(x · log2(e))`
///
/// # Example
///
/// ```rust
/// use polykern_math::exp;
///
/// assert_eq!(exp(0.0f32), 1.0);
/// assert!((exp(1.0f64) - core::f64::consts::E).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn exp<F: Precision>(x: F) -> F {
    exp2(x.mul(F::LOG2_E))
}

/// `e^x − 1`, accurate near zero
///
/// The exp2 table without its constant term, times `f`, is `2^f − 1` with no
/// cancellation. The power of two is reapplied as `Q(f) · 2^n + (2^n − 1)`; for
/// `n = 0` the second term is exactly zero. The scale itself never overflows, so the
/// result reaches `+inf` only through the final `carry` step.
///
/// # Example
///
/// ```rust
/// use polykern_math::exp_m1;
///
/// assert_eq!(exp_m1(0.0f64), 0.0);
/// let tiny = exp_m1(1.0e-10f64);
/// assert!(((tiny - 1.0e-10) / 1.0e-10).abs() < 1e-9);
/// ```
#[inline(always)]
pub fn exp_m1<F: Precision>(x: F) -> F {
    let t = x.mul(F::LOG2_E);
    let split = split_exp2(t);
    let without_constant = &F::EXP2[..F::EXP2.len() - 1];
    let q = horner(without_constant, split.fraction).mul(split.fraction);
    q.fma(split.scale, split.scale.sub(F::ONE)).mul(split.carry)
}
