//! Hyperbolic tangent
//!
//! Single-exponential ratio form: with `e = exp_m1(2x)`,
//! `tanh(x) = (E − 1)/(E + 1) = e/(e + 2)` for `E = e^{2x}`. Using `exp_m1` keeps the
//! numerator exact near zero, so small arguments keep their relative accuracy.

use super::exp::exp_m1;
use crate::ops::select;
use crate::precision::Precision;

/// Hyperbolic tangent
///
/// The argument is clamped to `±TANH_LIMIT` (10 for `f32`, 20 for `f64`); past that
/// point the result has already rounded to ±1 and the clamp keeps `e` finite.
///
/// # Error Bounds
///
/// - `f32`: max absolute error 2.2e-7
/// - `f64`: max absolute error 3.4e-16
/// - Relative error stays at the same level for small `|x|`
///
/// # Example
///
/// ```rust
/// use polykern_math::tanh;
///
/// assert_eq!(tanh(0.0f32), 0.0);
/// assert_eq!(tanh(100.0f64), 1.0);
/// assert_eq!(tanh(-100.0f64), -1.0);
/// ```
#[inline(always)]
pub fn tanh<F: Precision>(x: F) -> F {
    let clamped = select(x.abs().gt(F::TANH_LIMIT), F::TANH_LIMIT.copysign(x), x);
    let e = exp_m1(clamped.add(clamped));
    e.div(e.add(F::TWO))
}
