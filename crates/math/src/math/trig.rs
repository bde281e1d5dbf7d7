//! Sine, cosine and tangent
//!
//! All three reduce the argument to a signed fraction of one period,
//! `r = x/P - round(x/P)` in `[-0.5, 0.5]`, and evaluate an even polynomial in `r²`.
//! Sine and cosine use `P = 2π`; tangent uses `P = π`.
//!
//! # Error Bounds
//!
//! Absolute error for `|x| <= 10`:
//!
//! | function | `f32` | `f64` |
//! |----------|-------|-------|
//! | sin, cos | 1.1e-6 | 1.7e-15 |
//! | tan (relative) | 1.3e-6 | 2.2e-15 |
//!
//! The reduction multiplies by a rounded `1/P`, so the absolute error grows linearly
//! with `|x|`.
//!
//! # Example
//!
//! ```rust
//! use polykern_math::{cos, sin, sin_cos};
//! use core::f32::consts::FRAC_PI_2;
//!
//! assert_eq!(sin(0.0f32), 0.0);
//! assert_eq!(cos(0.0f32), 1.0);
//! assert!((sin(FRAC_PI_2) - 1.0).abs() < 1e-5);
//!
//! let (s, c) = sin_cos(0.5f64);
//! assert!((s * s + c * c - 1.0).abs() < 1e-13);
//! ```

use crate::ops::horner;
use crate::precision::Precision;
use crate::reduce::reduce_period;

/// Sine
///
/// `sin(x) = r · P_sin(r²)` where `r` is the signed fraction of a `2π` period. The
/// polynomial absorbs the `2π` factor.
#[inline(always)]
pub fn sin<F: Precision>(x: F) -> F {
    let r = reduce_period(x, F::RECIP_2PI);
    horner(F::SIN, r.mul(r)).mul(r)
}

/// Cosine
///
/// `cos(x) = P_cos(r²)`. The constant coefficient is exactly 1, so `cos(0) == 1`.
#[inline(always)]
pub fn cos<F: Precision>(x: F) -> F {
    let r = reduce_period(x, F::RECIP_2PI);
    horner(F::COS, r.mul(r))
}

/// Tangent
///
/// Reduces with period `π`. The poles at `r = ±1/2` are factored out of the
/// polynomial: `tan(x) = P_tan(r²) · r / (r² − 1/4)`, so the fitted function stays
/// smooth across the whole reduced interval.
///
/// # Example
///
/// ```rust
/// use polykern_math::tan;
///
/// assert_eq!(tan(0.0f64), 0.0);
/// assert!((tan(core::f64::consts::FRAC_PI_4) - 1.0).abs() < 1e-14);
/// ```
#[inline(always)]
pub fn tan<F: Precision>(x: F) -> F {
    let r = reduce_period(x, F::RECIP_PI);
    let u = r.mul(r);
    let pole = F::ONE.div(u.sub(F::HALF.mul(F::HALF)));
    horner(F::TAN, u).mul(r).mul(pole)
}

/// Sine and cosine of the same argument
///
/// Two independent evaluations; the tables differ, so nothing beyond the reduction
/// could be shared.
#[inline(always)]
pub fn sin_cos<F: Precision>(x: F) -> (F, F) {
    (sin(x), cos(x))
}
