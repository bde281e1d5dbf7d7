//! Arcsine and arccosine
//!
//! Both share one kernel: below `|x| = 0.9` the table is evaluated on `x` directly,
//! above it on `s = sqrt(1 − x²)` using `asin(|x|) = π/2 − asin(s)`. The table's
//! variable is `v² − 0.405`, centred on the reduced range `[0, 0.81]`.
//!
//! # Error Bounds
//!
//! | function | `f32` | `f64` |
//! |----------|-------|-------|
//! | asin, acos (absolute) | 2.6e-7 | 6.6e-16 |
//!
//! `asin(±1)` and `acos(±1)` are exact: the fold evaluates at `s = 0`.
//! Inputs outside `[-1, 1]` produce meaningless values.

use crate::ops::{horner, select};
use crate::precision::Precision;
use crate::reduce::split_asin;

/// Folded flag and `asin(v)` of the reduced value
#[inline(always)]
fn asin_kernel<F: Precision>(x: F) -> (bool, F) {
    let split = split_asin(x);
    let v = split.reduced;
    let y = horner(F::ASIN, v.fma(v, F::ASIN_CENTER.neg())).mul(v);
    (split.folded, y)
}

/// Arcsine, result in `[-π/2, π/2]`
///
/// # Example
///
/// ```rust
/// use polykern_math::asin;
///
/// assert_eq!(asin(0.0f32), 0.0);
/// assert!((asin(0.5f64) - core::f64::consts::FRAC_PI_6).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn asin<F: Precision>(x: F) -> F {
    let (folded, y) = asin_kernel(x);
    let negative = x.lt(F::ZERO);
    let base = select(negative, F::FRAC_PI_2.neg(), F::FRAC_PI_2);
    let sign = select(negative, F::ONE.neg(), F::ONE);
    select(folded, base.sub(y.mul(sign)), y)
}

/// Arccosine, result in `[0, π]`
///
/// # Example
///
/// ```rust
/// use polykern_math::acos;
///
/// assert_eq!(acos(1.0f32), 0.0);
/// assert!((acos(-1.0f64) - core::f64::consts::PI).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn acos<F: Precision>(x: F) -> F {
    let (folded, y) = asin_kernel(x);
    let negative = x.lt(F::ZERO);
    let base = select(negative, F::PI, F::ZERO);
    let sign = select(negative, F::ONE, F::ONE.neg());
    select(folded, base.sub(y.mul(sign)), F::FRAC_PI_2.sub(y))
}
