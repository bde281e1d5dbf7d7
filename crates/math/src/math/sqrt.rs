//! Square root, cube root and hypot
//!
//! `sqrt` and `cbrt` are seed-and-refine kernels: a bit-pattern seed (see
//! [`super::seed`]) followed by a fixed number of Newton corrections. `hypot` factors
//! the larger operand out so the squared ratio never overflows.

use super::seed::seed;
use crate::ops::select;
use crate::precision::Precision;

/// Square root
///
/// Refines the seed with [`Precision::REFINE_STEPS`] passes of
/// `r ← r + (x − r²)/(2r)`, the residual formed with one FMA.
///
/// # Error Bounds
///
/// - `f32`: max relative error 1.1e-7 over normal inputs
/// - `f64`: max relative error 2.0e-16 over normal inputs
/// - `sqrt(±0)` returns the input unchanged
/// - Negative inputs and infinities produce meaningless values or NaN
///
/// # Example
///
/// ```rust
/// use polykern_math::sqrt;
///
/// assert_eq!(sqrt(4.0f32), 2.0);
/// assert!((sqrt(2.0f64) - core::f64::consts::SQRT_2).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn sqrt<F: Precision>(x: F) -> F {
    let mut r = seed(x, F::SQRT_SEED);
    for _ in 0..F::REFINE_STEPS {
        let residual = r.neg().fma(r, x);
        r = r.add(residual.div(r.add(r)));
    }
    select(x.eq(F::ZERO), x, r)
}

/// Cube root, defined for every sign
///
/// Works on `|x|` with `r ← r + (|x| − r³)/(3r²)` and reattaches the sign of `x`.
///
/// # Error Bounds
///
/// - `f32`: max relative error 1.1e-7
/// - `f64`: max relative error 2.0e-16
/// - `cbrt(±0)` returns the input unchanged
///
/// # Example
///
/// ```rust
/// use polykern_math::cbrt;
///
/// assert_eq!(cbrt(-27.0f64), -3.0);
/// ```
#[inline(always)]
pub fn cbrt<F: Precision>(x: F) -> F {
    let magnitude = x.abs();
    let three = F::from_u32(3);
    let mut r = seed(x, F::CBRT_SEED);
    for _ in 0..F::REFINE_STEPS {
        let r2 = r.mul(r);
        let residual = r2.neg().fma(r, magnitude);
        r = r.add(residual.div(three.mul(r2)));
    }
    select(x.eq(F::ZERO), x, r.copysign(x))
}

/// Euclidean norm `sqrt(x² + y²)` without intermediate overflow
///
/// The operands are ordered by magnitude and the result computed as
/// `big · sqrt(1 + (small/big)²)`. When the larger magnitude is at or below the
/// smallest normal value the ratio is undefined or imprecise and `big` is returned.
///
/// # Error Bounds
///
/// - `f32`: max relative error 1.2e-7
/// - `f64`: max relative error 2.4e-16
///
/// # Example
///
/// ```rust
/// use polykern_math::hypot;
///
/// assert_eq!(hypot(3.0f32, 4.0), 5.0);
/// assert_eq!(hypot(0.0f64, -5.0), 5.0);
/// ```
#[inline(always)]
pub fn hypot<F: Precision>(x: F, y: F) -> F {
    let ax = x.abs();
    let ay = y.abs();
    let swap = ay.gt(ax);
    let big = select(swap, ay, ax);
    let small = select(swap, ax, ay);

    let ratio = small.div(big);
    let scaled = big.mul(sqrt(ratio.fma(ratio, F::ONE)));
    select(big.le(F::MIN_POSITIVE), big, scaled)
}
