//! Arctangent functions
//!
//! One odd polynomial, `atan(r) = r · P(r²)` on `[-1, 1]`, serves both entry points.
//! `atan` folds `|x| > 1` through `atan(x) = ±π/2 − atan(1/x)`; `atan2` normalizes the
//! point into the first octant of the right half plane and adds the quadrant angle back.

use crate::ops::{horner, select};
use crate::precision::Precision;
use crate::reduce::{reduce_atan2, split_atan};

/// `r · P_atan(r²)` for `|r| <= 1`
#[inline(always)]
fn atan_kernel<F: Precision>(r: F) -> F {
    horner(F::ATAN, r.mul(r)).mul(r)
}

/// Arctangent, result in `[-π/2, π/2]`
///
/// # Error Bounds
///
/// - `f32`: max absolute error 1.5e-7
/// - `f64`: max absolute error 4.2e-16
///
/// # Example
///
/// ```rust
/// use polykern_math::atan;
///
/// assert_eq!(atan(0.0f32), 0.0);
/// assert!((atan(1.0f64) - core::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
#[inline(always)]
pub fn atan<F: Precision>(x: F) -> F {
    let split = split_atan(x);
    let y = atan_kernel(split.reduced);
    let base = select(x.lt(F::ZERO), F::FRAC_PI_2.neg(), F::FRAC_PI_2);
    select(split.folded, base.sub(y), y)
}

/// Four-quadrant arctangent of `y/x`, result in `[-π, π]`
///
/// The sign of a zero `y` picks the branch on the negative x axis:
/// `atan2(0, -1) = π`, `atan2(-0, -1) = -π`. `atan2(0, 0)` is NaN.
///
/// # Error Bounds
///
/// - `f32`: max absolute error 2.3e-7
/// - `f64`: max absolute error 4.2e-16
///
/// # Example
///
/// ```rust
/// use polykern_math::atan2;
/// use core::f32::consts::PI;
///
/// assert_eq!(atan2(0.0f32, -1.0), PI);
/// assert_eq!(atan2(-0.0f32, -1.0), -PI);
/// ```
#[inline(always)]
pub fn atan2<F: Precision>(y: F, x: F) -> F {
    let quadrant = reduce_atan2(y, x);
    atan_kernel(quadrant.ratio).add(quadrant.offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_atan_one() {
        let error = (atan(1.0f32) - core::f32::consts::FRAC_PI_4).abs();
        assert!(error < 1e-7, "atan(1) error: {}", error);
    }

    #[test]
    fn test_atan_saturates() {
        let error = (atan(1.0e20f64) - FRAC_PI_2).abs();
        assert!(error < 1e-15, "atan(1e20) error: {}", error);
        let error = (atan(-1.0e20f64) + FRAC_PI_2).abs();
        assert!(error < 1e-15, "atan(-1e20) error: {}", error);
    }

    #[test]
    fn test_atan_matches_libm() {
        let mut max_error = 0.0f64;
        for i in -2000..=2000 {
            let x = i as f64 * 0.01;
            max_error = max_error.max((atan(x) - libm::atan(x)).abs());
        }
        assert!(max_error < 1e-15, "atan max error: {}", max_error);
    }

    #[test]
    fn test_atan2_axes() {
        assert_eq!(atan2(0.0f64, -1.0), PI);
        assert_eq!(atan2(-0.0f64, -1.0), -PI);
        assert_eq!(atan2(1.0f64, 0.0), FRAC_PI_2);
        assert_eq!(atan2(-1.0f64, 0.0), -FRAC_PI_2);
        assert_eq!(atan2(0.0f64, 1.0), 0.0);
    }

    #[test]
    fn test_atan2_diagonal() {
        let error = (atan2(1.0f64, 1.0) - FRAC_PI_4).abs();
        assert!(error < 1e-15, "atan2(1, 1) error: {}", error);
        let error = (atan2(-1.0f32, -1.0) + 3.0 * core::f32::consts::FRAC_PI_4).abs();
        assert!(error < 4e-7, "atan2(-1, -1) error: {}", error);
    }

    #[test]
    fn test_atan2_matches_libm_on_circle() {
        let mut max_error = 0.0f32;
        for i in 0..720 {
            let angle = i as f32 * 0.5 * core::f32::consts::PI / 180.0;
            let (y, x) = (3.0 * libm::sinf(angle), 3.0 * libm::cosf(angle));
            let mut error = (atan2(y, x) - libm::atan2f(y, x)).abs();
            // ±π are the same angle
            if error > 6.0 {
                error = (error - 2.0 * core::f32::consts::PI).abs();
            }
            max_error = max_error.max(error);
        }
        assert!(max_error < 5e-7, "atan2 max error: {}", max_error);
    }
}
