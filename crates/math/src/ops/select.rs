//! Value-level branching
//!
//! Kernels compute both candidate values and pick one with [`select`] instead of
//! branching. For the scalar widths this is a plain conditional; a vector backend
//! implementing [`Float`] lowers it to a blend.

use crate::traits::Float;

/// `mask ? true_val : false_val`
///
/// # Example
///
/// ```rust
/// use polykern_math::ops::select;
///
/// let x = -3.0f32;
/// assert_eq!(select(x < 0.0, -x, x), 3.0);
/// ```
#[inline(always)]
pub fn select<F: Float>(mask: bool, true_val: F, false_val: F) -> F {
    F::select(mask, true_val, false_val)
}

/// Negate `value` when the integer `n` is odd
///
/// Used to restore the sign of `x^n` after computing it from `|x|`.
#[inline(always)]
pub fn negate_on_odd<F: Float>(n: u32, value: F) -> F {
    F::select(n & 1 != 0, value.neg(), value)
}
