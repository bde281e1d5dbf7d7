//! Range reducers
//!
//! Each reducer maps an arbitrary argument into the small interval its polynomial was
//! fitted on and returns whatever the caller needs to undo the mapping. The records are
//! plain `Copy` values that never outlive one kernel call.
//!
//! | reducer | used by | reduced domain | reconstruction data |
//! |---------|---------|----------------|---------------------|
//! | [`reduce_period`] | sin, cos, tan | `[-0.5, 0.5]` periods | none (periodic) |
//! | [`split_asin`] | asin, acos | `[0, 0.9]` in magnitude | fold flag |
//! | [`split_atan`] | atan | `[-1, 1]` | fold flag |
//! | [`reduce_atan2`] | atan2 | ratio in `[-1, 1]` | additive angle offset |
//! | [`split_exp2`] | exp2, exp, exp_m1 | `[-0.5, 0.5]` | power-of-two scale |
//! | [`split_log2`] | log2 family, ln_1p | significand `[1, 2)` | exponent |

use crate::math::{recip, sqrt};
use crate::ops::{exponent, mantissa, pow2, select};
use crate::precision::Precision;

/// Signed fraction of a period: `x/period - round(x/period)`, in `[-0.5, 0.5]`
///
/// `recip_period` is `1/(2π)` for sin/cos and `1/π` for tan. The product is rounded
/// once, so the absolute error of the reduced value grows with `|x|`.
#[inline(always)]
pub fn reduce_period<F: Precision>(x: F, recip_period: F) -> F {
    let turns = x.mul(recip_period);
    turns.sub(turns.round())
}

/// Result of the asin/acos or atan domain split
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InverseTrigSplit<F> {
    /// Value fed to the polynomial
    pub reduced: F,
    /// True when the tail identity was applied and the result needs correcting
    pub folded: bool,
}

/// Split for asin/acos: `x` itself below [`Precision::ASIN_LIMIT`], else `sqrt(1 - x²)`
///
/// The folded value is non-negative; `1 - x²` is formed with one FMA so it keeps
/// full precision as `|x|` approaches 1.
#[inline(always)]
pub fn split_asin<F: Precision>(x: F) -> InverseTrigSplit<F> {
    let magnitude = x.abs();
    let folded = !magnitude.lt(F::ASIN_LIMIT);
    let tail = sqrt(magnitude.neg().fma(magnitude, F::ONE));
    InverseTrigSplit {
        reduced: select(folded, tail, x),
        folded,
    }
}

/// Split for atan: `x` itself when `|x| < 1`, else `1/x`
#[inline(always)]
pub fn split_atan<F: Precision>(x: F) -> InverseTrigSplit<F> {
    let folded = !x.abs().lt(F::ONE);
    InverseTrigSplit {
        reduced: select(folded, recip(x), x),
        folded,
    }
}

/// atan2 argument normalized to a ratio in `[-1, 1]` plus the angle to add back
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadrantReduction<F> {
    /// `y'/x'` after mirroring and swapping
    pub ratio: F,
    /// Sum of the ±π and ±π/2 corrections
    pub offset: F,
}

/// Quadrant reduction for `atan2(y, x)`
///
/// 1. `x < 0`: mirror through the origin, `(x, y) -> (-x, -y)`, and add `±π` with the
///    sign taken from the sign bit of `y` (so `y = -0.0` selects `-π`).
/// 2. `|y| > x`: rotate by a quarter turn, `(x, y) -> (y, -x)`, and add `±π/2`.
#[inline(always)]
pub fn reduce_atan2<F: Precision>(y: F, x: F) -> QuadrantReduction<F> {
    let half_turn = select(y.is_sign_negative(), F::PI.neg(), F::PI);
    let mirrored = x.lt(F::ZERO);
    let x1 = select(mirrored, x.neg(), x);
    let y1 = select(mirrored, y.neg(), y);
    let offset = select(mirrored, half_turn, F::ZERO);

    let quarter_turn = select(y1.lt(F::ZERO), F::FRAC_PI_2.neg(), F::FRAC_PI_2);
    let rotated = y1.abs().gt(x1);
    let x2 = select(rotated, y1, x1);
    let y2 = select(rotated, x1.neg(), y1);

    QuadrantReduction {
        ratio: y2.div(x2),
        offset: select(rotated, offset.add(quarter_turn), offset),
    }
}

/// Integer/fraction split for exp2-like kernels
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Exp2Split<F> {
    /// `x - round(x)`, in `[-0.5, 0.5]`
    pub fraction: F,
    /// `2^round(x)`, or `2^(round(x) - 1)` when `round(x)` is `EXP2_MAX`
    pub scale: F,
    /// `2` when the scale was lowered by one step, else `1`
    pub carry: F,
}

/// Split `x` into `fraction + n` with `2^n = scale · carry`
///
/// `x` is clamped to `[EXP2_MIN, EXP2_MAX]` first, so the result saturates to `+0.0` or
/// `+inf` instead of wrapping the exponent field. The clamp uses comparisons that are
/// false for NaN, which therefore reaches the fraction unchanged.
///
/// `2^EXP2_MAX` itself is not representable, yet `x ∈ [EXP2_MAX - 0.5, EXP2_MAX)` rounds
/// to it with a negative fraction and a finite result. For that `n` the scale is built one
/// step lower and the kernel multiplies by `carry` last.
#[inline(always)]
pub fn split_exp2<F: Precision>(x: F) -> Exp2Split<F> {
    let clamped = select(x.lt(F::EXP2_MIN), F::EXP2_MIN, x);
    let clamped = select(clamped.gt(F::EXP2_MAX), F::EXP2_MAX, clamped);
    let n = clamped.round();
    let top = n.eq(F::EXP2_MAX);
    Exp2Split {
        fraction: clamped.sub(n),
        scale: pow2(select(top, n.sub(F::ONE), n)),
        carry: select(top, F::TWO, F::ONE),
    }
}

/// Exponent-field split for log2-like kernels
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Log2Split<F> {
    /// Significand in `[1, 2)`
    pub mantissa: F,
    /// Unbiased exponent
    pub exponent: F,
}

/// Split a positive normal `x` into `mantissa * 2^exponent`
#[inline(always)]
pub fn split_log2<F: Precision>(x: F) -> Log2Split<F> {
    Log2Split {
        mantissa: mantissa(x),
        exponent: exponent(x),
    }
}
