//! Bit reinterpretation and exponent-field surgery
//!
//! `to_bits`/`from_bits` are same-width copies, never numeric conversions: a NaN's
//! payload and the sign of zero survive the round trip. The field helpers express
//! exponent/mantissa access as shifts and masks over the bit pattern using the
//! width's constants (23/8/127 for `f32`, 52/11/1023 for `f64`).

use crate::precision::Precision;
use crate::traits::{Float, FloatBits};

/// Raw bit pattern of `x`
///
/// # Example
///
/// ```rust
/// use polykern_math::ops::to_bits;
///
/// assert_eq!(to_bits(1.0f32), 0x3f80_0000);
/// assert_eq!(to_bits(-0.0f64), 0x8000_0000_0000_0000);
/// ```
#[inline(always)]
pub fn to_bits<F: Float>(x: F) -> F::Bits {
    x.to_bits()
}

/// Float with the raw bit pattern `bits`
#[inline(always)]
pub fn from_bits<F: Float>(bits: F::Bits) -> F {
    F::from_bits(bits)
}

/// Unbiased exponent field of `x` as a float: `(bits >> MANTISSA_BITS) - BIAS`
///
/// Exact for positive normal inputs. The sign bit is not masked, so negative inputs
/// yield meaningless values.
#[inline(always)]
pub fn exponent<F: Precision>(x: F) -> F {
    let biased = F::from_int_cast(x.to_bits().shr(F::MANTISSA_BITS));
    biased.sub(F::from_u32(F::EXPONENT_BIAS as u32))
}

/// `x` with its exponent field replaced by the bias, i.e. the significand in `[1, 2)`
#[inline(always)]
pub fn mantissa<F: Precision>(x: F) -> F {
    let bits = x.to_bits().bitwise_and(F::MANTISSA_MASK).bitwise_or(F::ONE_BITS);
    F::from_bits(bits)
}

/// `2^n` for an integral `n` in `[EXP2_MIN, EXP2_MAX]`, built directly in the exponent field
///
/// `n = EXP2_MIN` gives `+0.0` and `n = EXP2_MAX` gives `+inf`; the product
/// `n * 2^MANTISSA_BITS + ONE_BITS` is exact over that range.
#[inline(always)]
pub fn pow2<F: Precision>(n: F) -> F {
    F::from_bits(n.fma(F::EXP2_SCALE, F::ONE_BITS_F).to_int_cast())
}
