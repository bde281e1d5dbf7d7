//! Precision variants
//!
//! The kernels in [`crate::math`] are generic over [`Precision`], which extends the
//! arithmetic surface of [`Float`] with everything that differs between widths:
//! mathematical constants, domain-split thresholds, seed constants, the number of
//! Newton-Raphson passes and the minimax coefficient tables.
//!
//! - [`narrow`]: `f32` (23-bit mantissa, bias 127)
//! - [`wide`]: `f64` (52-bit mantissa, bias 1023)
//!
//! Coefficient tables are ordered highest degree first, the order consumed by
//! [`crate::ops::horner`].

use crate::traits::Float;

pub mod narrow;
pub mod wide;

/// Linear map from a float's bit pattern to a seed's bit pattern
///
/// `seed_bits = bits(|x|) * slope + offset`. The offset already includes the empirical
/// bias that recentres the seed's relative error around zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeedConstants<F> {
    /// Multiplier applied to the input's bit pattern (-1, 1/2 or 1/3)
    pub slope: F,
    /// Additive constant in the bit domain
    pub offset: F,
}

/// Width-specific constants and coefficient tables
pub trait Precision: Float + 'static {
    /// π
    const PI: Self;
    /// π/2
    const FRAC_PI_2: Self;
    /// 1/π
    const RECIP_PI: Self;
    /// 1/(2π)
    const RECIP_2PI: Self;
    /// log2(e)
    const LOG2_E: Self;
    /// ln(2) = 1/log2(e)
    const LN_2: Self;
    /// log10(2) = 1/log2(10)
    const LOG10_2: Self;
    /// Smallest positive normal value
    const MIN_POSITIVE: Self;

    /// `2^MANTISSA_BITS`, one unit of the exponent field in the bit domain
    const EXP2_SCALE: Self;
    /// Numeric value of [`Float::ONE_BITS`]
    const ONE_BITS_F: Self;
    /// Inputs of exp2 below this flush to zero
    const EXP2_MIN: Self;
    /// Inputs of exp2 above this saturate to infinity
    const EXP2_MAX: Self;

    /// |x| at which asin/acos switch to the `sqrt(1 - x²)` fold
    const ASIN_LIMIT: Self;
    /// Centre of the asin table's variable: tables are evaluated at `x² - ASIN_CENTER`
    const ASIN_CENTER: Self;
    /// |x| beyond which tanh has rounded to ±1
    const TANH_LIMIT: Self;

    /// Newton-Raphson passes applied by recip, sqrt and cbrt
    const REFINE_STEPS: usize;
    /// Seed for `1/x`
    const RECIP_SEED: SeedConstants<Self>;
    /// Seed for `sqrt(x)`
    const SQRT_SEED: SeedConstants<Self>;
    /// Seed for `cbrt(x)`
    const CBRT_SEED: SeedConstants<Self>;

    /// `sin(2πr)/r` in `u = r²`, `u ∈ [0, 0.25]`
    const SIN: &'static [Self];
    /// `cos(2πr)` in `u = r²`, constant term exactly 1
    const COS: &'static [Self];
    /// `tan(πr)·(r² - 1/4)/r` in `u = r²`
    const TAN: &'static [Self];
    /// `asin(x)/x` in `x² - ASIN_CENTER`, `x ∈ [0, ASIN_LIMIT]`
    const ASIN: &'static [Self];
    /// `atan(x)/x` in `u = x²`, `u ∈ [0, 1]`
    const ATAN: &'static [Self];
    /// `2^f`, `f ∈ [-0.5, 0.5]`, constant term exactly 1
    const EXP2: &'static [Self];
    /// `log2(1.5 + m)`, `m ∈ [-0.5, 0.5]`
    const LOG2: &'static [Self];
    /// `log2(1 + t)/t`, `t ∈ [0, 1]`
    const LOG2_1P: &'static [Self];
}
