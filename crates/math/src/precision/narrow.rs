//! Narrow precision: `f32`
//!
//! Scalar `f32` implementation of [`Float`] backed by `libm`, plus the `f32` constants
//! and coefficient tables. `SIN`, `COS` and `TAN` are fixed bit patterns shared with
//! existing `f32` builds of these kernels; the other tables were fitted for the FMA Horner
//! evaluation the kernels use. Worst observed errors are listed on each kernel, and the
//! tests at the bottom pin every table bit for bit.

use super::{Precision, SeedConstants};
use crate::traits::{Float, FloatBits};
use core::f32::consts;

impl FloatBits for u32 {
    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        self >> count
    }

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        self | rhs
    }
}

impl Float for f32 {
    type Bits = u32;

    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;
    const EXPONENT_BIAS: i32 = 127;
    const MANTISSA_MASK: u32 = 0x007f_ffff;
    const ONE_BITS: u32 = 0x3f80_0000;

    const ZERO: f32 = 0.0;
    const ONE: f32 = 1.0;
    const TWO: f32 = 2.0;
    const HALF: f32 = 0.5;

    #[inline(always)]
    fn from_u32(value: u32) -> Self {
        value as f32
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline(always)]
    fn neg(self) -> Self {
        -self
    }

    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        libm::fmaf(self, b, c)
    }

    #[inline(always)]
    fn round(self) -> Self {
        libm::roundf(self)
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        libm::copysignf(self, sign)
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> bool {
        self < rhs
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> bool {
        self > rhs
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> bool {
        self <= rhs
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> bool {
        self == rhs
    }

    #[inline(always)]
    fn is_sign_negative(self) -> bool {
        f32::to_bits(self) >> 31 != 0
    }

    #[inline(always)]
    fn select(mask: bool, true_val: Self, false_val: Self) -> Self {
        if mask {
            true_val
        } else {
            false_val
        }
    }

    #[inline(always)]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn from_int_cast(bits: u32) -> Self {
        bits as f32
    }

    #[inline(always)]
    fn to_int_cast(self) -> u32 {
        self as u32
    }
}

const EXP2_SCALE: f32 = 8_388_608.0;
const ONE_BITS_F: f32 = 1_065_353_216.0;

impl Precision for f32 {
    const PI: f32 = consts::PI;
    const FRAC_PI_2: f32 = consts::FRAC_PI_2;
    const RECIP_PI: f32 = consts::FRAC_1_PI;
    const RECIP_2PI: f32 = consts::FRAC_1_PI * 0.5;
    const LOG2_E: f32 = consts::LOG2_E;
    const LN_2: f32 = consts::LN_2;
    const LOG10_2: f32 = consts::LOG10_2;
    const MIN_POSITIVE: f32 = f32::MIN_POSITIVE;

    const EXP2_SCALE: f32 = EXP2_SCALE;
    const ONE_BITS_F: f32 = ONE_BITS_F;
    const EXP2_MIN: f32 = -127.0;
    const EXP2_MAX: f32 = 128.0;

    const ASIN_LIMIT: f32 = 0.9;
    const ASIN_CENTER: f32 = 0.405;
    const TANH_LIMIT: f32 = 10.0;

    const REFINE_STEPS: usize = 3;
    const RECIP_SEED: SeedConstants<f32> = SeedConstants {
        slope: -1.0,
        offset: 2.0 * ONE_BITS_F - 0.101 * EXP2_SCALE,
    };
    const SQRT_SEED: SeedConstants<f32> = SeedConstants {
        slope: 0.5,
        offset: 0.5 * ONE_BITS_F - 0.037 * EXP2_SCALE,
    };
    const CBRT_SEED: SeedConstants<f32> = SeedConstants {
        slope: 1.0 / 3.0,
        offset: 2.0 / 3.0 * ONE_BITS_F - 0.034 * EXP2_SCALE,
    };

    const SIN: &'static [f32] = &SIN;
    const COS: &'static [f32] = &COS;
    const TAN: &'static [f32] = &TAN;
    const ASIN: &'static [f32] = &ASIN;
    const ATAN: &'static [f32] = &ATAN;
    const EXP2: &'static [f32] = &EXP2;
    const LOG2: &'static [f32] = &LOG2;
    const LOG2_1P: &'static [f32] = &LOG2_1P;
}

/// sin(2πr)/r as a polynomial in r², r ∈ [-0.5, 0.5].
const SIN: [f32; 8] = [
    -0.607627,
    3.769774,
    -15.082612,
    42.05709,
    -76.70574,
    81.60525,
    -41.3417,
    6.2831855,
];

/// cos(2πr) as a polynomial in r², pinned to exactly 1 at r = 0.
const COS: [f32; 9] = [
    0.2316956,
    -1.6838953,
    7.8933673,
    -26.42424,
    60.2444,
    -85.4568,
    64.93939,
    -19.739208,
    1.0,
];

/// tan(πr)·(r² - 1/4)/r in r²; the pole factor is divided back out by the caller.
const TAN: [f32; 8] = [
    -20.931292,
    17.013063,
    -5.387304,
    0.86588323,
    -0.014459344,
    0.13728626,
    0.5577013,
    -0.78539807,
];

/// asin(x)/x in x² - 0.405 for |x| ≤ 0.9.
const ASIN: [f32; 14] = [
    19.23148,
    12.568323,
    -2.7702372,
    -1.7293473,
    1.4160422,
    0.96683776,
    0.39372328,
    0.2967131,
    0.2486705,
    0.20347136,
    0.18086803,
    0.1867293,
    0.26230183,
    1.083943,
];

/// atan(x)/x in x² for |x| ≤ 1.
const ATAN: [f32; 11] = [
    0.0010576075,
    -0.0070306696,
    0.021912945,
    -0.04392841,
    0.066852815,
    -0.08785043,
    0.11050771,
    -0.14278576,
    0.19999558,
    -0.33333322,
    1.0,
];

/// 2^f for f ∈ [-0.5, 0.5], constant term exactly 1.
const EXP2: [f32; 8] = [
    1.5297324e-5,
    0.00015461445,
    0.0013333502,
    0.009618057,
    0.05550411,
    0.2402265,
    0.6931472,
    1.0,
];

/// log2(1.5 + m) for m ∈ [-0.5, 0.5].
const LOG2: [f32; 10] = [
    0.0052834987,
    -0.00886957,
    0.0118065495,
    -0.02068841,
    0.03802027,
    -0.07128261,
    0.14248766,
    -0.32059768,
    0.9617967,
    0.5849625,
];

/// log2(1 + t)/t for t ∈ [0, 1].
const LOG2_1P: [f32; 10] = [
    -0.004582082,
    0.028193908,
    -0.081329934,
    0.15211233,
    -0.22029473,
    0.2836811,
    -0.35997573,
    0.48084608,
    -0.72134596,
    1.442695,
];
