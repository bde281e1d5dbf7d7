//! Wide precision: `f64`
//!
//! Scalar `f64` implementation of [`Float`] backed by `libm`, plus the `f64` constants
//! and coefficient tables. Tables were fitted for the FMA Horner evaluation the kernels
//! use; worst observed errors are listed on each kernel. The tests at the bottom pin
//! every table bit for bit.

use super::{Precision, SeedConstants};
use crate::traits::{Float, FloatBits};
use core::f64::consts;

impl FloatBits for u64 {
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

impl Float for f64 {
    type Bits = u64;

    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;
    const EXPONENT_BIAS: i32 = 1023;
    const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
    const ONE_BITS: u64 = 0x3ff0_0000_0000_0000;

    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const TWO: f64 = 2.0;
    const HALF: f64 = 0.5;

    #[inline(always)]
    fn from_u32(value: u32) -> Self {
        value as f64
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
        libm::fabs(self)
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        libm::fma(self, b, c)
    }

    #[inline(always)]
    fn round(self) -> Self {
        libm::round(self)
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        libm::copysign(self, sign)
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
        f64::to_bits(self) >> 63 != 0
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
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn from_int_cast(bits: u64) -> Self {
        bits as f64
    }

    #[inline(always)]
    fn to_int_cast(self) -> u64 {
        self as u64
    }
}

const EXP2_SCALE: f64 = 4_503_599_627_370_496.0;
const ONE_BITS_F: f64 = 4_607_182_418_800_017_408.0;

impl Precision for f64 {
    const PI: f64 = consts::PI;
    const FRAC_PI_2: f64 = consts::FRAC_PI_2;
    const RECIP_PI: f64 = consts::FRAC_1_PI;
    const RECIP_2PI: f64 = consts::FRAC_1_PI * 0.5;
    const LOG2_E: f64 = consts::LOG2_E;
    const LN_2: f64 = consts::LN_2;
    const LOG10_2: f64 = consts::LOG10_2;
    const MIN_POSITIVE: f64 = f64::MIN_POSITIVE;

    const EXP2_SCALE: f64 = EXP2_SCALE;
    const ONE_BITS_F: f64 = ONE_BITS_F;
    const EXP2_MIN: f64 = -1023.0;
    const EXP2_MAX: f64 = 1024.0;

    const ASIN_LIMIT: f64 = 0.9;
    const ASIN_CENTER: f64 = 0.405;
    const TANH_LIMIT: f64 = 20.0;

    const REFINE_STEPS: usize = 4;
    const RECIP_SEED: SeedConstants<f64> = SeedConstants {
        slope: -1.0,
        offset: 2.0 * ONE_BITS_F - 0.101 * EXP2_SCALE,
    };
    const SQRT_SEED: SeedConstants<f64> = SeedConstants {
        slope: 0.5,
        offset: 0.5 * ONE_BITS_F - 0.037 * EXP2_SCALE,
    };
    const CBRT_SEED: SeedConstants<f64> = SeedConstants {
        slope: 1.0 / 3.0,
        offset: 2.0 / 3.0 * ONE_BITS_F - 0.034 * EXP2_SCALE,
    };

    const SIN: &'static [f64] = &SIN;
    const COS: &'static [f64] = &COS;
    const TAN: &'static [f64] = &TAN;
    const ASIN: &'static [f64] = &ASIN;
    const ATAN: &'static [f64] = &ATAN;
    const EXP2: &'static [f64] = &EXP2;
    const LOG2: &'static [f64] = &LOG2;
    const LOG2_1P: &'static [f64] = &LOG2_1P;
}

/// sin(2πr)/r as a polynomial in r², r ∈ [-0.5, 0.5].
const SIN: [f64; 13] = [
    5.297828446027484e-06,
    -8.787567407241923e-05,
    0.0011307743334648566,
    -0.012031545790802877,
    0.10422915491538931,
    -0.7181223008686741,
    3.8199525847705758,
    -15.094642576818543,
    42.05869394489749,
    -76.70585975306138,
    81.60524927607506,
    -41.34170224039976,
    6.283185307179586,
];

/// cos(2πr) as a polynomial in r², pinned to exactly 1 at r = 0.
const COS: [f64; 14] = [
    -1.2887125374944975e-06,
    2.3018933747415992e-05,
    -0.0003229573910143718,
    0.003779825148441586,
    -0.036382839498060045,
    0.28200596825060215,
    -1.7143907110711456,
    7.903536371317466,
    -26.42625678337436,
    60.24464137187666,
    -85.45681720669373,
    64.9393940226683,
    -19.739208802178716,
    1.0,
];

/// tan(πr)·(r² - 1/4)/r in r²; the pole factor is divided back out by the caller.
const TAN: [f64; 14] = [
    3.3662934249293186e-05,
    1.683161347454842e-05,
    8.389533212197715e-05,
    0.0001675979889300308,
    0.0003834902212788873,
    0.0008617069295797491,
    0.001940093812287114,
    0.004371913511660291,
    0.009879859399956873,
    0.02251293877612043,
    0.05263664422368313,
    0.1347694005905581,
    0.5577362635648082,
    -0.7853981633974483,
];

/// asin(x)/x in x² - 0.405 for |x| ≤ 0.9.
const ASIN: [f64; 32] = [
    776976.9557681042,
    479811.3499263521,
    -722955.226749962,
    -446078.1235456729,
    330716.87103102525,
    204043.88430709625,
    -90004.2137883333,
    -55501.26932973035,
    17151.45235672587,
    10582.875576845425,
    -2083.224123036135,
    -1281.7505867472069,
    257.6264170004129,
    160.25509327031077,
    6.6780817780069865,
    4.8371955206958654,
    9.588410123913901,
    6.289893530658884,
    3.866895200204705,
    2.591362360474374,
    1.7641031663988087,
    1.2080417941796118,
    0.83911019899653,
    0.5935171475515938,
    0.4293372400947408,
    0.31974350845346,
    0.24765538736480894,
    0.20281515723371782,
    0.18087865593502644,
    0.18673617223582306,
    0.2623018079185087,
    1.0839429826903364,
];

/// atan(x)/x in x² for |x| ≤ 1.
const ATAN: [f64; 22] = [
    -8.26799581733715e-06,
    9.978410811953032e-05,
    -0.0005727925781292097,
    0.002090633535263676,
    -0.005484778971809356,
    0.011122014669752633,
    -0.018386836817918875,
    0.0259471057039563,
    -0.03264116292977077,
    0.038129809754225044,
    -0.042828645702794474,
    0.0474370596643217,
    -0.05259103789485882,
    0.05881647236717415,
    -0.06666572806289763,
    0.07692298432985685,
    -0.09090908440338843,
    0.11111111080383854,
    -0.14285714284820428,
    0.19999999999986157,
    -0.3333333333333325,
    1.0,
];

/// 2^f for f ∈ [-0.5, 0.5], constant term exactly 1.
const EXP2: [f64; 13] = [
    2.5729324177362305e-11,
    4.4558179083360645e-10,
    7.0548973041554995e-09,
    1.0178057087733941e-07,
    1.3215486808705563e-06,
    1.5252733841556773e-05,
    0.00015403530393370734,
    0.001333355814640647,
    0.00961812910762848,
    0.055504108664821625,
    0.24022650695910072,
    0.6931471805599453,
    1.0,
];

/// log2(1.5 + m) for m ∈ [-0.5, 0.5].
const LOG2: [f64; 22] = [
    2.464925492388081e-05,
    -3.8726052287373136e-05,
    2.7087512117196323e-05,
    -4.301575282083522e-05,
    8.866318607773715e-05,
    -0.00014123504100881716,
    0.00021909855424357344,
    -0.00035214546869079467,
    0.0005702971951731785,
    -0.0009267285021169265,
    0.0015162686531408293,
    -0.002501843826009198,
    0.004169756883898492,
    -0.007036464698840918,
    0.012062509965765713,
    -0.02110939244211965,
    0.03799690642688165,
    -0.07124419955034839,
    0.14248839910014344,
    -0.3205988979753235,
    0.9617966939259756,
    0.5849625007211562,
];

/// log2(1 + t)/t for t ∈ [0, 1].
const LOG2_1P: [f64; 22] = [
    -2.311228722390038e-05,
    0.000278884414386785,
    -0.0016004984212355056,
    0.005839755259766863,
    -0.015313769804286958,
    0.03103384570644826,
    -0.05125971279683863,
    0.0722464511988103,
    -0.09072755176906151,
    0.10573533963759837,
    -0.11840434341531092,
    0.13064422347177942,
    -0.14415593256381817,
    0.16027968096884426,
    -0.18033425108093526,
    0.20609903221458523,
    -0.24044915526060792,
    0.28853900731722243,
    -0.36067376019720737,
    0.4808983469626001,
    -0.7213475204444794,
    1.4426950408889634,
];
