//! Core width abstraction traits
//!
//! Every kernel in this crate is written once against [`Float`] and instantiated for
//! `f32` (narrow) and `f64` (wide). The trait exposes exactly the operations the kernels
//! need: arithmetic, fused multiply-add, comparison, value-level selection and the bit
//! reinterpretation primitives used by seed generation and exponent surgery.
//!
//! Method names deliberately mirror a lane-wise vector API (`add`, `fma`, `select`, ...)
//! so a vector backend can implement the same trait without touching kernel code.

use core::fmt::Debug;

/// Unsigned integer with the same width as its [`Float`]
///
/// Only the handful of operations needed for IEEE 754 field extraction are exposed.
pub trait FloatBits: Copy + Clone + Sized + PartialEq + Debug {
    /// Logical right shift
    fn shr(self, count: u32) -> Self;

    /// Bitwise AND
    fn bitwise_and(self, rhs: Self) -> Self;

    /// Bitwise OR
    fn bitwise_or(self, rhs: Self) -> Self;
}

/// Floating-point width abstraction
///
/// Implemented for `f32` and `f64` in [`crate::precision`]. Comparisons return plain
/// `bool` masks and [`Float::select`] chooses between two already-computed values, so
/// kernels stay free of data-dependent control flow.
///
/// # Example
///
/// ```rust
/// use polykern_math::Float;
///
/// fn mul_add_twice<F: Float>(x: F, a: F, b: F) -> F {
///     x.fma(a, b).fma(a, b)
/// }
///
/// assert_eq!(mul_add_twice(1.0f32, 2.0, 1.0), 7.0);
/// ```
pub trait Float: Copy + Clone + Sized + Debug {
    /// Same-width unsigned bit pattern
    type Bits: FloatBits;

    /// Width of the stored mantissa field (23 or 52)
    const MANTISSA_BITS: u32;

    /// Width of the exponent field (8 or 11)
    const EXPONENT_BITS: u32;

    /// Exponent bias (127 or 1023)
    const EXPONENT_BIAS: i32;

    /// Mask selecting the mantissa field
    const MANTISSA_MASK: Self::Bits;

    /// Bit pattern of `1.0`
    const ONE_BITS: Self::Bits;

    /// 0.0
    const ZERO: Self;

    /// 1.0
    const ONE: Self;

    /// 2.0
    const TWO: Self;

    /// 0.5
    const HALF: Self;

    /// Exact conversion of a small unsigned integer
    fn from_u32(value: u32) -> Self;

    // Arithmetic

    /// Addition
    fn add(self, rhs: Self) -> Self;

    /// Subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Multiplication
    fn mul(self, rhs: Self) -> Self;

    /// Division
    fn div(self, rhs: Self) -> Self;

    /// Negation
    fn neg(self) -> Self;

    /// Absolute value (clears the sign bit)
    fn abs(self) -> Self;

    /// Fused multiply-add: `self * b + c` with a single rounding
    fn fma(self, b: Self, c: Self) -> Self;

    /// Round to the nearest integer, ties away from zero
    fn round(self) -> Self;

    /// Magnitude of `self` with the sign bit of `sign`
    fn copysign(self, sign: Self) -> Self;

    // Comparison

    /// `self < rhs` (false when either side is NaN)
    fn lt(self, rhs: Self) -> bool;

    /// `self > rhs` (false when either side is NaN)
    fn gt(self, rhs: Self) -> bool;

    /// `self <= rhs` (false when either side is NaN)
    fn le(self, rhs: Self) -> bool;

    /// `self == rhs` (`-0.0 == 0.0`)
    fn eq(self, rhs: Self) -> bool;

    /// True when the sign bit is set, including for `-0.0`
    fn is_sign_negative(self) -> bool;

    /// Value-level select: `mask ? true_val : false_val`
    fn select(mask: bool, true_val: Self, false_val: Self) -> Self;

    // Bit reinterpretation

    /// Raw bit pattern (no value conversion)
    fn to_bits(self) -> Self::Bits;

    /// Float from a raw bit pattern (no value conversion)
    fn from_bits(bits: Self::Bits) -> Self;

    /// Numeric value of an integer bit pattern, e.g. `0x3f80_0000 -> 1065353216.0`
    fn from_int_cast(bits: Self::Bits) -> Self;

    /// Numeric conversion to the unsigned integer type, truncating and saturating
    ///
    /// Negative values and NaN become 0; values beyond the integer range become its maximum.
    fn to_int_cast(self) -> Self::Bits;
}
