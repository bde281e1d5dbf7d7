//! Shared building blocks for the kernels
//!
//! - [`bits`]: bit reinterpretation and IEEE 754 field extraction/injection
//! - [`poly`]: Horner evaluation with fused multiply-add
//! - [`select`]: value-level branching helpers

pub mod bits;
pub mod poly;
pub mod select;

pub use self::bits::{exponent, from_bits, mantissa, pow2, to_bits};
pub use self::poly::horner;
pub use self::select::{negate_on_odd, select};
