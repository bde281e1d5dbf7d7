#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! polykern-math: polynomial transcendental kernels for `f32` and `f64`
//!
//! Each function is written once against the [`Precision`] width trait and
//! instantiated for both float types. Accuracy is controlled (documented per kernel
//! under "Error Bounds"), not correctly rounded.
//!
//! # Layers
//!
//! - [`traits`]: the [`Float`]/[`FloatBits`] arithmetic and bit surface
//! - [`precision`]: per-width constants, seeds and coefficient tables
//! - [`ops`]: bit surgery, Horner evaluation, value-level select
//! - [`reduce`]: range reducers returning small reconstruction records
//! - [`math`]: the public kernels
//!
//! # Quick Start
//!
//! ```rust
//! use polykern_math::{cos, powi, sin, sin_cos};
//!
//! let (s, c) = sin_cos(0.3f32);
//! assert_eq!(s, sin(0.3f32));
//! assert_eq!(c, cos(0.3f32));
//!
//! assert_eq!(powi(3.0f64, 4), 81.0);
//! ```

// Core trait definitions
pub mod traits;

// Width instantiations: f32 and f64
pub mod precision;

// Bit, polynomial and select primitives
pub mod ops;

// Range reduction
pub mod reduce;

// Transcendental kernels
pub mod math;

pub use precision::{Precision, SeedConstants};
pub use traits::{Float, FloatBits};

pub use math::{
    acos, acosh, asin, asinh, atan, atan2, atanh, cbrt, cos, cosh, exp, exp2, exp_m1, hypot, ln,
    ln_1p, log, log10, log2, powf, powi, recip, sin, sin_cos, sinh, sqrt, tan, tanh,
};
