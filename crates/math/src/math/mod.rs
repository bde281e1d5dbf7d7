//! Transcendental function kernels
//!
//! Every function is generic over [`Precision`](crate::precision::Precision) and is a
//! short pipeline: reduce the argument (see [`crate::reduce`]), evaluate a table with
//! [`horner`](crate::ops::horner), reconstruct. Nothing allocates, branches on data or
//! reports errors; edge behavior is whatever the arithmetic produces.
//!
//! # Modules
//!
//! - `trig`: sin, cos, tan, sin_cos
//! - `asin`: asin, acos
//! - `atan`: atan, atan2
//! - `exp`: exp, exp2, exp_m1
//! - `log`: ln, log2, log10, log, ln_1p
//! - `pow`: powf, powi
//! - `tanh`: hyperbolic tangent
//! - `hyperbolic`: sinh, cosh, asinh, acosh, atanh
//! - `inverse`: reciprocal
//! - `sqrt`: sqrt, cbrt, hypot
//! - `seed`: bit-pattern seeds shared by the refinement kernels
//!
//! # Example
//!
//! ```rust
//! use polykern_math::math::{atan2, exp, ln, sqrt};
//!
//! let x = exp(ln(7.5f64));
//! assert!((x - 7.5).abs() < 1e-13);
//!
//! let angle = atan2(1.0f32, 1.0);
//! assert!((angle - core::f32::consts::FRAC_PI_4).abs() < 1e-6);
//!
//! assert_eq!(sqrt(16.0f32), 4.0);
//! ```

pub mod asin;
pub mod atan;
pub mod exp;
pub mod hyperbolic;
pub mod inverse;
pub mod log;
pub mod pow;
pub mod seed;
pub mod sqrt;
pub mod tanh;
pub mod trig;

pub use self::asin::{acos, asin};
pub use self::atan::{atan, atan2};
pub use self::exp::{exp, exp2, exp_m1};
pub use self::hyperbolic::{acosh, asinh, atanh, cosh, sinh};
pub use self::inverse::recip;
pub use self::log::{ln, ln_1p, log, log10, log2};
pub use self::pow::{powf, powi};
pub use self::seed::seed;
pub use self::sqrt::{cbrt, hypot, sqrt};
pub use self::tanh::tanh;
pub use self::trig::{cos, sin, sin_cos, tan};
