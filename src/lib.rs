#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! rigel-fastmath: branch-minimal scalar `f32` approximations
//!
//! Every function is pure, allocation-free and total: it never panics and
//! never returns an error. Inputs outside a function's documented domain give
//! a deterministic but unspecified value (possibly NaN or infinity).
//!
//! # Families
//!
//! - `round`: trunc, floor, ceil, round, modulo, fract
//! - `sign`: abs, sign, copysign, min, max, clamp
//! - `root`: sqrt, rsqrt, cbrt
//! - `exp2_log2`: exp2, exp, log2, ln, log10, pow
//! - `trig`: cos, sin, sincos, tan, atan2, atan, asin, acos
//! - `hyperbolic`: sinh, cosh, tanh
//!
//! # Features
//!
//! - **`accurate-mode`**: tighter sqrt/rsqrt/exp2/log2 at extra cost
//! - **`hardware-accelerated`**: SSE sqrt/rsqrt (and SSE4.1 rounding) on
//!   x86/x86_64
//!
//! Both are resolved at compile time; see [`config`].
//!
//! # Quick Start
//!
//! ```rust
//! use rigel_fastmath::{cos, exp, rsqrt, tanh};
//!
//! // Envelope decay
//! let env = exp(-5.0 * 0.1);
//! assert!((env - 0.6065).abs() < 0.03);
//!
//! // Normalize a 2D vector
//! let (x, y) = (3.0f32, 4.0f32);
//! let inv_len = rsqrt(x * x + y * y);
//! assert!((x * inv_len - 0.6).abs() < 0.002);
//!
//! // Oscillator and soft clip
//! let sample = tanh(2.0 * cos(0.25));
//! assert!(sample > 0.9);
//! ```

// Bit reinterpretation and exact constants
pub mod bits;

// Build-time feature selection
pub mod config;

// Soft and hardware backends
pub mod backends;

// Function families, leaves first
pub mod round;
pub mod sign;
pub mod root;
pub mod exp2_log2;
pub mod trig;
pub mod hyperbolic;

// Flat re-exports for convenience
pub use exp2_log2::{exp, exp2, ln, log10, log2, pow};
pub use hyperbolic::{cosh, sinh, tanh};
pub use root::{cbrt, rsqrt, sqrt};
pub use round::{ceil, floor, fract, modulo, round, trunc};
pub use sign::{abs, clamp, copysign, max, min, sign};
pub use trig::{acos, asin, atan, atan2, cos, sin, sincos, tan};

pub use backends::{Backend, DefaultBackend, SoftBackend};
pub use config::{Precision, PRECISION};
