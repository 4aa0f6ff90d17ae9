//! Rounding family: integer/fractional decomposition
//!
//! `trunc`, `floor`, `ceil` and `round` forward to the compile-time
//! [`DefaultBackend`]; `modulo` and `fract` are built on `floor`.
//!
//! # Accurate Domain
//!
//! - Soft backend: finite `|x| < 2³¹`. Beyond that the integer conversion
//!   saturates and the result is clamped to `±2³¹`.
//! - SSE4.1 backend: every finite input.
//! - NaN and infinities are not special-cased on either backend.
//!
//! # Example
//!
//! ```rust
//! use rigel_fastmath::round::{floor, ceil, modulo, fract};
//!
//! assert_eq!(floor(-1.5), -2.0);
//! assert_eq!(ceil(-1.5), -1.0);
//! assert_eq!(modulo(-1.0, 3.0), 2.0);
//! assert_eq!(fract(2.25), 0.25);
//! ```

use crate::backends::{Backend, DefaultBackend};

/// Round toward zero
#[inline(always)]
pub fn trunc(x: f32) -> f32 {
    DefaultBackend::trunc(x)
}

/// Round toward negative infinity
#[inline(always)]
pub fn floor(x: f32) -> f32 {
    DefaultBackend::floor(x)
}

/// Round toward positive infinity
#[inline(always)]
pub fn ceil(x: f32) -> f32 {
    DefaultBackend::ceil(x)
}

/// Round to the nearest integer
///
/// Halves round away from zero on the soft backend and to even on SSE4.1.
/// Either way `floor(x) <= round(x) <= ceil(x)`.
#[inline(always)]
pub fn round(x: f32) -> f32 {
    DefaultBackend::round(x)
}

/// Floored-division modulo: `x - e * floor(x / e)`
///
/// The result takes the sign of `e`, unlike `%` which follows `x`.
/// `e == 0` is outside the domain: the soft backend returns `x`, SSE4.1
/// returns NaN.
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::round::modulo;
///
/// assert_eq!(modulo(5.5, 2.0), 1.5);
/// assert_eq!(modulo(-5.5, 2.0), 0.5);
/// assert_eq!(modulo(5.5, -2.0), -0.5);
/// ```
#[inline(always)]
pub fn modulo(x: f32, e: f32) -> f32 {
    x - e * floor(x / e)
}

/// Fractional part `x - floor(x)`
///
/// Lies in `[0, 1]` for finite inputs. The upper end is reachable: a tiny
/// negative `x` gives `1.0 - tiny`, which rounds to `1.0`.
#[inline(always)]
pub fn fract(x: f32) -> f32 {
    x - floor(x)
}
