//! Root family: square root, reciprocal square root, cube root
//!
//! All three start from an initial guess built directly on the bit pattern
//! (halving or thirding the biased exponent) and refine it with Newton-Raphson.
//! `sqrt` and `rsqrt` can instead use hardware instructions through the
//! `hardware-accelerated` feature, see [`crate::backends`].
//!
//! # Error Bounds
//!
//! Relative error for positive normal inputs:
//!
//! | function          | bound    |
//! |-------------------|----------|
//! | `sqrt_fast`       | < 0.1%   |
//! | `sqrt_accurate`   | < 0.001% |
//! | `rsqrt_fast`      | < 0.2%   |
//! | `rsqrt_accurate`  | < 0.001% |
//! | `rsqrt` (SSE)     | < 0.05%  |
//! | `cbrt`            | < 0.01%  |
//!
//! # Outside the Domain
//!
//! No domain checks are performed. Zero, negative and subnormal inputs to
//! `sqrt`/`rsqrt` return whatever the bit trick produces (for example
//! `sqrt_fast(0.0)` is a tiny positive number rather than zero). The integer
//! steps use wrapping arithmetic so such inputs never panic.

use crate::backends::{Backend, DefaultBackend};
use crate::bits::{from_bits, to_bits};
use crate::sign::{abs, sign};

/// Offset that turns `bits >> 1` into a square-root guess
const SQRT_MAGIC: u32 = 0x3f76_9e5c;

/// The classic fast inverse square root constant
const RSQRT_MAGIC: u32 = 0x5f37_59df;

/// Offset for the `bits / 3` cube-root guess
const CBRT_MAGIC: u32 = 0x548c_2b4b;

// Polynomial correction applied to the cube-root guess
const CBRT_A: f32 = from_bits(0x3fe0_4c03);
const CBRT_B: f32 = from_bits(0x3f02_66d9);
const CBRT_C: f32 = from_bits(0xbfa0_1f36);
const ONE_THIRD: f32 = from_bits(0x3eaa_aaab);

/// Square root using the compile-time backend and precision
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::root::sqrt;
///
/// let s = sqrt(2.0);
/// assert!((s - core::f32::consts::SQRT_2).abs() < 0.002);
/// ```
#[inline(always)]
pub fn sqrt(x: f32) -> f32 {
    DefaultBackend::sqrt(x)
}

/// Reciprocal square root `1/√x` using the compile-time backend and precision
#[inline(always)]
pub fn rsqrt(x: f32) -> f32 {
    DefaultBackend::rsqrt(x)
}

#[inline(always)]
fn sqrt_guess(x: f32) -> f32 {
    from_bits(to_bits(x).wrapping_add(SQRT_MAGIC) >> 1)
}

#[inline(always)]
fn sqrt_step(s: f32, x: f32) -> f32 {
    0.5 * (s + x / s)
}

/// Bit-pattern guess plus one Newton-Raphson step
#[inline(always)]
pub fn sqrt_fast(x: f32) -> f32 {
    sqrt_step(sqrt_guess(x), x)
}

/// Bit-pattern guess plus two Newton-Raphson steps
#[inline(always)]
pub fn sqrt_accurate(x: f32) -> f32 {
    let s = sqrt_step(sqrt_guess(x), x);
    sqrt_step(s, x)
}

#[inline(always)]
fn rsqrt_guess(x: f32) -> f32 {
    from_bits(RSQRT_MAGIC.wrapping_sub(to_bits(x) >> 1))
}

#[inline(always)]
fn rsqrt_step(y: f32, half_x: f32) -> f32 {
    y * (1.5 - half_x * y * y)
}

/// Fast inverse square root with one Newton-Raphson step
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::root::rsqrt_fast;
///
/// assert!((rsqrt_fast(4.0) - 0.5).abs() < 0.001);
/// ```
#[inline(always)]
pub fn rsqrt_fast(x: f32) -> f32 {
    rsqrt_step(rsqrt_guess(x), x * 0.5)
}

/// Fast inverse square root with two Newton-Raphson steps
#[inline(always)]
pub fn rsqrt_accurate(x: f32) -> f32 {
    let half_x = x * 0.5;
    let y = rsqrt_step(rsqrt_guess(x), half_x);
    rsqrt_step(y, half_x)
}

/// Cube root, defined for both signs
///
/// # Algorithm
///
/// ```text
/// y  = from_bits(0x548c2b4b - bits(|x|) / 3)      ≈ |x|^(-1/3)
/// c  = |x|·y³
/// y *= A + c·(B·c + C)                          polynomial correction
/// d  = |x|·y²                                   ≈ |x|^(1/3)
/// r  = d + (d - d²·y) / 3                       one Newton-style step
/// ```
///
/// The sign of `x` is reapplied at the end. Accurate to < 0.01% for nonzero
/// normal inputs; `cbrt(0.0)` is 0.
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::root::cbrt;
///
/// assert!((cbrt(8.0) - 2.0).abs() < 0.001);
/// assert!((cbrt(-27.0) + 3.0).abs() < 0.001);
/// ```
#[inline(always)]
pub fn cbrt(x: f32) -> f32 {
    let s = sign(x);
    let x = abs(x);

    let y = from_bits(CBRT_MAGIC - to_bits(x) / 3);
    let c = x * y * y * y;
    let y = y * (CBRT_A + c * (CBRT_B * c + CBRT_C));

    let d = x * y * y;
    let c = d - d * d * y;
    s * (c * ONE_THIRD + d)
}
