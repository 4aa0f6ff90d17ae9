//! Exponential and logarithm via IEEE 754 exponent manipulation
//!
//! A positive float is `2^(e - 127) · 1.m`, so its bit pattern read as an
//! integer is roughly `2²³ · (log₂(x) + 127)`. Both directions exploit that:
//!
//! - **exp2**: scale `x` by 2²³, add the bias, and reinterpret the integer as
//!   a float
//! - **log2**: reinterpret the float as an integer and undo the scale and bias
//!
//! # Variants
//!
//! | function        | method                                      | error (rel / abs) |
//! |-----------------|---------------------------------------------|-------------------|
//! | `exp2_fast`     | single affine transform                     | < 4% rel          |
//! | `exp2_accurate` | integer/fraction split, quadratic on `2^f`  | < 0.2% rel        |
//! | `log2_fast`     | single affine transform                     | < 0.06 abs        |
//! | `log2_accurate` | exponent + quadratic on the mantissa        | < 0.01 abs        |
//!
//! `exp2` and `log2` pick one variant at compile time (`accurate-mode`).
//! The fast pair is built as exact inverses of each other, so
//! `exp2_fast(log2_fast(x))` returns `x` almost exactly even though each
//! function alone is only good to a few percent.
//!
//! # Example
//!
//! ```rust
//! use rigel_fastmath::exp2_log2::{exp2_accurate, log2_accurate};
//!
//! // MIDI note 60 relative to A4
//! let ratio = exp2_accurate((60.0 - 69.0) / 12.0);
//! let freq = 440.0 * ratio;
//! assert!((freq - 261.63).abs() < 1.0);
//!
//! assert!((log2_accurate(8.0) - 3.0).abs() < 0.01);
//! ```

use crate::bits::consts::{EXP2_BIAS, LN_2, LOG10_2, LOG2_E, TWO_POW_23, TWO_POW_NEG_23};
use crate::bits::{from_bits, to_bits, MANTISSA_MASK};
use crate::config::{Precision, PRECISION};

// 2^f ≈ (P2·f + P1)·f + P0 with f scaled by 2^23
const EXP2_P2: f32 = from_bits(0x27ac_a418);
const EXP2_P1: f32 = from_bits(0x33a8_5ada);
const EXP2_P0: f32 = from_bits(0x3f80_3884);

/// Exponent field mask, and the integer part of `x·2²³` in exp2_accurate
const EXPONENT_MASK: u32 = 0xff80_0000;

// log₂(1 + m) ≈ m·(L2·m + L1)
const LOG2_L2: f32 = from_bits(0xbf21_3248);
const LOG2_L1: f32 = from_bits(0x3fbb_c593);

/// 2^x using the compile-time precision
#[inline(always)]
pub fn exp2(x: f32) -> f32 {
    match PRECISION {
        Precision::Fast => exp2_fast(x),
        Precision::Accurate => exp2_accurate(x),
    }
}

/// 2^x as one affine transform of the bit pattern
///
/// # Outside the Domain
///
/// The float to integer cast saturates: `x < -126.94` returns `0.0`. The
/// bit pattern then climbs past the exponent field:
///
/// - `128.06 <= x < 129.06`: `+inf` or a positive NaN
/// - `129.06 <= x < 385.06`: the sign bit is set, so the result is negative
///   (tiny at first, then huge, `-inf` and negative NaNs)
/// - `x >= 385.06`: the cast saturates to `u32::MAX`, a NaN
#[inline(always)]
pub fn exp2_fast(x: f32) -> f32 {
    from_bits(((x + EXP2_BIAS) * TWO_POW_23) as u32)
}

/// 2^x with a quadratic correction on the fractional part
///
/// # Algorithm
///
/// ```text
/// n = trunc(x · 2²³)                    fixed point, 23 fractional bits
/// l = n & 0xff800000                    integer part, already in exponent position
/// f = n - l                             fractional part in [0, 2²³)
/// 2^x = from_bits(l + bits((P2·f + P1)·f + P0))
/// ```
///
/// # Outside the Domain
///
/// Valid for `-127 < x < 128`. From `x = 128` the integer part carries into
/// infinity and NaN patterns, and from `x = 129` into the sign bit, giving
/// negative results. Below `-127` the integer part wraps and the result is
/// NaN or a large negative value. Beyond ±256 the fixed-point conversion
/// saturates.
#[inline(always)]
pub fn exp2_accurate(x: f32) -> f32 {
    let n = (x * TWO_POW_23) as i32;
    let l = n & EXPONENT_MASK as i32;
    let f = (n - l) as f32;

    let p = (EXP2_P2 * f + EXP2_P1) * f + EXP2_P0;
    from_bits((l as u32).wrapping_add(to_bits(p)))
}

/// e^x = 2^(x·log₂e)
///
/// # Outside the Domain
///
/// Inherits the `exp2` limits scaled by `ln 2`. Results are good for
/// `-88 < x < 88.7`. Above that they become `+inf` or NaN, and from
/// `x ≈ 89.4` negative (`exp(100) ≈ -2.3e-34`). Below `-88` the fast
/// variant returns `0.0` while the accurate one wraps to NaN or large
/// negative values.
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::exp2_log2::exp;
///
/// let decay = exp(-1.0);
/// assert!((decay - 0.3679).abs() < 0.02);
/// ```
#[inline(always)]
pub fn exp(x: f32) -> f32 {
    exp2(x * LOG2_E)
}

/// log₂(x) using the compile-time precision
#[inline(always)]
pub fn log2(x: f32) -> f32 {
    match PRECISION {
        Precision::Fast => log2_fast(x),
        Precision::Accurate => log2_accurate(x),
    }
}

/// log₂(x) as one affine transform of the bit pattern
///
/// # Outside the Domain
///
/// Zero returns ≈ -126.94 and negative inputs return large positive values
/// (the sign bit is read as part of the integer). Neither is NaN.
#[inline(always)]
pub fn log2_fast(x: f32) -> f32 {
    to_bits(x) as f32 * TWO_POW_NEG_23 - EXP2_BIAS
}

/// log₂(x) from the exponent field plus a quadratic on the mantissa
///
/// The mantissa is recentred around 1 (using bit 22 to decide whether to
/// borrow from the exponent) so the polynomial sees `m ∈ [-0.25, 0.5)`.
/// Exact for powers of two.
///
/// # Outside the Domain
///
/// The sign bit is ignored, so `log2_accurate(-x) == log2_accurate(x)`.
/// Zero returns -127.
#[inline(always)]
pub fn log2_accurate(x: f32) -> f32 {
    let bits = to_bits(x);
    let exponent = ((bits >> 23) & 0xff) as i32;
    let mantissa = bits & MANTISSA_MASK;
    let upper_half = (bits >> 22) & 1;

    let m = from_bits(mantissa | ((upper_half ^ 0x7f) << 23)) - 1.0;
    let e = (upper_half as i32 + exponent - 127) as f32;

    e + m * (m * LOG2_L2 + LOG2_L1)
}

/// Natural logarithm, `log₂(x)·ln 2`
#[inline(always)]
pub fn ln(x: f32) -> f32 {
    log2(x) * LN_2
}

/// Base-10 logarithm, `log₂(x)·log₁₀2`
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::exp2_log2::log10;
///
/// // -6 dB ≈ half amplitude
/// let db = 20.0 * log10(0.5);
/// assert!((db + 6.02).abs() < 0.5);
/// ```
#[inline(always)]
pub fn log10(x: f32) -> f32 {
    log2(x) * LOG10_2
}

/// `base^exponent` as `2^(exponent·log₂(base))`
///
/// Only positive `base` is in the domain. Errors from `log2` are scaled by
/// `exponent` before `exp2` sees them, so accuracy degrades as
/// `|exponent·log₂(base)|` grows. For `|exponent·log₂(base)| < 4` the fast
/// variant is good to roughly 25% and the accurate one to roughly 3%.
#[inline(always)]
pub fn pow(base: f32, exponent: f32) -> f32 {
    exp2(exponent * log2(base))
}
