//! Circular trigonometric approximations
//!
//! Low-order polynomials over a reduced argument range, built from the
//! rounding and sign/magnitude families. There are no data-dependent branches:
//! quadrant and sign fix-ups are done with bit arithmetic.
//!
//! # Error Bounds
//!
//! | function       | domain          | max abs error |
//! |----------------|-----------------|---------------|
//! | `cos`, `sin`   | `[-4π, 4π]`     | < 0.001       |
//! | `tan`          | `[-1.4, 1.4]`   | < 0.001       |
//! | `atan2`, `atan`| all finite      | < 0.001       |
//! | `asin`, `acos` | `[-1, 1]`       | < 0.005       |
//!
//! `cos`/`sin` reduce with a floored modulo, which stops landing in
//! `[0, 2π)` once `x/2π` runs out of fractional bits (`|x| ≳ 5e7`) or the
//! soft floor saturates (`|x| ≳ 1.35e10`). The reduced argument is clamped
//! to `[-π/2, π/2]` before the polynomial, so for every finite input the
//! magnitude stays below 1.0001, but past `|x| ≈ 5e7` the value carries no
//! phase information. Infinite inputs give ±1 or NaN depending on the
//! backend, and NaN propagates. `tan` has large errors near its poles,
//! which are not special-cased.
//!
//! # Example
//!
//! ```rust
//! use rigel_fastmath::trig::{sin, cos, atan2};
//!
//! // LFO at a quarter turn
//! let phase = core::f32::consts::FRAC_PI_2;
//! assert!((sin(phase) - 1.0).abs() < 0.001);
//! assert!(cos(phase).abs() < 0.001);
//!
//! // Angle of a stereo vector
//! let angle = atan2(1.0, 1.0);
//! assert!((angle - core::f32::consts::FRAC_PI_4).abs() < 0.001);
//! ```

use crate::bits::consts::{FRAC_1_PI, FRAC_PI_2, FRAC_PI_4, PI, TAU};
use crate::bits::{from_bits, sign_bit, to_bits, ABS_MASK, SIGN_MASK};
use crate::root::sqrt;
use crate::round::{modulo, round};
use crate::sign::{abs, max, min, sign};

// cos: x + c·x³ applied twice on the reduced argument
const COS_C1: f32 = from_bits(0xbc96_e670);
const COS_C2: f32 = from_bits(0xbe17_b083);

// tan: x·(A·y + B + C/y) with y = 1 - x²
const TAN_A: f32 = from_bits(0xbc99_4764);
const TAN_B: f32 = from_bits(0x3ea1_b529);
const TAN_C: f32 = from_bits(0x3fa3_0738);

// atan on [0, 1]: t + ((C3·r + C2)·r - C1)·r·t, r = t²
const ATAN_C1: f32 = from_bits(0x3ea7_be2c);
const ATAN_C2: f32 = from_bits(0x3e23_2344);
const ATAN_C3: f32 = from_bits(0xbd3e_7316);

// asin blend terms
const ASIN_OFFSET: f32 = from_bits(0x3d07_ae14);
const ASIN_CURVE: f32 = from_bits(0x3e98_a3d7);

const FRAC_PI_2_BITS: u32 = to_bits(FRAC_PI_2);
const PI_BITS: u32 = to_bits(PI);

/// Cosine
///
/// # Algorithm
///
/// ```text
/// x = |(x mod 2π) - π| - π/2          x ∈ [-π/2, π/2], cos(x₀) = sin(x)
/// x = clamp(x, -π/2, π/2)
/// x += C1·x³
/// x += C2·x³
/// ```
///
/// The two cubic corrections bend the reduced ramp into a sine curve.
/// The clamp is a no-op while the modulo is exact and keeps the cubics
/// from overflowing when it is not.
#[inline(always)]
pub fn cos(x: f32) -> f32 {
    let x = abs(modulo(x, TAU) - PI) - FRAC_PI_2;
    // Operand order keeps NaN flowing through
    let x = min(FRAC_PI_2, max(-FRAC_PI_2, x));
    let x = x + (COS_C1 * x) * (x * x);
    x + (COS_C2 * x) * (x * x)
}

/// Sine, `cos(x - π/2)`
#[inline(always)]
pub fn sin(x: f32) -> f32 {
    cos(x - FRAC_PI_2)
}

/// Sine and cosine of the same angle
///
/// Returns `(sin(x), cos(x))`, bit-identical to calling each separately.
#[inline(always)]
pub fn sincos(x: f32) -> (f32, f32) {
    (sin(x), cos(x))
}

/// Tangent
///
/// The argument is scaled by 1/π and reduced to `[-1, 1]` with
/// round-and-subtract, then evaluated as a rational function in
/// `y = 1 - x²`. Near `±π/2 + kπ`, `y` approaches zero and the result
/// blows up (or becomes infinite) without any special-casing.
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::trig::tan;
///
/// assert!((tan(core::f32::consts::FRAC_PI_4) - 1.0).abs() < 0.001);
/// ```
#[inline(always)]
pub fn tan(x: f32) -> f32 {
    let x = x * FRAC_1_PI;
    let x = 2.0 * (x - round(x));
    let y = 1.0 - x * x;
    x * (TAN_A * y + TAN_B + TAN_C / y)
}

/// Four-quadrant arctangent of `y/x`
///
/// # Algorithm
///
/// 1. Strip both signs; `t = min(|x|,|y|) / max(|x|,|y|)` lies in `[0, 1]`
/// 2. Odd polynomial approximates `atan(t)` on the first octant
/// 3. If `|y| > |x|`, reflect: `a = π/2 - a` (subtract, then flip the sign)
/// 4. If `x < 0`, reflect across the y axis: `a = π - a`
/// 5. Install the sign of `y`
///
/// Steps 3-5 are sign-bit arithmetic, not branches.
///
/// # Outside the Domain
///
/// `atan2(0, 0)` divides zero by zero and returns NaN. The sign of a zero `y`
/// is honored: `atan2(-0.0, -1.0) == -π`.
#[inline(always)]
pub fn atan2(y: f32, x: f32) -> f32 {
    let nx = sign_bit(x);
    let ny = to_bits(y) & SIGN_MASK;

    let x = abs(x);
    let y = abs(y);

    let p = (y > x) as u32;
    let t = min(x, y) / max(x, y);

    let r = t * t;
    let a = ((ATAN_C3 * r + ATAN_C2) * r - ATAN_C1) * r * t + t;

    let a = a - from_bits(p * FRAC_PI_2_BITS);
    let a = from_bits(to_bits(a) ^ ((p ^ nx) << 31));
    let a = a + from_bits(nx * PI_BITS);

    from_bits((to_bits(a) & ABS_MASK) | ny)
}

/// Arctangent, `atan2(x, 1)`
#[inline(always)]
pub fn atan(x: f32) -> f32 {
    atan2(x, 1.0)
}

/// Arcsine on `[-1, 1]`
///
/// Blends the curvature term `1 - √(1 - x²)` (which captures the vertical
/// tangent at ±1) with a quadratic correction centred at 0.35. Inputs with
/// `|x| > 1` take the square root of a negative number and produce whatever
/// the active `sqrt` backend returns for it.
#[inline(always)]
pub fn asin(x: f32) -> f32 {
    let s = sign(x);
    let x = abs(x);

    let z = 1.0 - sqrt(1.0 - x * x);
    let a = x - 0.35;

    s * (FRAC_PI_4 * (x + z + 0.12 * z * z) + ASIN_OFFSET - ASIN_CURVE * a * a)
}

/// Arccosine, `asin(-x) + π/2`
#[inline(always)]
pub fn acos(x: f32) -> f32 {
    asin(-x) + FRAC_PI_2
}
