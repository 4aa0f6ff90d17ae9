//! IEEE 754 bit reinterpretation
//!
//! Every kernel in this crate works on the raw 32-bit pattern of an `f32` at
//! some point. These helpers are the only place that crosses between the two
//! views. They are thin `const` wrappers over [`f32::from_bits`] and
//! [`f32::to_bits`], which are defined same-size reinterpretations: no value
//! conversion, no normalization, and NaN payloads survive untouched.
//!
//! # Layout
//!
//! ```text
//!  31 | 30 ........ 23 | 22 ..................... 0
//! sign|  exponent (8)  |        mantissa (23)
//! ```
//!
//! # Example
//!
//! ```rust
//! use rigel_fastmath::bits::{from_bits, to_bits};
//!
//! assert_eq!(to_bits(1.0), 0x3f80_0000);
//! assert_eq!(from_bits(0xc000_0000), -2.0);
//! ```

/// Sign bit of an `f32` pattern
pub const SIGN_MASK: u32 = 0x8000_0000;

/// Everything except the sign bit
pub const ABS_MASK: u32 = 0x7fff_ffff;

/// Bit pattern of `1.0`
pub const ONE_BITS: u32 = 0x3f80_0000;

/// Mantissa field (23 bits)
pub const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Reinterpret a 32-bit pattern as an `f32`
///
/// Every pattern is accepted, including NaN and infinity encodings.
#[inline(always)]
pub const fn from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Reinterpret an `f32` as its 32-bit pattern
#[inline(always)]
pub const fn to_bits(x: f32) -> u32 {
    x.to_bits()
}

/// Sign bit of `x` shifted down to 0 or 1
#[inline(always)]
pub const fn sign_bit(x: f32) -> u32 {
    to_bits(x) >> 31
}

/// Bit-exact constants shared by the approximation kernels
///
/// Each value is written as the hex pattern the kernels were tuned with, so
/// the coefficients carry exactly the intended bits.
pub mod consts {
    use super::from_bits;

    /// π
    pub const PI: f32 = from_bits(0x4049_0fdb);

    /// π/2
    pub const FRAC_PI_2: f32 = from_bits(0x3fc9_0fdb);

    /// π/4
    pub const FRAC_PI_4: f32 = from_bits(0x3f49_0fdb);

    /// 2π
    pub const TAU: f32 = from_bits(0x40c9_0fdb);

    /// 1/π
    pub const FRAC_1_PI: f32 = from_bits(0x3ea2_f983);

    /// log₂(e)
    pub const LOG2_E: f32 = from_bits(0x3fb8_aa3b);

    /// ln(2)
    pub const LN_2: f32 = from_bits(0x3f31_7218);

    /// log₁₀(2)
    pub const LOG10_2: f32 = from_bits(0x3e9a_209b);

    /// 2²³, the weight of one mantissa ulp at exponent zero
    pub const TWO_POW_23: f32 = from_bits(0x4b00_0000);

    /// 2⁻²³
    pub const TWO_POW_NEG_23: f32 = from_bits(0x3400_0000);

    /// Exponent bias minus the mean mantissa offset used by the
    /// single-affine exp2/log2 approximations (≈126.9427)
    pub const EXP2_BIAS: f32 = from_bits(0x42fd_e2a9);
}
