//! Sign/magnitude family
//!
//! Pure bit-mask operations plus plain comparisons. These are the building
//! blocks the root, trigonometric and hyperbolic kernels use to strip a sign,
//! work on the magnitude, and put the sign back.

use crate::bits::{from_bits, to_bits, ABS_MASK, ONE_BITS, SIGN_MASK};

/// Absolute value by clearing the sign bit
///
/// Also clears the sign of NaN and `-0.0`.
#[inline(always)]
pub fn abs(x: f32) -> f32 {
    from_bits(to_bits(x) & ABS_MASK)
}

/// `+1.0` or `-1.0` according to the sign bit of `x`
///
/// Never returns zero: `sign(0.0) == 1.0` and `sign(-0.0) == -1.0`.
/// NaN inputs return ±1.0 according to their sign bit.
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::sign::sign;
///
/// assert_eq!(sign(-3.5), -1.0);
/// assert_eq!(sign(0.0), 1.0);
/// ```
#[inline(always)]
pub fn sign(x: f32) -> f32 {
    from_bits((to_bits(x) & SIGN_MASK) | ONE_BITS)
}

/// Magnitude of `magnitude` with the sign bit of `sign_source`
#[inline(always)]
pub fn copysign(magnitude: f32, sign_source: f32) -> f32 {
    from_bits((to_bits(magnitude) & ABS_MASK) | (to_bits(sign_source) & SIGN_MASK))
}

/// Smaller of two values
///
/// Returns `b` when the comparison is unordered (either input NaN) or the
/// values compare equal.
#[inline(always)]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values
///
/// Returns `b` when the comparison is unordered or the values compare equal.
#[inline(always)]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamp `x` to `[lo, hi]`
///
/// The caller guarantees `lo <= hi`; unlike [`f32::clamp`] this never panics.
/// With `lo > hi` the result is `hi`.
#[inline(always)]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    min(max(x, lo), hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_clears_sign() {
        assert_eq!(abs(-2.5), 2.5);
        assert_eq!(abs(2.5), 2.5);
        assert_eq!(to_bits(abs(-0.0)), 0);
        assert_eq!(abs(f32::NEG_INFINITY), f32::INFINITY);
        assert!(abs(-f32::NAN).is_nan());
    }

    #[test]
    fn test_sign_never_zero() {
        assert_eq!(sign(0.0), 1.0);
        assert_eq!(sign(-0.0), -1.0);
        assert_eq!(sign(1e-40), 1.0);
        assert_eq!(sign(-1e30), -1.0);
        assert_eq!(sign(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_copysign() {
        assert_eq!(copysign(3.0, -1.0), -3.0);
        assert_eq!(copysign(-3.0, 1.0), 3.0);
        assert_eq!(copysign(3.0, -0.0), -3.0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(min(2.0, 1.0), 1.0);
        assert_eq!(max(1.0, 2.0), 2.0);
        assert_eq!(max(2.0, 1.0), 2.0);
    }

    #[test]
    fn test_min_max_nan_returns_second_operand() {
        assert_eq!(min(f32::NAN, 1.0), 1.0);
        assert!(min(1.0, f32::NAN).is_nan());
        assert_eq!(max(f32::NAN, 1.0), 1.0);
        assert!(max(1.0, f32::NAN).is_nan());
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        assert_eq!(clamp(0.0, 1.0, -1.0), -1.0);
    }
}
