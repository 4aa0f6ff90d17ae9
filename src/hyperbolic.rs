//! Hyperbolic functions
//!
//! `sinh` and `cosh` are two calls to [`exp2`](crate::exp2_log2::exp2) each,
//! so their accuracy follows the compile-time precision. `tanh` is a
//! standalone piecewise approximation.
//!
//! # Error Bounds
//!
//! On `[-5, 5]`:
//!
//! - `sinh`/`cosh`: < 4.5% relative (fast), < 0.3% relative (accurate).
//!   `sinh` near zero is limited by cancellation between the two `exp2`
//!   terms; its absolute error there is bounded by the `exp2` error.
//! - `tanh`: < 0.07 absolute, exactly odd, saturates to ±1
//!
//! # Example
//!
//! ```rust
//! use rigel_fastmath::hyperbolic::tanh;
//!
//! // Soft clipping
//! let driven = tanh(4.0);
//! assert!(driven > 0.99 && driven <= 1.0);
//! ```

use crate::bits::consts::LOG2_E;
use crate::exp2_log2::exp2;
use crate::sign::{abs, sign};

/// Linear coefficient of the small-argument tanh branch (≈ -4.4286)
const TANH_SMALL_C: f32 = crate::bits::from_bits(0xc08d_b6db);

/// `e^x / 2` and `e^-x / 2` as base-2 exponents; the `- 1` folds in the halving
#[inline(always)]
fn half_exp_exponents(x: f32) -> (f32, f32) {
    (LOG2_E * x - 1.0, -LOG2_E * x - 1.0)
}

/// Hyperbolic sine, `(e^x - e^-x) / 2`
///
/// # Outside the Domain
///
/// Both `exp2` terms must stay inside their domain. With the accurate
/// variant that holds for `|x| < 87.3`, where the small term drops below
/// `2^-127` and wraps. With the fast variant it holds for `|x| < 89.4`, after
/// which the large term overflows, and past `|x| ≈ 90.1` it turns negative
/// (`sinh(100) ≈ -1.2e-34` in fast mode). Results out there can be of the
/// wrong sign, infinite or NaN.
#[inline(always)]
pub fn sinh(x: f32) -> f32 {
    let (a, b) = half_exp_exponents(x);
    exp2(a) - exp2(b)
}

/// Hyperbolic cosine, `(e^x + e^-x) / 2`
///
/// # Outside the Domain
///
/// Same limits as [`sinh`]: `|x| < 87.3` (accurate) or `|x| < 89.4` (fast).
/// Beyond them the result is not guaranteed positive, e.g.
/// `cosh(-200) ≈ -3.2e9`.
///
/// # Example
///
/// ```rust
/// use rigel_fastmath::hyperbolic::cosh;
///
/// assert!((cosh(0.0) - 1.0).abs() < 0.04);
/// ```
#[inline(always)]
pub fn cosh(x: f32) -> f32 {
    let (a, b) = half_exp_exponents(x);
    exp2(a) + exp2(b)
}

/// Hyperbolic tangent
///
/// Sign stripped, then one of two shapes:
///
/// ```text
/// |x| < 1:   z = 0.07·x²;  x + (z·x - 4.4286)·z
/// |x| >= 1:  t = (1.05·x - 0.1)·x + 1.09;  1 - 1/t²
/// ```
///
/// This is the only data-dependent branch in the crate; no single branch-free
/// polynomial covered both the linear region and the saturation tail.
#[inline(always)]
pub fn tanh(x: f32) -> f32 {
    let s = sign(x);
    let x = abs(x);

    if x < 1.0 {
        let z = 0.07 * x * x;
        s * (x + (z * x + TANH_SMALL_C) * z)
    } else {
        let t = (1.05 * x - 0.1) * x + 1.09;
        s - s / (t * t)
    }
}
