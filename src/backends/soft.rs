//! Soft backend: bit-trick rounding and Newton-Raphson roots
//!
//! Works on any target. Everything starts from the integer conversion
//! performed by `as i32`, which truncates toward zero. `floor`, `ceil` and
//! `round` then step the truncated value by one in the wanted direction,
//! using a comparison turned into `0.0`/`1.0` rather than a branch.
//!
//! Results are exact for `|x| < 2³¹`. Beyond that the cast saturates and the
//! output is deterministic but not a correctly rounded integer.

use super::Backend;
use crate::config::{Precision, PRECISION};
use crate::root;
use crate::sign::{abs, copysign};

/// Bit-trick backend, always available
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftBackend;

impl Backend for SoftBackend {
    const NAME: &'static str = "soft";

    #[inline(always)]
    fn trunc(x: f32) -> f32 {
        // Saturating cast: NaN -> 0, |x| >= 2^31 -> i32::MIN/MAX
        (x as i32) as f32
    }

    #[inline(always)]
    fn floor(x: f32) -> f32 {
        // Truncation moved a negative non-integer up; step back down
        let t = Self::trunc(x);
        t - (t > x) as u32 as f32
    }

    #[inline(always)]
    fn ceil(x: f32) -> f32 {
        let t = Self::trunc(x);
        t + (t < x) as u32 as f32
    }

    #[inline(always)]
    fn round(x: f32) -> f32 {
        // x - t is exact, so the half comparison sees the true fraction
        let t = Self::trunc(x);
        let step = (abs(x - t) >= 0.5) as u32 as f32;
        t + copysign(step, x)
    }

    #[inline(always)]
    fn sqrt(x: f32) -> f32 {
        match PRECISION {
            Precision::Fast => root::sqrt_fast(x),
            Precision::Accurate => root::sqrt_accurate(x),
        }
    }

    #[inline(always)]
    fn rsqrt(x: f32) -> f32 {
        match PRECISION {
            Precision::Fast => root::rsqrt_fast(x),
            Precision::Accurate => root::rsqrt_accurate(x),
        }
    }
}
