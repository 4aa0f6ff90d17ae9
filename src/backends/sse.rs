//! SSE backend implementation (x86/x86_64)
//!
//! Uses the scalar (`_ss`) forms of the SSE instructions on lane 0 of an XMM
//! register:
//!
//! - `sqrtss` for [`Backend::sqrt`] (correctly rounded)
//! - `rsqrtss` for [`Backend::rsqrt`] (relative error ≤ 1.5·2⁻¹²)
//! - `roundss`/`floorss`/`ceilss` (SSE4.1) for the rounding family
//!
//! **Note**: the rounding instructions are only used when the crate is built
//! with the `sse4.1` target feature (e.g. `-C target-cpu=native`). Otherwise
//! rounding falls through to [`SoftBackend`](super::SoftBackend). Runtime CPU
//! detection is not performed.

use super::Backend;

#[cfg(not(target_feature = "sse4.1"))]
use super::SoftBackend;

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

/// SSE instruction backend
#[derive(Debug, Clone, Copy, Default)]
pub struct SseBackend;

impl Backend for SseBackend {
    const NAME: &'static str = "sse";

    #[inline(always)]
    fn trunc(x: f32) -> f32 {
        #[cfg(target_feature = "sse4.1")]
        unsafe {
            let v = _mm_set_ss(x);
            _mm_cvtss_f32(_mm_round_ss::<{ _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC }>(v, v))
        }

        #[cfg(not(target_feature = "sse4.1"))]
        {
            SoftBackend::trunc(x)
        }
    }

    #[inline(always)]
    fn floor(x: f32) -> f32 {
        #[cfg(target_feature = "sse4.1")]
        unsafe {
            let v = _mm_set_ss(x);
            _mm_cvtss_f32(_mm_floor_ss(v, v))
        }

        #[cfg(not(target_feature = "sse4.1"))]
        {
            SoftBackend::floor(x)
        }
    }

    #[inline(always)]
    fn ceil(x: f32) -> f32 {
        #[cfg(target_feature = "sse4.1")]
        unsafe {
            let v = _mm_set_ss(x);
            _mm_cvtss_f32(_mm_ceil_ss(v, v))
        }

        #[cfg(not(target_feature = "sse4.1"))]
        {
            SoftBackend::ceil(x)
        }
    }

    #[inline(always)]
    fn round(x: f32) -> f32 {
        // Ties to even, unlike the soft backend
        #[cfg(target_feature = "sse4.1")]
        unsafe {
            let v = _mm_set_ss(x);
            _mm_cvtss_f32(_mm_round_ss::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(
                v, v,
            ))
        }

        #[cfg(not(target_feature = "sse4.1"))]
        {
            SoftBackend::round(x)
        }
    }

    #[inline(always)]
    fn sqrt(x: f32) -> f32 {
        unsafe { _mm_cvtss_f32(_mm_sqrt_ss(_mm_set_ss(x))) }
    }

    #[inline(always)]
    fn rsqrt(x: f32) -> f32 {
        unsafe { _mm_cvtss_f32(_mm_rsqrt_ss(_mm_set_ss(x))) }
    }
}
