//! Rounding and root backends
//!
//! Two implementations of the operations that have a hardware counterpart
//! (truncate, floor, ceil, round to nearest, square root, reciprocal square
//! root). The backend is chosen at compile time through cargo features; only
//! one is active per build, exposed as [`DefaultBackend`].
//!
//! - [`SoftBackend`]: IEEE 754 bit tricks and Newton-Raphson, always compiled
//! - `SseBackend`: SSE/SSE4.1 scalar instructions (`hardware-accelerated`,
//!   x86/x86_64 only)
//!
//! **Note**: no runtime CPU detection is performed. Enabling
//! `hardware-accelerated` assumes SSE is present, which `target_feature`
//! guarantees for the default x86_64 targets.

pub mod soft;

#[cfg(all(
    feature = "hardware-accelerated",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
pub mod sse;

pub use soft::SoftBackend;

#[cfg(all(
    feature = "hardware-accelerated",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
pub use sse::SseBackend;

/// Scalar operations with a hardware fast path
///
/// Implementors are zero-sized markers; every method is an associated
/// function so calls resolve statically through [`DefaultBackend`].
pub trait Backend {
    /// Short name reported by [`crate::config::backend_name`]
    const NAME: &'static str;

    /// Round toward zero
    fn trunc(x: f32) -> f32;

    /// Round toward negative infinity
    fn floor(x: f32) -> f32;

    /// Round toward positive infinity
    fn ceil(x: f32) -> f32;

    /// Round to the nearest integer
    ///
    /// Tie handling is backend specific: the soft backend rounds halves away
    /// from zero, SSE rounds them to even.
    fn round(x: f32) -> f32;

    /// Square root
    fn sqrt(x: f32) -> f32;

    /// Reciprocal square root, 1/√x
    fn rsqrt(x: f32) -> f32;
}

/// Backend selected at compile time (soft bit tricks)
#[cfg(not(all(
    feature = "hardware-accelerated",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
)))]
pub type DefaultBackend = SoftBackend;

/// Backend selected at compile time (SSE instructions)
#[cfg(all(
    feature = "hardware-accelerated",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
pub type DefaultBackend = SseBackend;
