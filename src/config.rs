//! Build-time configuration
//!
//! All implementation choices are made by cargo features when the crate is
//! compiled. Nothing here is consulted at runtime in a way that costs a branch:
//! [`PRECISION`] is a `const`, so `match PRECISION { .. }` in a kernel folds to
//! a single arm, and the rounding/root backend is a type alias.
//!
//! # Feature Flags
//!
//! - `accurate-mode`: second Newton-Raphson step for `sqrt`/`rsqrt`,
//!   polynomial-corrected `exp2`/`log2`
//! - `hardware-accelerated`: SSE `sqrtss`/`rsqrtss` on x86/x86_64, plus
//!   `roundss`/`floorss`/`ceilss` when the `sse4.1` target feature is enabled
//!
//! # Example
//!
//! ```rust
//! use rigel_fastmath::config::{self, Precision};
//!
//! if config::PRECISION == Precision::Accurate {
//!     // tighter error bounds are in effect
//! }
//! let _name = config::backend_name(); // "soft" or "sse"
//! ```

use crate::backends::{Backend, DefaultBackend};

/// Accuracy/cost trade-off selected for the build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Single refinement step, single affine exp2/log2
    Fast,

    /// Extra refinement step, polynomial-corrected exp2/log2
    Accurate,
}

impl Precision {
    /// Short lowercase name, used in bench ids and test output
    pub const fn name(self) -> &'static str {
        match self {
            Precision::Fast => "fast",
            Precision::Accurate => "accurate",
        }
    }
}

/// Precision level compiled into this build
#[cfg(feature = "accurate-mode")]
pub const PRECISION: Precision = Precision::Accurate;

/// Precision level compiled into this build
#[cfg(not(feature = "accurate-mode"))]
pub const PRECISION: Precision = Precision::Fast;

/// Whether hardware sqrt/rsqrt instructions back the root family
///
/// `true` only when the `hardware-accelerated` feature is on and the target
/// actually has SSE. On every other target the feature is accepted and the
/// soft backend is used.
pub const HARDWARE_ACCELERATED: bool = cfg!(all(
    feature = "hardware-accelerated",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
));

/// Whether hardware rounding instructions back the rounding family
///
/// Requires SSE4.1 in addition to [`HARDWARE_ACCELERATED`].
pub const HARDWARE_ROUNDING: bool = HARDWARE_ACCELERATED && cfg!(target_feature = "sse4.1");

/// Name of the backend selected at compile time
#[inline]
pub fn backend_name() -> &'static str {
    DefaultBackend::NAME
}
