//! Test utilities for rigel-fastmath
//!
//! Proptest strategies, sample grids, error helpers and per-build error
//! bounds shared by the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use rigel_fastmath::config::{Precision, HARDWARE_ACCELERATED, PRECISION};

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Strategy for generating normal floating-point values
///
/// Generates values in the range [-1000.0, 1000.0] excluding denormals,
/// infinities, and NaN.
pub fn normal_f32() -> impl Strategy<Value = f32> {
    (-1000.0f32..=1000.0f32).prop_filter("not denormal or special", |&x| x.is_normal() || x == 0.0)
}

/// Strategy for generating small normal floating-point values in [-1.0, 1.0]
pub fn small_normal_f32() -> impl Strategy<Value = f32> {
    (-1.0f32..=1.0f32).prop_filter("not denormal or special", |&x| x.is_normal() || x == 0.0)
}

/// Strategy for generating positive normal floating-point values
///
/// Useful for operations that require positive inputs (sqrt, log, etc.)
pub fn positive_f32() -> impl Strategy<Value = f32> {
    (f32::MIN_POSITIVE..=1000.0f32).prop_filter("positive normal", |&x| x.is_normal())
}

/// Strategy for positive normal values spread over many binades
///
/// Uniform sampling of `positive_f32` almost never produces small values, so
/// this draws the exponent and mantissa separately.
pub fn wide_positive_f32() -> impl Strategy<Value = f32> {
    (-30i32..=30, 1.0f32..2.0f32).prop_map(|(e, m)| m * libm::exp2f(e as f32))
}

/// Strategy for values that already hold an integer
pub fn integer_f32() -> impl Strategy<Value = f32> {
    (-(1i32 << 24)..=(1i32 << 24)).prop_map(|n| n as f32)
}

/// Strategy for generating denormal (subnormal) floating-point values
pub fn denormal_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        Just(1e-40f32),
        Just(-1e-40f32),
        Just(f32::MIN_POSITIVE / 2.0),
        Just(-f32::MIN_POSITIVE / 2.0),
    ]
}

/// Strategy for generating edge case floating-point values
///
/// Includes zero, denormals, min/max normal values.
pub fn edge_case_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        Just(0.0f32),
        Just(-0.0f32),
        Just(f32::MIN_POSITIVE),
        Just(-f32::MIN_POSITIVE),
        Just(f32::MAX),
        Just(-f32::MAX),
        denormal_f32(),
    ]
}

/// Strategy for generating any floating-point value including special values
pub fn any_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        normal_f32(),
        edge_case_f32(),
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
    ]
}

/// Every special value worth feeding to a total function
pub const SPECIAL_VALUES: [f32; 11] = [
    0.0,
    -0.0,
    1e-40,
    -1e-40,
    f32::MIN_POSITIVE,
    f32::MAX,
    -f32::MAX,
    f32::INFINITY,
    f32::NEG_INFINITY,
    f32::NAN,
    -f32::NAN,
];

// ============================================================================
// Sample Grids
// ============================================================================

/// `steps + 1` evenly spaced points covering `[lo, hi]`
pub fn linspace(lo: f32, hi: f32, steps: usize) -> Vec<f32> {
    (0..=steps)
        .map(|i| lo + (hi - lo) * i as f32 / steps as f32)
        .collect()
}

/// `steps + 1` log-spaced points covering `[10^lo_exp, 10^hi_exp]`
pub fn logspace(lo_exp: f32, hi_exp: f32, steps: usize) -> Vec<f32> {
    linspace(lo_exp, hi_exp, steps)
        .into_iter()
        .map(|e| libm::powf(10.0, e))
        .collect()
}

// ============================================================================
// Error Helpers
// ============================================================================

/// Maximum relative error of `fast_fn` against `reference_fn` over `inputs`
///
/// Points where the reference is (nearly) zero are skipped. The worst point
/// is printed so `cargo test -- --nocapture` shows where the bound is tight.
pub fn max_relative_error<F, R>(name: &str, inputs: &[f32], fast_fn: F, reference_fn: R) -> f32
where
    F: Fn(f32) -> f32,
    R: Fn(f32) -> f32,
{
    let mut max_error = 0.0f32;
    let mut worst = (0.0f32, 0.0f32, 0.0f32);

    for &x in inputs {
        let fast = fast_fn(x);
        let reference = reference_fn(x);

        if reference.abs() > 1e-6 {
            let error = ((fast - reference) / reference).abs();
            if error > max_error {
                max_error = error;
                worst = (x, fast, reference);
            }
        }
    }

    println!(
        "{}: max relative error {:.4}% at x={} (fast={}, reference={})",
        name,
        max_error * 100.0,
        worst.0,
        worst.1,
        worst.2
    );

    max_error
}

/// Maximum absolute error of `fast_fn` against `reference_fn` over `inputs`
pub fn max_absolute_error<F, R>(name: &str, inputs: &[f32], fast_fn: F, reference_fn: R) -> f32
where
    F: Fn(f32) -> f32,
    R: Fn(f32) -> f32,
{
    let mut max_error = 0.0f32;
    let mut worst_x = 0.0f32;

    for &x in inputs {
        let error = (fast_fn(x) - reference_fn(x)).abs();
        if error > max_error {
            max_error = error;
            worst_x = x;
        }
    }

    println!("{}: max absolute error {:.2e} at x={}", name, max_error, worst_x);

    max_error
}

/// Relative error, falling back to absolute error when `expected` is zero
pub fn relative_error(actual: f32, expected: f32) -> f32 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

// ============================================================================
// Per-build Error Bounds
// ============================================================================

/// Pick the bound matching the compiled precision
pub fn precision_bound(fast: f32, accurate: f32) -> f32 {
    match PRECISION {
        Precision::Fast => fast,
        Precision::Accurate => accurate,
    }
}

/// Relative error bound for the configured `sqrt`
pub fn sqrt_bound() -> f32 {
    if HARDWARE_ACCELERATED {
        1e-6
    } else {
        precision_bound(1e-3, 1e-5)
    }
}

/// Relative error bound for the configured `rsqrt`
pub fn rsqrt_bound() -> f32 {
    if HARDWARE_ACCELERATED {
        5e-4
    } else {
        precision_bound(2e-3, 1e-5)
    }
}
