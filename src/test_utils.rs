// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for tests that compare floats.
//!
//! `assert_eq!` on f32 fails on harmless rounding noise; the `approx`
//! macros compare within an epsilon instead.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Epsilon for chained multiplicative operations (zoom in/out
/// sequences), where rounding error accumulates across steps.
pub const F32_CHAIN_EPSILON: f32 = 1e-4;
