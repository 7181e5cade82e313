// SPDX-License-Identifier: MPL-2.0
//! Zoom scale helpers
//!
//! Free functions shared by the viewport state machine and the viewer
//! chrome (zoom indicator, controls).

// Re-export zoom constants from centralized config so callers do not need
// to reach into the config module for pure scale math.
pub use crate::app::config::{
    DEFAULT_INITIAL_SCALE, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_FACTOR,
    WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR,
};

/// Returns the scale as a whole percentage, rounded to the nearest unit.
#[must_use]
pub fn zoom_percent(scale: f32) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let percent = (scale * 100.0).round() as i32;
    percent
}

/// Formats a scale as the percentage label shown in the zoom indicator.
#[must_use]
pub fn zoom_percent_label(scale: f32) -> String {
    format!("{}%", zoom_percent(scale))
}
