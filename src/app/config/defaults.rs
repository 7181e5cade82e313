// SPDX-License-Identifier: MPL-2.0
//! Every tunable the config file can override, with its shipped value.
//!
//! `Config::default()` and the sanitizers both read from here, so a pane of
//! `settings.toml` left out entirely and a field reset by a sanitizer end up
//! with the same number.

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Scale applied before the first fit computation runs (slightly zoomed
/// out so large diagrams are not overwhelming on open).
pub const DEFAULT_INITIAL_SCALE: f32 = 0.7;

/// Minimum allowed zoom scale.
pub const DEFAULT_MIN_SCALE: f32 = 0.1;

/// Maximum allowed zoom scale.
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Multiplier applied per zoom-in step (zoom-out divides by it).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.2;

/// Scale multiplier for one wheel notch towards the user.
pub const WHEEL_ZOOM_OUT_FACTOR: f32 = 0.9;

/// Scale multiplier for one wheel notch away from the user.
pub const WHEEL_ZOOM_IN_FACTOR: f32 = 1.1;

/// Fraction of the exact aspect-fit scale used by auto fit, leaving a
/// margin around the diagram.
pub const FIT_PADDING_FACTOR: f32 = 0.9;

/// Upper bound for the auto-computed fit scale. Diagrams smaller than
/// the pane are shown at natural size rather than blown up.
pub const FIT_SCALE_CAP: f32 = 1.0;

/// Fit scale used when `fit_mode = "fixed"`.
pub const DEFAULT_FIXED_FIT_SCALE: f32 = 0.64;

// ==========================================================================
// Render Defaults
// ==========================================================================

/// Base URL of the diagram rendering service. The Base64-encoded Mermaid
/// source is appended as the final path segment.
pub const DEFAULT_SERVICE_URL: &str = "https://mermaid.ink/svg";

/// Editor idle time before a re-render request is issued (milliseconds).
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Upper bound accepted for the debounce interval (milliseconds).
pub const MAX_DEBOUNCE_MS: u64 = 5_000;

/// HTTP request timeout for the rendering service (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum redirects followed when talking to the rendering service.
pub const MAX_REDIRECTS: usize = 10;

// The shipped values must satisfy the same relations the sanitizers enforce.
const _: () = {
    assert!(DEFAULT_MIN_SCALE > 0.0);
    assert!(DEFAULT_MAX_SCALE > DEFAULT_MIN_SCALE);
    assert!(DEFAULT_INITIAL_SCALE >= DEFAULT_MIN_SCALE);
    assert!(DEFAULT_INITIAL_SCALE <= DEFAULT_MAX_SCALE);
    assert!(DEFAULT_ZOOM_FACTOR > 1.0);

    // Wheel stepping must move the scale in opposite directions
    assert!(WHEEL_ZOOM_OUT_FACTOR < 1.0);
    assert!(WHEEL_ZOOM_OUT_FACTOR > 0.0);
    assert!(WHEEL_ZOOM_IN_FACTOR > 1.0);

    // Fit results must land inside the scale bounds
    assert!(FIT_PADDING_FACTOR > 0.0);
    assert!(FIT_PADDING_FACTOR <= 1.0);
    assert!(FIT_SCALE_CAP >= DEFAULT_MIN_SCALE);
    assert!(DEFAULT_FIXED_FIT_SCALE >= DEFAULT_MIN_SCALE);
    assert!(DEFAULT_FIXED_FIT_SCALE <= DEFAULT_MAX_SCALE);

    assert!(DEFAULT_DEBOUNCE_MS <= MAX_DEBOUNCE_MS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REDIRECTS > 0);
};
