// SPDX-License-Identifier: MPL-2.0
//! The zoom/pan state machine for the diagram pane.
//!
//! Owns the current scale (always within the configured bounds), the pan
//! translation and the drag state, and exposes the operations the viewer
//! wires to buttons, pointer events and the mouse wheel.
//!
//! The rendered diagram is drawn as if by CSS
//! `translate(position) scale(scale)` with the transform origin at the
//! center of the pane; [`ViewportState::content_rect`] computes the
//! resulting screen rectangle.

use crate::app::config::{FitMode, ViewportConfig, FIT_PADDING_FACTOR, FIT_SCALE_CAP};
use crate::ui::state::drag::DragState;
use crate::ui::state::scale::{WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR};
use iced::{Point, Rectangle, Size, Vector};

/// Zoom/pan state for the diagram pane.
///
/// The scale field is private: every mutation path clamps against the
/// configured bounds, so the clamp invariant holds after any sequence of
/// operations.
#[derive(Debug, Clone)]
pub struct ViewportState {
    config: ViewportConfig,
    scale: f32,

    /// Pan translation in screen pixels, applied about the pane center.
    /// Unbounded: panning the diagram fully out of view is allowed.
    pub position: Vector,

    /// Grab-and-drag state.
    pub drag: DragState,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl ViewportState {
    /// Creates a viewport from the given configuration. The configuration
    /// is sanitized first so degenerate values from a config file cannot
    /// break the zoom math.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        let config = config.sanitized();
        Self {
            scale: config.initial_scale,
            config,
            position: Vector::new(0.0, 0.0),
            drag: DragState::default(),
        }
    }

    /// Replaces the configuration (settings changes), re-clamping the
    /// current scale against the new bounds.
    pub fn set_config(&mut self, config: ViewportConfig) {
        self.config = config.sanitized();
        self.scale = self.clamped(self.scale);
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns the current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns whether the scale sits at the lower clamp bound.
    #[must_use]
    pub fn is_min_zoom(&self) -> bool {
        self.scale <= self.config.min_scale
    }

    /// Returns whether the scale sits at the upper clamp bound.
    #[must_use]
    pub fn is_max_zoom(&self) -> bool {
        self.scale >= self.config.max_scale
    }

    /// Whether the "drag to pan" hint should be visible.
    #[must_use]
    pub fn shows_pan_hint(&self) -> bool {
        self.scale > 1.0
    }

    fn clamped(&self, value: f32) -> f32 {
        value.clamp(self.config.min_scale, self.config.max_scale)
    }

    /// Steps the zoom in by the configured factor.
    pub fn zoom_in(&mut self) {
        self.scale = self.clamped(self.scale * self.config.zoom_factor);
    }

    /// Steps the zoom out by the configured factor.
    pub fn zoom_out(&mut self) {
        self.scale = self.clamped(self.scale / self.config.zoom_factor);
    }

    /// Restores scale 1.0 and a centered position. Legal in any state,
    /// including mid-drag; an active drag keeps its anchor.
    pub fn reset_view(&mut self) {
        self.scale = self.clamped(1.0);
        self.position = Vector::new(0.0, 0.0);
    }

    /// Starts a drag from the given pointer position. Ignored while
    /// another drag is active (a second finger does not steal the drag).
    pub fn begin_drag(&mut self, pointer: Point) {
        if self.drag.is_dragging {
            return;
        }
        self.drag.begin(pointer, self.position);
    }

    /// Moves the pan translation so the content follows the pointer.
    /// No-op when no drag is active.
    pub fn update_drag(&mut self, pointer: Point) {
        if let Some(position) = self.drag.position_for(pointer) {
            self.position = position;
        }
    }

    /// Ends the active drag, if any.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Applies one wheel notch: scrolling towards the user (positive
    /// delta) zooms out, away zooms in. No-op when wheel zoom is disabled
    /// by configuration; event capture is the caller's concern.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if !self.config.wheel_zoom_enabled {
            return;
        }
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT_FACTOR
        } else {
            WHEEL_ZOOM_IN_FACTOR
        };
        self.scale = self.clamped(self.scale * factor);
    }

    /// Recomputes the fit scale for a freshly rendered (or re-laid-out)
    /// diagram and recenters it. Overrides any manual zoom/pan; the drag
    /// state is left alone.
    pub fn fit_to_pane(&mut self, natural: Size, pane: Size) {
        self.scale = self.clamped(self.fit_scale(natural, pane));
        self.position = Vector::new(0.0, 0.0);
    }

    /// Recenters and restores scale 1.0 for a diagram that is about to be
    /// replaced. The fit runs later, when the new diagram has loaded; an
    /// in-flight drag is deliberately left untouched (its anchor goes
    /// stale, which is harmless).
    pub fn reset_for_new_diagram(&mut self) {
        self.scale = self.clamped(1.0);
        self.position = Vector::new(0.0, 0.0);
    }

    fn fit_scale(&self, natural: Size, pane: Size) -> f32 {
        match self.config.fit_mode {
            FitMode::Fixed => self.config.fixed_fit_scale,
            FitMode::Auto => {
                if natural.width <= 0.0
                    || natural.height <= 0.0
                    || pane.width <= 0.0
                    || pane.height <= 0.0
                {
                    return FIT_SCALE_CAP;
                }
                if natural.width > pane.width || natural.height > pane.height {
                    let natural_aspect = natural.width / natural.height;
                    let pane_aspect = pane.width / pane.height;
                    let exact = if natural_aspect > pane_aspect {
                        pane.width / natural.width
                    } else {
                        pane.height / natural.height
                    };
                    (exact * FIT_PADDING_FACTOR).min(FIT_SCALE_CAP)
                } else {
                    FIT_SCALE_CAP
                }
            }
        }
    }

    /// Screen rectangle the diagram occupies inside the pane: the content
    /// is scaled about the pane center, then translated by `position` in
    /// unscaled screen pixels.
    #[must_use]
    pub fn content_rect(&self, natural: Size, pane: Size) -> Rectangle {
        let width = natural.width * self.scale;
        let height = natural.height * self.scale;
        Rectangle::new(
            Point::new(
                pane.width / 2.0 - width / 2.0 + self.position.x,
                pane.height / 2.0 - height / 2.0 + self.position.y,
            ),
            Size::new(width, height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE};
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F32_CHAIN_EPSILON};

    fn controller() -> ViewportState {
        ViewportState::new(ViewportConfig {
            initial_scale: 1.0,
            ..ViewportConfig::default()
        })
    }

    #[test]
    fn new_viewport_starts_at_initial_scale_and_centered() {
        let state = ViewportState::default();
        assert_abs_diff_eq!(state.scale(), 0.7);
        assert_abs_diff_eq!(state.position.x, 0.0);
        assert_abs_diff_eq!(state.position.y, 0.0);
        assert!(!state.drag.is_dragging);
    }

    #[test]
    fn scale_stays_clamped_through_arbitrary_operation_sequence() {
        let mut state = controller();
        let in_bounds = |s: &ViewportState| {
            s.scale() >= DEFAULT_MIN_SCALE && s.scale() <= DEFAULT_MAX_SCALE
        };

        for _ in 0..40 {
            state.zoom_in();
            assert!(in_bounds(&state));
        }
        for _ in 0..80 {
            state.zoom_out();
            assert!(in_bounds(&state));
        }
        for i in 0..60 {
            state.on_wheel(if i % 3 == 0 { 1.0 } else { -1.0 });
            assert!(in_bounds(&state));
        }
        state.fit_to_pane(Size::new(5000.0, 4000.0), Size::new(100.0, 80.0));
        assert!(in_bounds(&state));
    }

    #[test]
    fn zoom_in_then_out_returns_to_start() {
        let mut state = controller();
        let start = state.scale();

        state.zoom_in();
        state.zoom_out();

        assert_abs_diff_eq!(state.scale(), start, epsilon = F32_CHAIN_EPSILON);
    }

    #[test]
    fn three_zoom_ins_reach_1_728() {
        let mut state = controller();
        state.zoom_in();
        state.zoom_in();
        state.zoom_in();

        assert_relative_eq!(state.scale(), 1.728, max_relative = 1e-4);
    }

    #[test]
    fn zoom_out_at_floor_stays_at_floor() {
        let mut state = controller();
        for _ in 0..30 {
            state.zoom_out();
        }
        assert_abs_diff_eq!(state.scale(), DEFAULT_MIN_SCALE);

        state.zoom_out();
        assert_abs_diff_eq!(state.scale(), DEFAULT_MIN_SCALE);
    }

    #[test]
    fn zoom_in_saturates_at_ceiling() {
        let mut state = controller();
        for _ in 0..30 {
            state.zoom_in();
        }
        assert_abs_diff_eq!(state.scale(), DEFAULT_MAX_SCALE);
    }

    #[test]
    fn drag_translates_position_by_pointer_delta() {
        let mut state = controller();
        state.begin_drag(Point::new(100.0, 100.0));
        state.update_drag(Point::new(150.0, 120.0));

        assert_abs_diff_eq!(state.position.x, 50.0);
        assert_abs_diff_eq!(state.position.y, 20.0);
    }

    #[test]
    fn drag_accumulates_from_existing_position() {
        let mut state = controller();
        state.position = Vector::new(-30.0, 40.0);

        state.begin_drag(Point::new(10.0, 10.0));
        state.update_drag(Point::new(25.0, 5.0));

        assert_abs_diff_eq!(state.position.x, -15.0);
        assert_abs_diff_eq!(state.position.y, 35.0);
    }

    #[test]
    fn update_drag_after_end_drag_is_noop() {
        let mut state = controller();
        state.begin_drag(Point::new(100.0, 100.0));
        state.update_drag(Point::new(150.0, 120.0));
        state.end_drag();

        state.update_drag(Point::new(500.0, 500.0));

        assert_abs_diff_eq!(state.position.x, 50.0);
        assert_abs_diff_eq!(state.position.y, 20.0);
    }

    #[test]
    fn second_begin_drag_does_not_steal_active_drag() {
        let mut state = controller();
        state.begin_drag(Point::new(100.0, 100.0));
        let anchor = state.drag.anchor;

        // A second finger landing mid-drag must not re-anchor
        state.begin_drag(Point::new(400.0, 400.0));
        assert_eq!(state.drag.anchor, anchor);
    }

    #[test]
    fn reset_view_is_unconditional_mid_drag() {
        let mut state = controller();
        state.zoom_in();
        state.begin_drag(Point::new(100.0, 100.0));
        state.update_drag(Point::new(180.0, 160.0));

        state.reset_view();

        assert_abs_diff_eq!(state.scale(), 1.0);
        assert_abs_diff_eq!(state.position.x, 0.0);
        assert_abs_diff_eq!(state.position.y, 0.0);
        // The drag itself stays active; only the transform resets
        assert!(state.drag.is_dragging);
    }

    #[test]
    fn wheel_towards_user_zooms_out() {
        let mut state = controller();
        state.on_wheel(1.0);
        assert_abs_diff_eq!(state.scale(), 0.9);
    }

    #[test]
    fn wheel_away_from_user_zooms_in() {
        let mut state = controller();
        state.on_wheel(-1.0);
        assert_abs_diff_eq!(state.scale(), 1.1);
    }

    #[test]
    fn wheel_is_ignored_when_disabled() {
        let mut state = ViewportState::new(ViewportConfig {
            initial_scale: 1.0,
            wheel_zoom_enabled: false,
            ..ViewportConfig::default()
        });

        state.on_wheel(-1.0);
        state.on_wheel(1.0);

        assert_abs_diff_eq!(state.scale(), 1.0);
    }

    #[test]
    fn fit_overrides_manual_zoom_and_pan() {
        let mut state = controller();
        state.zoom_in();
        state.position = Vector::new(120.0, -45.0);

        state.fit_to_pane(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));

        // Aspect ratios match, so the exact fit is 0.5, padded to 0.45
        assert_abs_diff_eq!(state.scale(), 0.45);
        assert_abs_diff_eq!(state.position.x, 0.0);
        assert_abs_diff_eq!(state.position.y, 0.0);
    }

    #[test]
    fn auto_fit_keeps_small_diagrams_at_natural_size() {
        let mut state = controller();
        state.zoom_out();

        state.fit_to_pane(Size::new(300.0, 200.0), Size::new(800.0, 600.0));

        assert_abs_diff_eq!(state.scale(), 1.0);
    }

    #[test]
    fn auto_fit_uses_limiting_axis() {
        let mut state = controller();

        // Wide diagram in a square-ish pane: width limits the fit
        state.fit_to_pane(Size::new(2000.0, 500.0), Size::new(1000.0, 800.0));
        assert_abs_diff_eq!(state.scale(), 0.45);

        // Tall diagram: height limits the fit
        state.fit_to_pane(Size::new(500.0, 2000.0), Size::new(1000.0, 800.0));
        assert_abs_diff_eq!(state.scale(), 0.36);
    }

    #[test]
    fn fixed_fit_mode_uses_configured_scale() {
        let mut state = ViewportState::new(ViewportConfig {
            fit_mode: FitMode::Fixed,
            fixed_fit_scale: 0.25,
            ..ViewportConfig::default()
        });

        state.fit_to_pane(Size::new(30.0, 30.0), Size::new(800.0, 600.0));

        assert_abs_diff_eq!(state.scale(), 0.25);
    }

    #[test]
    fn new_diagram_reset_leaves_drag_untouched() {
        let mut state = controller();
        state.zoom_in();
        state.begin_drag(Point::new(100.0, 100.0));
        state.update_drag(Point::new(150.0, 150.0));

        state.reset_for_new_diagram();

        assert_abs_diff_eq!(state.scale(), 1.0);
        assert_abs_diff_eq!(state.position.x, 0.0);
        assert_abs_diff_eq!(state.position.y, 0.0);
        assert!(state.drag.is_dragging);

        // ...and the later fit keeps the drag flag as well
        state.fit_to_pane(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
        assert!(state.drag.is_dragging);
    }

    #[test]
    fn content_rect_applies_centered_transform() {
        let mut state = controller();
        state.zoom_in(); // 1.2

        state.position = Vector::new(10.0, -20.0);
        let rect = state.content_rect(Size::new(400.0, 300.0), Size::new(800.0, 600.0));

        assert_abs_diff_eq!(rect.width, 480.0);
        assert_abs_diff_eq!(rect.height, 360.0);
        assert_abs_diff_eq!(rect.x, 400.0 - 240.0 + 10.0);
        assert_abs_diff_eq!(rect.y, 300.0 - 180.0 - 20.0);
    }

    #[test]
    fn content_rect_is_centered_at_origin_position() {
        let state = controller();
        let rect = state.content_rect(Size::new(200.0, 100.0), Size::new(800.0, 600.0));

        assert_abs_diff_eq!(rect.x, 300.0);
        assert_abs_diff_eq!(rect.y, 250.0);
    }

    #[test]
    fn pan_hint_shows_only_past_natural_size() {
        let mut state = controller();
        assert!(!state.shows_pan_hint());

        state.zoom_in();
        assert!(state.shows_pan_hint());

        state.reset_view();
        assert!(!state.shows_pan_hint());
    }

    #[test]
    fn set_config_reclamps_current_scale() {
        let mut state = controller();
        for _ in 0..30 {
            state.zoom_in();
        }
        assert_abs_diff_eq!(state.scale(), DEFAULT_MAX_SCALE);

        state.set_config(ViewportConfig {
            max_scale: 2.0,
            ..ViewportConfig::default()
        });

        assert_abs_diff_eq!(state.scale(), 2.0);
    }
}
