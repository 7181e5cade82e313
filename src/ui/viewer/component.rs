// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating pan/zoom state and update logic.
//!
//! The component owns the [`ViewportState`] plus the two measurements the
//! fit computation needs: the pane size (reported by the canvas) and the
//! natural size of the current diagram (reported by the render pipeline).
//! All widget events funnel through [`State::handle_message`]; the
//! application layer calls the lifecycle methods directly when the diagram
//! identity changes.

use crate::app::config::ViewportConfig;
use crate::ui::state::ViewportState;
use crate::ui::viewer::controls;
use iced::{Point, Size};

/// Messages emitted by viewer widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Controls(controls::Message),
    /// Primary button or first finger went down at a pane-local position.
    DragStarted(Point),
    /// Pointer moved to a pane-local position while a drag is active.
    DragMoved(Point),
    /// Drag released, or the pointer left the pane mid-drag.
    DragEnded,
    /// One wheel notch over the pane. Positive values scroll towards the
    /// user (zoom out), mirroring the browser's wheel axis.
    WheelScrolled(f32),
    /// The pane was laid out with a new size.
    PaneResized(Size),
}

/// Pan/zoom state for the diagram pane.
#[derive(Debug, Clone)]
pub struct State {
    pub viewport: ViewportState,
    pane_size: Size,
    natural_size: Option<Size>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            viewport: ViewportState::new(config),
            pane_size: Size::ZERO,
            natural_size: None,
        }
    }

    /// Applies a settings change to the zoom bounds and wheel behavior.
    pub fn set_config(&mut self, config: ViewportConfig) {
        self.viewport.set_config(config);
    }

    /// Last pane size reported by the canvas.
    #[must_use]
    pub fn pane_size(&self) -> Size {
        self.pane_size
    }

    /// Natural size of the displayed diagram, if one is loaded.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.natural_size
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Controls(controls::Message::ZoomIn) => self.viewport.zoom_in(),
            Message::Controls(controls::Message::ZoomOut) => self.viewport.zoom_out(),
            Message::Controls(controls::Message::ResetView) => self.viewport.reset_view(),
            Message::DragStarted(pointer) => self.viewport.begin_drag(pointer),
            Message::DragMoved(pointer) => self.viewport.update_drag(pointer),
            Message::DragEnded => self.viewport.end_drag(),
            Message::WheelScrolled(delta_y) => self.viewport.on_wheel(delta_y),
            Message::PaneResized(size) => self.pane_resized(size),
        }
    }

    /// The diagram identity changed: the transform resets right away, the
    /// fit runs later in [`State::diagram_loaded`] once the replacement has
    /// arrived with its dimensions.
    pub fn diagram_changed(&mut self) {
        self.viewport.reset_for_new_diagram();
    }

    /// A render finished: remember the natural size and fit the diagram to
    /// the pane, discarding any manual zoom/pan.
    pub fn diagram_loaded(&mut self, natural: Size) {
        self.natural_size = Some(natural);
        self.viewport.fit_to_pane(natural, self.pane_size);
    }

    /// The editor went blank: nothing to display until the next render.
    pub fn diagram_cleared(&mut self) {
        self.natural_size = None;
        self.viewport.reset_for_new_diagram();
    }

    /// Re-runs the fit when the pane geometry changes so the default scale
    /// tracks the available space.
    fn pane_resized(&mut self, size: Size) {
        if size == self.pane_size {
            return;
        }
        self.pane_size = size;
        if let Some(natural) = self.natural_size {
            self.viewport.fit_to_pane(natural, size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn state_with_pane() -> State {
        let mut state = State::new(ViewportConfig {
            initial_scale: 1.0,
            ..ViewportConfig::default()
        });
        state.handle_message(Message::PaneResized(Size::new(800.0, 600.0)));
        state
    }

    #[test]
    fn control_messages_drive_the_viewport() {
        let mut state = state_with_pane();

        state.handle_message(Message::Controls(controls::Message::ZoomIn));
        assert_abs_diff_eq!(state.viewport.scale(), 1.2);

        state.handle_message(Message::Controls(controls::Message::ZoomOut));
        state.handle_message(Message::Controls(controls::Message::ZoomOut));
        assert!(state.viewport.scale() < 1.0);

        state.handle_message(Message::Controls(controls::Message::ResetView));
        assert_abs_diff_eq!(state.viewport.scale(), 1.0);
    }

    #[test]
    fn drag_messages_translate_position() {
        let mut state = state_with_pane();

        state.handle_message(Message::DragStarted(Point::new(100.0, 100.0)));
        state.handle_message(Message::DragMoved(Point::new(150.0, 120.0)));

        assert_abs_diff_eq!(state.viewport.position.x, 50.0);
        assert_abs_diff_eq!(state.viewport.position.y, 20.0);

        state.handle_message(Message::DragEnded);
        state.handle_message(Message::DragMoved(Point::new(400.0, 400.0)));
        assert_abs_diff_eq!(state.viewport.position.x, 50.0);
    }

    #[test]
    fn wheel_towards_user_zooms_out() {
        let mut state = state_with_pane();
        state.handle_message(Message::WheelScrolled(1.0));
        assert_abs_diff_eq!(state.viewport.scale(), 0.9);
    }

    #[test]
    fn diagram_loaded_fits_and_centers() {
        let mut state = state_with_pane();
        state.handle_message(Message::Controls(controls::Message::ZoomIn));
        state.viewport.position = iced::Vector::new(50.0, -30.0);

        state.diagram_loaded(Size::new(1600.0, 1200.0));

        assert_abs_diff_eq!(state.viewport.scale(), 0.45);
        assert_abs_diff_eq!(state.viewport.position.x, 0.0);
        assert_abs_diff_eq!(state.viewport.position.y, 0.0);
        assert_eq!(state.natural_size(), Some(Size::new(1600.0, 1200.0)));
    }

    #[test]
    fn diagram_changed_resets_before_the_load_arrives() {
        let mut state = state_with_pane();
        state.handle_message(Message::Controls(controls::Message::ZoomIn));
        state.viewport.position = iced::Vector::new(80.0, 80.0);

        state.diagram_changed();

        assert_abs_diff_eq!(state.viewport.scale(), 1.0);
        assert_abs_diff_eq!(state.viewport.position.x, 0.0);
    }

    #[test]
    fn diagram_change_mid_drag_keeps_the_drag_engaged() {
        let mut state = state_with_pane();
        state.handle_message(Message::DragStarted(Point::new(10.0, 10.0)));

        state.diagram_changed();
        state.diagram_loaded(Size::new(400.0, 300.0));

        assert!(state.viewport.drag.is_dragging);
        state.handle_message(Message::DragEnded);
        assert!(!state.viewport.drag.is_dragging);
    }

    #[test]
    fn pane_resize_refits_the_loaded_diagram() {
        let mut state = state_with_pane();
        state.diagram_loaded(Size::new(1600.0, 1200.0));
        assert_abs_diff_eq!(state.viewport.scale(), 0.45);

        // Shrink the pane: the fit tracks the new geometry
        state.handle_message(Message::PaneResized(Size::new(400.0, 300.0)));
        assert_abs_diff_eq!(state.viewport.scale(), 0.225);
    }

    #[test]
    fn pane_resize_without_diagram_only_records_the_size() {
        let mut state = State::new(ViewportConfig {
            initial_scale: 1.0,
            ..ViewportConfig::default()
        });

        state.handle_message(Message::PaneResized(Size::new(640.0, 480.0)));

        assert_eq!(state.pane_size(), Size::new(640.0, 480.0));
        assert_abs_diff_eq!(state.viewport.scale(), 1.0);
    }

    #[test]
    fn same_size_resize_does_not_override_manual_zoom() {
        let mut state = state_with_pane();
        state.diagram_loaded(Size::new(1600.0, 1200.0));
        state.handle_message(Message::Controls(controls::Message::ZoomIn));
        let zoomed = state.viewport.scale();

        state.handle_message(Message::PaneResized(Size::new(800.0, 600.0)));

        assert_abs_diff_eq!(state.viewport.scale(), zoomed);
    }

    #[test]
    fn diagram_cleared_forgets_the_natural_size() {
        let mut state = state_with_pane();
        state.diagram_loaded(Size::new(400.0, 300.0));

        state.diagram_cleared();

        assert_eq!(state.natural_size(), None);
    }
}
