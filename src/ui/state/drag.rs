// SPDX-License-Identifier: MPL-2.0
//! Grab-and-drag tracking for panning the rendered diagram.
//!
//! The anchor is the pointer position minus the pan translation at the
//! moment the drag started; while the drag is active the new translation
//! is simply `pointer - anchor`, so the content follows the pointer
//! one-to-one in screen pixels.

use iced::{Point, Vector};

/// Tracks one pan gesture from grab to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// True from `begin` until `end`.
    pub is_dragging: bool,

    /// Pointer position minus pan translation, captured at drag start.
    /// Only meaningful while `is_dragging` is true.
    pub anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag operation from the given pointer position and the
    /// current pan translation.
    pub fn begin(&mut self, pointer: Point, position: Vector) {
        self.is_dragging = true;
        self.anchor = Some(pointer - position);
    }

    /// Stops the drag operation. Safe to call when no drag is active.
    pub fn end(&mut self) {
        self.is_dragging = false;
        self.anchor = None;
    }

    /// Returns the pan translation that keeps the content under the
    /// pointer, or `None` when no drag is active.
    #[must_use]
    pub fn position_for(&self, pointer: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }
        let anchor = self.anchor?;
        Some(pointer - anchor)
    }
}
