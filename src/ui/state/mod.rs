// SPDX-License-Identifier: MPL-2.0
//! Viewer interaction state, kept out of the main App struct.
//!
//! Each submodule owns one concern: [`viewport`] the pan/zoom camera,
//! [`drag`] the in-flight mouse pan, [`scale`] the zoom arithmetic.

pub mod drag;
pub mod scale;
pub mod viewport;

pub use drag::DragState;
pub use viewport::ViewportState;
