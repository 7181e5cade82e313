// SPDX-License-Identifier: MPL-2.0
//! Everything drawn on screen, Elm-style: state flows down into the
//! view functions, messages bubble back up to the app.
//!
//! The visible surfaces are [`navbar`], [`editor`], [`viewer`] and
//! [`settings`]. The rest is shared plumbing:
//!
//! - [`state`] holds the viewer's pan/zoom/drag state
//! - [`design_tokens`], [`styles`] and [`theming`] form the look: raw
//!   constants, widget style functions, light/dark resolution
//! - [`icons`] loads the SVG glyphs; [`action_icons`] maps actions to them
//! - [`notifications`] shows transient toasts
//! - [`widgets`] has the hand-drawn bits (the render spinner)

pub mod action_icons;
pub mod design_tokens;
pub mod editor;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
