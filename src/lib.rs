// SPDX-License-Identifier: MPL-2.0
//! `iced_mermaid` is a desktop Mermaid diagram workbench built with the Iced
//! GUI framework.
//!
//! It pairs a source editor with a zoomable diagram viewer rendered through
//! the mermaid.ink service, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_mermaid/0.1.0")]

pub mod app;
pub mod diagram;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
