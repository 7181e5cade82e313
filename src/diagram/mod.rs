// SPDX-License-Identifier: MPL-2.0
//! Diagram domain: example catalog, render pipeline, share links and export.
//!
//! Everything here is UI-free. The application layer wires these functions
//! into messages and tasks.

pub mod export;
pub mod render;
pub mod share;
pub mod source;

pub use render::{cache_busted, diagram_url, fetch, RenderedDiagram};
pub use share::{parse_share_input, share_link};
pub use source::{default_example, Example, EXAMPLES};
