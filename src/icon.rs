// SPDX-License-Identifier: MPL-2.0
//! The window icon.
//! The brand mark ships as an embedded SVG and is rasterized once at
//! startup for the window title bar. Returns `None` when the SVG cannot
//! be parsed or rendered, leaving the platform default icon in place.

use iced::window::{icon, Icon};
use resvg::usvg;

const BRAND_SVG: &str = include_str!("../assets/branding/iced_mermaid.svg");

/// Side length of the rasterized window icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded brand SVG into an RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(BRAND_SVG.as_bytes(), &usvg::Options::default()).ok()?;

    // Uniform scale keeps the mark centered even if the viewBox is not square.
    let source = tree.size();
    let scale = (ICON_SIZE as f32 / source.width()).min(ICON_SIZE as f32 / source.height());

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
