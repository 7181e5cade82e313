// SPDX-License-Identifier: MPL-2.0
//! Render pipeline: Mermaid source to a displayable SVG.
//!
//! The heavy lifting happens on a third-party rendering service. The source
//! text is Base64-encoded into the URL path, the service answers with an SVG
//! document, and the response is validated with `usvg` before it reaches the
//! viewer. The previous diagram stays on screen when a render fails.

use crate::app::config::MAX_REDIRECTS;
use crate::error::RenderError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use iced::Size;
use std::time::Duration;

/// User agent sent with every request to the render service.
const USER_AGENT: &str = concat!("IcedMermaid/", env!("CARGO_PKG_VERSION"));

/// A fetched and validated diagram, ready for display.
#[derive(Debug, Clone)]
pub struct RenderedDiagram {
    /// The URL this diagram was fetched from. Used to drop stale responses
    /// when the editor has already moved on.
    pub url: String,
    /// Raw SVG bytes as returned by the service.
    pub svg: Vec<u8>,
    /// Renderer handle built once per fetch so rasterization stays cached
    /// across frames.
    pub handle: iced::widget::svg::Handle,
    /// Natural size parsed from the SVG document, in CSS pixels.
    pub size: Size,
}

/// Builds the service URL for the given Mermaid source.
///
/// Returns `None` when the source is blank, which the caller treats as
/// "nothing to display" rather than an error.
#[must_use]
pub fn diagram_url(source: &str, service_url: &str) -> Option<String> {
    if source.trim().is_empty() {
        return None;
    }
    Some(format!("{service_url}/{}", STANDARD.encode(source)))
}

/// Appends a cache-busting query parameter so the service re-renders
/// instead of serving a cached answer.
#[must_use]
pub fn cache_busted(url: &str) -> String {
    format!("{url}?t={}", chrono::Utc::now().timestamp_millis())
}

/// Parses SVG bytes and extracts the natural size.
///
/// Rejects documents that do not parse and degenerate sizes below one pixel.
pub fn probe_svg(bytes: &[u8]) -> Result<Size, RenderError> {
    let tree = resvg::usvg::Tree::from_data(bytes, &resvg::usvg::Options::default())
        .map_err(|e| RenderError::InvalidSvg(e.to_string()))?;

    let size = tree.size();
    if size.width() < 1.0 || size.height() < 1.0 {
        return Err(RenderError::EmptyDiagram);
    }

    Ok(Size::new(size.width(), size.height()))
}

/// Fetches a diagram from the render service and validates the response.
///
/// A non-success status means the service rejected the source, usually a
/// Mermaid syntax error. A success status with an unparsable body surfaces
/// as [`RenderError::InvalidSvg`].
pub async fn fetch(url: String, timeout_secs: u64) -> Result<RenderedDiagram, RenderError> {
    // One client per fetch; the timeout is a per-request config value
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| RenderError::Other(e.to_string()))?;

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(RenderError::ServiceRejected(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let bytes = response.bytes().await?;
    let size = probe_svg(&bytes)?;
    let handle = iced::widget::svg::Handle::from_memory(bytes.to_vec());

    Ok(RenderedDiagram {
        url,
        svg: bytes.to_vec(),
        handle,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::DEFAULT_SERVICE_URL;

    #[test]
    fn diagram_url_encodes_source_as_base64() {
        let url = diagram_url("graph TD", DEFAULT_SERVICE_URL);
        assert_eq!(
            url.as_deref(),
            Some("https://mermaid.ink/svg/Z3JhcGggVEQ=")
        );
    }

    #[test]
    fn diagram_url_blank_source_yields_none() {
        assert!(diagram_url("", DEFAULT_SERVICE_URL).is_none());
        assert!(diagram_url("   \n\t", DEFAULT_SERVICE_URL).is_none());
    }

    #[test]
    fn diagram_url_handles_unicode_source() {
        // btoa-equivalent encoding operates on UTF-8 bytes
        let url = diagram_url("graph TD;\n    A[Début] --> B;", DEFAULT_SERVICE_URL)
            .expect("non-empty source");
        let encoded = url.rsplit('/').next().expect("path segment");
        let decoded = STANDARD.decode(encoded).expect("valid base64");
        assert_eq!(
            String::from_utf8(decoded).expect("valid utf-8"),
            "graph TD;\n    A[Début] --> B;"
        );
    }

    #[test]
    fn cache_busted_appends_timestamp_query() {
        let url = cache_busted("https://mermaid.ink/svg/abc");
        let (base, query) = url.split_once("?t=").expect("cache buster present");
        assert_eq!(base, "https://mermaid.ink/svg/abc");
        let millis: i64 = query.parse().expect("numeric timestamp");
        assert!(millis > 0);
    }

    #[test]
    fn probe_svg_extracts_natural_size() {
        let svg = b"<svg xmlns='http://www.w3.org/2000/svg' width='640' height='480'></svg>";
        let size = probe_svg(svg).expect("valid svg");
        assert_eq!(size.width, 640.0);
        assert_eq!(size.height, 480.0);
    }

    #[test]
    fn probe_svg_uses_view_box_when_no_explicit_size() {
        let svg = b"<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 50'></svg>";
        let size = probe_svg(svg).expect("valid svg");
        assert_eq!(size.width, 100.0);
        assert_eq!(size.height, 50.0);
    }

    #[test]
    fn probe_svg_rejects_non_svg_payload() {
        let err = probe_svg(b"<html><body>Not Found</body></html>").unwrap_err();
        assert!(matches!(err, RenderError::InvalidSvg(_)));
    }

    #[test]
    fn probe_svg_rejects_garbage_bytes() {
        let err = probe_svg(&[0xFF, 0xFE, 0x00, 0x42]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSvg(_)));
    }
}
