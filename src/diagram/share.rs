// SPDX-License-Identifier: MPL-2.0
//! Shareable diagram links.
//!
//! A share link is the public render URL with the Mermaid source carried in
//! the URL fragment, percent-encoded. Browsers never send the fragment to
//! the server, so the link both displays the diagram and round-trips the
//! source for anyone opening it in this application.
//!
//! Links with a `code=` query parameter are an older format that is still
//! accepted on input but no longer produced.

use super::render::diagram_url;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in the fragment, matching the JavaScript
/// `encodeURIComponent` unreserved set.
const FRAGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes Mermaid source for embedding in a URL fragment.
#[must_use]
pub fn encode_fragment(source: &str) -> String {
    utf8_percent_encode(source, FRAGMENT_SET).to_string()
}

/// Decodes a percent-encoded fragment back into Mermaid source.
///
/// Returns `None` for empty input or byte sequences that are not valid
/// UTF-8 after decoding.
#[must_use]
pub fn decode_fragment(fragment: &str) -> Option<String> {
    if fragment.is_empty() {
        return None;
    }
    percent_decode_str(fragment)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Builds a share link: the render URL for `source` with the source itself
/// appended as a percent-encoded fragment.
///
/// Returns `None` when the source is blank.
#[must_use]
pub fn share_link(source: &str, service_url: &str) -> Option<String> {
    let url = diagram_url(source, service_url)?;
    Some(format!("{url}#{}", encode_fragment(source)))
}

/// Extracts Mermaid source from a pasted or CLI-provided share link.
///
/// Checks the URL fragment first, then falls back to the legacy `code=`
/// query parameter. Returns `None` when neither carries decodable source,
/// in which case the caller falls back to the default example.
#[must_use]
pub fn parse_share_input(input: &str) -> Option<String> {
    if let Some((_, fragment)) = input.split_once('#') {
        return decode_fragment(fragment);
    }
    if let Some((_, rest)) = input.split_once("code=") {
        let value = rest.split('&').next().unwrap_or(rest);
        return decode_fragment(value);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::DEFAULT_SERVICE_URL;

    #[test]
    fn fragment_round_trips_unicode_source() {
        let source = "graph TD;\n    A[Début] -->|élan| B(Fin);";
        let encoded = encode_fragment(source);
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('['));
        assert_eq!(decode_fragment(&encoded).as_deref(), Some(source));
    }

    #[test]
    fn fragment_preserves_unreserved_characters() {
        let encoded = encode_fragment("a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encoded, "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn share_link_embeds_source_after_render_url() {
        let link = share_link("graph TD", DEFAULT_SERVICE_URL).expect("non-empty source");
        assert_eq!(
            link,
            "https://mermaid.ink/svg/Z3JhcGggVEQ=#graph%20TD"
        );
    }

    #[test]
    fn share_link_blank_source_yields_none() {
        assert!(share_link("  ", DEFAULT_SERVICE_URL).is_none());
    }

    #[test]
    fn parse_share_input_reads_fragment() {
        let link = share_link("sequenceDiagram\n    A->>B: Hi", DEFAULT_SERVICE_URL)
            .expect("non-empty source");
        assert_eq!(
            parse_share_input(&link).as_deref(),
            Some("sequenceDiagram\n    A->>B: Hi")
        );
    }

    #[test]
    fn parse_share_input_reads_legacy_code_query() {
        let input = "https://example.com/?code=graph%20TD%3B";
        assert_eq!(parse_share_input(input).as_deref(), Some("graph TD;"));
    }

    #[test]
    fn parse_share_input_legacy_query_stops_at_next_parameter() {
        let input = "https://example.com/?code=graph%20TD&theme=dark";
        assert_eq!(parse_share_input(input).as_deref(), Some("graph TD"));
    }

    #[test]
    fn parse_share_input_prefers_fragment_over_query() {
        let input = "https://example.com/?code=old#new%20source";
        assert_eq!(parse_share_input(input).as_deref(), Some("new source"));
    }

    #[test]
    fn parse_share_input_rejects_invalid_utf8() {
        // %FF%FE does not decode to UTF-8
        assert!(parse_share_input("https://example.com/#%FF%FE").is_none());
    }

    #[test]
    fn parse_share_input_plain_text_yields_none() {
        assert!(parse_share_input("not a link").is_none());
        assert!(parse_share_input("").is_none());
    }
}
