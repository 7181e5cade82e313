// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Render(RenderError),
}

/// What went wrong turning source into a rendered diagram.
/// Each variant carries its own localized message, so the toast can say
/// more than "render failed".
#[derive(Debug, Clone)]
pub enum RenderError {
    /// The rendering service could not be reached
    ServiceUnreachable(String),

    /// The rendering service answered with a non-success status
    /// (usually a Mermaid syntax error on the service side)
    ServiceRejected(String),

    /// The response body was not a usable SVG document
    InvalidSvg(String),

    /// The response SVG has zero width or height
    EmptyDiagram,

    /// The request exceeded the configured timeout
    Timeout,

    /// Anything the other variants do not cover
    Other(String),
}

impl RenderError {
    /// Fluent key for the toast shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RenderError::ServiceUnreachable(_) => "error-render-service-unreachable",
            RenderError::ServiceRejected(_) => "error-render-service-rejected",
            RenderError::InvalidSvg(_) => "error-render-invalid-svg",
            RenderError::EmptyDiagram => "error-render-empty-diagram",
            RenderError::Timeout => "error-render-timeout",
            RenderError::Other(_) => "error-render-general",
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ServiceUnreachable(msg) => {
                write!(f, "Rendering service unreachable: {}", msg)
            }
            RenderError::ServiceRejected(status) => {
                write!(f, "Rendering service rejected the diagram: {}", status)
            }
            RenderError::InvalidSvg(msg) => write!(f, "Invalid SVG response: {}", msg),
            RenderError::EmptyDiagram => write!(f, "Diagram has empty dimensions"),
            RenderError::Timeout => write!(f, "Rendering request timed out"),
            RenderError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Svg(_) => "error-svg",
            Error::Config(_) => "error-config",
            Error::Render(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Error::Render(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for RenderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RenderError::Timeout
        } else if err.is_connect() {
            RenderError::ServiceUnreachable(err.to_string())
        } else {
            RenderError::Other(err.to_string())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Render(err.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn render_error_i18n_keys() {
        assert_eq!(
            RenderError::ServiceUnreachable(String::new()).i18n_key(),
            "error-render-service-unreachable"
        );
        assert_eq!(
            RenderError::EmptyDiagram.i18n_key(),
            "error-render-empty-diagram"
        );
        assert_eq!(RenderError::Timeout.i18n_key(), "error-render-timeout");
    }

    #[test]
    fn render_error_display_includes_status() {
        let err = RenderError::ServiceRejected("HTTP status: 400".to_string());
        assert!(format!("{}", err).contains("400"));
    }

    #[test]
    fn error_i18n_key_delegates_to_render_error() {
        let err: Error = RenderError::EmptyDiagram.into();
        assert_eq!(err.i18n_key(), "error-render-empty-diagram");
    }
}
