// SPDX-License-Identifier: MPL-2.0
//! User preferences, read from and written to `settings.toml`.
//!
//! The file is split into three sections, each mapped to its own struct:
//! `[general]` for language and theme, `[viewport]` for the zoom scale
//! bounds and fit behavior, `[render]` for the rendering service
//! endpoint and request pacing. Missing sections and missing fields fall
//! back to their defaults, so a hand-edited partial file always loads.
//!
//! The file location follows the usual chain: an explicit path via
//! `load_from_path()` / `save_to_path()`, then `ICED_MERMAID_CONFIG_DIR`,
//! then the platform config directory.
//!
//! ```no_run
//! use iced_mermaid::app::config;
//!
//! let (mut config, _load_warning) = config::load();
//! config.viewport.wheel_zoom_enabled = false;
//! config::save(&config).expect("settings.toml should be writable");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// How the scale is chosen when a freshly rendered diagram is fitted to
/// the pane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Compute the scale from the diagram/pane aspect ratios, with a
    /// padding margin, capped at natural size.
    #[default]
    Auto,
    /// Always use `fixed_fit_scale`.
    Fixed,
}

/// The `[general]` section: language and theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// UI language tag ("en-US", "fr"). `None` defers to the OS locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme mode; `system` follows the OS preference.
    #[serde(deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// The `[viewport]` section: zoom and fit behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Scale shown before the first fit computation runs.
    pub initial_scale: f32,

    /// Lower clamp bound for the zoom scale.
    pub min_scale: f32,

    /// Upper clamp bound for the zoom scale.
    pub max_scale: f32,

    /// Multiplier applied per zoom step (zoom-out divides by it).
    pub zoom_factor: f32,

    /// Whether the mouse wheel changes the zoom scale. Scrolling over the
    /// diagram pane is captured either way.
    pub wheel_zoom_enabled: bool,

    /// Fit scale selection strategy for freshly rendered diagrams.
    pub fit_mode: FitMode,

    /// Fit scale used when `fit_mode` is `fixed`.
    pub fixed_fit_scale: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_scale: DEFAULT_INITIAL_SCALE,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            wheel_zoom_enabled: true,
            fit_mode: FitMode::default(),
            fixed_fit_scale: DEFAULT_FIXED_FIT_SCALE,
        }
    }
}

impl ViewportConfig {
    /// Returns a copy with unusable values pulled back to defaults so the
    /// zoom math stays total regardless of what the config file contains.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let min_scale = if self.min_scale > 0.0 && self.min_scale.is_finite() {
            self.min_scale
        } else {
            DEFAULT_MIN_SCALE
        };
        let max_scale = if self.max_scale >= min_scale && self.max_scale.is_finite() {
            self.max_scale
        } else {
            DEFAULT_MAX_SCALE.max(min_scale)
        };
        let zoom_factor = if self.zoom_factor > 1.0 && self.zoom_factor.is_finite() {
            self.zoom_factor
        } else {
            DEFAULT_ZOOM_FACTOR
        };
        Self {
            initial_scale: self.initial_scale.clamp(min_scale, max_scale),
            min_scale,
            max_scale,
            zoom_factor,
            wheel_zoom_enabled: self.wheel_zoom_enabled,
            fit_mode: self.fit_mode,
            fixed_fit_scale: self.fixed_fit_scale.clamp(min_scale, max_scale),
        }
    }
}

/// The `[render]` section: rendering service and pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Base URL of the rendering service (the encoded diagram is appended
    /// as a path segment).
    pub service_url: String,

    /// Editor idle time before a re-render is requested (milliseconds).
    pub debounce_ms: u64,

    /// HTTP request timeout (seconds).
    pub timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl RenderConfig {
    /// Returns a copy with unusable values pulled back to defaults.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let service_url = if self.service_url.trim().is_empty() {
            DEFAULT_SERVICE_URL.to_string()
        } else {
            self.service_url.trim_end_matches('/').to_string()
        };
        Self {
            service_url,
            debounce_ms: self.debounce_ms.min(MAX_DEBOUNCE_MS),
            timeout_secs: self.timeout_secs.max(1),
        }
    }
}

/// The whole of `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub viewport: ViewportConfig,
    pub render: RenderConfig,
}

/// Accepts `theme_mode = "Dark"` as well as `"dark"`; the stock derive
/// would reject anything but lowercase.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    ThemeMode::from_name(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown theme_mode {raw:?}")))
}

fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads `settings.toml` from the resolved config directory.
///
/// Never fails: a missing file yields the defaults, a broken one yields
/// the defaults plus a notification key describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration, optionally from an explicit base directory
/// instead of the resolved config directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

/// Reads and parses one specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes `settings.toml` to the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration, optionally to an explicit base directory
/// instead of the resolved config directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Writes one specific file, creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn non_default_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            viewport: ViewportConfig {
                initial_scale: 0.5,
                zoom_factor: 1.5,
                wheel_zoom_enabled: false,
                fit_mode: FitMode::Fixed,
                fixed_fit_scale: 0.25,
                ..ViewportConfig::default()
            },
            render: RenderConfig {
                service_url: "https://example.invalid/svg".to_string(),
                debounce_ms: 250,
                timeout_secs: 5,
            },
        }
    }

    #[test]
    fn round_trip_preserves_every_section() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("settings.toml");

        let config = non_default_config();
        save_to_path(&config, &path).expect("save config");
        assert_eq!(load_from_path(&path).expect("load config"), config);
    }

    #[test]
    fn invalid_toml_surfaces_a_config_error() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("write file");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn saving_creates_missing_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("save config");
        assert!(path.exists());
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.general.language.is_none());
        assert_eq!(config.viewport.initial_scale, DEFAULT_INITIAL_SCALE);
        assert_eq!(config.viewport.min_scale, DEFAULT_MIN_SCALE);
        assert_eq!(config.viewport.max_scale, DEFAULT_MAX_SCALE);
        assert_eq!(config.viewport.zoom_factor, DEFAULT_ZOOM_FACTOR);
        assert!(config.viewport.wheel_zoom_enabled);
        assert_eq!(config.viewport.fit_mode, FitMode::Auto);
        assert_eq!(config.render.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.render.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.render.timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\n").expect("partial config should parse");
        assert_eq!(config.viewport, ViewportConfig::default());
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn partial_section_fills_the_rest_from_defaults() {
        let config: Config =
            toml::from_str("[viewport]\nmin_scale = 0.2\n").expect("partial section should parse");
        assert_eq!(config.viewport.min_scale, 0.2);
        assert_eq!(config.viewport.max_scale, DEFAULT_MAX_SCALE);
        assert_eq!(config.viewport.zoom_factor, DEFAULT_ZOOM_FACTOR);
    }

    #[test]
    fn fit_mode_parses_kebab_case() {
        let config: Config =
            toml::from_str("[viewport]\nfit_mode = \"fixed\"\n").expect("fit_mode should parse");
        assert_eq!(config.viewport.fit_mode, FitMode::Fixed);
    }

    #[test]
    fn theme_mode_accepts_mixed_case() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("theme_mode should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_an_error() {
        let parsed: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn sanitized_viewport_repairs_inverted_bounds() {
        let config = ViewportConfig {
            min_scale: 4.0,
            max_scale: 0.5,
            ..ViewportConfig::default()
        };

        let sane = config.sanitized();
        assert!(sane.max_scale >= sane.min_scale);
        assert!(sane.initial_scale >= sane.min_scale);
        assert!(sane.initial_scale <= sane.max_scale);
    }

    #[test]
    fn sanitized_viewport_rejects_degenerate_zoom_factor() {
        let config = ViewportConfig {
            zoom_factor: 0.0,
            ..ViewportConfig::default()
        };

        assert_eq!(config.sanitized().zoom_factor, DEFAULT_ZOOM_FACTOR);
    }

    #[test]
    fn sanitized_render_trims_trailing_slash() {
        let config = RenderConfig {
            service_url: "https://mermaid.ink/svg/".to_string(),
            ..RenderConfig::default()
        };

        assert_eq!(config.sanitized().service_url, "https://mermaid.ink/svg");
    }

    #[test]
    fn sanitized_render_replaces_empty_url() {
        let config = RenderConfig {
            service_url: "   ".to_string(),
            ..RenderConfig::default()
        };

        assert_eq!(config.sanitized().service_url, DEFAULT_SERVICE_URL);
    }
}
