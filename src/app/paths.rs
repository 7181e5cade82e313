// SPDX-License-Identifier: MPL-2.0
//! Resolution of the config and data directories.
//!
//! Every component that touches the filesystem goes through this module,
//! so the override chain is applied exactly once and identically for
//! both directories:
//!
//! 1. explicit override passed to a `_with_override()` function (tests)
//! 2. CLI flag (`--data-dir` / `--config-dir`), set via [`init_cli_overrides`]
//! 3. environment variable (`ICED_MERMAID_DATA_DIR` / `ICED_MERMAID_CONFIG_DIR`)
//! 4. platform default from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config/data roots.
const APP_NAME: &str = "IcedMermaid";

/// Redirects the data directory (step 3 of the chain).
pub const ENV_DATA_DIR: &str = "ICED_MERMAID_DATA_DIR";

/// Redirects the config directory (step 3 of the chain).
pub const ENV_CONFIG_DIR: &str = "ICED_MERMAID_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI flags.
///
/// Must be called once at startup, before anything resolves a path.
///
/// # Panics
///
/// Panics when called a second time.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("--data-dir override set twice");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("--config-dir override set twice");
}

/// Walks the override chain shared by both directories.
fn resolve_dir(
    override_path: Option<PathBuf>,
    cli_override: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_default: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = cli_override.get().and_then(Clone::clone) {
        return Some(path);
    }
    // A set-but-empty variable counts as unset.
    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    platform_default.map(|dir| dir.join(APP_NAME))
}

/// Directory holding the session state file.
///
/// `None` when the platform reports no data directory and nothing
/// overrides it.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Same as [`get_app_data_dir`], with an explicit directory taking
/// priority over the whole chain. On Linux the platform default is
/// `~/.local/share/IcedMermaid/`.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Directory holding `settings.toml`.
///
/// `None` when the platform reports no config directory and nothing
/// overrides it.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Same as [`get_app_config_dir`], with an explicit directory taking
/// priority over the whole chain. On Linux the platform default is
/// `~/.config/IcedMermaid/`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes every env-var mutation; cargo runs tests in parallel.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env_var<T>(var: &str, value: Option<&str>, body: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap();
        match value {
            Some(v) => std::env::set_var(var, v),
            None => std::env::remove_var(var),
        }
        let result = body();
        std::env::remove_var(var);
        result
    }

    #[test]
    fn explicit_override_wins_over_the_environment() {
        with_env_var(ENV_DATA_DIR, Some("/from/env"), || {
            let wanted = PathBuf::from("/explicit/data");
            assert_eq!(
                get_app_data_dir_with_override(Some(wanted.clone())),
                Some(wanted)
            );
        });
    }

    #[test]
    fn explicit_override_wins_for_the_config_dir_too() {
        let wanted = PathBuf::from("/explicit/config");
        assert_eq!(
            get_app_config_dir_with_override(Some(wanted.clone())),
            Some(wanted)
        );
    }

    #[test]
    fn env_var_beats_the_platform_default() {
        with_env_var(ENV_CONFIG_DIR, Some("/env/config"), || {
            assert_eq!(get_app_config_dir(), Some(PathBuf::from("/env/config")));
        });
    }

    #[test]
    fn blank_env_var_falls_through_to_the_platform_default() {
        with_env_var(ENV_DATA_DIR, Some(""), || {
            if let Some(path) = get_app_data_dir() {
                assert!(path.ends_with(APP_NAME));
            }
        });
    }

    #[test]
    fn platform_default_data_dir_ends_with_the_app_name() {
        with_env_var(ENV_DATA_DIR, None, || {
            // Headless CI may have no platform data dir at all.
            if let Some(path) = get_app_data_dir() {
                assert!(path.ends_with(APP_NAME));
                assert!(path.is_absolute());
            }
        });
    }

    #[test]
    fn platform_default_config_dir_ends_with_the_app_name() {
        with_env_var(ENV_CONFIG_DIR, None, || {
            if let Some(path) = get_app_config_dir() {
                assert!(path.ends_with(APP_NAME));
                assert!(path.is_absolute());
            }
        });
    }
}
