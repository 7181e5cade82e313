// SPDX-License-Identifier: MPL-2.0
//! Write-through of user preferences to `settings.toml`.
//!
//! The settings screen and the navbar theme cycle both mutate the live
//! `Config` first and then call into here, so the file on disk always
//! trails the in-memory state by at most one call.

use super::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use unic_langid::LanguageIdentifier;

/// Saves the configuration, downgrading a write failure to a warning toast.
///
/// No-op under `cfg(test)`; unit tests assert on the in-memory `Config`
/// rather than on disk contents.
pub fn persist_config(config: &Config, notifications: &mut notifications::Manager) {
    if cfg!(test) {
        return;
    }

    if config::save(config).is_err() {
        notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }
}

/// Applies the newly selected locale and persists it so the next launch
/// starts in the same language.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: &LanguageIdentifier,
    notifications: &mut notifications::Manager,
) {
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    persist_config(config, notifications);
}
