// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent.
//!
//! Picks a locale from the CLI flag, the config file or the system, in
//! that order, loads the matching embedded `.ftl` bundle and falls back
//! to English for anything the translation is missing. The language can
//! be switched at runtime from the settings screen.

pub mod fluent;
