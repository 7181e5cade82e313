use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let Some(locale) = file
                .as_ref()
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(file.as_ref()) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource = FluentResource::try_new(source).expect("embedded FTL must parse");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Unicode isolation marks garble the text in Iced widgets.
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .expect("one resource per bundle");
            bundles.insert(locale, bundle);
        }

        let mut available_locales: Vec<_> = bundles.keys().cloned().collect();
        available_locales.sort();

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| "en-US".parse().unwrap());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active language. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        errors.is_empty().then(|| value.into_owned())
    }
}

/// Picks the startup language: CLI flag, then config, then the OS
/// locale, keeping only languages a bundle actually exists for.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|tag| tag.parse().unwrap()).collect()
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn cli_flag_beats_config_language() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available = locales(&["en-US", "fr"]);

        let resolved = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(resolved, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_applies_without_cli_flag() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available = locales(&["en-US", "fr"]);

        let resolved = resolve_locale(None, &config, &available);
        assert_eq!(resolved, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unavailable_cli_language_falls_through_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available = locales(&["en-US", "fr"]);

        let resolved = resolve_locale(Some("de".to_string()), &config, &available);
        assert_eq!(resolved, Some("fr".parse().unwrap()));
    }

    #[test]
    fn system_locale_only_resolves_to_an_available_language() {
        let available = locales(&["en-US", "fr"]);
        // Whatever the host locale is, the result must be one of ours.
        if let Some(resolved) = resolve_locale(None, &Config::default(), &available) {
            assert!(available.contains(&resolved));
        }
    }

    #[test]
    fn embedded_bundles_cover_english_and_french() {
        let i18n = english();
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
    }

    #[test]
    fn known_key_translates() {
        assert_eq!(english().tr("viewer-pan-hint"), "drag to pan");
    }

    #[test]
    fn missing_key_is_flagged_inline() {
        assert_eq!(english().tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_interpolate_into_the_pattern() {
        let text = english().tr_with_args(
            "notification-download-success",
            &[("filename", "diagram.svg")],
        );
        assert_eq!(text, "Saved diagram.svg");
    }

    #[test]
    fn switching_locale_changes_translations() {
        let mut i18n = english();
        let before = i18n.tr("settings-title");
        i18n.set_locale("fr".parse().unwrap());
        assert_ne!(i18n.tr("settings-title"), before);
    }

    #[test]
    fn unknown_locale_is_ignored() {
        let mut i18n = english();
        i18n.set_locale("xx-XX".parse().unwrap());
        assert_eq!(
            i18n.current_locale(),
            &"en-US".parse::<LanguageIdentifier>().unwrap()
        );
    }
}
