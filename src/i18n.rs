//! Localization lookup for menu labels.
//!
//! Menu labels are looked up by their English text ("Language", "Status",
//! "Activate"), so a missing translation still reads correctly.

use rust_i18n::t;

/// Locale used when a language code has no translation bundle
pub const FALLBACK_LOCALE: &str = "en";

/// Resolves a label key to display text
pub trait Localizer {
    fn localize(&self, key: &str) -> String;
}

/// Returns every key unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Localizer for Passthrough {
    fn localize(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Localizer backed by the translation files bundled under `i18n/`
#[derive(Debug, Clone)]
pub struct BundledLocalizer {
    locale: String,
}

impl BundledLocalizer {
    /// Localizer for a rust-i18n locale such as `"pt"`
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    /// Localizer for a shell language code such as `"portuguese"`
    pub fn for_code(code: &str) -> Self {
        Self::new(locale_for_code(code))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for BundledLocalizer {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}

impl Localizer for BundledLocalizer {
    fn localize(&self, key: &str) -> String {
        t!(key, locale = self.locale.as_str()).into_owned()
    }
}

/// Map a shell language code to its rust-i18n locale, ignoring ASCII case
pub fn locale_for_code(code: &str) -> &'static str {
    match code.to_ascii_lowercase().as_str() {
        "english" => "en",
        "portuguese" => "pt",
        "spanish" => "es",
        "french" => "fr",
        _ => FALLBACK_LOCALE,
    }
}
