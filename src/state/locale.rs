//! Active UI locale and its script direction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The locale picker stores the chosen code in `localStorage`; first-time
//! visitors get their browser language when it is supported. Page chrome
//! (the `<html>` attributes) and translated labels both read from here.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

/// `localStorage` key holding the user's chosen locale code.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "locale";

pub const DEFAULT_LOCALE: &str = "en";

/// Locale codes with a shipped translation.
pub const SUPPORTED_LOCALES: &[&str] = &[
    "en", "ar", "ar-SY", "bg-BG", "cs-CZ", "da-DK", "de-CH", "de-DE", "el-GR", "es-ES", "et-EE", "eu", "fa",
    "fi", "fr-FR", "he-IL", "hr-HR", "hu", "id-ID", "it-IT", "ja", "ko-KR", "nb-NO", "nl-NL", "pl", "pt",
    "pt-BR", "ro", "ru-RU", "sl-SI", "sr", "sr-latn", "sv-SE", "th-TH", "tr-TR", "uk-UA", "ur", "vi-VN",
    "zh-CN", "zh-HK", "zh-TW",
];

/// Locales written right to left.
const RTL_LOCALES: &[&str] = &["ar", "ar-SY", "fa", "he-IL", "ur"];

/// Primary language subtags written right to left.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ur"];

/// Text direction for the `dir` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Currently active locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleState {
    pub code: String,
}

impl Default for LocaleState {
    fn default() -> Self {
        Self { code: DEFAULT_LOCALE.to_owned() }
    }
}

impl LocaleState {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Locale resolved from the browser, or the default outside it.
    pub fn current() -> Self {
        Self { code: current_locale() }
    }

    pub fn direction(&self) -> TextDirection {
        locale_direction(&self.code)
    }
}

/// Pick the active locale from a stored preference and the browser language.
///
/// A non-empty stored value always wins. Otherwise the browser language is
/// used when supported as-is, then its primary subtag, then [`DEFAULT_LOCALE`].
pub fn resolve_locale(stored: Option<&str>, browser_language: Option<&str>) -> String {
    if let Some(stored) = stored.filter(|s| !s.trim().is_empty()) {
        return stored.trim().to_owned();
    }
    if let Some(lang) = browser_language {
        if is_supported(lang) {
            return lang.to_owned();
        }
        let primary = primary_subtag(lang);
        if is_supported(primary) {
            return primary.to_owned();
        }
    }
    DEFAULT_LOCALE.to_owned()
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LOCALES.contains(&code)
}

/// Script direction for a locale code.
pub fn locale_direction(code: &str) -> TextDirection {
    if RTL_LOCALES.contains(&code) || RTL_LANGUAGES.contains(&primary_subtag(code)) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}

fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// Read the active locale from `localStorage` and `navigator.language`.
pub fn current_locale() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return DEFAULT_LOCALE.to_owned();
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let browser = window.navigator().language();
        resolve_locale(stored.as_deref(), browser.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_LOCALE.to_owned()
    }
}
