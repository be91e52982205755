//! Internationalization utilities for the storefront
//!
//! The rendering context carries the visitor's locality verbatim. This module
//! maps such a free-form token onto one of the bundles under `locales/`.

/// Supported locale bundles
pub const SUPPORTED_LOCALES: &[&str] = &["en", "es", "de", "fr"];
pub const DEFAULT_LOCALE: &str = "en";

/// Display names for the language switcher, in bundle order
pub const LOCALE_NAMES: &[(&str, &str)] =
    &[("en", "English"), ("es", "Español"), ("de", "Deutsch"), ("fr", "Français")];

pub fn is_supported_locale(locale: &str) -> bool {
    normalize_locale(locale).is_some()
}

/// Normalize a locale token to a supported bundle
/// Accepts: "fr", "fr-FR", "fr_fr", "FR", "es-419", etc.
pub fn normalize_locale(locale: &str) -> Option<&'static str> {
    let locale = locale.trim().to_lowercase();

    // Extract primary language tag
    let primary = locale.split(['-', '_', ',', ';']).next()?;

    SUPPORTED_LOCALES.iter().copied().find(|supported| *supported == primary)
}

/// Pick the bundle for a request's locality, falling back to `default_locale`
/// and then to [`DEFAULT_LOCALE`].
pub fn resolve_bundle(locality: Option<&str>, default_locale: &str) -> &'static str {
    locality
        .and_then(normalize_locale)
        .or_else(|| normalize_locale(default_locale))
        .unwrap_or(DEFAULT_LOCALE)
}
