//! Reply language resolution.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language used when a code is missing or not supported.
pub const DEFAULT_LANGUAGE: &str = "English";

static LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("en", "English"),
        ("es", "Spanish"),
        ("zh", "Chinese (Mandarin)"),
        ("tl", "Tagalog"),
        ("vi", "Vietnamese"),
        ("fr", "French"),
        ("ar", "Arabic"),
        ("ko", "Korean"),
        ("ru", "Russian"),
        ("de", "German"),
        ("ht", "Haitian Creole"),
        ("hi", "Hindi"),
        ("pt", "Portuguese"),
        ("it", "Italian"),
        ("pl", "Polish"),
        ("ja", "Japanese"),
        ("ur", "Urdu"),
        ("fa", "Persian (Farsi)"),
        ("gu", "Gujarati"),
        ("bn", "Bengali"),
    ])
});

/// Display name for a language code such as `"es"`.
///
/// Unknown codes resolve to English.
pub fn language_name(code: &str) -> &'static str {
    let code = code.trim().to_ascii_lowercase();
    LANGUAGES
        .get(code.as_str())
        .copied()
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Number of supported reply languages.
pub fn supported_language_count() -> usize {
    LANGUAGES.len()
}

/// Codes of all supported reply languages, in no particular order.
pub fn supported_language_codes() -> impl Iterator<Item = &'static str> {
    LANGUAGES.keys().copied()
}
