//! Inbound chat message and session context.

use super::Site;

/// Language code assumed when the widget does not send one.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// A single user message with the session context it was sent from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub text: String,
    pub site: Site,
    /// Country code reported by the widget, if any.
    pub country: Option<String>,
    pub language: String,
}

impl InboundMessage {
    /// Creates a message for the primary site in the default language, with no country.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            site: Site::default(),
            country: None,
            language: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }

    pub fn with_site(mut self, site: Site) -> Self {
        self.site = site;
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Message text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed_text().is_empty()
    }

    /// Country code with whitespace removed; `None` when absent or blank.
    pub fn country_code(&self) -> Option<&str> {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
