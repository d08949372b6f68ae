//! Intent classification for incoming chat messages.
//!
//! Classification is keyword based with a fixed priority: the first rule whose
//! keyword set matches wins, so a message mentioning both selling and
//! insurance is always routed to `BuySell`.

use serde::{Deserialize, Serialize};

/// What the user's message is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Container tracking and visibility
    Track,
    /// Container rental and leasing
    Rent,
    /// Buying or selling containers
    BuySell,
    /// Container insurance concepts
    Insurance,
    /// Anything else
    General,
}

/// Ordered classification rules. Earlier rules take precedence.
const RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Track,
        &["track", "tracking", "location", "where is my container"],
    ),
    (Intent::Rent, &["rent", "rental", "lease", "leasing"]),
    (Intent::BuySell, &["buy", "sell", "purchase", "sale"]),
    (
        Intent::Insurance,
        &["insurance", "insured", "coverage", "policy"],
    ),
];

impl Intent {
    /// Upper-case label used in prompts and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Track => "TRACK",
            Intent::Rent => "RENT",
            Intent::BuySell => "BUY_SELL",
            Intent::Insurance => "INSURANCE",
            Intent::General => "GENERAL",
        }
    }

    /// Landing page for this intent, relative to the site origin.
    ///
    /// Shared by the action resolver and the prompt so the redirect and the
    /// URL the assistant is told to append never disagree.
    pub fn landing_path(&self) -> Option<&'static str> {
        match self {
            Intent::Track => Some("/track/index.html"),
            Intent::Rent => Some("/rent/index.html"),
            Intent::BuySell => Some("/sell/index.html"),
            Intent::Insurance => Some("/insurance/index.html"),
            Intent::General => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a message into exactly one [`Intent`].
///
/// Total and case-insensitive. Empty or whitespace-only text is `General`.
pub fn classify(text: &str) -> Intent {
    let lowercase = text.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowercase.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::General)
}
