//! Keyword-keyed knowledge base.
//!
//! Entries are matched by case-insensitive substring against the user's
//! message. Every matching entry contributes its content once, in entry order.
//! A built-in set covers the marketplace basics; a YAML file can replace it.
//!
//! # File format
//!
//! ```yaml
//! - keywords: ["reefer", "refrigerated"]
//!   content: Reefer containers keep cargo at a controlled temperature.
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::ports::{KnowledgeError, KnowledgeProvider};

/// One piece of grounding text and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnowledgeEntry {
    pub keywords: Vec<String>,
    pub content: String,
}

impl KnowledgeEntry {
    pub fn new(keywords: &[&str], content: impl Into<String>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            content: content.into(),
        }
    }

    fn matches(&self, lowercase_message: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && lowercase_message.contains(k.as_str()))
    }
}

/// In-memory knowledge base implementing [`KnowledgeProvider`].
#[derive(Debug, Clone)]
pub struct StaticKnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl StaticKnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut entry| {
                entry.keywords = entry.keywords.iter().map(|k| k.to_lowercase()).collect();
                entry
            })
            .collect();
        Self { entries }
    }

    /// Loads entries from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            KnowledgeError::Unavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Parses entries from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self, KnowledgeError> {
        let entries: Vec<KnowledgeEntry> =
            serde_yaml::from_str(raw).map_err(|e| KnowledgeError::InvalidData(e.to_string()))?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Joins the content of all entries relevant to `message`.
    pub fn lookup(&self, message: &str) -> String {
        let lowercase = message.to_lowercase();
        let mut sections: Vec<&str> = Vec::new();

        for entry in self.entries.iter().filter(|e| e.matches(&lowercase)) {
            let content = entry.content.trim();
            if !content.is_empty() && !sections.contains(&content) {
                sections.push(content);
            }
        }

        sections.join("\n\n")
    }
}

impl Default for StaticKnowledgeBase {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

#[async_trait]
impl KnowledgeProvider for StaticKnowledgeBase {
    async fn fetch(&self, message: &str) -> Result<String, KnowledgeError> {
        Ok(self.lookup(message))
    }
}

fn default_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            &["container", "box", "size", "20ft", "40ft", "high cube"],
            "Standard shipping containers come in 20ft and 40ft lengths; 40ft high cube units \
             add extra height. Common types include dry van, reefer (refrigerated), open top \
             and flat rack.",
        ),
        KnowledgeEntry::new(
            &["track", "location", "where is my container", "gate"],
            "Tracking requires a container number (four letters and seven digits, e.g. \
             MSCU1234567) or a booking reference. Visibility covers movement status, gate-in \
             and gate-out events, and vessel or rail legs where available.",
        ),
        KnowledgeEntry::new(
            &["rent", "lease", "hire"],
            "Rental and leasing listings show container type, size, condition grade and the \
             depot or city where the unit is available. Availability depends on location.",
        ),
        KnowledgeEntry::new(
            &["buy", "sell", "purchase", "sale", "listing", "condition"],
            "Buying and selling works through listings: sellers post units with photos, \
             condition grade (new, cargo worthy, wind and watertight, as is) and location; \
             buyers send an inquiry through the platform to start a conversation.",
        ),
        KnowledgeEntry::new(
            &["insurance", "insured", "coverage", "damage", "loss"],
            "Container insurance concepts include physical damage to the unit, loss or theft, \
             and operational liability while the container is in use or in transit.",
        ),
        KnowledgeEntry::new(
            &["port", "terminal", "depot", "icd", "cfs", "yard"],
            "The ports directory lists seaports, terminals, inland container depots (ICDs), \
             container freight stations (CFSs) and storage yards.",
        ),
    ]
}
