//! Follow-up actions for the chat widget.

use serde::Serialize;

use super::{Intent, Site};

/// Structured instruction telling the front end where to go next.
///
/// Serializes to `{}` when there is nothing to do, or to
/// `{"redirect": "<path>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActionDirective {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
}

impl ActionDirective {
    /// A directive with no action.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redirect(path: &'static str) -> Self {
        Self {
            redirect: Some(path),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.redirect.is_none()
    }
}

/// Maps an intent to its follow-up action.
///
/// Paths are relative; the front end resolves them against its own origin,
/// so both sites share the same table.
pub fn resolve_action(intent: Intent, _site: Site) -> ActionDirective {
    intent
        .landing_path()
        .map(ActionDirective::redirect)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_INTENTS: [Intent; 5] = [
        Intent::Track,
        Intent::Rent,
        Intent::BuySell,
        Intent::Insurance,
        Intent::General,
    ];

    #[test]
    fn resolves_landing_pages() {
        let site = Site::ContainerBazar;
        assert_eq!(
            resolve_action(Intent::Track, site).redirect,
            Some("/track/index.html")
        );
        assert_eq!(
            resolve_action(Intent::Rent, site).redirect,
            Some("/rent/index.html")
        );
        assert_eq!(
            resolve_action(Intent::BuySell, site).redirect,
            Some("/sell/index.html")
        );
        assert_eq!(
            resolve_action(Intent::Insurance, site).redirect,
            Some("/insurance/index.html")
        );
    }

    #[test]
    fn general_has_no_action() {
        for site in [Site::ContainerBazar, Site::ContainersClub] {
            assert!(resolve_action(Intent::General, site).is_empty());
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for site in [Site::ContainerBazar, Site::ContainersClub] {
            for intent in ALL_INTENTS {
                let first = serde_json::to_vec(&resolve_action(intent, site)).unwrap();
                let second = serde_json::to_vec(&resolve_action(intent, site)).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn serializes_to_expected_json() {
        let json = serde_json::to_string(&ActionDirective::none()).unwrap();
        assert_eq!(json, "{}");

        let json = serde_json::to_string(&resolve_action(Intent::Track, Site::default())).unwrap();
        assert_eq!(json, r#"{"redirect":"/track/index.html"}"#);
    }
}
