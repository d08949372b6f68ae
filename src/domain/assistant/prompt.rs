//! Prompt synthesis for the generation model.
//!
//! The model has no other guardrails, so every section below is mandatory
//! and the order is fixed: framing, region, language, scope, refusal policy,
//! business rules, linking rules, intent guidance, knowledge, detected intent,
//! user question, final rules.

use super::{language_name, Brand, InboundMessage, Intent};

/// Fully assembled instruction text sent to the generation model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument(String);

impl PromptDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rough size of the prompt in characters, for logging.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PromptDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the instruction text for one message.
pub fn build_prompt(message: &InboundMessage, intent: Intent, knowledge: &str) -> PromptDocument {
    let brand = message.site.brand();
    let lang_name = language_name(&message.language);
    let website = brand.website;
    let brand_name = brand.name;
    let region = brand.region;
    let guidance = intent_guidance(intent, brand);
    let country_line = message
        .country_code()
        .map(|country| format!("- The user is browsing from country code {country}\n"))
        .unwrap_or_default();
    let user_message = message.trimmed_text();

    PromptDocument(format!(
        r#"You are the official AI assistant of {brand_name} ({website}).

================= REGION CONTEXT =================
- Operate strictly within the context of {region}
- Use logistics and container practices relevant to {region}
{country_line}
================= LANGUAGE RULES (CRITICAL) =================
- Respond ONLY in {lang_name}
- Do NOT mix languages
- Use clear, professional, industry-appropriate grammar

================= ALLOWED SCOPE =================
You MAY answer questions related to:
- Shipping containers (types, sizes, condition, usage)
- Buying, selling, renting, and leasing containers
- Container tracking and visibility
- Ports, terminals, ICDs, CFSs, depots, and yards
- Logistics, freight, and intermodal transport
- Container insurance concepts
- Platform features and workflows
- Container market terminology and trends

================= STRICTLY OUT OF SCOPE =================
If the question is NOT related to the container or logistics industry:
- Politely refuse
- State that you specialize in container and logistics topics
- Invite the user to ask a container-related question
- Do NOT answer the unrelated topic

================= BUSINESS RULES =================
- Do NOT quote prices or rates
- Do NOT make legal, financial, or contractual commitments
- Do NOT mention competitors
- Do NOT speculate or provide guarantees

================= LINKING RULES (VERY IMPORTANT) =================
- Provide at most ONE link per response
- Output links ONLY as plain URLs
- Do NOT repeat the same link
- Do NOT explain the link textually
- Place the link on a NEW LINE at the END of the response
- NEVER auto-redirect the user

================= INTENT-SPECIFIC GUIDANCE =================
{guidance}

================= INTERNAL CONTEXT =================
{knowledge}

================= USER INPUT =================
Detected Intent:
{intent}

User Question:
{user_message}

================= FINAL RESPONSE RULES =================
- First: explain clearly and concisely
- Second: include ONE plain URL (if applicable)
- Be factual, helpful, and action-oriented
- Stay strictly within the allowed scope
- Respond ONLY in {lang_name}
"#
    ))
}

fn intent_guidance(intent: Intent, brand: &Brand) -> String {
    let Brand {
        name,
        website,
        region,
    } = *brand;
    let link = intent
        .landing_path()
        .map(|path| {
            format!("After the explanation, provide EXACTLY ONE plain URL on a new line: {website}{path}")
        })
        .unwrap_or_default();

    match intent {
        Intent::Track => format!(
            "Explain how container tracking works on {name}. \
             Describe required details such as container number or booking reference, \
             and explain visibility like movement status and gate events. {link}"
        ),
        Intent::Rent => format!(
            "Explain container rental and leasing on {name}, including container types, \
             sizes, condition, and location-based availability. {link}"
        ),
        Intent::BuySell => format!(
            "Explain how buying and selling containers works on {name}, \
             including listings, container condition, and inquiry-based workflows. {link}"
        ),
        Intent::Insurance => format!(
            "Explain container insurance concepts relevant to {region}, \
             such as damage, loss, and operational risk at a high level. \
             Do NOT mention pricing or legal terms. {link}"
        ),
        Intent::General => format!(
            "Provide helpful guidance about {name}'s container marketplace, \
             platform features, and logistics workflows. \
             If useful, provide EXACTLY ONE relevant plain URL on a new line."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::language::supported_language_codes;
    use crate::domain::assistant::Site;

    fn section<'a>(prompt: &'a str, header: &str) -> &'a str {
        let start = prompt.find(header).expect("section present") + header.len();
        let rest = &prompt[start..];
        let end = rest.find("=================").unwrap_or(rest.len());
        &rest[..end]
    }

    #[test]
    fn language_name_appears_once_in_language_clause() {
        let msg = InboundMessage::new("Do you rent reefers?").with_language("es");
        let prompt = build_prompt(&msg, Intent::Rent, "");
        let clause = section(prompt.as_str(), "LANGUAGE RULES (CRITICAL) =================");

        assert_eq!(clause.matches("Spanish").count(), 1);
        assert!(prompt.as_str().trim_end().ends_with("- Respond ONLY in Spanish"));
    }

    #[test]
    fn every_supported_language_is_named_once_in_language_clause() {
        for code in supported_language_codes() {
            let name = language_name(code);
            let msg = InboundMessage::new("Do you rent reefers?").with_language(code);
            let prompt = build_prompt(&msg, Intent::Rent, "");
            let clause = section(prompt.as_str(), "LANGUAGE RULES (CRITICAL) =================");

            assert_eq!(clause.matches(name).count(), 1, "language {code}");
            assert!(clause.contains(&format!("- Respond ONLY in {name}")), "language {code}");
        }
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let msg = InboundMessage::new("hello").with_language("xx");
        let prompt = build_prompt(&msg, Intent::General, "");
        assert!(prompt.as_str().contains("- Respond ONLY in English"));
    }

    #[test]
    fn intent_label_and_message_are_included() {
        let msg = InboundMessage::new("  Is my box insured?  ");
        let prompt = build_prompt(&msg, Intent::Insurance, "");
        let input = section(prompt.as_str(), "USER INPUT =================");

        assert!(input.contains("Detected Intent:\nINSURANCE"));
        assert!(input.contains("User Question:\nIs my box insured?"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let msg = InboundMessage::new("track it");
        let prompt = build_prompt(&msg, Intent::Track, "Tracking needs a container number.");
        let text = prompt.as_str();

        let headers = [
            "You are the official AI assistant",
            "REGION CONTEXT",
            "LANGUAGE RULES",
            "ALLOWED SCOPE",
            "STRICTLY OUT OF SCOPE",
            "BUSINESS RULES",
            "LINKING RULES",
            "INTENT-SPECIFIC GUIDANCE",
            "INTERNAL CONTEXT",
            "USER INPUT",
            "FINAL RESPONSE RULES",
        ];
        let positions: Vec<usize> = headers
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(section(text, "INTERNAL CONTEXT =================")
            .contains("Tracking needs a container number."));
    }

    #[test]
    fn policy_clauses_are_present() {
        let prompt = build_prompt(&InboundMessage::new("hi"), Intent::General, "");
        let text = prompt.as_str();

        for clause in [
            "Do NOT quote prices or rates",
            "Do NOT make legal, financial, or contractual commitments",
            "Do NOT mention competitors",
            "Do NOT speculate or provide guarantees",
            "Provide at most ONE link per response",
            "NEVER auto-redirect the user",
            "Politely refuse",
            "Do NOT answer the unrelated topic",
            "Do NOT mix languages",
        ] {
            assert!(text.contains(clause), "missing clause: {clause}");
        }
    }

    #[test]
    fn guidance_links_to_intent_page_on_brand_site() {
        let msg = InboundMessage::new("insurance policy?").with_site(Site::ContainersClub);
        let prompt = build_prompt(&msg, Intent::Insurance, "");
        let text = prompt.as_str();

        assert!(text.contains("You are the official AI assistant of Containers Club (https://containersclub.com)"));
        assert!(text.contains("relevant to United States"));
        assert!(text.contains("https://containersclub.com/insurance/index.html"));
        assert!(!text.contains("containerbazar.com"));
    }

    #[test]
    fn general_guidance_has_no_fixed_url() {
        let prompt = build_prompt(&InboundMessage::new("hi"), Intent::General, "");
        let guidance = section(prompt.as_str(), "INTENT-SPECIFIC GUIDANCE =================");
        assert!(!guidance.contains("https://"));
        assert!(guidance.contains("ContainerBazar's container marketplace"));
    }

    #[test]
    fn country_line_only_when_country_sent() {
        let with_country = build_prompt(&InboundMessage::new("hi").with_country("US"), Intent::General, "");
        assert!(with_country.as_str().contains("country code US"));

        let blank = build_prompt(&InboundMessage::new("hi").with_country(""), Intent::General, "");
        assert!(!blank.as_str().contains("country code"));

        let absent = build_prompt(&InboundMessage::new("hi"), Intent::General, "");
        assert!(!absent.as_str().contains("country code"));
    }

    #[test]
    fn secondary_site_without_country_has_single_region() {
        let msg = InboundMessage::new("insurance policy?").with_site(Site::ContainersClub);
        let prompt = build_prompt(&msg, Intent::Insurance, "");
        let region = section(prompt.as_str(), "REGION CONTEXT =================");

        assert!(region.contains("United States"));
        assert!(!region.contains("India"));
        assert!(!region.contains("IN"));
        assert!(!region.contains("country code"));
    }

    #[test]
    fn same_inputs_build_identical_prompts() {
        let msg = InboundMessage::new("sell my box").with_language("de");
        assert_eq!(
            build_prompt(&msg, Intent::BuySell, "k"),
            build_prompt(&msg, Intent::BuySell, "k")
        );
    }
}
