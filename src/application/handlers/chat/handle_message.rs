//! HandleMessageHandler - Turn a chat message into a reply and a follow-up action
//!
//! Steps: validate, classify, fetch knowledge, build the prompt, generate,
//! resolve the action, assemble. Knowledge and generation failures degrade
//! the reply text but never the action: navigation keeps working while the
//! model is down.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::domain::assistant::{
    build_prompt, classify, resolve_action, ActionDirective, InboundMessage,
};
use crate::ports::KnowledgeProvider;

use super::generation_client::GenerationClient;

/// Reply used when the generation capability fails.
pub const APOLOGY_REPLY: &str =
    "Sorry, I'm having trouble answering right now. Please try again in a moment.";

/// Command to handle a chat message
#[derive(Debug, Clone)]
pub struct HandleMessageCommand {
    pub message: InboundMessage,
    /// Correlation ID for logs and the provider request.
    pub trace_id: String,
}

/// Reply text plus the structured follow-up action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    pub reply: String,
    pub actions: ActionDirective,
}

/// Errors surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("message is empty")]
    EmptyMessage,
}

/// Handler for chat messages
pub struct HandleMessageHandler {
    knowledge: Arc<dyn KnowledgeProvider>,
    generator: GenerationClient,
    knowledge_timeout: Duration,
}

impl HandleMessageHandler {
    pub fn new(
        knowledge: Arc<dyn KnowledgeProvider>,
        generator: GenerationClient,
        knowledge_timeout: Duration,
    ) -> Self {
        Self {
            knowledge,
            generator,
            knowledge_timeout,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleMessageCommand,
    ) -> Result<ResponseEnvelope, PipelineError> {
        let HandleMessageCommand { message, trace_id } = cmd;

        // 1. Validate
        if message.is_blank() {
            return Err(PipelineError::EmptyMessage);
        }
        let text = message.trimmed_text();

        // 2. Classify
        let intent = classify(text);
        tracing::info!(
            trace_id = %trace_id,
            intent = %intent,
            site = %message.site,
            language = %message.language,
            "Classified chat message"
        );

        // 3. Ground
        let knowledge = self.fetch_knowledge(text, &trace_id).await;

        // 4. Prompt
        let prompt = build_prompt(&message, intent, &knowledge);
        tracing::debug!(trace_id = %trace_id, prompt_chars = prompt.len(), "Built prompt");

        // 5. Generate, degrading to a fixed apology
        let reply = match self.generator.generate(&prompt, &trace_id).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(trace_id = %trace_id, error = %e, "Generation failed, using apology reply");
                APOLOGY_REPLY.to_string()
            }
        };

        // 6. Action depends only on intent and site
        let actions = resolve_action(intent, message.site);

        Ok(ResponseEnvelope { reply, actions })
    }

    async fn fetch_knowledge(&self, text: &str, trace_id: &str) -> String {
        match tokio::time::timeout(self.knowledge_timeout, self.knowledge.fetch(text)).await {
            Ok(Ok(knowledge)) => knowledge,
            Ok(Err(e)) => {
                tracing::warn!(trace_id = %trace_id, error = %e, "Knowledge lookup failed, continuing without context");
                String::new()
            }
            Err(_) => {
                tracing::warn!(
                    trace_id = %trace_id,
                    timeout_ms = self.knowledge_timeout.as_millis() as u64,
                    "Knowledge lookup timed out, continuing without context"
                );
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::knowledge::{KnowledgeEntry, StaticKnowledgeBase};
    use crate::domain::assistant::Site;
    use crate::ports::{AIError, KnowledgeError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingKnowledge {
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl KnowledgeProvider for CountingKnowledge {
        async fn fetch(&self, _message: &str) -> Result<String, KnowledgeError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(String::new())
        }
    }

    struct FailingKnowledge;

    #[async_trait]
    impl KnowledgeProvider for FailingKnowledge {
        async fn fetch(&self, _message: &str) -> Result<String, KnowledgeError> {
            Err(KnowledgeError::Unavailable("store offline".to_string()))
        }
    }

    struct SlowKnowledge;

    #[async_trait]
    impl KnowledgeProvider for SlowKnowledge {
        async fn fetch(&self, _message: &str) -> Result<String, KnowledgeError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok("late context".to_string())
        }
    }

    fn handler_with(
        knowledge: Arc<dyn KnowledgeProvider>,
        provider: &MockAIProvider,
    ) -> HandleMessageHandler {
        HandleMessageHandler::new(
            knowledge,
            GenerationClient::new(Arc::new(provider.clone()), Duration::from_secs(1)),
            Duration::from_millis(50),
        )
    }

    fn handler(provider: &MockAIProvider) -> HandleMessageHandler {
        handler_with(Arc::new(StaticKnowledgeBase::default()), provider)
    }

    fn cmd(message: InboundMessage) -> HandleMessageCommand {
        HandleMessageCommand {
            message,
            trace_id: "trace-test".to_string(),
        }
    }

    #[tokio::test]
    async fn track_question_gets_reply_and_redirect() {
        let provider = MockAIProvider::new()
            .with_response("Enter your container number.\nhttps://containerbazar.com/track/index.html");

        let envelope = handler(&provider)
            .handle(cmd(InboundMessage::new("Can I track my shipment?")))
            .await
            .unwrap();

        assert_eq!(envelope.actions.redirect, Some("/track/index.html"));
        assert!(envelope.reply.ends_with("/track/index.html"));

        let prompt = &provider.prompts()[0];
        assert!(prompt.contains("Detected Intent:\nTRACK"));
        assert!(prompt.contains("https://containerbazar.com/track/index.html"));
    }

    #[tokio::test]
    async fn blank_message_is_rejected_before_generation() {
        let provider = MockAIProvider::new();
        let knowledge = Arc::new(CountingKnowledge::default());

        let result = handler_with(knowledge.clone(), &provider)
            .handle(cmd(InboundMessage::new("   ")))
            .await;

        assert_eq!(result, Err(PipelineError::EmptyMessage));
        assert_eq!(provider.call_count(), 0);
        assert_eq!(knowledge.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn generation_failure_keeps_action() {
        let provider = MockAIProvider::new().with_error(AIError::Unavailable("503".to_string()));

        let envelope = handler(&provider)
            .handle(cmd(InboundMessage::new("I want to rent a reefer")))
            .await
            .unwrap();

        assert_eq!(envelope.reply, APOLOGY_REPLY);
        assert_eq!(envelope.actions.redirect, Some("/rent/index.html"));
    }

    #[tokio::test]
    async fn generation_failure_on_general_has_empty_action() {
        let provider = MockAIProvider::new().with_error(AIError::AuthenticationFailed);

        let envelope = handler(&provider)
            .handle(cmd(InboundMessage::new("Hello!")))
            .await
            .unwrap();

        assert_eq!(envelope.reply, APOLOGY_REPLY);
        assert!(envelope.actions.is_empty());
    }

    #[tokio::test]
    async fn knowledge_failure_is_replaced_by_empty_context() {
        let provider = MockAIProvider::new().with_response("ok");

        let envelope = handler_with(Arc::new(FailingKnowledge), &provider)
            .handle(cmd(InboundMessage::new("buy a box")))
            .await
            .unwrap();

        assert_eq!(envelope.reply, "ok");
        assert_eq!(envelope.actions.redirect, Some("/sell/index.html"));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn slow_knowledge_times_out_and_is_skipped() {
        let provider = MockAIProvider::new().with_response("ok");

        handler_with(Arc::new(SlowKnowledge), &provider)
            .handle(cmd(InboundMessage::new("hello")))
            .await
            .unwrap();

        let prompt = &provider.prompts()[0];
        assert!(!prompt.contains("late context"));
    }

    #[tokio::test]
    async fn knowledge_is_injected_into_prompt() {
        let provider = MockAIProvider::new();
        let kb = StaticKnowledgeBase::new(vec![KnowledgeEntry::new(
            &["reefer"],
            "Reefers hold -30C to +30C.",
        )]);

        handler_with(Arc::new(kb), &provider)
            .handle(cmd(InboundMessage::new("Tell me about a reefer")))
            .await
            .unwrap();

        let prompt = &provider.prompts()[0];
        assert!(prompt.contains("Reefers hold -30C to +30C."));
    }

    #[tokio::test]
    async fn insurance_on_containers_club_uses_club_site() {
        let provider = MockAIProvider::new()
            .with_response("Coverage basics.\nhttps://containersclub.com/insurance/index.html");
        let message = InboundMessage::new("Does the insurance policy cover damage?")
            .with_site(Site::ContainersClub)
            .with_country("US");

        let envelope = handler(&provider).handle(cmd(message)).await.unwrap();

        assert_eq!(envelope.actions.redirect, Some("/insurance/index.html"));
        let prompt = &provider.prompts()[0];
        assert!(prompt.contains("https://containersclub.com/insurance/index.html"));
        assert!(!prompt.contains("https://containerbazar.com"));
    }

    #[test]
    fn envelope_serializes_reply_and_actions() {
        let envelope = ResponseEnvelope {
            reply: "Hi".to_string(),
            actions: ActionDirective::none(),
        };
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"reply":"Hi","actions":{}}"#
        );
    }
}
