//! AskAgent command handler.
//!
//! Runs one assistant turn end to end:
//! decode prompt, detect language, resolve identity, compose prompt,
//! complete, analyze, optionally extract and store a product record,
//! then persist both turns.
//!
//! There is no transaction around the whole flow. An identity created
//! before a later failure stays created; the two turns are written
//! together, and only after everything else succeeded.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::assistant::{
    decode_escapes, EscapeError, LanguageTag, PromptComposer, PromptTemplates, ResponseAnalyzer,
};
use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{DomainError, SessionToken, Timestamp};
use crate::domain::identity::{IdentityRequest, User};
use crate::domain::product::{LiteralError, RecordError};
use crate::ports::{AIError, AIProvider, ConversationRepository, ProductRepository, UserRepository};

use super::completion::CompletionEngine;
use super::detect_language::LanguageDetector;
use super::extract_product::{ExtractError, ProductExtractor};
use super::settings::AssistantSettings;

/// Command to ask the assistant a question.
#[derive(Debug, Clone)]
pub struct AskAgentCommand {
    /// The prompt as received, possibly containing escape sequences.
    pub prompt: String,
    pub identity: IdentityRequest,
}

impl AskAgentCommand {
    pub fn new(prompt: impl Into<String>, identity: IdentityRequest) -> Self {
        Self {
            prompt: prompt.into(),
            identity,
        }
    }
}

/// Result of one assistant turn.
#[derive(Debug, Clone, PartialEq)]
pub struct AskAgentResult {
    /// The assistant's reply text.
    pub message: String,
    /// Every regulation code cited in the reply, in order.
    pub noms: Vec<String>,
    pub lang: LanguageTag,
    /// True if a product record was extracted and stored.
    pub record_saved: bool,
}

/// Classification of an assistant failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskAgentErrorKind {
    NotFound,
    UpstreamFailure,
    MalformedOutput,
    Persistence,
    InvalidInput,
}

/// Errors that can occur while running an assistant turn.
#[derive(Debug, Clone, Error)]
pub enum AskAgentError {
    /// The prompt could not be decoded.
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(#[from] EscapeError),

    /// No identity matched and none could be created.
    #[error("User not found")]
    IdentityNotFound,

    /// The oracle call failed.
    #[error("{0}")]
    Upstream(#[from] AIError),

    /// The extraction reply could not be parsed.
    #[error("{0}")]
    MalformedLiteral(#[from] LiteralError),

    /// The extraction reply lacked a required key.
    #[error("{0}")]
    MissingField(#[from] RecordError),

    /// A repository call failed.
    #[error("{0}")]
    Persistence(#[from] DomainError),
}

impl AskAgentError {
    pub fn kind(&self) -> AskAgentErrorKind {
        match self {
            AskAgentError::InvalidPrompt(_) => AskAgentErrorKind::InvalidInput,
            AskAgentError::IdentityNotFound => AskAgentErrorKind::NotFound,
            AskAgentError::Upstream(_) => AskAgentErrorKind::UpstreamFailure,
            AskAgentError::MalformedLiteral(_) | AskAgentError::MissingField(_) => {
                AskAgentErrorKind::MalformedOutput
            }
            AskAgentError::Persistence(_) => AskAgentErrorKind::Persistence,
        }
    }
}

impl From<ExtractError> for AskAgentError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Oracle(e) => AskAgentError::Upstream(e),
            ExtractError::Literal(e) => AskAgentError::MalformedLiteral(e),
            ExtractError::Record(e) => AskAgentError::MissingField(e),
        }
    }
}

/// Handler for assistant turns.
pub struct AskAgentHandler {
    users: Arc<dyn UserRepository>,
    conversations: Arc<dyn ConversationRepository>,
    products: Arc<dyn ProductRepository>,
    detector: LanguageDetector,
    engine: CompletionEngine,
    extractor: ProductExtractor,
    analyzer: ResponseAnalyzer,
}

impl AskAgentHandler {
    pub fn new(
        ai: Arc<dyn AIProvider>,
        users: Arc<dyn UserRepository>,
        conversations: Arc<dyn ConversationRepository>,
        products: Arc<dyn ProductRepository>,
        settings: AssistantSettings,
    ) -> Self {
        Self {
            users,
            conversations,
            products,
            detector: LanguageDetector::new(ai.clone(), settings.detection),
            engine: CompletionEngine::new(ai.clone(), settings.chat),
            extractor: ProductExtractor::new(ai, settings.extraction),
            analyzer: ResponseAnalyzer::new(),
        }
    }

    pub async fn handle(&self, cmd: AskAgentCommand) -> Result<AskAgentResult, AskAgentError> {
        let token = SessionToken::generate();

        let prompt = decode_escapes(&cmd.prompt)?;

        let lang = self.detector.detect(&prompt, &token).await?;
        tracing::info!(trace_id = %token, lang = %lang, "Language detected");

        let user = self.resolve_user(&cmd.identity).await?;

        let transcript = self.conversations.transcript(&user.id).await?;
        let composer = PromptComposer::new(PromptTemplates::for_language(&lang));
        let composed = composer.compose(&transcript, &prompt);

        let reply = self.engine.complete(&composed, &token).await?;
        tracing::info!(trace_id = %token, chars = reply.len(), "Completion received");

        let analysis = self.analyzer.analyze(&reply);

        let record_saved = match &analysis.formatted {
            Some(answer) => {
                tracing::info!(trace_id = %token, "Formatted answer, extracting product record");
                let record = self.extractor.extract(user.id, &reply, answer, &token).await?;
                self.products.save(&record).await?;
                true
            }
            None => {
                tracing::debug!(trace_id = %token, "No marker phrase, extraction skipped");
                false
            }
        };

        let human_at = Timestamp::now();
        let turns = [
            ConversationTurn::human(user.id, cmd.prompt.clone(), lang.as_str()).at(human_at),
            ConversationTurn::ai(user.id, reply.clone(), lang.as_str(), analysis.cited_codes.clone())
                .at(human_at.successor()),
        ];
        self.conversations.append(&turns).await?;
        tracing::info!(trace_id = %token, user_id = %user.id, "Turns persisted");

        Ok(AskAgentResult {
            message: reply,
            noms: analysis.cited_codes,
            lang,
            record_saved,
        })
    }

    /// Finds the identity by its lookup key, creating one from the private
    /// identifier when the lookup misses.
    async fn resolve_user(&self, identity: &IdentityRequest) -> Result<User, AskAgentError> {
        if let Some(key) = identity.lookup_key() {
            if let Some(user) = self.users.find_by_key(&key).await? {
                return Ok(user);
            }
        }

        let key = identity
            .creation_key()
            .ok_or(AskAgentError::IdentityNotFound)?;
        let ensured = self.users.ensure(&key).await?;
        if ensured.created {
            tracing::info!(user_id = %ensured.user.id, "Anonymous identity created");
        }
        Ok(ensured.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::memory::{
        InMemoryConversationRepository, InMemoryProductRepository, InMemoryUserRepository,
    };
    use crate::domain::conversation::TurnOwner;
    use crate::domain::identity::IdentityKey;

    const LAPTOP_REPLY: &str = "**Import information for laptops in Mexico:**\n\
        - **Tariff code:** 8471.30.01\n\
        - **Applicable NOMs:**\n   - NOM-003-SCFI-2014 (Electrical and electronic equipment)\n";

    const LAPTOP_DICT: &str = "{'Nombre del Producto': 'Laptops', 'HS Code': '8471.30.01', \
        'Origen del País': 'China', 'Impuestos IGI (Tasa Máxima)': '0%', \
        'Impuestos IGI (Reducciones aplicables)': 'T-MEC', 'IVA (%)': '16%', 'DTA (%)': '0.8%'}";

    struct Fixture {
        ai: Arc<MockAIProvider>,
        users: Arc<InMemoryUserRepository>,
        conversations: Arc<InMemoryConversationRepository>,
        products: Arc<InMemoryProductRepository>,
        handler: AskAgentHandler,
    }

    fn fixture(ai: MockAIProvider) -> Fixture {
        let ai = Arc::new(ai);
        let users = Arc::new(InMemoryUserRepository::new());
        let conversations = Arc::new(InMemoryConversationRepository::new());
        let products = Arc::new(InMemoryProductRepository::new());
        let handler = AskAgentHandler::new(
            ai.clone(),
            users.clone(),
            conversations.clone(),
            products.clone(),
            AssistantSettings::default(),
        );
        Fixture {
            ai,
            users,
            conversations,
            products,
            handler,
        }
    }

    fn anonymous(id: &str) -> IdentityRequest {
        IdentityRequest::new(None, Some(id.to_string()))
    }

    #[tokio::test]
    async fn formatted_answer_stores_record_and_turns() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("en")
                .with_response(LAPTOP_REPLY)
                .with_response(LAPTOP_DICT),
        );

        let result = f
            .handler
            .handle(AskAgentCommand::new("Tell me about importing laptops", anonymous("dev-1")))
            .await
            .unwrap();

        assert_eq!(result.lang.as_str(), "en");
        assert_eq!(result.noms, vec!["NOM-003-SCFI-2014"]);
        assert!(result.record_saved);
        assert_eq!(f.products.count().await, 1);
        assert_eq!(f.conversations.count().await, 2);
        assert_eq!(f.ai.call_count(), 3);
    }

    #[tokio::test]
    async fn reply_without_marker_skips_extraction() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("es")
                .with_response("Hola, ¿qué producto quieres importar?"),
        );

        let result = f
            .handler
            .handle(AskAgentCommand::new("Hola", anonymous("dev-1")))
            .await
            .unwrap();

        assert!(!result.record_saved);
        assert!(result.noms.is_empty());
        assert_eq!(f.products.count().await, 0);
        assert_eq!(f.conversations.count().await, 2);
        assert_eq!(f.ai.call_count(), 2);
    }

    #[tokio::test]
    async fn stored_turns_keep_raw_prompt_and_codes() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("es")
                .with_response("Revisa NOM-051-SCFI-2010 y NOM-051-SCFI-2010"),
        );

        f.handler
            .handle(AskAgentCommand::new(r"informaci\u00f3n", anonymous("dev-1")))
            .await
            .unwrap();

        let user = f
            .users
            .find_by_key(&IdentityKey::PrivateId("dev-1".into()))
            .await
            .unwrap()
            .unwrap();
        let transcript = f.conversations.transcript(&user.id).await.unwrap();
        let turns = transcript.turns();
        assert_eq!(turns[0].owner(), TurnOwner::Human);
        assert_eq!(turns[0].message(), r"informaci\u00f3n");
        assert_eq!(turns[0].content.lang, "es");
        assert_eq!(turns[1].owner(), TurnOwner::Ai);
        assert_eq!(
            turns[1].content.noms,
            Some(vec!["NOM-051-SCFI-2010".to_string(), "NOM-051-SCFI-2010".to_string()])
        );
        assert!(turns[0].created_at < turns[1].created_at);
    }

    #[tokio::test]
    async fn oracle_receives_decoded_prompt() {
        let f = fixture(MockAIProvider::new().with_response("es").with_response("ok"));

        f.handler
            .handle(AskAgentCommand::new(r"informaci\u00f3n", anonymous("dev-1")))
            .await
            .unwrap();

        let calls = f.ai.get_calls();
        assert_eq!(calls[0].messages[0].parts[1], "información");
        assert!(calls[1].messages[1].text().ends_with("Human: información\nAi:"));
    }

    #[tokio::test]
    async fn second_turn_sees_transcript() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("en")
                .with_response("First answer")
                .with_response("en")
                .with_response("Second answer"),
        );

        f.handler
            .handle(AskAgentCommand::new("First question", anonymous("dev-1")))
            .await
            .unwrap();
        f.handler
            .handle(AskAgentCommand::new("Second question", anonymous("dev-1")))
            .await
            .unwrap();

        let calls = f.ai.get_calls();
        let human = calls[3].messages[1].text();
        assert!(human.ends_with(
            "\n\nHuman: First question\nAi: First answer\nHuman: Second question\nAi:"
        ));
    }

    #[tokio::test]
    async fn english_selects_english_templates() {
        let f = fixture(MockAIProvider::new().with_response("en").with_response("ok"));

        f.handler
            .handle(AskAgentCommand::new("hello", anonymous("dev-1")))
            .await
            .unwrap();

        let system = f.ai.get_calls()[1].messages[0].text();
        assert!(system.contains("Agent's objective:"));
    }

    #[tokio::test]
    async fn unexpected_language_falls_back_to_spanish_and_is_stored() {
        let f = fixture(MockAIProvider::new().with_response("fr").with_response("ok"));

        let result = f
            .handler
            .handle(AskAgentCommand::new("bonjour", anonymous("dev-1")))
            .await
            .unwrap();

        assert_eq!(result.lang.as_str(), "fr");
        let system = f.ai.get_calls()[1].messages[0].text();
        assert!(system.contains("Objetivo del agente:"));
    }

    #[tokio::test]
    async fn email_lookup_takes_precedence() {
        let f = fixture(MockAIProvider::new().with_response("en").with_response("ok"));
        let existing = f
            .users
            .ensure(&IdentityKey::Email("a@example.com".into()))
            .await
            .unwrap()
            .user;

        f.handler
            .handle(AskAgentCommand::new(
                "hi",
                IdentityRequest::new(Some("a@example.com".into()), Some("dev-9".into())),
            ))
            .await
            .unwrap();

        assert_eq!(f.users.count().await, 1);
        assert_eq!(
            f.conversations.transcript(&existing.id).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn unknown_email_without_private_id_fails() {
        let f = fixture(MockAIProvider::new().with_response("en"));

        let err = f
            .handler
            .handle(AskAgentCommand::new(
                "hi",
                IdentityRequest::new(Some("ghost@example.com".into()), None),
            ))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AskAgentErrorKind::NotFound);
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(f.conversations.count().await, 0);
    }

    #[tokio::test]
    async fn new_private_id_creates_identity_with_empty_history() {
        let f = fixture(MockAIProvider::new().with_response("en").with_response("Welcome"));

        f.handler
            .handle(AskAgentCommand::new("first prompt", anonymous("brand-new")))
            .await
            .unwrap();

        assert_eq!(f.users.count().await, 1);
        let human = f.ai.get_calls()[1].messages[1].text();
        assert!(human.ends_with("\n\n\nHuman: first prompt\nAi:"));
    }

    #[tokio::test]
    async fn oracle_failure_is_upstream_and_stores_nothing() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("en")
                .with_error(AIError::unavailable("down")),
        );

        let err = f
            .handler
            .handle(AskAgentCommand::new("hi", anonymous("dev-1")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AskAgentErrorKind::UpstreamFailure);
        assert_eq!(f.conversations.count().await, 0);
        // Identity creation happened before the failure and is kept.
        assert_eq!(f.users.count().await, 1);
    }

    #[tokio::test]
    async fn malformed_extraction_aborts_without_turns() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("en")
                .with_response(LAPTOP_REPLY)
                .with_response("not a dict"),
        );

        let err = f
            .handler
            .handle(AskAgentCommand::new("laptops", anonymous("dev-1")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AskAgentErrorKind::MalformedOutput);
        assert_eq!(f.products.count().await, 0);
        assert_eq!(f.conversations.count().await, 0);
    }

    #[tokio::test]
    async fn missing_key_is_malformed_output() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("en")
                .with_response(LAPTOP_REPLY)
                .with_response("{'Nombre del Producto': 'Laptops'}"),
        );

        let err = f
            .handler
            .handle(AskAgentCommand::new("laptops", anonymous("dev-1")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AskAgentErrorKind::MalformedOutput);
        assert!(err.to_string().contains("HS Code"));
    }

    #[tokio::test]
    async fn record_store_failure_aborts_request() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("en")
                .with_response(LAPTOP_REPLY)
                .with_response(LAPTOP_DICT),
        );
        f.products.fail_saves(true);

        let err = f
            .handler
            .handle(AskAgentCommand::new("laptops", anonymous("dev-1")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AskAgentErrorKind::Persistence);
        assert_eq!(f.conversations.count().await, 0);
    }

    #[tokio::test]
    async fn invalid_escape_is_invalid_input() {
        let f = fixture(MockAIProvider::new());

        let err = f
            .handler
            .handle(AskAgentCommand::new(r"bad \x4", anonymous("dev-1")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AskAgentErrorKind::InvalidInput);
        assert_eq!(f.ai.call_count(), 0);
    }
}
