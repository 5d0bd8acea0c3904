//! AI Provider Port - Interface for the text-completion oracle.
//!
//! This port abstracts the chat-completion service the assistant relies on
//! for language detection, answering, and record extraction. Adapters
//! translate between the provider's HTTP API and these types.
//!
//! # Design
//!
//! - One operation: a single, non-streaming completion
//! - Messages may carry several text parts (sent as a content array)
//! - Model, temperature, token limit and timeout are chosen per request
//! - One attempt per call; callers see every failure

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for AI/LLM provider interactions.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;
}

/// Request for AI completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Ordered, role-tagged messages.
    pub messages: Vec<Message>,
    /// Model override; the provider default is used when absent.
    pub model: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness.
    pub temperature: Option<f32>,
    /// Per-call timeout; absent means no limit beyond the transport's.
    pub timeout: Option<Duration>,
    /// Request metadata for tracing.
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    /// Creates a new completion request with required metadata.
    pub fn new(metadata: RequestMetadata) -> Self {
        Self {
            messages: Vec::new(),
            model: None,
            max_tokens: None,
            temperature: None,
            timeout: None,
            metadata,
        }
    }

    /// Appends a message.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A message in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message.
    pub role: MessageRole,
    /// Text parts, in order. Single-part messages are sent as plain text.
    pub parts: Vec<String>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![content.into()],
        }
    }

    /// Creates a message with several text parts.
    pub fn with_parts<I, S>(role: MessageRole, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role,
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// All parts joined by newlines.
    pub fn text(&self) -> String {
        self.parts.join("\n")
    }
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Request metadata for tracing.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Correlates every oracle call made for one inbound request.
    pub trace_id: String,
    /// What the call is for (e.g. "detect_language").
    pub operation: &'static str,
}

impl RequestMetadata {
    pub fn new(trace_id: impl Into<String>, operation: &'static str) -> Self {
        Self {
            trace_id: trace_id.into(),
            operation,
        }
    }
}

/// Response from AI completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated content.
    pub content: String,
    /// Token usage.
    pub usage: TokenUsage,
    /// Model that generated the response.
    pub model: String,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

impl CompletionResponse {
    /// True when generation stopped at the token limit.
    pub fn is_truncated(&self) -> bool {
        self.finish_reason == FinishReason::Length
    }
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Error,
}

/// AI provider errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AIError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl AIError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_metadata() -> RequestMetadata {
        RequestMetadata::new("trace-123", "test")
    }

    #[test]
    fn completion_request_builder_works() {
        let request = CompletionRequest::new(test_metadata())
            .with_message(Message::system("Be helpful"))
            .with_message(Message::user("Hello"))
            .with_model("gpt-4o-mini")
            .with_max_tokens(300)
            .with_temperature(1.0)
            .with_timeout(Some(Duration::from_secs(20)));

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[1].text(), "Hello");
        assert_eq!(request.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(request.max_tokens, Some(300));
        assert_eq!(request.temperature, Some(1.0));
        assert_eq!(request.timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn multipart_message_keeps_part_order() {
        let message = Message::with_parts(MessageRole::User, ["instruction", "payload"]);
        assert_eq!(message.parts, vec!["instruction", "payload"]);
        assert_eq!(message.text(), "instruction\npayload");
    }

    #[test]
    fn token_usage_totals() {
        let usage = TokenUsage::new(10, 5);
        assert_eq!(usage.total_tokens, 15);
    }

    #[test]
    fn length_finish_reason_marks_truncation() {
        let response = |finish_reason| CompletionResponse {
            content: "{'Nombre del Producto': 'Lap".to_string(),
            usage: TokenUsage::default(),
            model: "gpt-4o-mini".to_string(),
            finish_reason,
        };
        assert!(response(FinishReason::Length).is_truncated());
        assert!(!response(FinishReason::Stop).is_truncated());
        assert!(!response(FinishReason::ContentFilter).is_truncated());
    }

    #[test]
    fn message_role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::System).unwrap();
        assert_eq!(json, "\"system\"");
    }

    #[test]
    fn ai_error_displays_message() {
        assert_eq!(
            AIError::Timeout { timeout_secs: 20 }.to_string(),
            "request timed out after 20s"
        );
        assert_eq!(AIError::AuthenticationFailed.to_string(), "authentication failed");
    }

    #[test]
    fn ai_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn AIProvider) {}
    }
}
