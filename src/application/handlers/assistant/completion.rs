//! CompletionEngine - one chat completion per assistant turn.
//!
//! A direct call: the composed system instruction and human message go to
//! the oracle and the reply text comes back. Nothing is kept between calls.

use std::sync::Arc;

use crate::domain::assistant::ComposedPrompt;
use crate::domain::foundation::SessionToken;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, RequestMetadata,
};

use super::settings::ChatSettings;

pub struct CompletionEngine {
    ai: Arc<dyn AIProvider>,
    settings: ChatSettings,
}

impl CompletionEngine {
    pub fn new(ai: Arc<dyn AIProvider>, settings: ChatSettings) -> Self {
        Self { ai, settings }
    }

    pub async fn complete(
        &self,
        prompt: &ComposedPrompt,
        token: &SessionToken,
    ) -> Result<String, AIError> {
        let request = CompletionRequest::new(RequestMetadata::new(token.as_str(), "chat"))
            .with_message(Message::system(&prompt.system_instruction))
            .with_message(Message::user(&prompt.human_message))
            .with_model(&self.settings.model)
            .with_temperature(self.settings.temperature)
            .with_timeout(self.settings.timeout);

        let response = self.ai.complete(request).await?;
        trace_response("chat", token, &response);
        Ok(response.content)
    }
}

/// Records model and token usage for one oracle call.
pub(super) fn trace_response(
    operation: &'static str,
    token: &SessionToken,
    response: &CompletionResponse,
) {
    tracing::debug!(
        trace_id = %token,
        operation,
        model = %response.model,
        prompt_tokens = response.usage.prompt_tokens,
        completion_tokens = response.usage.completion_tokens,
        finish_reason = ?response.finish_reason,
        "Completion usage"
    );
    if response.is_truncated() {
        tracing::warn!(trace_id = %token, operation, "Reply stopped at the token limit");
    }
}
