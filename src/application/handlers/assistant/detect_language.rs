//! LanguageDetector - asks the oracle whether text is English or Spanish.

use std::sync::Arc;

use crate::domain::assistant::LanguageTag;
use crate::domain::foundation::SessionToken;
use crate::ports::{AIError, AIProvider, CompletionRequest, Message, MessageRole, RequestMetadata};

use super::completion::trace_response;
use super::settings::UtilitySettings;

const DETECTION_INSTRUCTION: &str = "Tell me if the text language is in English or in Spanish, \
if it is in English, please write 'en', if it is in Spanish, please write 'es'.";

/// Detects the language of user text with one oracle call.
pub struct LanguageDetector {
    ai: Arc<dyn AIProvider>,
    settings: UtilitySettings,
}

impl LanguageDetector {
    pub fn new(ai: Arc<dyn AIProvider>, settings: UtilitySettings) -> Self {
        Self { ai, settings }
    }

    /// Returns the oracle's answer as a tag. Oracle errors propagate.
    pub async fn detect(&self, text: &str, token: &SessionToken) -> Result<LanguageTag, AIError> {
        let request = CompletionRequest::new(RequestMetadata::new(token.as_str(), "detect_language"))
            .with_message(Message::with_parts(
                MessageRole::User,
                [DETECTION_INSTRUCTION, text],
            ))
            .with_model(&self.settings.model)
            .with_max_tokens(self.settings.max_tokens)
            .with_timeout(Some(self.settings.timeout));

        let response = self.ai.complete(request).await?;
        trace_response("detect_language", token, &response);
        Ok(LanguageTag::from_reply(&response.content))
    }
}
