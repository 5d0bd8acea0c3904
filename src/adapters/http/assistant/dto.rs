//! Request and response bodies for the assistant endpoints.
//!
//! Field names are snake_case; the browser client and the historical API
//! both use them as-is.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assistant::AskAgentResult;
use crate::domain::conversation::{Transcript, TurnContent};

/// POST /ai/google_login/ body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn logged_in() -> Self {
        Self {
            message: "User logged in successfully".to_string(),
        }
    }
}

/// POST /ai/importation-bot/ body.
#[derive(Debug, Clone, Deserialize)]
pub struct AskAgentRequest {
    pub prompt: String,
    #[serde(default)]
    pub user_email: Option<String>,
    /// The anonymous private identifier.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Reply to an assistant turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskAgentResponse {
    pub message: String,
    pub noms: Vec<String>,
    pub lang: String,
}

impl From<AskAgentResult> for AskAgentResponse {
    fn from(result: AskAgentResult) -> Self {
        Self {
            message: result.message,
            noms: result.noms,
            lang: result.lang.as_str().to_string(),
        }
    }
}

/// GET /ai/bot_conversation/:user_email response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationResponse {
    pub conversation: Vec<TurnContent>,
}

impl From<&Transcript> for ConversationResponse {
    fn from(transcript: &Transcript) -> Self {
        Self {
            conversation: transcript.contents(),
        }
    }
}

/// GET /ai/get_excel/ query string.
#[derive(Debug, Clone, Deserialize)]
pub struct ExcelQuery {
    pub user_email: String,
}

/// Error body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
