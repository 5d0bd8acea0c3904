//! HTTP handlers for the assistant endpoints.
//!
//! These handlers connect Axum routes to application layer operations.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::assistant::{AskAgentCommand, AskAgentError, AskAgentHandler};
use crate::application::handlers::conversation::{GetConversationHandler, GetConversationQuery};
use crate::application::handlers::identity::{LoginCommand, LoginHandler};
use crate::application::handlers::product::{ExportProductsHandler, ExportProductsQuery};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::identity::IdentityRequest;
use crate::ports::XLSX_CONTENT_TYPE;

use super::dto::{
    AskAgentRequest, AskAgentResponse, ConversationResponse, ErrorResponse, ExcelQuery,
    LoginRequest, MessageResponse,
};

/// Attachment header sent with the product workbook.
pub const EXCEL_CONTENT_DISPOSITION: &str = "attachment;filename=products.xlsx";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the assistant endpoints.
#[derive(Clone)]
pub struct AssistantAppState {
    pub ask_agent: Arc<AskAgentHandler>,
    pub login: Arc<LoginHandler>,
    pub conversations: Arc<GetConversationHandler>,
    pub exports: Arc<ExportProductsHandler>,
}

impl AssistantAppState {
    pub fn new(
        ask_agent: AskAgentHandler,
        login: LoginHandler,
        conversations: GetConversationHandler,
        exports: ExportProductsHandler,
    ) -> Self {
        Self {
            ask_agent: Arc::new(ask_agent),
            login: Arc::new(login),
            conversations: Arc::new(conversations),
            exports: Arc::new(exports),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Greeting.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "Hello": "Ingesoft Class" }))
}

/// POST /ai/google_login/ - Register an email identity if absent.
pub async fn google_login(
    State(state): State<AssistantAppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AssistantApiError> {
    state
        .login
        .handle(LoginCommand {
            email: request.email,
        })
        .await?;

    Ok((StatusCode::OK, Json(MessageResponse::logged_in())))
}

/// GET /ai/bot_conversation/:user_email - The user's turns, oldest first.
///
/// # Errors
/// - 404 Not Found: No identity with this email
pub async fn get_conversation(
    State(state): State<AssistantAppState>,
    Path(user_email): Path<String>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let transcript = state
        .conversations
        .handle(GetConversationQuery { user_email })
        .await?;

    Ok((StatusCode::OK, Json(ConversationResponse::from(&transcript))))
}

/// GET /ai/get_excel/?user_email= - The user's product records as a workbook.
///
/// # Errors
/// - 404 Not Found: No identity with this email, or no records
pub async fn get_excel(
    State(state): State<AssistantAppState>,
    Query(query): Query<ExcelQuery>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let export = state
        .exports
        .handle(ExportProductsQuery {
            user_email: query.user_email,
        })
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, EXCEL_CONTENT_DISPOSITION),
        ],
        export.bytes,
    ))
}

/// POST /ai/importation-bot/ - Run one assistant turn.
///
/// # Errors
/// - 400 Bad Request: Any failure, with the error text as detail
pub async fn ask_agent(
    State(state): State<AssistantAppState>,
    Json(request): Json<AskAgentRequest>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let cmd = AskAgentCommand::new(
        request.prompt,
        IdentityRequest::new(request.user_email, request.user_id),
    );

    let result = state.ask_agent.handle(cmd).await?;

    Ok((StatusCode::OK, Json(AskAgentResponse::from(result))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for assistant endpoints.
#[derive(Debug)]
pub enum AssistantApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<DomainError> for AssistantApiError {
    fn from(err: DomainError) -> Self {
        if err.is_not_found() {
            return AssistantApiError::NotFound(err.message);
        }
        match err.code() {
            ErrorCode::ValidationFailed => AssistantApiError::BadRequest(err.message),
            _ => AssistantApiError::Internal(err.to_string()),
        }
    }
}

impl From<AskAgentError> for AssistantApiError {
    fn from(err: AskAgentError) -> Self {
        tracing::warn!(kind = ?err.kind(), error = %err, "Assistant turn failed");
        AssistantApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AssistantApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AssistantApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            AssistantApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            AssistantApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::EscapeError;
    use crate::ports::AIError;

    #[test]
    fn not_found_domain_errors_keep_their_message() {
        let err = AssistantApiError::from(DomainError::new(
            ErrorCode::UserNotFound,
            "No conversation found for this user",
        ));
        assert!(matches!(err, AssistantApiError::NotFound(m) if m == "No conversation found for this user"));
    }

    #[test]
    fn database_errors_are_internal() {
        let err = AssistantApiError::from(DomainError::database("connection reset"));
        assert!(matches!(err, AssistantApiError::Internal(_)));
    }

    #[test]
    fn every_assistant_failure_is_bad_request() {
        let errors = [
            AskAgentError::IdentityNotFound,
            AskAgentError::Upstream(AIError::unavailable("down")),
            AskAgentError::InvalidPrompt(EscapeError::TrailingBackslash),
            AskAgentError::Persistence(DomainError::database("gone")),
        ];
        for err in errors {
            assert!(matches!(
                AssistantApiError::from(err),
                AssistantApiError::BadRequest(_)
            ));
        }
    }

    #[test]
    fn status_codes() {
        let cases = [
            (AssistantApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AssistantApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AssistantApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
