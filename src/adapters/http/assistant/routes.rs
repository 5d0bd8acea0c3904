//! Axum routes for the assistant endpoints.

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{ask_agent, get_conversation, get_excel, google_login, root, AssistantAppState};

/// Creates routes for the assistant endpoints.
///
/// - POST /google_login/ (also /google-login/) - Register an email identity
/// - GET /bot_conversation/:user_email - Conversation log
/// - GET /get_excel/?user_email= - Product workbook
/// - POST /importation-bot/ (also /importation/) - Ask the assistant
pub fn assistant_routes() -> Router<AssistantAppState> {
    Router::new()
        .route("/google_login/", post(google_login))
        .route("/google-login/", post(google_login))
        .route("/bot_conversation/:user_email", get(get_conversation))
        .route("/get_excel/", get(get_excel))
        .route("/importation-bot/", post(ask_agent))
        .route("/importation/", post(ask_agent))
}

/// Combined router: greeting at `/`, assistant routes under `/ai`.
pub fn assistant_router() -> Router<AssistantAppState> {
    Router::new()
        .route("/", get(root))
        .nest("/ai", assistant_routes())
}

/// CORS policy. An empty origin list allows any origin; credentials are
/// always allowed.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// The full application: routes, state, CORS and request tracing.
pub fn app(state: AssistantAppState, cors_origins: &[String]) -> Router {
    assistant_router()
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}
