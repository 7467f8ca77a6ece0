// HTTP request handlers
//
// Every chat-facing endpoint answers 200 with a supportive message, even when
// something went wrong internally. Failures are logged, not surfaced.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::session::{session_cookie, session_id_from_headers};
use super::CompanionServer;
use crate::companion::{ResponsePayload, COMFORT_FALLBACK_REPLY, GENERIC_WELCOME};
use crate::resources::HelplineDirectory;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Name used in `/chat` prompts when neither the body nor the session has one
const DEFAULT_CHAT_NAME: &str = "Friend";

/// Create the main application router
pub fn create_router(server: Arc<CompanionServer>) -> Router {
    Router::new()
        // Chat page
        .route("/", get(index))
        .route("/home", get(index))
        // Chat endpoints
        .route("/chat", post(handle_chat))
        .route("/quick-comfort", post(handle_quick_comfort))
        .route("/set-name", post(handle_set_name))
        .route("/resources", get(get_resources))
        // Health
        .route("/health", get(health_check))
        .with_state(server)
}

/// Parse a JSON body, falling back to defaults for missing or malformed input
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Malformed request body, using defaults");
        T::default()
    })
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Request body for /chat
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Handle POST /chat - Main chat endpoint
async fn handle_chat(
    State(server): State<Arc<CompanionServer>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<ResponsePayload> {
    let request: ChatRequest = parse_body(&body);

    // Body name, then session name, then a friendly default
    let name = request
        .name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| {
            session_id_from_headers(&headers)
                .and_then(|id| server.session_manager().name_for(&id))
                .filter(|n| !n.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_CHAT_NAME.to_string());

    tracing::info!(message_chars = request.message.len(), "Chat message received");

    let payload = server
        .companion()
        .chat(&request.message, &name, server.chat_settings().screen_messages)
        .await;

    Json(payload)
}

/// Request body for /quick-comfort
#[derive(Debug, Default, Deserialize)]
pub struct QuickComfortRequest {
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Handle POST /quick-comfort - Comfort shortcut buttons
async fn handle_quick_comfort(
    State(server): State<Arc<CompanionServer>>,
    body: Bytes,
) -> Json<ResponsePayload> {
    let request: QuickComfortRequest = parse_body(&body);

    let message = match server.companion().quick_comfort(&request.kind) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Quick comfort request failed");
            COMFORT_FALLBACK_REPLY.to_string()
        }
    };

    Json(ResponsePayload::plain(message))
}

/// Request body for /set-name
#[derive(Debug, Default, Deserialize)]
pub struct SetNameRequest {
    #[serde(default)]
    pub name: String,
}

/// Handle POST /set-name - Store the display name in the session
async fn handle_set_name(
    State(server): State<Arc<CompanionServer>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request: SetNameRequest = parse_body(&body);
    let cookie_id = session_id_from_headers(&headers);

    match server
        .session_manager()
        .set_name(cookie_id.as_deref(), &request.name)
    {
        Ok(session) => {
            let message = match session.name.as_deref() {
                Some(name) if !name.is_empty() => server.companion().welcome(name),
                _ => GENERIC_WELCOME.to_string(),
            };

            (
                [(header::SET_COOKIE, session_cookie(&session.id))],
                Json(ResponsePayload::plain(message)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Failed to store session name");
            Json(ResponsePayload::plain(GENERIC_WELCOME)).into_response()
        }
    }
}

/// Handle GET /resources - Helpline directory for the resources panel
async fn get_resources(State(server): State<Arc<CompanionServer>>) -> Json<HelplineDirectory> {
    Json(server.companion().helplines().clone())
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: u64,
    pub active_sessions: usize,
    pub ai_enabled: bool,
}

/// Handle GET /health - Health check endpoint
pub async fn health_check(State(server): State<Arc<CompanionServer>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        uptime_seconds: server.uptime_seconds(),
        active_sessions: server.session_manager().active_count(),
        ai_enabled: server.companion().ai_enabled(),
    })
}
