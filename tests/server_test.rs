// Integration tests for HTTP server

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use safespace::companion::{Companion, ResponsePayload};
use safespace::config::Config;
use safespace::resources::Resources;
use safespace::server::{create_router, CompanionServer, HealthStatus, SESSION_COOKIE};
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to create a test app without an AI provider
fn create_test_app() -> (axum::Router, Arc<CompanionServer>) {
    let config = Config::default();
    let companion = Companion::new(Resources::default(), None).expect("valid resources");
    let server = Arc::new(CompanionServer::new(&config, companion));
    (create_router(Arc::clone(&server)), server)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_payload(response: axum::response::Response) -> ResponsePayload {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_index_pages() {
    let (app, _) = create_test_app();

    for uri in ["/", "/home"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&body).contains("SafeSpace Companion"));
    }
}

#[tokio::test]
async fn test_chat_without_ai_returns_fallback_reply() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(post_json("/chat", r#"{"message": "hello", "name": "Asha"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_payload(response).await;
    assert_eq!(
        payload,
        ResponsePayload::plain(
            "I'm here with you, even if I can't find the words right now. You're not alone in this moment. 💙"
        )
    );
}

#[tokio::test]
async fn test_chat_tolerates_malformed_body() {
    let (app, _) = create_test_app();

    let response = app.oneshot(post_json("/chat", "not json at all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_payload(response).await;
    assert!(!payload.show_resources);
}

#[tokio::test]
async fn test_quick_comfort_crisis_lists_helplines() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(post_json("/quick-comfort", r#"{"type": "crisis"}"#))
        .await
        .unwrap();

    let payload = read_payload(response).await;
    assert!(payload.message.contains("9152987821"));
    assert!(payload.message.contains("14416"));
    assert!(!payload.show_resources);
}

#[tokio::test]
async fn test_quick_comfort_unknown_type_still_succeeds() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(post_json("/quick-comfort", r#"{"type": "confetti"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_payload(response).await;
    assert_eq!(
        payload.message,
        "Let me offer you some comfort. You're not alone in this."
    );
}

#[tokio::test]
async fn test_quick_comfort_membership() {
    let (app, server) = create_test_app();
    let comfort = &server.companion().resources().comfort.comfort;

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(post_json("/quick-comfort", r#"{"type": "comfort"}"#))
            .await
            .unwrap();
        let payload = read_payload(response).await;
        assert!(comfort.contains(&payload.message));
    }
}

#[tokio::test]
async fn test_set_name_round_trip_through_cookie() {
    let (app, server) = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json("/set-name", r#"{"name": "Riya"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with(SESSION_COOKIE));

    let payload = read_payload(response).await;
    assert!(payload.message.contains("Riya"));

    let session_id = cookie
        .split(';')
        .next()
        .and_then(|pair| pair.split_once('='))
        .map(|(_, id)| id.to_string())
        .unwrap();
    assert_eq!(
        server.session_manager().name_for(&session_id).as_deref(),
        Some("Riya")
    );

    // Same cookie, new name: same session
    let mut request = post_json("/set-name", r#"{"name": "Asha"}"#);
    request.headers_mut().insert(
        header::COOKIE,
        format!("{}={}", SESSION_COOKIE, session_id).parse().unwrap(),
    );
    app.oneshot(request).await.unwrap();

    assert_eq!(
        server.session_manager().name_for(&session_id).as_deref(),
        Some("Asha")
    );
    assert_eq!(server.session_manager().active_count(), 1);
}

#[tokio::test]
async fn test_set_name_without_name_gets_generic_welcome() {
    let (app, _) = create_test_app();

    let response = app.oneshot(post_json("/set-name", "{}")).await.unwrap();

    let payload = read_payload(response).await;
    assert_eq!(
        payload.message,
        "Welcome! I'm glad you're here. This is a safe space for you."
    );
}

#[tokio::test]
async fn test_resources_endpoint() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/resources").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["state_label"], "Maharashtra");
    assert!(json["national"][0].as_str().unwrap().contains("9152987821"));
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: HealthStatus = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "healthy");
    assert!(!health.ai_enabled);
}
