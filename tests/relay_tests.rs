//! End-to-end tests: relay router in front of a stub translation API

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

use translator_backend::config::Config;
use translator_backend::form::{Display, Phase, RelayClient, TranslatorForm};
use translator_backend::languages::SupportedLanguage;
use translator_backend::routes;
use translator_backend::state::AppState;

type Seen = Arc<Mutex<Vec<Value>>>;

async fn translate_ok(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().push(body.clone());
    let translated = match body["text"].as_str() {
        Some("hola") => "hello",
        _ => "???",
    };
    Json(json!({ "translated_text": translated }))
}

async fn unavailable(State(seen): State<Seen>, Json(body): Json<Value>) -> (StatusCode, &'static str) {
    seen.lock().unwrap().push(body);
    (StatusCode::SERVICE_UNAVAILABLE, "upstream is down")
}

async fn rejected(State(seen): State<Seen>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    seen.lock().unwrap().push(body);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "message": "unsupported language pair" })),
    )
}

async fn slow(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().push(body);
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({ "translated_text": "too late" }))
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_upstream() -> (SocketAddr, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/ok", post(translate_ok))
        .route("/unavailable", post(unavailable))
        .route("/rejected", post(rejected))
        .route("/slow", post(slow))
        .with_state(seen.clone());
    (serve(app).await, seen)
}

fn relay_app(upstream: SocketAddr, path: &str) -> Router {
    let mut config = Config::default();
    config.upstream.endpoint = format!("http://{}{}", upstream, path);
    config.upstream.timeout_secs = 1;
    routes::build_app(AppState::new(config).unwrap())
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn hola() -> String {
    json!({"text": "hola", "source_lang": "spanish", "target_lang": "english"}).to_string()
}

#[tokio::test]
async fn test_success_is_relayed_verbatim() {
    let (upstream, seen) = spawn_upstream().await;

    let (status, body) = post_json(relay_app(upstream, "/ok"), "/translate", hola()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"translated_text": "hello"}));
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[json!({"text": "hola", "source_lang": "spanish", "target_lang": "english"})]
    );
}

#[tokio::test]
async fn test_api_prefixed_route_relays_too() {
    let (upstream, _seen) = spawn_upstream().await;

    let (status, body) = post_json(relay_app(upstream, "/ok"), "/api/translate", hola()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translated_text"], "hello");
}

#[tokio::test]
async fn test_empty_text_is_rejected_without_upstream_call() {
    let (upstream, seen) = spawn_upstream().await;
    let body = json!({"text": "", "source_lang": "spanish", "target_lang": "english"}).to_string();

    let (status, body) = post_json(relay_app(upstream, "/ok"), "/translate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Missing required fields: text, source_lang, or target_lang"})
    );
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_each_missing_field_is_rejected() {
    let (upstream, seen) = spawn_upstream().await;
    let bodies = [
        json!({"source_lang": "spanish", "target_lang": "english"}),
        json!({"text": "hola", "target_lang": "english"}),
        json!({"text": "hola", "source_lang": "spanish"}),
    ];

    for body in bodies {
        let (status, _) = post_json(relay_app(upstream, "/ok"), "/translate", body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {} should be rejected", body);
    }
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unparsable_upstream_error_mirrors_status() {
    let (upstream, _seen) = spawn_upstream().await;

    let (status, body) = post_json(relay_app(upstream, "/unavailable"), "/translate", hola()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({"error": "Translation API error: Service Unavailable", "details": null})
    );
}

#[tokio::test]
async fn test_json_upstream_error_is_attached_as_details() {
    let (upstream, _seen) = spawn_upstream().await;

    let (status, body) = post_json(relay_app(upstream, "/rejected"), "/translate", hola()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Translation API error: Unprocessable Entity");
    assert_eq!(body["details"], json!({"message": "unsupported language pair"}));
}

#[tokio::test]
async fn test_repeated_requests_give_identical_responses() {
    let (upstream, _seen) = spawn_upstream().await;

    for path in ["/ok", "/unavailable"] {
        let first = post_json(relay_app(upstream, path), "/translate", hola()).await;
        let second = post_json(relay_app(upstream, path), "/translate", hola()).await;
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let (upstream, seen) = spawn_upstream().await;

    let (status, body) = post_json(relay_app(upstream, "/ok"), "/translate", "{oops".to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let (status, body) = post_json(relay_app(dead, "/ok"), "/translate", hola()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let (upstream, _seen) = spawn_upstream().await;

    let (status, body) = post_json(relay_app(upstream, "/slow"), "/translate", hola()).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, json!({"error": "Translation API timed out"}));
}

#[tokio::test]
async fn test_languages_endpoint() {
    let (upstream, _seen) = spawn_upstream().await;
    let response = relay_app(upstream, "/ok")
        .oneshot(Request::builder().uri("/api/languages").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[1], json!({"code": "spanish", "name": "Spanish"}));
}

#[tokio::test]
async fn test_form_translates_through_relay() {
    let (upstream, seen) = spawn_upstream().await;
    let relay = serve(relay_app(upstream, "/ok")).await;
    let client = RelayClient::new(&format!("http://{}", relay), Duration::from_secs(5)).unwrap();

    let mut form = TranslatorForm::new();
    form.set_text("hola");
    form.set_source(SupportedLanguage::Spanish);
    form.set_target(SupportedLanguage::English);

    let phase = form.submit(&client).await.clone();
    assert_eq!(phase, Phase::Succeeded("hello".to_string()));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_form_reports_relay_status_text() {
    let (upstream, _seen) = spawn_upstream().await;
    let relay = serve(relay_app(upstream, "/unavailable")).await;
    let client = RelayClient::new(&format!("http://{}", relay), Duration::from_secs(5)).unwrap();

    let mut form = TranslatorForm::new();
    form.set_text("hola");
    form.submit(&client).await;

    assert_eq!(
        form.view(),
        Display::Error("Translation failed: Service Unavailable")
    );
}

#[tokio::test]
async fn test_form_same_language_never_reaches_upstream() {
    let (upstream, seen) = spawn_upstream().await;
    let relay = serve(relay_app(upstream, "/ok")).await;
    let client = RelayClient::new(&format!("http://{}", relay), Duration::from_secs(5)).unwrap();

    let mut form = TranslatorForm::new();
    form.set_text("hola");
    form.set_source(SupportedLanguage::Spanish);
    form.set_target(SupportedLanguage::Spanish);
    form.submit(&client).await;

    assert_eq!(
        form.view(),
        Display::Error("Source and target languages must be different")
    );
    assert!(seen.lock().unwrap().is_empty());
}
