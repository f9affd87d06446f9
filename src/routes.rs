use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Router,
    Json,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::languages::{language_options, LanguageOption};
use crate::state::AppState;
use crate::translate::{self, RelayError};

/// Full application: routes plus CORS and request tracing
pub fn build_app(state: AppState) -> Router {
    create_routes(state.clone())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = &state.config.server.static_dir;

    Router::new()
        // Translation relay
        .route("/translate", post(translate_handler))
        .route("/api/translate", post(translate_handler))

        // Health check
        .route("/api/health", get(health_check))

        .route("/api/languages", get(get_languages))

        // Translator page
        .fallback_service(ServeDir::new(static_dir))
}

/// Takes the raw body so a malformed payload goes through the relay's own
/// error mapping instead of axum's JSON rejection.
async fn translate_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let data = translate::relay(state.translation_api.as_ref(), &body).await?;
    Ok(Json(data))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

async fn get_languages() -> Json<Vec<LanguageOption>> {
    Json(language_options())
}
