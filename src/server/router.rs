use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::config::Settings;
use crate::server::handlers::{credentials, diagnostics, health, home, logs};
use crate::state::AppState;

/// Creates the application router with all routes and middleware.
///
/// - the landing page and its form handler
/// - JSON endpoints (status, diagnostics, credentials, logs)
/// - CORS and request tracing layers
pub fn router(state: Arc<AppState>) -> Router {
    let cors_layer = build_cors_layer(&state.settings);
    Router::new()
        .route("/", get(home::home))
        .route("/settings/api-key", post(home::save_api_key))
        .route("/health", get(health::health))
        .route("/api/status", get(health::get_status))
        .route("/api/diagnostics", get(diagnostics::get_diagnostics))
        .route(
            "/api/credentials",
            get(credentials::get_credentials).put(credentials::update_credentials),
        )
        .route("/api/logs", get(logs::get_logs))
        .route("/api/logs/:filename", get(logs::get_log_content))
        .with_state(state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let configured = settings
        .server
        .cors_allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();

    let allow_origin = if configured.is_empty() {
        AllowOrigin::list(
            default_local_origins()
                .into_iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect::<Vec<_>>(),
        )
    } else {
        AllowOrigin::list(configured)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
}

fn default_local_origins() -> Vec<&'static str> {
    vec![
        "http://localhost",
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8501",
        "http://127.0.0.1",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:8501",
    ]
}
