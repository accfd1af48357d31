pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod routes;
pub mod state;

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "GreenTrade Management API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// Serves GET and HEAD; axum answers HEAD for any GET route.
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

fn cors_layer(cors_origin: Option<&str>) -> CorsLayer {
    match cors_origin.and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    }
}

pub fn build_app(state: AppState, cors_origin: Option<&str>) -> Router {
    Router::new()
        .nest("/api", routes::create_router())
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(cors_layer(cors_origin))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}
