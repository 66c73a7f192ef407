//! Liveness and readiness endpoints
//!
//! Liveness never touches the store; readiness issues a trivial ping and
//! reports 503 when the store is unreachable.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::db::repos::SystemRepo;
use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub environment: String,
    pub version: &'static str,
}

/// Readiness response (success arm)
#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// Readiness response (failure arm); carries the raw store error
#[derive(Serialize)]
pub struct NotReadyResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub error: String,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /ready
async fn ready(State(state): State<Arc<AppState>>) -> Response {
    match SystemRepo::new(&state.pool).ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "ready",
                database: "connected",
                timestamp: Utc::now().to_rfc3339(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(NotReadyResponse {
                    status: "not ready",
                    database: "disconnected",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}
