//! Root info endpoint and the unmatched-route fallback

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::http::server::AppState;

/// Static service description
#[derive(Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub endpoints: Endpoints,
    pub documentation: &'static str,
}

/// Endpoint map echoed at the root
#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub ready: &'static str,
    pub status: &'static str,
    pub users: &'static str,
    pub user_by_id: &'static str,
}

/// GET /
async fn info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Welcome to the tierlab three-tier reference service",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        endpoints: Endpoints {
            health: "/health",
            ready: "/ready",
            status: "/api/status",
            users: "/api/users",
            user_by_id: "/api/users/{id}",
        },
        documentation: "See README.md for more details",
    })
}

/// Fallback for unmatched routes
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "message": "The requested resource was not found"
        })),
    )
        .into_response()
}

/// Root routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(info))
}
