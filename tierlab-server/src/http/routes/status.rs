//! Store status endpoint
//!
//! Reports the store's current time and version alongside the app clock.
//! Failures echo the raw store message to the caller as a debug aid.

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::db::repos::SystemRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Store status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub database_time: String,
    pub database_version: String,
    pub app_time: String,
    pub environment: String,
}

/// GET /api/status
async fn status(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let store = SystemRepo::new(&state.pool)
        .status()
        .await
        .map_err(|e| ApiError::from_db("Database connection failed", e))?;

    Ok(Json(StatusResponse {
        status: "Database connected",
        database_time: store.time.to_rfc3339(),
        database_version: store.version,
        app_time: Utc::now().to_rfc3339(),
        environment: state.config.environment.clone(),
    }))
}

/// Status routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/status", get(status))
}
