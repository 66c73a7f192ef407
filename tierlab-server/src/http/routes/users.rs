//! User endpoints - list, create, get by id

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::UserId;
use crate::http::server::AppState;
use crate::models::{NewUser, User, ValidationError};

/// Create user request; fields are optional so absence is a validation
/// error, not a deserialization rejection
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// List response
#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: usize,
}

/// Creation response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub user: User,
}

/// Single-user response
#[derive(Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// GET /api/users - all users, newest first
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<UsersResponse>, ApiError> {
    let users = UserRepo::new(&state.pool)
        .list()
        .await
        .map_err(|e| ApiError::from_db("Failed to fetch users", e))?;

    let count = users.len();
    Ok(Json(UsersResponse { users, count }))
}

/// POST /api/users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    // An unparseable body stays inside the JSON error contract
    let Json(req) = body.map_err(|_| ValidationError::InvalidBody)?;

    // Validation happens before any store access
    let input = NewUser::parse(req.name, req.email)?;

    let user = UserRepo::new(&state.pool)
        .create(&input)
        .await
        .map_err(|e| ApiError::from_db("Failed to create user", e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User created successfully",
            user,
        }),
    ))
}

/// GET /api/users/{id} - single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(|e| ApiError::from_db("Failed to fetch user", e))?;

    Ok(Json(UserResponse { user }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
}
