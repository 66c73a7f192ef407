//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a numeric user id from the path.
///
/// Rejects before any handler logic runs, so a bad id never reaches the
/// store.
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidUserId))?;

        let id = id
            .parse::<i32>()
            .map_err(|_| ApiError::Validation(ValidationError::InvalidUserId))?;

        Ok(Self(id))
    }
}
