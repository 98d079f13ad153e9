//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::models::{parse_user_id, UserId};
use super::error::ApiError;

/// Extract a user id from the path.
///
/// Ids that don't parse as an integer can't match a row, so they are
/// rejected as not found rather than as bad requests.
pub struct UserIdPath(pub UserId);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found(String::new()))?;

        parse_user_id(&raw).map(Self).ok_or_else(|| not_found(raw))
    }
}

fn not_found(id: String) -> ApiError {
    ApiError::NotFound {
        resource: "user",
        id,
    }
}
