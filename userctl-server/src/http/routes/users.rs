//! User endpoints
//!
//! Each handler makes exactly one store call and maps the outcome to a
//! status code; errors go through `ApiError`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::http::extractors::UserIdPath;
use crate::http::server::AppState;
use crate::models::{NewUser, User, UserId, ValidationError};

/// Create user request
///
/// Read from a JSON object by field name only; arrays and scalars are
/// rejected before any field is looked at.
#[derive(Debug, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<Map<String, Value>> for CreateUserRequest {
    type Error = ValidationError;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            name: string_field(&mut body, "name")?,
            email: string_field(&mut body, "email")?,
        })
    }
}

/// Absent and `null` read as missing; any other non-string is malformed.
fn string_field(
    body: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match body.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a string",
        }),
    }
}

/// User response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

/// GET /users - list all users by ascending id
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(req) = payload?;
    // Validated before any database access
    let new_user = NewUser::new(req.name, req.email)?;
    let user = state.users.create(new_user).await?;

    tracing::debug!(id = user.id, "Created user");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// DELETE /users/{id} - delete a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
) -> Result<StatusCode, ApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
}
