//! User store abstraction
//!
//! Handlers talk to a `dyn UserStore` so the PostgreSQL repository can be
//! swapped for the in-memory store in tests.

use async_trait::async_trait;

use crate::models::{NewUser, User, UserId};
use super::DbError;

/// One method per SQL statement the HTTP surface needs.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// All users, ascending by id.
    async fn list(&self) -> Result<Vec<User>, DbError>;

    /// A single user, or `DbError::NotFound`.
    async fn get(&self, id: UserId) -> Result<User, DbError>;

    /// Insert a user. Duplicate emails return `DbError::Conflict`.
    async fn create(&self, user: NewUser) -> Result<User, DbError>;

    /// Delete a user, or `DbError::NotFound` if no row was removed.
    async fn delete(&self, id: UserId) -> Result<(), DbError>;
}

pub(crate) fn user_not_found(id: UserId) -> DbError {
    DbError::NotFound {
        resource: "user",
        id: id.to_string(),
    }
}
