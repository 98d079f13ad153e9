//! User repository
//!
//! Every call is exactly one parameterized statement on a pooled connection:
//! - create: INSERT ... RETURNING, unique email enforced by the table
//! - delete: rows_affected decides between 204 and 404
//!
//! `created_at` is read through a `::timestamptz` cast so tables created with
//! a plain `TIMESTAMP` column (as older deployments did) still decode.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{user_not_found, UserStore};
use crate::db::DbError;
use crate::models::{NewUser, User, UserId};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const LIST_USERS: &str = r#"
    SELECT id, name, email, created_at::timestamptz AS created_at
    FROM users
    ORDER BY id
"#;

const GET_USER: &str = r#"
    SELECT id, name, email, created_at::timestamptz AS created_at
    FROM users
    WHERE id = $1
"#;

const INSERT_USER: &str = r#"
    INSERT INTO users (name, email)
    VALUES ($1, $2)
    RETURNING id, name, email, created_at::timestamptz AS created_at
"#;

#[async_trait]
impl UserStore for UserRepo {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let users: Vec<User> = sqlx::query_as(LIST_USERS)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn get(&self, id: UserId) -> Result<User, DbError> {
        sqlx::query_as(GET_USER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    async fn create(&self, user: NewUser) -> Result<User, DbError> {
        sqlx::query_as(INSERT_USER)
            .bind(user.name())
            .bind(user.email())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DbError::on_insert(e, "user", "email"))
    }

    async fn delete(&self, id: UserId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }
        Ok(())
    }
}
