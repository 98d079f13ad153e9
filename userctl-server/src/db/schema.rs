//! Startup schema for the users table

use sqlx::PgPool;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Create the `users` table if it doesn't exist.
///
/// Safe to run on every startup. Callers treat failure as fatal.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring users schema...");

    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;

    tracing::info!("Schema ready");
    Ok(())
}
