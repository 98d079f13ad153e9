//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connection parameters
//! come from `DbConfig`; anything left unset falls back to the driver's
//! libpq-style defaults.

use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL connection parameters (`PGHOST`, `PGPORT`, ...)
#[derive(Debug, Clone, Default)]
pub struct DbConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl DbConfig {
    /// Build sqlx connect options, overriding driver defaults with any
    /// parameters that are set.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new();
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(port) = self.port {
            options = options.port(port);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        options
    }
}

/// Redacted summary for logs: the password is reduced to its length.
impl fmt::Display for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unset = "<default>";
        write!(
            f,
            "host={} port={} database={} user={} password_len={}",
            self.host.as_deref().unwrap_or(unset),
            self.port.map(|p| p.to_string()).as_deref().unwrap_or(unset),
            self.database.as_deref().unwrap_or(unset),
            self.user.as_deref().unwrap_or(unset),
            self.password.as_ref().map(|p| p.len()).unwrap_or(0),
        )
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    config: &DbConfig,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Query the role and database the pool is connected as.
pub async fn whoami(pool: &PgPool) -> Result<(String, String), sqlx::Error> {
    sqlx::query_as("SELECT current_user::text, current_database()::text")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_redacts_password() {
        let config = DbConfig {
            host: Some("db.internal".into()),
            port: Some(5433),
            database: Some("users".into()),
            user: Some("app".into()),
            password: Some("hunter22".into()),
        };
        let summary = config.to_string();
        assert_eq!(
            summary,
            "host=db.internal port=5433 database=users user=app password_len=8"
        );
        assert!(!summary.contains("hunter22"));
    }

    #[test]
    fn display_marks_unset_fields() {
        let summary = DbConfig::default().to_string();
        assert!(summary.contains("host=<default>"));
        assert!(summary.contains("password_len=0"));
    }

    #[test]
    fn connect_options_apply_overrides() {
        let config = DbConfig {
            host: Some("db.internal".into()),
            port: Some(6543),
            database: Some("users".into()),
            user: Some("app".into()),
            password: None,
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("users"));
        assert_eq!(options.get_username(), "app");
    }

    // Integration tests require a real database
    // Run with: PGHOST=... PGDATABASE=... cargo test -p userctl-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(&DbConfig::default())
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn whoami_reports_database() {
        let pool = create_pool(&DbConfig::default())
            .await
            .expect("pool creation failed");

        let (user, database) = whoami(&pool).await.expect("query failed");
        assert!(!user.is_empty());
        assert!(!database.is_empty());
    }
}
