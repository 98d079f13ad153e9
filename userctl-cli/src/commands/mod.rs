//! Command implementations for userctl CLI

use clap::Args;
use userctl_server::DbConfig;

pub mod check_db;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use check_db::run_check_db;
pub use serve::run_serve;

/// PostgreSQL connection flags, each with a libpq-style env fallback
#[derive(Args, Debug, Clone, Default)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "PGHOST")]
    pub pg_host: Option<String>,

    /// Database port
    #[arg(long, env = "PGPORT")]
    pub pg_port: Option<u16>,

    /// Database name
    #[arg(long, env = "PGDATABASE")]
    pub pg_database: Option<String>,

    /// Database user
    #[arg(long, env = "PGUSER")]
    pub pg_user: Option<String>,

    /// Database password
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub pg_password: Option<String>,
}

impl DbArgs {
    pub fn to_config(&self) -> DbConfig {
        DbConfig {
            host: self.pg_host.clone(),
            port: self.pg_port,
            database: self.pg_database.clone(),
            user: self.pg_user.clone(),
            password: self.pg_password.clone(),
        }
    }
}
