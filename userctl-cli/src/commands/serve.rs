//! HTTP server command
//!
//! Connects the pool, ensures the schema, then serves the user routes.
//! Schema failure aborts before the port is bound.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use userctl_server::db::{create_pool, ensure_schema, UserRepo};
use userctl_server::http::{run_server, AppState, ServerConfig};

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind to
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[command(flatten)]
    pub db: DbArgs,
}

impl ServeArgs {
    fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.to_config();
    tracing::info!(db = %db_config, "Connecting to database");

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to create or verify the users schema")?;

    let config = ServerConfig {
        bind_addr: args.bind_addr(),
    };
    let state = AppState::new(Arc::new(UserRepo::new(pool)));

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_3000() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        assert_eq!(args.bind_addr().port(), 3000);
        assert!(args.bind_addr().ip().is_unspecified());
    }

    #[test]
    fn flags_override_defaults() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--pg-host",
            "db.internal",
            "--pg-port",
            "6543",
        ])
        .unwrap();

        assert_eq!(args.bind_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        let config = args.db.to_config();
        assert_eq!(config.host.as_deref(), Some("db.internal"));
        assert_eq!(config.port, Some(6543));
    }
}
