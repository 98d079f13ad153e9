//! Database connectivity check
//!
//! Connects with the same settings `serve` would use and reports which role
//! and database the connection landed on.

use anyhow::{Context, Result};
use clap::Parser;

use userctl_server::db::{create_pool_with_options, whoami};

use super::DbArgs;

/// Arguments for the check-db command
#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let db_config = args.db.to_config();
    tracing::info!(db = %db_config, "Checking database connection");

    let pool = create_pool_with_options(&db_config, 1)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected");

    let (user, database) = whoami(&pool)
        .await
        .context("Failed to query current user and database")?;
    pool.close().await;

    println!("current_user: {}", user);
    println!("current_database: {}", database);
    Ok(())
}
