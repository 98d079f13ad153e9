//! userctl CLI - user records service
//!
//! Entry point for the userctl command-line tool, which provides:
//! - The HTTP API server over the `users` table (`serve` subcommand)
//! - A database connectivity check (`check-db` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "userctl",
    author,
    version,
    about = "JSON HTTP service for creating, reading and deleting user records"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server (users routes, health check)
    Serve(commands::serve::ServeArgs),
    /// Connect to the database and report current user and database
    CheckDb(commands::check_db::CheckDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Values already in the environment win over .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(err) = tracing_setup::init(&TracingConfig { debug: cli.debug }) {
        eprintln!("warning: logging disabled: {:#}", err);
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::CheckDb(args) => commands::run_check_db(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_db_subcommand() {
        let cli = Cli::try_parse_from(["userctl", "--debug", "check-db"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::CheckDb(_)));
    }
}
