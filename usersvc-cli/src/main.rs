//! usersvc CLI - users CRUD service
//!
//! Entry point for the `usersvc` binary:
//! - `serve`: run the HTTP API against PostgreSQL

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "usersvc",
    author,
    version,
    about = "Users CRUD service over HTTP and PostgreSQL"
)]
struct Cli {
    /// Debug logging (default filter becomes `debug` unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads `env = ...` fallbacks
    let loaded = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    for path in &loaded {
        tracing::info!("Loaded configuration from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }

    Ok(())
}
