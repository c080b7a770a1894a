//! Clientele CLI - Database migrations and demo data tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! clientele migrate
//!
//! # Insert demo data owned by a given user
//! clientele seed --user-id demo
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Insert demo customers, orders, and schedules for one owner

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clientele")]
#[command(author, version, about = "Clientele CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert demo data for an owner
    Seed {
        /// Owner the demo records belong to
        #[arg(short, long, default_value = "demo")]
        user_id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { user_id } => commands::seed::demo_data(&user_id).await?,
    }
    Ok(())
}
