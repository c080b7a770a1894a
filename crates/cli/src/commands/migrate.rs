//! Database migration command.
//!
//! Applies the migrations embedded in the api crate to the configured
//! database, creating the `SQLite` file if it does not exist yet. The server
//! also migrates on startup; this command exists for provisioning a database
//! without starting the server.
//!
//! # Environment Variables
//!
//! - `CLIENTELE_DATABASE_URL` (or `DATABASE_URL`) - `SQLite` connection string

use tracing::info;

use clientele_api::config::ApiConfig;
use clientele_api::db;

/// Run database migrations.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the database is not
/// reachable, or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;

    info!("Migrations complete!");
    Ok(())
}
