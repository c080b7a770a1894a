//! Database operations for the `SQLite` store.
//!
//! ## Tables
//!
//! - `customers` - intake records, one agent each
//! - `orders` - sales orders, optionally linked to a customer
//! - `schedules` - calendar entries, optionally linked to a customer
//!
//! Every table carries a `created_by` column and every query filters on it,
//! so rows belonging to other agents are invisible to each repository call.
//! Row-level misses are reported through `Option`/`bool` return values
//! rather than errors; a missing row and a row owned by another agent look
//! the same to callers.
//!
//! Migrations live in `crates/api/migrations/` and are applied on startup
//! as well as via `cargo run -p clientele-cli -- migrate`.

pub mod customers;
pub mod orders;
pub mod schedules;

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use schedules::ScheduleRepository;

/// Embedded migrations from `crates/api/migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created on first use. WAL journaling keeps readers
/// from blocking the writer, and the busy timeout covers short write bursts
/// from concurrent requests.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
