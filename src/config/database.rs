//! Database configuration module for the call queue.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.

use crate::entities::Ticket;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::info;

/// Database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/call_queue.sqlite?mode=rwc";

/// Creates the directory holding a file-backed `SQLite` database.
///
/// `SQLite` creates the file itself under `mode=rwc` but not missing parent directories.
/// In-memory and non-`SQLite` URLs are left alone.
pub fn ensure_database_dir(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = rest.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    let missing = Path::new(path)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty() && !dir.exists());
    if let Some(dir) = missing {
        std::fs::create_dir_all(dir)?;
        info!("Created database directory {}", dir.display());
    }
    Ok(())
}

/// Establishes a connection to the given database URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    ensure_database_dir(database_url)?;
    let db = Database::connect(database_url).await?;
    info!("Connected to database at {}", database_url);
    Ok(db)
}

/// Creates the `tickets` table if it does not exist yet.
///
/// The `id` column is generated as `INTEGER PRIMARY KEY AUTOINCREMENT`, which keeps ids
/// unique for the lifetime of the database file, across deletes and full resets.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut ticket_table = schema.create_table_from_entity(Ticket);
    ticket_table.if_not_exists();

    db.execute(builder.build(&ticket_table)).await?;
    info!("Ticket table created or already present.");

    Ok(())
}
