//! Database connection pool management.
//!
//! Initializes the SQLite connection pool with the SpatiaLite loadable
//! extension configured, so every connection can evaluate spatial SQL
//! (`MakePoint`, `CreateSpatialIndex`, ...). The importer is a single
//! sequential writer, so the pool is capped at one connection.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Initializes and returns a database connection pool with the SpatiaLite
/// extension loaded.
///
/// Creates the database file if it doesn't exist. `extension` is the
/// loadable module name or path, typically `mod_spatialite`; a failure to
/// load it surfaces as a connect error.
pub async fn init_spatial_pool(
    db_path: &Path,
    extension: &str,
) -> Result<SqlitePool, DatabaseError> {
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(db_path)
    {
        Ok(_) => info!("Database file created successfully."),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Database file already exists.")
        }
        Err(e) => {
            error!("Failed to create database file: {e}");
            return Err(DatabaseError::FileCreationError(e.to_string()));
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .extension(extension.to_owned());

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database (is {extension} installed?): {e}");
            DatabaseError::SqlError(e)
        })?;

    Ok(pool)
}
