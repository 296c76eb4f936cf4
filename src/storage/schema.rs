//! Schema management for the observations table.
//!
//! Each run overwrites the previous import: the table is dropped and
//! recreated, which keeps re-runs of the same command deterministic. The
//! geometry column is registered through SpatiaLite so the table shows up in
//! `geometry_columns` and can carry a spatial index.

use log::debug;
use sqlx::SqlitePool;

use crate::config::SRID_WGS84;
use crate::error_handling::DatabaseError;

/// Drops any previous import and recreates the `observations` table with its
/// `location` POINT geometry column (SRID 4326).
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    // Retire the previous geometry registration before dropping the table,
    // otherwise stale rows linger in geometry_columns. Both calls fail on a
    // fresh database, which is fine.
    for sql in [
        "SELECT DisableSpatialIndex('observations', 'location')",
        "SELECT DiscardGeometryColumn('observations', 'location')",
    ] {
        if let Err(e) = sqlx::query(sql).execute(pool).await {
            debug!("{sql}: {e}");
        }
    }
    sqlx::query("DROP TABLE IF EXISTS idx_observations_location")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS observations")
        .execute(pool)
        .await?;

    // No-op when the spatial metadata tables already exist
    sqlx::query("SELECT InitSpatialMetaData(1)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE TABLE observations (
            id                              INTEGER PRIMARY KEY,
            guid                            TEXT,
            common_name                     TEXT,
            scientific_name                 TEXT,
            observation_count               TEXT,
            breeding_bird_atlas_code        TEXT,
            breeding_bird_atlas_category    TEXT,
            age_sex                         TEXT,
            obs_date                        TEXT,
            time_obs_started                TEXT,
            observer_id                     TEXT,
            sampling_event_id               TEXT,
            protocol_type                   TEXT,
            duration_minutes                INTEGER,
            effort_distance_km              REAL,
            number_observers                INTEGER,
            all_species_reported            INTEGER,
            approved                        INTEGER,
            species_comments                TEXT)",
    )
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "SELECT AddGeometryColumn('observations', 'location', {SRID_WGS84}, 'POINT', 'XY')"
    ))
    .execute(pool)
    .await?;

    Ok(())
}

/// Builds the R*Tree index over the `location` column. Called once, after
/// the import transaction commits, since the index tracks inserts row by row
/// and bulk loads are faster without it.
pub async fn create_spatial_index(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT CreateSpatialIndex('observations', 'location')")
        .execute(pool)
        .await?;
    Ok(())
}
