//! Insert operations for accepted observations.
//!
//! All inserts run inside the caller's transaction and use parameterized
//! queries. The geometry is built in SQL with `MakePoint(lon, lat, 4326)`
//! from the record's coordinates.

use sqlx::{Sqlite, Transaction};

use crate::error_handling::DatabaseError;
use crate::record::EbirdRecord;

/// Inserts one accepted record into the `observations` table.
pub async fn insert_observation(
    tx: &mut Transaction<'_, Sqlite>,
    record: &EbirdRecord,
) -> Result<(), DatabaseError> {
    sqlx::query(
        "INSERT INTO observations (
            guid, common_name, scientific_name, observation_count,
            breeding_bird_atlas_code, breeding_bird_atlas_category, age_sex,
            location, obs_date, time_obs_started, observer_id,
            sampling_event_id, protocol_type, duration_minutes,
            effort_distance_km, number_observers, all_species_reported,
            approved, species_comments)
        VALUES (?, ?, ?, ?, ?, ?, ?, MakePoint(?, ?, 4326), ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.guid)
    .bind(&record.common_name)
    .bind(&record.scientific_name)
    .bind(&record.observation_count)
    .bind(&record.breeding_bird_atlas_code)
    .bind(&record.breeding_bird_atlas_category)
    .bind(&record.age_sex)
    .bind(record.longitude)
    .bind(record.latitude)
    .bind(&record.obs_date)
    .bind(&record.time_obs_started)
    .bind(&record.observer_id)
    .bind(&record.sampling_event_id)
    .bind(&record.protocol_type)
    .bind(record.duration_minutes)
    .bind(record.effort_distance_km)
    .bind(record.number_observers)
    .bind(record.all_species_reported)
    .bind(record.approved)
    .bind(&record.species_comments)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
