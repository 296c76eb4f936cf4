// Shared test helpers for extract fixtures and database access.
//
// This module provides common utilities used across multiple test files to
// reduce duplication.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use flate2::write::GzEncoder;
use flate2::Compression;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqlitePool};

/// Header line of a minimal EBird extract covering every column the importer
/// reads.
pub const EXTRACT_HEADER: &str = "GLOBAL UNIQUE IDENTIFIER\tCOMMON NAME\tSCIENTIFIC NAME\t\
    OBSERVATION COUNT\tBREEDING BIRD ATLAS CODE\tBREEDING BIRD ATLAS CATEGORY\t\
    AGE/SEX\tLATITUDE\tLONGITUDE\tOBSERVATION DATE\tTIME OBSERVATIONS STARTED\t\
    OBSERVER ID\tSAMPLING EVENT IDENTIFIER\tPROTOCOL TYPE\tDURATION MINUTES\t\
    EFFORT DISTANCE KM\tNUMBER OBSERVERS\tALL SPECIES REPORTED\tAPPROVED\t\
    SPECIES COMMENTS";

/// Builds one extract row. The guid doubles as an identity check in
/// assertions, so make it unique per row.
#[allow(dead_code)] // Used by other test files
pub fn extract_row(
    guid: &str,
    common: &str,
    scientific: &str,
    lat: f64,
    lon: f64,
    date: &str,
) -> String {
    format!(
        "{guid}\t{common}\t{scientific}\t1\t\t\t\t{lat}\t{lon}\t{date}\t06:45:00\t\
         obsr1\tS1\tStationary\t30\t\t1\t1\t1\t"
    )
}

/// Writes a gzipped extract with the standard header and the given rows,
/// returning its path.
#[allow(dead_code)] // Used by other test files
pub fn write_extract(dir: &Path, name: &str, rows: &[String]) -> PathBuf {
    let mut body = String::from(EXTRACT_HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');

    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("Failed to create extract fixture");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(body.as_bytes())
        .expect("Failed to write extract fixture");
    encoder.finish().expect("Failed to finish gzip stream");
    path
}

/// Whether the SpatiaLite loadable extension is available on this machine.
///
/// Tests that exercise the full import pipeline need `mod_spatialite`; when
/// it's not installed they skip with a notice instead of failing.
#[allow(dead_code)] // Used by other test files
pub async fn spatialite_available() -> bool {
    let options = match SqliteConnectOptions::from_str("sqlite::memory:") {
        Ok(options) => options.extension("mod_spatialite"),
        Err(_) => return false,
    };
    match options.connect().await {
        Ok(conn) => {
            let _ = conn.close().await;
            true
        }
        Err(_) => false,
    }
}

/// Opens the output database read-only (no extension needed for plain
/// column queries).
#[allow(dead_code)] // Used by other test files
pub async fn open_output_db(db_path: &Path) -> SqlitePool {
    SqlitePool::connect(&format!("sqlite:{}", db_path.to_string_lossy()))
        .await
        .expect("Failed to open output database")
}

/// All guids in the observations table, ordered for stable comparison.
#[allow(dead_code)] // Used by other test files
pub async fn imported_guids(pool: &SqlitePool) -> Vec<String> {
    sqlx::query_scalar("SELECT guid FROM observations ORDER BY guid")
        .fetch_all(pool)
        .await
        .expect("Failed to query observations")
}
