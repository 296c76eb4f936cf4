//! ebird2spatialite library: filter-and-load pipeline for EBird extracts
//!
//! This library streams a gzipped EBird extract, applies the configured
//! spatial / name / date filters to each record, and loads the matches into
//! a SpatiaLite database with a geometry column and spatial index.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use ebird2spatialite::{run_import, Opt};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opt = Opt::parse_from([
//!     "ebird2spatialite",
//!     "ebd_relMay-2024.txt.gz",
//!     "--common-name-regex",
//!     "Swallow",
//! ]);
//! let report = run_import(opt).await?;
//! println!("Imported {} of {} rows", report.imported, report.rows_read);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime and the SpatiaLite loadable
//! extension (`mod_spatialite`) on the library search path.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod filter;
pub mod initialization;
mod reader;
mod record;
mod storage;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt};
pub use error_handling::{DatabaseError, FilterError, InitializationError, SkipReason};
pub use run::{run_import, ImportReport};

// Internal run module (contains the import pipeline)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info, warn};

    use crate::config::{Opt, PROGRESS_LOG_INTERVAL_ROWS};
    use crate::error_handling::{ImportStats, SkipReason};
    use crate::filter::{RecordFilter, Verdict};
    use crate::reader::ExtractReader;
    use crate::storage::{create_spatial_index, init_schema, init_spatial_pool, insert_observation};

    /// Results of an import run.
    ///
    /// Contains summary statistics and metadata about the completed import.
    #[derive(Debug, Clone)]
    pub struct ImportReport {
        /// Total number of input rows read (bounded by `--limit`)
        pub rows_read: u64,
        /// Number of records inserted into the database
        pub imported: u64,
        /// Number of records rejected by an active filter predicate
        pub filtered_out: u64,
        /// Number of rows that could not be parsed
        pub malformed: u64,
        /// Path to the SpatiaLite database containing the results
        pub db_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an import with the provided options.
    ///
    /// This is the main entry point for the library. It validates the filter
    /// options, recreates the output table, then streams the extract in a
    /// single pass: parse, filter, insert. All inserts happen in one
    /// transaction committed at the end; the spatial index is built after
    /// the commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter options are invalid, the input file
    /// cannot be opened, or the database cannot be initialized. Malformed
    /// rows and per-record insert failures are counted and skipped, never
    /// fatal.
    pub async fn run_import(opt: Opt) -> Result<ImportReport> {
        let filter = RecordFilter::from_opt(&opt)?;

        let pool = init_spatial_pool(&opt.db_path, &opt.spatialite_extension)
            .await
            .context("Failed to open spatial database")?;
        init_schema(&pool)
            .await
            .context("Failed to initialize database schema")?;

        let reader = ExtractReader::open(&opt.input)
            .with_context(|| format!("Failed to open EBird extract {}", opt.input.display()))?;

        let start_time = Instant::now();
        let mut stats = ImportStats::new();

        let mut tx = pool
            .begin()
            .await
            .context("Failed to begin import transaction")?;

        let limit = opt.limit.unwrap_or(usize::MAX);
        for row in reader.take(limit) {
            stats.record_row_read();

            let record = match row {
                Ok(record) => record,
                Err(e) => {
                    debug!("skipping malformed row {}: {e}", stats.rows_read());
                    stats.record_skip(SkipReason::MalformedRow);
                    continue;
                }
            };

            match filter.evaluate(&record) {
                Verdict::Skip(reason) => stats.record_skip(reason),
                Verdict::Accept => match insert_observation(&mut tx, &record).await {
                    Ok(()) => stats.record_imported(),
                    Err(e) => {
                        warn!("could not insert record {}: {e}", record.guid);
                        stats.record_skip(SkipReason::InsertError);
                    }
                },
            }

            if stats.rows_read() % PROGRESS_LOG_INTERVAL_ROWS == 0 {
                info!(
                    "processed {} rows ({} imported so far)",
                    stats.rows_read(),
                    stats.imported()
                );
            }
        }

        tx.commit()
            .await
            .context("Failed to commit import transaction")?;

        create_spatial_index(&pool)
            .await
            .context("Failed to create spatial index")?;

        stats.log_summary();
        pool.close().await;

        Ok(ImportReport {
            rows_read: stats.rows_read(),
            imported: stats.imported(),
            filtered_out: stats.filtered_out(),
            malformed: stats.skip_count(SkipReason::MalformedRow),
            db_path: opt.db_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
