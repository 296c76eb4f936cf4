//! Error types and per-run statistics.
//!
//! This module defines the error enums used throughout the application and
//! the counters that track why individual rows were skipped.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::SetLoggerError;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error. Also covers failures to load the SpatiaLite
    /// extension, which surface on connect.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for invalid filter options.
///
/// All of these are user errors: the run is rejected before any input is
/// read, so the message must say which option was wrong and why.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The `--near-location` value is not parseable WKT.
    #[error("Invalid --near-location WKT: {0}")]
    InvalidLocation(String),

    /// The `--near-location` WKT parsed, but is not a point. Polygon
    /// localities are not supported.
    #[error("--near-location must be a POINT geometry, got: {0}")]
    NotAPoint(String),

    /// The `--buffer` value is not a usable distance.
    #[error("--buffer must be a finite, non-negative number of metres, got {0}")]
    InvalidBuffer(f64),

    /// A name filter is not a valid regular expression.
    #[error("Invalid --{option} pattern: {source}")]
    InvalidRegex {
        option: &'static str,
        source: regex::Error,
    },

    /// A date bound is not a valid YYYY-MM-DD date.
    #[error("Invalid --{option} value '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        option: &'static str,
        value: String,
    },

    /// The date bounds select an empty range.
    #[error("--since-date {since} is after --before-date {before}")]
    InvertedDateRange { since: NaiveDate, before: NaiveDate },
}

/// Reasons an input row did not make it into the database.
///
/// One reason per row: evaluation stops at the first failing predicate, so
/// the counts partition the skipped rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// The row could not be parsed into an observation record.
    MalformedRow,
    /// Observed before the `--since-date` bound.
    ObservedBeforeSince,
    /// Observed after the `--before-date` bound.
    ObservedAfterBefore,
    /// A date filter is active but the observation date is unparseable.
    UnparseableDate,
    /// Outside the buffer around `--near-location`.
    OutsideBuffer,
    /// Common name did not match `--common-name-regex`.
    CommonNameMismatch,
    /// Scientific name did not match `--scientific-name-regex`.
    ScientificNameMismatch,
    /// The record passed every filter but the insert failed.
    InsertError,
}

impl SkipReason {
    /// Returns a human-readable string representation of the skip reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MalformedRow => "malformed row",
            SkipReason::ObservedBeforeSince => "observed before --since-date",
            SkipReason::ObservedAfterBefore => "observed after --before-date",
            SkipReason::UnparseableDate => "unparseable observation date",
            SkipReason::OutsideBuffer => "outside --near-location buffer",
            SkipReason::CommonNameMismatch => "common name mismatch",
            SkipReason::ScientificNameMismatch => "scientific name mismatch",
            SkipReason::InsertError => "insert error",
        }
    }

    /// Whether this reason is a filter rejection, as opposed to an input or
    /// database problem.
    pub fn is_filter_rejection(&self) -> bool {
        !matches!(self, SkipReason::MalformedRow | SkipReason::InsertError)
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-run import statistics.
///
/// The pipeline is a single sequential pass, so plain counters are enough;
/// all reasons are initialized to zero so the end-of-run summary can iterate
/// them exhaustively.
pub struct ImportStats {
    rows_read: u64,
    imported: u64,
    skipped: HashMap<SkipReason, u64>,
}

impl ImportStats {
    pub fn new() -> Self {
        let mut skipped = HashMap::new();
        for reason in SkipReason::iter() {
            skipped.insert(reason, 0);
        }
        ImportStats {
            rows_read: 0,
            imported: 0,
            skipped,
        }
    }

    pub fn record_row_read(&mut self) {
        self.rows_read += 1;
    }

    pub fn record_imported(&mut self) {
        self.imported += 1;
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    pub fn imported(&self) -> u64 {
        self.imported
    }

    pub fn skip_count(&self, reason: SkipReason) -> u64 {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    /// Rows rejected by an active filter predicate.
    pub fn filtered_out(&self) -> u64 {
        SkipReason::iter()
            .filter(|r| r.is_filter_rejection())
            .map(|r| self.skip_count(r))
            .sum()
    }

    /// Logs a per-reason breakdown of skipped rows. Reasons that never fired
    /// are omitted; malformed rows get a warning since they may indicate a
    /// corrupt extract.
    pub fn log_summary(&self) {
        for reason in SkipReason::iter() {
            let count = self.skip_count(reason);
            if count == 0 {
                continue;
            }
            match reason {
                SkipReason::MalformedRow | SkipReason::InsertError => {
                    log::warn!("{count} rows skipped: {reason}");
                }
                _ => log::info!("{count} rows skipped: {reason}"),
            }
        }
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}
