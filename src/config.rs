//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, limits)
//! - CLI option types and parsing

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Default output database path.
pub const DEFAULT_DB_PATH: &str = "./ebird.sqlite";

/// Default buffer around `--near-location`, in metres.
pub const DEFAULT_BUFFER_METRES: f64 = 1000.0;

/// Default SpatiaLite loadable extension name.
///
/// SQLite resolves the platform suffix (`.so`, `.dylib`, `.dll`) itself, so
/// the bare module name works everywhere as long as the extension is on the
/// loader search path. Use `--spatialite-extension` to point at an explicit
/// file otherwise.
pub const DEFAULT_SPATIALITE_EXTENSION: &str = "mod_spatialite";

/// Date format used by EBird extracts and the `--since-date`/`--before-date`
/// options.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Emit a progress log line every this many input rows.
pub const PROGRESS_LOG_INTERVAL_ROWS: u64 = 250_000;

/// SRID for observation geometries (WGS 84).
pub const SRID_WGS84: i32 = 4326;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// Only the input path is required; every filter option is optional and an
/// absent filter imposes no constraint.
///
/// # Examples
///
/// ```bash
/// # Import everything
/// ebird2spatialite ebd_relMay-2024.txt.gz
///
/// # Swallows seen within 5km of downtown Portland since 2020
/// ebird2spatialite ebd_relMay-2024.txt.gz \
///     --near-location "POINT (-122.6750 45.5051)" --buffer 5000 \
///     --common-name-regex Swallow --since-date 2020-01-01
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ebird2spatialite",
    about = "Filters an EBird extract and loads the matches into a SpatiaLite database."
)]
pub struct Opt {
    /// Path to the gzipped EBird extract
    #[arg(value_parser)]
    pub input: PathBuf,

    /// Select records observed on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub before_date: Option<String>,

    /// Select records observed on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since_date: Option<String>,

    /// Location around which to select records, as a WKT point,
    /// e.g. "POINT (-122.6750 45.5051)" (longitude first)
    #[arg(long)]
    pub near_location: Option<String>,

    /// Buffer around --near-location, in metres
    #[arg(long, default_value_t = DEFAULT_BUFFER_METRES, allow_negative_numbers = true)]
    pub buffer: f64,

    /// Select records whose common name matches this regex
    #[arg(long)]
    pub common_name_regex: Option<String>,

    /// Select records whose scientific name matches this regex
    #[arg(long)]
    pub scientific_name_regex: Option<String>,

    /// Limit the number of rows read from the extract (for debugging)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Database path (SQLite file)
    #[arg(long, value_parser, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// SpatiaLite loadable extension name or path
    #[arg(long, default_value = DEFAULT_SPATIALITE_EXTENSION)]
    pub spatialite_extension: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
