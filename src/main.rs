//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ebird2spatialite` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ebird2spatialite::initialization::init_logger_with;
use ebird2spatialite::{run_import, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    let log_level = opt.log_level.clone();
    let log_format = opt.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_import(opt).await {
        Ok(report) => {
            println!(
                "✅ Imported {} of {} record{} ({} filtered out, {} malformed) in {:.1}s",
                report.imported,
                report.rows_read,
                if report.rows_read == 1 { "" } else { "s" },
                report.filtered_out,
                report.malformed,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.db_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("ebird2spatialite error: {:#}", e);
            process::exit(1);
        }
    }
}
