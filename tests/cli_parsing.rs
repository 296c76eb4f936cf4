// CLI surface tests: the documented options parse, defaults hold, and bad
// values are rejected by clap before the pipeline runs.

use clap::Parser;
use std::path::PathBuf;

use ebird2spatialite::Opt;

#[test]
fn test_input_is_required() {
    let result = Opt::try_parse_from(["ebird2spatialite"]);
    assert!(result.is_err(), "missing input path should be an error");
}

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["ebird2spatialite", "extract.txt.gz"]).unwrap();
    assert_eq!(opt.input, PathBuf::from("extract.txt.gz"));
    assert_eq!(opt.buffer, 1000.0);
    assert_eq!(opt.db_path, PathBuf::from("./ebird.sqlite"));
    assert_eq!(opt.spatialite_extension, "mod_spatialite");
    assert!(opt.near_location.is_none());
    assert!(opt.common_name_regex.is_none());
    assert!(opt.scientific_name_regex.is_none());
    assert!(opt.since_date.is_none());
    assert!(opt.before_date.is_none());
    assert!(opt.limit.is_none());
}

#[test]
fn test_full_filter_surface() {
    let opt = Opt::try_parse_from([
        "ebird2spatialite",
        "extract.txt.gz",
        "--near-location",
        "POINT (-122.6750 45.5051)",
        "--buffer",
        "2500",
        "--common-name-regex",
        "Swallow",
        "--scientific-name-regex",
        "Hirundo",
        "--since-date",
        "2020-01-01",
        "--before-date",
        "2021-12-31",
        "--limit",
        "1000",
        "--db-path",
        "out.sqlite",
    ])
    .unwrap();
    assert_eq!(
        opt.near_location.as_deref(),
        Some("POINT (-122.6750 45.5051)")
    );
    assert_eq!(opt.buffer, 2500.0);
    assert_eq!(opt.common_name_regex.as_deref(), Some("Swallow"));
    assert_eq!(opt.scientific_name_regex.as_deref(), Some("Hirundo"));
    assert_eq!(opt.since_date.as_deref(), Some("2020-01-01"));
    assert_eq!(opt.before_date.as_deref(), Some("2021-12-31"));
    assert_eq!(opt.limit, Some(1000));
    assert_eq!(opt.db_path, PathBuf::from("out.sqlite"));
}

#[test]
fn test_non_numeric_buffer_is_rejected() {
    let result = Opt::try_parse_from([
        "ebird2spatialite",
        "extract.txt.gz",
        "--buffer",
        "a-few-km",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_flag_is_rejected() {
    let result = Opt::try_parse_from(["ebird2spatialite", "extract.txt.gz", "--polygon", "x"]);
    assert!(result.is_err());
}
