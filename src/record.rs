//! Typed EBird observation records.

use chrono::NaiveDate;
use geo::{point, Point};
use serde::Deserialize;

use crate::config::DATE_FORMAT;

/// One row of an EBird extract.
///
/// Field names follow the extract's column headers (serde renames); columns
/// the importer does not store are simply not listed here, `csv` ignores
/// them. Immutable once parsed: a record either passes every active filter
/// and becomes one output row, or it is skipped.
///
/// `OBSERVATION COUNT` stays a string because the extract uses `X` for
/// "present, count not specified". The observation date likewise stays a
/// string so junk dates survive a filterless import unchanged; use
/// [`EbirdRecord::observation_date`] for the parsed value.
#[derive(Debug, Clone, Deserialize)]
pub struct EbirdRecord {
    #[serde(rename = "GLOBAL UNIQUE IDENTIFIER")]
    pub guid: String,
    #[serde(rename = "COMMON NAME")]
    pub common_name: String,
    #[serde(rename = "SCIENTIFIC NAME")]
    pub scientific_name: String,
    #[serde(rename = "OBSERVATION COUNT")]
    pub observation_count: String,
    #[serde(rename = "BREEDING BIRD ATLAS CODE")]
    pub breeding_bird_atlas_code: String,
    #[serde(rename = "BREEDING BIRD ATLAS CATEGORY")]
    pub breeding_bird_atlas_category: String,
    #[serde(rename = "AGE/SEX")]
    pub age_sex: String,
    #[serde(rename = "LATITUDE")]
    pub latitude: f64,
    #[serde(rename = "LONGITUDE")]
    pub longitude: f64,
    #[serde(rename = "OBSERVATION DATE")]
    pub obs_date: String,
    #[serde(rename = "TIME OBSERVATIONS STARTED")]
    pub time_obs_started: String,
    #[serde(rename = "OBSERVER ID")]
    pub observer_id: String,
    #[serde(rename = "SAMPLING EVENT IDENTIFIER")]
    pub sampling_event_id: String,
    #[serde(rename = "PROTOCOL TYPE")]
    pub protocol_type: String,
    #[serde(rename = "DURATION MINUTES")]
    pub duration_minutes: Option<i64>,
    #[serde(rename = "EFFORT DISTANCE KM")]
    pub effort_distance_km: Option<f64>,
    #[serde(rename = "NUMBER OBSERVERS")]
    pub number_observers: Option<i64>,
    #[serde(rename = "ALL SPECIES REPORTED")]
    pub all_species_reported: i64,
    #[serde(rename = "APPROVED")]
    pub approved: i64,
    #[serde(rename = "SPECIES COMMENTS")]
    pub species_comments: String,
}

impl EbirdRecord {
    /// The observation date, if it parses as YYYY-MM-DD.
    pub fn observation_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.obs_date, DATE_FORMAT).ok()
    }

    /// The observation location as a lon/lat point (WGS 84).
    pub fn location(&self) -> Point<f64> {
        point!(x: self.longitude, y: self.latitude)
    }
}

/// A plausible record for unit tests in this crate.
#[cfg(test)]
pub(crate) fn sample_record() -> EbirdRecord {
    EbirdRecord {
        guid: "URN:CornellLabOfOrnithology:EBIRD:OBS100000001".to_string(),
        common_name: "Barn Swallow".to_string(),
        scientific_name: "Hirundo rustica".to_string(),
        observation_count: "2".to_string(),
        breeding_bird_atlas_code: String::new(),
        breeding_bird_atlas_category: String::new(),
        age_sex: String::new(),
        latitude: 45.5051,
        longitude: -122.6750,
        obs_date: "2021-06-15".to_string(),
        time_obs_started: "07:30:00".to_string(),
        observer_id: "obsr000001".to_string(),
        sampling_event_id: "S00000001".to_string(),
        protocol_type: "Traveling".to_string(),
        duration_minutes: Some(60),
        effort_distance_km: Some(1.5),
        number_observers: Some(1),
        all_species_reported: 1,
        approved: 1,
        species_comments: String::new(),
    }
}
