//! Record filtering.
//!
//! A [`RecordFilter`] holds the validated filter options for a run and
//! evaluates each parsed record against them. Filters combine with logical
//! AND; an absent filter imposes no constraint. Evaluation stops at the
//! first failing predicate and reports it as the skip reason.

use chrono::NaiveDate;
use geo::{HaversineDistance, Point};
use regex::Regex;
use wkt::TryFromWkt;

use crate::config::{Opt, DATE_FORMAT};
use crate::error_handling::{FilterError, SkipReason};
use crate::record::EbirdRecord;

/// Outcome of evaluating one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Skip(SkipReason),
}

/// The validated filter set for one run. Fixed for the duration of the run.
#[derive(Debug)]
pub struct RecordFilter {
    /// Inclusion region: a point and a buffer radius in metres.
    near: Option<(Point<f64>, f64)>,
    common_name: Option<Regex>,
    scientific_name: Option<Regex>,
    since_date: Option<NaiveDate>,
    before_date: Option<NaiveDate>,
}

impl RecordFilter {
    /// Builds a filter from the raw CLI options, validating every value.
    pub fn from_opt(opt: &Opt) -> Result<Self, FilterError> {
        let near = match opt.near_location.as_deref() {
            Some(text) => Some((parse_wkt_point(text)?, validate_buffer(opt.buffer)?)),
            None => None,
        };

        let common_name = opt
            .common_name_regex
            .as_deref()
            .map(|pattern| compile_name_regex("common-name-regex", pattern))
            .transpose()?;
        let scientific_name = opt
            .scientific_name_regex
            .as_deref()
            .map(|pattern| compile_name_regex("scientific-name-regex", pattern))
            .transpose()?;

        let since_date = opt
            .since_date
            .as_deref()
            .map(|value| parse_bound_date("since-date", value))
            .transpose()?;
        let before_date = opt
            .before_date
            .as_deref()
            .map(|value| parse_bound_date("before-date", value))
            .transpose()?;

        if let (Some(since), Some(before)) = (since_date, before_date) {
            if since > before {
                return Err(FilterError::InvertedDateRange { since, before });
            }
        }

        Ok(RecordFilter {
            near,
            common_name,
            scientific_name,
            since_date,
            before_date,
        })
    }

    /// Evaluates every active predicate against `record`.
    ///
    /// Date bounds are inclusive on both ends. When a date bound is active,
    /// records whose observation date does not parse are skipped: an
    /// imported record must provably satisfy every active predicate. The
    /// spatial predicate is inclusive of the buffer boundary, so a zero
    /// buffer admits exactly the configured point.
    pub fn evaluate(&self, record: &EbirdRecord) -> Verdict {
        if self.since_date.is_some() || self.before_date.is_some() {
            let Some(date) = record.observation_date() else {
                return Verdict::Skip(SkipReason::UnparseableDate);
            };
            if let Some(since) = self.since_date {
                if date < since {
                    return Verdict::Skip(SkipReason::ObservedBeforeSince);
                }
            }
            if let Some(before) = self.before_date {
                if date > before {
                    return Verdict::Skip(SkipReason::ObservedAfterBefore);
                }
            }
        }

        if let Some((centre, buffer)) = &self.near {
            if centre.haversine_distance(&record.location()) > *buffer {
                return Verdict::Skip(SkipReason::OutsideBuffer);
            }
        }

        if let Some(regex) = &self.common_name {
            if !regex.is_match(&record.common_name) {
                return Verdict::Skip(SkipReason::CommonNameMismatch);
            }
        }
        if let Some(regex) = &self.scientific_name {
            if !regex.is_match(&record.scientific_name) {
                return Verdict::Skip(SkipReason::ScientificNameMismatch);
            }
        }

        Verdict::Accept
    }
}

fn parse_wkt_point(text: &str) -> Result<Point<f64>, FilterError> {
    let geometry = geo::Geometry::<f64>::try_from_wkt_str(text)
        .map_err(|e| FilterError::InvalidLocation(e.to_string()))?;
    Point::try_from(geometry).map_err(|_| FilterError::NotAPoint(text.to_string()))
}

fn validate_buffer(buffer: f64) -> Result<f64, FilterError> {
    if !buffer.is_finite() || buffer < 0.0 {
        return Err(FilterError::InvalidBuffer(buffer));
    }
    Ok(buffer)
}

fn compile_name_regex(option: &'static str, pattern: &str) -> Result<Regex, FilterError> {
    Regex::new(pattern).map_err(|source| FilterError::InvalidRegex { option, source })
}

fn parse_bound_date(option: &'static str, value: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FilterError::InvalidDate {
        option,
        value: value.to_string(),
    })
}
