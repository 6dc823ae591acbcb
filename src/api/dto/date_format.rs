//! Lenient parsing of event dates supplied by clients.
//!
//! Accepted forms, tried in order:
//!
//! - `2018-10-18`
//! - `2018-10-18T09:30:00` (optionally with fractional seconds, or a space
//!   instead of `T`)
//! - `2018-10-18T09:30:00Z` / `2018-10-18T09:30:00+02:00` (RFC 3339; the
//!   offset is dropped, keeping the wall-clock time)

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("The value '{0}' is not a valid date.")]
    Invalid(String),
}

/// Parses `input` into a naive timestamp.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, DateParseError> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::default()));
    }

    for format in NAIVE_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(value);
        }
    }

    DateTime::parse_from_rfc3339(input)
        .map(|value| value.naive_local())
        .map_err(|_| DateParseError::Invalid(input.to_string()))
}

/// Parses `input` and keeps only its calendar day.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    parse_date_time(input).map(|value| value.date())
}

/// Serde adapter for `#[serde(deserialize_with = "...")]` on event dates.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_time(&raw).map_err(serde::de::Error::custom)
}
