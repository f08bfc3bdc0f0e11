//! ISO-8601 timestamp parsing and canonical formatting.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Result, TrackerError};

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Parses an ISO-8601 UTC timestamp, with or without fractional seconds.
pub fn parse(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, INPUT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TrackerError::malformed(format!("unparseable timestamp {raw:?}")))
}

/// Formats a timestamp in the canonical output form: six-digit microseconds,
/// rounded to nearest.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(CANONICAL_FORMAT).to_string()
}

/// Converts a parsed timestamp to seconds-since-epoch, the unit the tracking
/// engine operates on.
pub fn to_epoch_seconds(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp() as f64 + ts.timestamp_subsec_nanos() as f64 / 1e9
}
