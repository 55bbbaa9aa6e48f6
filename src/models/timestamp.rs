//! Local date-time parsing for entity timestamps.
//!
//! Accepts `2022-01-03T00:00:00` (optionally with fractional seconds) and the
//! minute-precision `2022-01-03T00:00` that browser date-time inputs send.
//! Serialization uses chrono's default ISO form.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

const WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, WITH_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, WITHOUT_SECONDS))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| {
        serde::de::Error::custom(format!("invalid date-time '{raw}' (expected ISO-8601): {e}"))
    })
}
