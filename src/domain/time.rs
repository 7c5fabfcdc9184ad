//! Timestamp type for report payloads
//!
//! The API emits two shapes for time fields:
//! - `2024-01-16T23:40:53.123456` (fixed layout, no zone) for score updates
//! - `2024-01-16T23:40:53Z` (RFC 3339) for advisory data
//!
//! Both decode into a [`Timestamp`]; encoding always produces the fixed layout.

use crate::error::TimeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical layout used for encoding and for zone-less input
pub const CANONICAL_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Layout name reported when the RFC 3339 branch fails
const RFC3339_LAYOUT: &str = "RFC 3339";

/// A point in time decoded from an API payload
///
/// The offset of RFC 3339 input is not retained: the wall-clock value is kept
/// and re-encoded without a zone marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Returns the zero instant, `0001-01-01T00:00:00`
    pub fn zero() -> Self {
        let instant = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Self(instant)
    }

    /// Returns true if this is the zero instant
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Parses a timestamp in either accepted layout
    ///
    /// Surrounding `"` characters are ignored and the literal `null` yields
    /// the zero instant.
    pub fn parse(input: &str) -> Result<Self, TimeError> {
        let s = input.trim_matches('"');
        if s == "null" {
            return Ok(Self::zero());
        }

        if s.contains('Z') {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| Self(dt.naive_local()))
                .map_err(|_| TimeError::malformed(s, RFC3339_LAYOUT))
        } else {
            if !has_fixed_fraction(s) {
                return Err(TimeError::malformed(s, CANONICAL_LAYOUT));
            }
            NaiveDateTime::parse_from_str(s, CANONICAL_LAYOUT)
                .map(Self)
                .map_err(|_| TimeError::malformed(s, CANONICAL_LAYOUT))
        }
    }

    /// Formats the timestamp in the canonical layout, without quotes
    pub fn to_canonical(&self) -> String {
        self.0.format(CANONICAL_LAYOUT).to_string()
    }

    /// Returns the wall-clock value
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Interprets the wall-clock value as UTC
    pub fn and_utc(&self) -> DateTime<Utc> {
        self.0.and_utc()
    }
}

/// True if the value ends in a `.` followed by exactly six digits
fn has_fixed_fraction(s: &str) -> bool {
    s.rsplit_once('.')
        .is_some_and(|(_, frac)| frac.len() == 6 && frac.bytes().all(|b| b.is_ascii_digit()))
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.naive_utc())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_LAYOUT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical())
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a timestamp string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Timestamp::zero())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Timestamp::zero())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
