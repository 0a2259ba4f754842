//! Parsing of the countdown target
//!
//! Targets are ISO-8601 strings. A string with an explicit offset pins its own
//! instant; one without an offset is placed on the timeline according to the
//! configured [`TimeZoneMode`].

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use countdown_types::TimeZoneMode;

use crate::error::CountdownError;

/// Offset-less date-time layouts, tried in order
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying layouts that RFC 3339 does not cover, such as a missing
/// seconds field or a space separator
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fixed instant a countdown runs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInstant {
    instant: DateTime<Utc>,
    input: String,
}

impl TargetInstant {
    /// Parse an ISO-8601 target string.
    ///
    /// Rejects anything that does not name a real instant; the countdown never
    /// runs against a garbage target.
    pub fn parse(input: &str, mode: TimeZoneMode) -> Result<Self, CountdownError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CountdownError::InvalidTarget {
                input: input.to_string(),
                reason: "target is empty".to_string(),
            });
        }

        if let Some(with_offset) = parse_with_offset(trimmed) {
            return Ok(Self {
                instant: with_offset.with_timezone(&Utc),
                input: trimmed.to_string(),
            });
        }

        let naive = parse_naive(trimmed).ok_or_else(|| CountdownError::InvalidTarget {
            input: trimmed.to_string(),
            reason: "expected an ISO-8601 date-time such as 2025-05-13T18:00:00".to_string(),
        })?;

        Ok(Self {
            instant: resolve(naive, mode, trimmed)?,
            input: trimmed.to_string(),
        })
    }

    /// Target from an already resolved instant
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            input: instant.to_rfc3339(),
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn epoch_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// The string this target was parsed from
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for TargetInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instant.to_rfc3339())
    }
}

fn parse_with_offset(input: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(input, format).ok())
    })
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn resolve(
    naive: NaiveDateTime,
    mode: TimeZoneMode,
    input: &str,
) -> Result<DateTime<Utc>, CountdownError> {
    match mode {
        TimeZoneMode::Utc => Ok(Utc.from_utc_datetime(&naive)),
        TimeZoneMode::FixedOffset(seconds) => {
            let offset =
                FixedOffset::east_opt(seconds).ok_or(CountdownError::InvalidOffset { seconds })?;
            offset
                .from_local_datetime(&naive)
                .single()
                .map(|instant| instant.with_timezone(&Utc))
                .ok_or_else(|| CountdownError::OutOfRange {
                    input: input.to_string(),
                })
        }
        // A DST fold yields two candidates; take the earlier one.
        TimeZoneMode::Local => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|instant| instant.with_timezone(&Utc))
            .ok_or_else(|| CountdownError::NonexistentLocalTime {
                input: input.to_string(),
            }),
    }
}
