//! ISO 8601 timestamps as Discord sends them.
//!
//! Discord emits two ISO 8601 formats: with microseconds
//! (`2021-01-01T01:01:01.010000+00:00`) and without
//! (`2021-01-01T01:01:01+00:00`). Both parse into the same [`Timestamp`];
//! serialization always writes microseconds.

mod error;

pub use self::error::{TimestampParseError, TimestampParseErrorType};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Minimum length of an ISO 8601 datetime without microseconds.
///
/// Example: `2021-01-01T01:01:01+00:00` (25 characters).
const MIN_TIMESTAMP_LENGTH: usize = 25;

/// Number of microseconds in a second.
const MICROSECONDS_PER_SECOND: i64 = 1_000_000;

/// A point in time, stored in UTC.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse a timestamp from an ISO 8601 datetime string.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Format`] if the string is too short
    /// to be a datetime, or [`TimestampParseErrorType::Parsing`] if it isn't
    /// valid RFC 3339.
    pub fn parse(datetime: &str) -> Result<Self, TimestampParseError> {
        if datetime.len() < MIN_TIMESTAMP_LENGTH {
            return Err(TimestampParseError::too_short(datetime.len()));
        }

        DateTime::parse_from_rfc3339(datetime)
            .map(|parsed| Self(parsed.with_timezone(&Utc)))
            .map_err(TimestampParseError::parsing)
    }

    /// Create a timestamp from a Unix timestamp with seconds precision.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Range`] if the value is outside of
    /// what chrono can represent.
    pub fn from_secs(unix_seconds: i64) -> Result<Self, TimestampParseError> {
        DateTime::from_timestamp(unix_seconds, 0)
            .map(Self)
            .ok_or(TimestampParseError::out_of_range(unix_seconds))
    }

    /// Create a timestamp from a Unix timestamp with microseconds precision.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Range`] if the value is outside of
    /// what chrono can represent.
    pub fn from_micros(unix_microseconds: i64) -> Result<Self, TimestampParseError> {
        let secs = unix_microseconds.div_euclid(MICROSECONDS_PER_SECOND);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nanos = (unix_microseconds.rem_euclid(MICROSECONDS_PER_SECOND) * 1_000) as u32;

        DateTime::from_timestamp(secs, nanos)
            .map(Self)
            .ok_or(TimestampParseError::out_of_range(unix_microseconds))
    }

    /// Total number of seconds since the Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0.timestamp()
    }

    /// Total number of microseconds since the Unix epoch.
    pub fn as_micros(self) -> i64 {
        self.0.timestamp_micros()
    }

    /// The underlying chrono datetime.
    pub const fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Create an ISO 8601 display formatter.
    pub const fn iso_8601(&self) -> TimestampIso8601Display<'_> {
        TimestampIso8601Display {
            inner: self,
            with_microseconds: true,
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.iso_8601(), f)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&'_ str> for Timestamp {
    type Error = TimestampParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("an ISO 8601 datetime string")
            }

            fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
                Timestamp::parse(v).map_err(DeError::custom)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.iso_8601())
    }
}

/// Display wrapper returned by [`Timestamp::iso_8601`].
///
/// Writes `+00:00` rather than `Z`, matching what Discord sends.
#[derive(Debug)]
pub struct TimestampIso8601Display<'a> {
    inner: &'a Timestamp,
    with_microseconds: bool,
}

impl<'a> TimestampIso8601Display<'a> {
    /// Get the inner timestamp reference.
    pub const fn get(&self) -> &'a Timestamp {
        self.inner
    }

    /// Whether to include microseconds in the output.
    #[must_use]
    pub const fn with_microseconds(mut self, with_microseconds: bool) -> Self {
        self.with_microseconds = with_microseconds;
        self
    }
}

impl Display for TimestampIso8601Display<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let format = if self.with_microseconds {
            SecondsFormat::Micros
        } else {
            SecondsFormat::Secs
        };

        f.write_str(&self.inner.0.to_rfc3339_opts(format, false))
    }
}

impl Serialize for TimestampIso8601Display<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Timestamp, TimestampParseErrorType};
    use serde_test::Token;
    use std::str::FromStr;

    #[test]
    fn parse_with_microseconds() {
        let ts = Timestamp::from_str("2020-02-02T02:02:02.020000+00:00").unwrap();
        assert_eq!(ts.as_micros(), 1_580_608_922_020_000);
    }

    #[test]
    fn parse_without_microseconds() {
        let ts = Timestamp::from_str("2021-01-01T01:01:01+00:00").unwrap();
        assert_eq!(ts.as_secs(), 1_609_462_861);
    }

    #[test]
    fn parse_normalizes_offset() {
        let utc = Timestamp::parse("2021-01-01T01:01:01+00:00").unwrap();
        let shifted = Timestamp::parse("2021-01-01T03:01:01+02:00").unwrap();
        assert_eq!(utc, shifted);
    }

    #[test]
    fn parse_too_short() {
        let err = Timestamp::from_str("2021-01-01").unwrap_err();
        assert_eq!(err.kind(), &TimestampParseErrorType::Format { len: 10 });
    }

    #[test]
    fn parse_garbage() {
        let err = Timestamp::from_str("2021-01-01 01:01:01 and more").unwrap_err();
        assert!(matches!(err.kind(), TimestampParseErrorType::Parsing));
    }

    #[test]
    fn serializes_with_microseconds() {
        let ts = Timestamp::from_str("2021-08-10T11:16:37.020000+00:00").unwrap();
        serde_test::assert_tokens(&ts, &[Token::Str("2021-08-10T11:16:37.020000+00:00")]);
    }

    #[test]
    fn display_without_microseconds() {
        let ts = Timestamp::from_secs(1_580_608_922).unwrap();
        assert_eq!(
            ts.iso_8601().with_microseconds(false).to_string(),
            "2020-02-02T02:02:02+00:00"
        );
        assert_eq!(ts.to_string(), "2020-02-02T02:02:02.000000+00:00");
    }

    #[test]
    fn from_micros_and_back() {
        let ts = Timestamp::from_micros(1_628_594_197_020_000).unwrap();
        assert_eq!(ts.as_micros(), 1_628_594_197_020_000);
        assert_eq!(ts.to_string(), "2021-08-10T11:16:37.020000+00:00");
    }

    #[test]
    fn from_secs_out_of_range() {
        let err = Timestamp::from_secs(i64::MAX).unwrap_err();
        assert_eq!(err.kind(), &TimestampParseErrorType::Range { value: i64::MAX });
    }
}
