//! Why a [`Timestamp`] couldn't be built.
//!
//! Strings go through chrono's RFC 3339 parser, so a parse failure keeps
//! chrono's [`ParseError`] as its source. Unix timestamps only fail when
//! chrono can't represent the instant.
//!
//! [`Timestamp`]: super::Timestamp

use super::MIN_TIMESTAMP_LENGTH;
use chrono::ParseError;
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimestampParseError {
    kind: TimestampParseErrorType,
    source: Option<ParseError>,
}

impl TimestampParseError {
    pub(crate) const fn too_short(len: usize) -> Self {
        Self {
            kind: TimestampParseErrorType::Format { len },
            source: None,
        }
    }

    pub(crate) const fn parsing(source: ParseError) -> Self {
        Self {
            kind: TimestampParseErrorType::Parsing,
            source: Some(source),
        }
    }

    pub(crate) const fn out_of_range(value: i64) -> Self {
        Self {
            kind: TimestampParseErrorType::Range { value },
            source: None,
        }
    }

    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &TimestampParseErrorType {
        &self.kind
    }

    /// The chrono error behind a [`TimestampParseErrorType::Parsing`] failure.
    pub const fn chrono_error(&self) -> Option<ParseError> {
        self.source
    }

    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub const fn into_parts(self) -> (TimestampParseErrorType, Option<ParseError>) {
        (self.kind, self.source)
    }
}

impl Display for TimestampParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.kind, self.source) {
            (TimestampParseErrorType::Format { len }, _) => write!(
                f,
                "timestamp is {len} characters long, a datetime needs at least {MIN_TIMESTAMP_LENGTH}"
            ),
            (TimestampParseErrorType::Parsing, Some(source)) => {
                write!(f, "timestamp is not an RFC 3339 datetime: {source}")
            }
            (TimestampParseErrorType::Parsing, None) => {
                f.write_str("timestamp is not an RFC 3339 datetime")
            }
            (TimestampParseErrorType::Range { value }, _) => {
                write!(f, "unix timestamp {value} is out of chrono's range")
            }
        }
    }
}

impl Error for TimestampParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// Type of [`TimestampParseError`] that occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TimestampParseErrorType {
    /// Input is shorter than `YYYY-MM-DDTHH:MM:SS+00:00`.
    Format { len: usize },
    Parsing,
    /// Unix timestamp, in the unit it was given in, that chrono can't hold.
    Range { value: i64 },
}

#[cfg(test)]
mod tests {
    use super::{TimestampParseError, TimestampParseErrorType};
    use static_assertions::assert_impl_all;
    use std::{error::Error, fmt::Debug};

    assert_impl_all!(TimestampParseError: Clone, Copy, Debug, Error, Eq, Send, Sync);

    #[test]
    fn too_short_reports_length() {
        let err = TimestampParseError::too_short(10);
        assert_eq!(
            err.to_string(),
            "timestamp is 10 characters long, a datetime needs at least 25"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn parsing_keeps_chrono_error() {
        let inner = chrono::DateTime::parse_from_rfc3339("2021-01-01 01:01:01 and more")
            .unwrap_err();
        let err = TimestampParseError::parsing(inner);

        assert_eq!(err.chrono_error(), Some(inner));
        assert!(err.source().is_some());
        assert!(err
            .to_string()
            .starts_with("timestamp is not an RFC 3339 datetime: "));
    }

    #[test]
    fn out_of_range_keeps_value() {
        let (kind, source) = TimestampParseError::out_of_range(i64::MAX).into_parts();
        assert_eq!(kind, TimestampParseErrorType::Range { value: i64::MAX });
        assert!(source.is_none());
    }
}
