//! Workout timestamps and their canonical text form

use crate::error::TimestampError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A workout date, accepted as an ISO 8601 date or datetime
///
/// Dates without a time become midnight. The canonical text is
/// `YYYY-MM-DDTHH:MM:SS`, followed by a fraction only when it is non-zero and
/// by a `+HH:MM` offset only when the input carried one. Canonical strings of
/// the same kind sort chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkoutTimestamp {
    /// No offset given
    Naive(NaiveDateTime),
    /// Explicit offset (`Z` or `+HH:MM`)
    Offset(DateTime<FixedOffset>),
}

impl WorkoutTimestamp {
    /// Render the canonical text form
    pub fn canonical(&self) -> String {
        match self {
            Self::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            Self::Offset(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f%:z").to_string(),
        }
    }
}

impl FromStr for WorkoutTimestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimestampError::Empty);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Offset(dt));
        }

        for format in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self::Naive(dt));
            }
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self::Naive)
            .ok_or_else(|| TimestampError::Invalid(s.to_string()))
    }
}

impl TryFrom<String> for WorkoutTimestamp {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkoutTimestamp> for String {
    fn from(ts: WorkoutTimestamp) -> Self {
        ts.canonical()
    }
}

impl fmt::Display for WorkoutTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(s: &str) -> String {
        s.parse::<WorkoutTimestamp>().unwrap().canonical()
    }

    #[test]
    fn test_date_only_becomes_midnight() {
        assert_eq!(canon("2024-01-01"), "2024-01-01T00:00:00");
    }

    #[test]
    fn test_naive_datetime() {
        assert_eq!(canon("2024-03-05T07:30:00"), "2024-03-05T07:30:00");
        assert_eq!(canon("2024-03-05 07:30:15"), "2024-03-05T07:30:15");
        assert_eq!(canon("2024-03-05T07:30"), "2024-03-05T07:30:00");
    }

    #[test]
    fn test_fraction_kept_when_nonzero() {
        assert_eq!(canon("2024-03-05T07:30:00.500"), "2024-03-05T07:30:00.500");
        assert_eq!(canon("2024-03-05T07:30:00.000"), "2024-03-05T07:30:00");
    }

    #[test]
    fn test_offset_datetime() {
        assert_eq!(canon("2024-03-05T07:30:00Z"), "2024-03-05T07:30:00+00:00");
        assert_eq!(
            canon("2024-03-05T07:30:00+02:00"),
            "2024-03-05T07:30:00+02:00"
        );
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(canon("  2024-02-10 "), "2024-02-10T00:00:00");
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!("".parse::<WorkoutTimestamp>(), Err(TimestampError::Empty));
        assert!(matches!(
            "2024-13-01".parse::<WorkoutTimestamp>(),
            Err(TimestampError::Invalid(_))
        ));
        assert!("next tuesday".parse::<WorkoutTimestamp>().is_err());
    }

    #[test]
    fn test_canonical_order_is_chronological() {
        let mut dates = vec![canon("2024-03-05"), canon("2024-01-01"), canon("2024-02-10T23:59")];
        dates.sort();
        assert_eq!(
            dates,
            vec![
                "2024-01-01T00:00:00",
                "2024-02-10T23:59:00",
                "2024-03-05T00:00:00"
            ]
        );
    }
}
