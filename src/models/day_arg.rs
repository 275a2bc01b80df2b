//! Command-line day arguments
//!
//! Each positional argument is either a plain day count or a `DDMMM` date.
//! The classification happens once, here, and the rest of the program works
//! on the resulting variant.

use serde::Serialize;
use std::fmt;

use super::{Calendar, CompactDate};
use crate::error::{SavingsError, SavingsResult};

/// A day given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DayArg {
    /// A number of days
    Numeric(u64),
    /// A calendar date
    Calendar(CompactDate),
}

impl DayArg {
    /// Classify a raw argument
    ///
    /// Digit strings too long for a `u64` saturate and are rejected later by
    /// range validation. `calendars` are tried in order for date tokens, so a
    /// `29FEB` that only exists in a later leap year is still accepted.
    pub fn classify(raw: &str, calendars: &[Calendar]) -> SavingsResult<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::Numeric(raw.parse().unwrap_or(u64::MAX)));
        }

        for calendar in calendars {
            match calendar.parse_compact(raw) {
                Ok(date) => return Ok(Self::Calendar(date)),
                Err(err) => tracing::debug!(%raw, %err, leap = calendar.is_leap(), "not a date"),
            }
        }

        Err(SavingsError::IncompatibleDateType(raw.to_string()))
    }
}

impl fmt::Display for DayArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(days) => write!(f, "{}", days),
            Self::Calendar(date) => write!(f, "{}", date.token()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    const COMMON: [Calendar; 1] = [Calendar::common()];

    #[test]
    fn test_numeric() {
        assert_eq!(DayArg::classify("10", &COMMON).unwrap(), DayArg::Numeric(10));
        assert_eq!(DayArg::classify("0", &COMMON).unwrap(), DayArg::Numeric(0));
        assert_eq!(
            DayArg::classify("99999999999999999999999", &COMMON).unwrap(),
            DayArg::Numeric(u64::MAX)
        );
    }

    #[test]
    fn test_calendar() {
        let arg = DayArg::classify("26JAN", &COMMON).unwrap();
        assert_eq!(arg, DayArg::Calendar(CompactDate::new(26, Month::January)));
        assert_eq!(arg.to_string(), "26JAN");
    }

    #[test]
    fn test_incompatible() {
        for raw in ["", "-5", "1.5", "32JAN", "1FOO", "26jan", "tomorrow"] {
            let err = DayArg::classify(raw, &COMMON).unwrap_err();
            assert!(
                matches!(err, SavingsError::IncompatibleDateType(_)),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_leap_day_falls_back_to_later_calendar() {
        assert!(DayArg::classify("29FEB", &COMMON).is_err());

        let calendars = [Calendar::common(), Calendar::leap()];
        assert_eq!(
            DayArg::classify("29FEB", &calendars).unwrap(),
            DayArg::Calendar(CompactDate::new(29, Month::February))
        );
    }
}
