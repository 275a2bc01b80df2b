//! Custom error types for the savings challenge
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Month;

/// Errors raised while converting between linear days and calendar dates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A linear day count outside `1..=year_length`
    #[error("day of year {day} is outside 1..={year_length}")]
    DayOfYearOutOfRange { day: u32, year_length: u32 },

    /// A month index past December
    #[error("month index {0} is outside 0..=11")]
    MonthIndexOutOfRange(u32),

    /// A date token that is not 4 or 5 characters long
    #[error("'{0}' is not a DDMMM date")]
    MalformedToken(String),

    /// A date token whose month code is not recognised
    #[error("unknown month code in '{0}'")]
    UnknownMonthCode(String),

    /// A day that does not exist in the given month
    #[error("{month} has no day {day} (max {max_day})")]
    InvalidDay { day: u32, month: Month, max_day: u32 },
}

/// The main error type for savings challenge operations
#[derive(Error, Debug)]
pub enum SavingsError {
    /// An argument that is neither a day count nor a DDMMM date
    #[error("incompatible date type: '{0}'")]
    IncompatibleDateType(String),

    /// A challenge day outside the challenge year
    #[error("days cannot exceed a year (day {day}, limit {limit})")]
    OutOfRange { day: u64, limit: u32 },

    /// Date normalisation errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SavingsError {
    /// Check if this is a range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<std::io::Error> for SavingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SavingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for savings challenge operations
pub type SavingsResult<T> = Result<T, SavingsError>;
