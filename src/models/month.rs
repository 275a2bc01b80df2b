//! Month of the year
//!
//! Months are identified on the command line by their three-letter uppercase
//! code (`JAN`..`DEC`) and printed by their full English name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A month of the Gregorian year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    #[serde(rename = "JAN")]
    January,
    #[serde(rename = "FEB")]
    February,
    #[serde(rename = "MAR")]
    March,
    #[serde(rename = "APR")]
    April,
    #[serde(rename = "MAY")]
    May,
    #[serde(rename = "JUN")]
    June,
    #[serde(rename = "JUL")]
    July,
    #[serde(rename = "AUG")]
    August,
    #[serde(rename = "SEP")]
    September,
    #[serde(rename = "OCT")]
    October,
    #[serde(rename = "NOV")]
    November,
    #[serde(rename = "DEC")]
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Look up a month by its 0-based index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Match an exact uppercase three-letter code such as `JAN`
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// 0-based month index
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Three-letter uppercase code
    pub const fn code(&self) -> &'static str {
        match self {
            Month::January => "JAN",
            Month::February => "FEB",
            Month::March => "MAR",
            Month::April => "APR",
            Month::May => "MAY",
            Month::June => "JUN",
            Month::July => "JUL",
            Month::August => "AUG",
            Month::September => "SEP",
            Month::October => "OCT",
            Month::November => "NOV",
            Month::December => "DEC",
        }
    }

    /// Full English name
    pub const fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Month::from_code("JAN"), Some(Month::January));
        assert_eq!(Month::from_code("DEC"), Some(Month::December));
        assert_eq!(Month::from_code("jan"), None);
        assert_eq!(Month::from_code("Jan"), None);
        assert_eq!(Month::from_code("FOO"), None);
    }

    #[test]
    fn test_numbering() {
        assert_eq!(Month::December.index(), 11);
        assert_eq!(Month::from_index(11), Some(Month::December));
        assert_eq!(Month::from_index(12), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::September.to_string(), "September");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Month::March).unwrap();
        assert_eq!(json, "\"MAR\"");

        let month: Month = serde_json::from_str("\"NOV\"").unwrap();
        assert_eq!(month, Month::November);
    }
}
