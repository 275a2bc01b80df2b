//! Year-less calendar date
//!
//! A `CompactDate` is a day/month pair. Whether it exists depends on the
//! calendar it is checked against, so construction goes through
//! [`Calendar`](super::Calendar) rather than through this type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Month;
use crate::display::ordinal_suffix;

/// A day of the month paired with a month, without a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompactDate {
    /// Month of the year
    pub month: Month,
    /// Day within the month (1-based)
    pub day: u32,
}

impl CompactDate {
    /// Pair a day with a month without checking it against a calendar
    pub const fn new(day: u32, month: Month) -> Self {
        Self { day, month }
    }

    /// Render in the `DDMMM` form accepted on the command line
    pub fn token(&self) -> String {
        format!("{:02}{}", self.day, self.month.code())
    }
}

impl fmt::Display for CompactDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.day, ordinal_suffix(self.day), self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_form() {
        assert_eq!(CompactDate::new(26, Month::January).to_string(), "26th January");
        assert_eq!(CompactDate::new(1, Month::March).to_string(), "1st March");
        assert_eq!(CompactDate::new(22, Month::June).to_string(), "22nd June");
        assert_eq!(CompactDate::new(23, Month::July).to_string(), "23rd July");
        assert_eq!(CompactDate::new(11, Month::May).to_string(), "11th May");
    }

    #[test]
    fn test_token() {
        assert_eq!(CompactDate::new(1, Month::January).token(), "01JAN");
        assert_eq!(CompactDate::new(29, Month::February).token(), "29FEB");
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let jan_31 = CompactDate::new(31, Month::January);
        let feb_1 = CompactDate::new(1, Month::February);
        assert!(jan_31 < feb_1);
    }
}
