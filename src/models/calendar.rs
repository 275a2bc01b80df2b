//! Month-length tables and date normalisation
//!
//! A `Calendar` is an immutable month-length table for either a common or a
//! leap year. Conversions between linear day-of-year counts and
//! [`CompactDate`]s always go through an explicit calendar, so the length of
//! February is decided by the year being asked about rather than by earlier
//! calls.

use super::{CompactDate, Month};
use crate::error::CalendarError;

/// Month lengths of a common (non-leap) year, January first
pub const COMMON_MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Month-length table for one kind of year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    leap: bool,
}

impl Calendar {
    /// A 365-day calendar
    pub const fn common() -> Self {
        Self { leap: false }
    }

    /// A 366-day calendar
    pub const fn leap() -> Self {
        Self { leap: true }
    }

    /// The calendar in force for `year`
    pub const fn for_year(year: i32) -> Self {
        Self {
            leap: is_leap_year(year),
        }
    }

    /// Whether February has 29 days
    pub const fn is_leap(&self) -> bool {
        self.leap
    }

    /// Month lengths, January first
    pub fn month_lengths(&self) -> [u32; 12] {
        let mut lengths = COMMON_MONTH_LENGTHS;
        if self.leap {
            lengths[Month::February.index()] += 1;
        }
        lengths
    }

    /// Number of days in `month`
    pub fn month_length(&self, month: Month) -> u32 {
        self.month_lengths()[month.index()]
    }

    /// Number of days in the year
    pub fn year_length(&self) -> u32 {
        if self.leap {
            366
        } else {
            365
        }
    }

    /// Whether `date` exists in this calendar
    pub fn contains(&self, date: CompactDate) -> bool {
        (1..=self.month_length(date.month)).contains(&date.day)
    }

    /// Build a date, checking the day against the month's length
    pub fn date(&self, day: u32, month: Month) -> Result<CompactDate, CalendarError> {
        let max_day = self.month_length(month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(CompactDate::new(day, month))
    }

    /// Convert a 1-based day of the year into a day/month pair
    ///
    /// Day counts past the end of the year are an error here; rolling into
    /// the following year is the caller's decision.
    pub fn to_compact(&self, day_of_year: u32) -> Result<CompactDate, CalendarError> {
        let year_length = self.year_length();
        if !(1..=year_length).contains(&day_of_year) {
            return Err(CalendarError::DayOfYearOutOfRange {
                day: day_of_year,
                year_length,
            });
        }

        let mut day = day_of_year;
        for (month, length) in Month::ALL.into_iter().zip(self.month_lengths()) {
            if day <= length {
                return Ok(CompactDate::new(day, month));
            }
            day -= length;
        }

        // The range check above guarantees the loop returns.
        Err(CalendarError::DayOfYearOutOfRange {
            day: day_of_year,
            year_length,
        })
    }

    /// Convert a day/month pair into a 1-based day of the year
    pub fn to_linear(&self, date: CompactDate) -> u32 {
        self.days_before_month(date.month) + date.day
    }

    /// Linear day for `day` days into the month after `months_elapsed` whole months
    ///
    /// `offset_to_linear(0, 0)` is day 0, the day before 1st January.
    pub fn offset_to_linear(&self, day: u32, months_elapsed: u32) -> Result<u32, CalendarError> {
        let month = Month::from_index(months_elapsed as usize)
            .ok_or(CalendarError::MonthIndexOutOfRange(months_elapsed))?;
        let max_day = self.month_length(month);
        if day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(self.days_before_month(month) + day)
    }

    /// Parse a `DDMMM` token such as `26JAN` or `1MAR`
    ///
    /// Month codes are matched exactly and are case-sensitive.
    pub fn parse_compact(&self, token: &str) -> Result<CompactDate, CalendarError> {
        if !token.is_ascii() || !(4..=5).contains(&token.len()) {
            return Err(CalendarError::MalformedToken(token.to_string()));
        }

        let (day_part, code) = token.split_at(token.len() - 3);
        let month = Month::from_code(code)
            .ok_or_else(|| CalendarError::UnknownMonthCode(token.to_string()))?;

        if !day_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalendarError::MalformedToken(token.to_string()));
        }
        let day: u32 = day_part
            .parse()
            .map_err(|_| CalendarError::MalformedToken(token.to_string()))?;

        self.date(day, month)
    }

    /// Total length of the months before `month`
    pub fn days_before_month(&self, month: Month) -> u32 {
        self.month_lengths()[..month.index()].iter().sum()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::common()
    }
}
