//! Challenge timeline
//!
//! Maps 0-based challenge days onto real calendar dates. Challenge day 0 is
//! the configured start date in the challenge year; later days roll forward
//! through as many years as needed, each year using its own [`Calendar`], so
//! 29th February appears exactly in leap years.

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{CalendarError, SavingsError, SavingsResult};
use crate::models::{Calendar, CompactDate, Month};

/// How many years past the challenge year a date lookup may search
const LOOKAHEAD_YEARS: i32 = 8;

/// Years a challenge may start in
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// A calendar date together with its year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ChallengeDate {
    pub year: i32,
    #[serde(flatten)]
    pub date: CompactDate,
}

impl fmt::Display for ChallengeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)
    }
}

/// Challenge days laid over the calendar, starting from a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    year: i32,
    start_day: u32,
    start_month: Month,
    origin: u32,
}

impl Timeline {
    /// Anchor challenge day 0 at `start_day` days into the month with 0-based
    /// index `start_month` of `year`
    ///
    /// A `start_day` of 0 is the last day of the previous month, so the
    /// default `(0, 0)` puts challenge day `n` on day-of-year `n`.
    pub fn new(year: i32, start_day: u32, start_month: u32) -> SavingsResult<Self> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(SavingsError::Config(format!(
                "year {} is outside {}..={}",
                year,
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            )));
        }
        let origin = Calendar::for_year(year)
            .offset_to_linear(start_day, start_month)
            .map_err(|e| SavingsError::Config(format!("Invalid start offset: {}", e)))?;
        let start_month = Month::from_index(start_month as usize)
            .ok_or(CalendarError::MonthIndexOutOfRange(start_month))?;

        Ok(Self {
            year,
            start_day,
            start_month,
            origin,
        })
    }

    /// Linear day-of-year of challenge day 0 within the challenge year
    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// Calendars of the challenge year and the one after it
    pub fn calendars(&self) -> [Calendar; 2] {
        [
            Calendar::for_year(self.year),
            Calendar::for_year(self.year + 1),
        ]
    }

    /// Days from the start date to the same start date a year later
    pub fn cycle_length(&self) -> u32 {
        let this_year = Calendar::for_year(self.year);
        this_year.year_length() - self.origin + self.origin_in(self.year + 1)
    }

    /// The calendar date of a challenge day
    pub fn locate(&self, challenge_day: u32) -> SavingsResult<ChallengeDate> {
        let mut year = self.year;
        let mut day = i64::from(self.origin) + i64::from(challenge_day);

        while day < 1 {
            year -= 1;
            day += i64::from(Calendar::for_year(year).year_length());
        }
        loop {
            let length = i64::from(Calendar::for_year(year).year_length());
            if day <= length {
                break;
            }
            day -= length;
            year += 1;
        }

        let date = Calendar::for_year(year).to_compact(day as u32)?;
        Ok(ChallengeDate { year, date })
    }

    /// The first challenge day on or after `not_before` that falls on `date`
    ///
    /// A date earlier in the year than the start date belongs to the
    /// following year; 29th February waits for the next leap year.
    pub fn day_of(&self, date: CompactDate, not_before: u32) -> SavingsResult<u32> {
        let mut year_start = -i64::from(self.origin);

        for year in self.year..=self.year + LOOKAHEAD_YEARS {
            let calendar = Calendar::for_year(year);
            if calendar.contains(date) {
                let day = year_start + i64::from(calendar.to_linear(date));
                if day >= i64::from(not_before) {
                    tracing::trace!(%date, year, day, "located date on timeline");
                    return Ok(day as u32);
                }
            }
            year_start += i64::from(calendar.year_length());
        }

        Err(CalendarError::InvalidDay {
            day: date.day,
            month: date.month,
            max_day: Calendar::leap().month_length(date.month),
        }
        .into())
    }

    /// Years whose 29th February lies within challenge days `from..=to`
    pub fn leap_days(&self, from: u32, to: u32) -> Vec<i32> {
        let leap_day = CompactDate::new(29, Month::February);
        let mut year_start = -i64::from(self.origin);
        let mut years = Vec::new();

        let mut year = self.year;
        while year_start < i64::from(to) {
            let calendar = Calendar::for_year(year);
            if calendar.is_leap() {
                let day = year_start + i64::from(calendar.to_linear(leap_day));
                if (i64::from(from)..=i64::from(to)).contains(&day) {
                    years.push(year);
                }
            }
            year_start += i64::from(calendar.year_length());
            year += 1;
        }

        years
    }

    /// Linear day of the start date in `year`, clamped for a 29th February start
    fn origin_in(&self, year: i32) -> u32 {
        let calendar = Calendar::for_year(year);
        let day = self.start_day.min(calendar.month_length(self.start_month));
        calendar.days_before_month(self.start_month) + day
    }
}
