//! Savings calculator
//!
//! On 0-based challenge day `i` the saver puts away `i + 1` pence, so every
//! total is the sum of a run of consecutive integers.

use serde::Serialize;

use super::timeline::{ChallengeDate, Timeline};
use crate::error::{SavingsError, SavingsResult};
use crate::models::{DayArg, Money};

/// Sum of `count + 1` consecutive integers starting at `start`
///
/// `calc_amt(s, 0) == s`, and a negative `count` also yields `start`.
pub fn calc_amt(start: i64, count: i64) -> i64 {
    if count <= 0 {
        return start;
    }
    (count + 1) * start + count * (count + 1) / 2
}

/// Pence deposited on a challenge day
pub fn deposit_for(challenge_day: u32) -> Money {
    Money::from_pence(i64::from(challenge_day) + 1)
}

/// Everything worked out for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeSchedule {
    /// First argument as given
    pub first: DayArg,
    /// Second argument as given
    pub second: DayArg,
    /// Challenge day the range starts on
    pub current_day: u32,
    /// Days after `current_day` covered by the range
    pub duration: u32,
    /// Challenge day the range ends on
    pub end_day: u32,
    /// Calendar date of `current_day`
    pub start_date: ChallengeDate,
    /// Calendar date of `end_day`
    pub end_date: ChallengeDate,
    /// Length of the challenge year
    pub cycle_length: u32,
    /// Years whose 29th February falls inside the range
    pub leap_days: Vec<i32>,
    /// Saved over `current_day..=end_day`
    pub range_total: Money,
    /// Saved over `0..=end_day`
    pub cumulative_total: Money,
}

/// One row of a day-by-day breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    pub challenge_day: u32,
    pub date: ChallengeDate,
    pub deposit: Money,
    pub running_total: Money,
}

/// Service computing savings schedules over a timeline
pub struct SavingsService {
    timeline: Timeline,
}

impl SavingsService {
    /// Create a new savings service
    pub fn new(timeline: Timeline) -> Self {
        Self { timeline }
    }

    /// Classify a raw command-line argument against this timeline's calendars
    pub fn classify(&self, raw: &str) -> SavingsResult<DayArg> {
        DayArg::classify(raw, &self.timeline.calendars())
    }

    /// Work out the schedule for a starting day and a duration or end date
    pub fn plan(&self, first: DayArg, second: DayArg) -> SavingsResult<ChallengeSchedule> {
        let limit = self.timeline.cycle_length();

        let current_day = match first {
            DayArg::Numeric(days) => days,
            DayArg::Calendar(date) => u64::from(self.timeline.day_of(date, 0)?),
        };
        let current_day = within_year(current_day, limit)?;

        let duration = match second {
            // A numeric span crossing 29th February gains a day for each one,
            // so it ends on the same calendar date as in a common year.
            DayArg::Numeric(days) => {
                let end = u64::from(current_day)
                    .saturating_add(days)
                    .min(u64::from(limit)) as u32;
                let crossed = self.timeline.leap_days(current_day, end).len() as u64;
                days.saturating_add(crossed)
            }
            DayArg::Calendar(date) => {
                u64::from(self.timeline.day_of(date, current_day)? - current_day)
            }
        };
        let end_day = within_year(u64::from(current_day).saturating_add(duration), limit)?;
        let duration = end_day - current_day;

        let leap_days = self.timeline.leap_days(current_day, end_day);
        if !leap_days.is_empty() {
            tracing::info!(?leap_days, duration, "range includes 29th February");
        }

        let range_total = calc_amt(i64::from(current_day) + 1, i64::from(duration));
        let cumulative_total = calc_amt(1, i64::from(end_day));

        tracing::debug!(
            current_day,
            duration,
            end_day,
            cycle_length = limit,
            range_total,
            cumulative_total,
            "planned savings range"
        );

        Ok(ChallengeSchedule {
            first,
            second,
            current_day,
            duration,
            end_day,
            start_date: self.timeline.locate(current_day)?,
            end_date: self.timeline.locate(end_day)?,
            cycle_length: limit,
            leap_days,
            range_total: Money::from_pence(range_total),
            cumulative_total: Money::from_pence(cumulative_total),
        })
    }

    /// Deposit and running total for every day of a schedule
    pub fn daily_entries(&self, schedule: &ChallengeSchedule) -> SavingsResult<Vec<DailyEntry>> {
        (schedule.current_day..=schedule.end_day)
            .map(|day| {
                Ok(DailyEntry {
                    challenge_day: day,
                    date: self.timeline.locate(day)?,
                    deposit: deposit_for(day),
                    running_total: Money::from_pence(calc_amt(1, i64::from(day))),
                })
            })
            .collect()
    }
}

fn within_year(day: u64, limit: u32) -> SavingsResult<u32> {
    if day > u64::from(limit) {
        return Err(SavingsError::OutOfRange { day, limit });
    }
    Ok(day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompactDate, Month};

    fn service(year: i32) -> SavingsService {
        SavingsService::new(Timeline::new(year, 0, 0).unwrap())
    }

    #[test]
    fn test_calc_amt_zero_count() {
        for start in [0, 1, 11, 365] {
            assert_eq!(calc_amt(start, 0), start);
        }
        assert_eq!(calc_amt(7, -3), 7);
    }

    #[test]
    fn test_calc_amt_triangular() {
        for n in 0..=366 {
            assert_eq!(calc_amt(0, n), n * (n + 1) / 2);
        }
    }

    #[test]
    fn test_calc_amt_matches_loop() {
        for start in [1, 11, 100] {
            for count in 0..50 {
                let looped: i64 = (start..=start + count).sum();
                assert_eq!(calc_amt(start, count), looped);
            }
        }
    }

    #[test]
    fn test_plan_numeric() {
        let schedule = service(2023)
            .plan(DayArg::Numeric(10), DayArg::Numeric(5))
            .unwrap();

        assert_eq!(schedule.current_day, 10);
        assert_eq!(schedule.duration, 5);
        assert_eq!(schedule.end_day, 15);
        assert_eq!(schedule.range_total.pence(), calc_amt(11, 5));
        assert_eq!(schedule.cumulative_total.pence(), calc_amt(1, 15));
        assert_eq!(schedule.start_date.date, CompactDate::new(10, Month::January));
        assert_eq!(schedule.end_date.date, CompactDate::new(15, Month::January));
        assert!(schedule.leap_days.is_empty());
    }

    #[test]
    fn test_plan_out_of_range() {
        let err = service(2023)
            .plan(DayArg::Numeric(400), DayArg::Numeric(5))
            .unwrap_err();
        assert!(err.is_out_of_range());

        let err = service(2023)
            .plan(DayArg::Numeric(360), DayArg::Numeric(6))
            .unwrap_err();
        assert!(matches!(err, SavingsError::OutOfRange { day: 366, limit: 365 }));

        let err = service(2023)
            .plan(DayArg::Numeric(1), DayArg::Numeric(u64::MAX))
            .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_plan_accepts_whole_year() {
        let schedule = service(2023)
            .plan(DayArg::Numeric(0), DayArg::Numeric(365))
            .unwrap();
        assert_eq!(schedule.cumulative_total.pence(), calc_amt(1, 365));

        let schedule = service(2024)
            .plan(DayArg::Numeric(0), DayArg::Numeric(365))
            .unwrap();
        assert_eq!(schedule.duration, 366);
        assert_eq!(schedule.end_date.date, CompactDate::new(31, Month::December));
        assert_eq!(schedule.leap_days, vec![2024]);

        let err = service(2024)
            .plan(DayArg::Numeric(0), DayArg::Numeric(366))
            .unwrap_err();
        assert!(matches!(err, SavingsError::OutOfRange { day: 367, limit: 366 }));
    }

    #[test]
    fn test_plan_dates() {
        let schedule = service(2023)
            .plan(
                DayArg::Calendar(CompactDate::new(1, Month::February)),
                DayArg::Calendar(CompactDate::new(10, Month::February)),
            )
            .unwrap();
        assert_eq!(schedule.current_day, 32);
        assert_eq!(schedule.duration, 9);
        assert_eq!(schedule.end_date.date, CompactDate::new(10, Month::February));
    }

    #[test]
    fn test_plan_second_date_wraps_into_next_year() {
        let err = service(2023)
            .plan(
                DayArg::Numeric(300),
                DayArg::Calendar(CompactDate::new(1, Month::January)),
            )
            .unwrap_err();
        // 1st January 2024 is challenge day 366, past a 365-day challenge year.
        assert!(err.is_out_of_range());

        let timeline = Timeline::new(2023, 1, 2).unwrap();
        let schedule = SavingsService::new(timeline)
            .plan(
                DayArg::Calendar(CompactDate::new(1, Month::December)),
                DayArg::Calendar(CompactDate::new(1, Month::January)),
            )
            .unwrap();
        assert_eq!(schedule.duration, 31);
        assert_eq!(schedule.end_date.year, 2024);
    }

    #[test]
    fn test_plan_leap_year_span() {
        let schedule = service(2024)
            .plan(DayArg::Numeric(50), DayArg::Numeric(20))
            .unwrap();
        assert_eq!(schedule.leap_days, vec![2024]);
        assert_eq!(schedule.duration, 21);
        assert_eq!(schedule.end_day, 71);
        assert_eq!(schedule.end_date.date, CompactDate::new(11, Month::March));
        assert_eq!(schedule.range_total.pence(), 1353);
        assert_eq!(schedule.cumulative_total.pence(), 2628);

        let schedule = service(2023)
            .plan(DayArg::Numeric(50), DayArg::Numeric(20))
            .unwrap();
        assert!(schedule.leap_days.is_empty());
        assert_eq!(schedule.duration, 20);
        assert_eq!(schedule.end_date.date, CompactDate::new(11, Month::March));
        assert_eq!(schedule.range_total.pence(), 1281);
    }

    #[test]
    fn test_plan_leap_year_span_before_february() {
        // Ends on 28th February, so no leap day is crossed.
        let schedule = service(2024)
            .plan(DayArg::Numeric(50), DayArg::Numeric(9))
            .unwrap();
        assert!(schedule.leap_days.is_empty());
        assert_eq!(schedule.duration, 9);
        assert_eq!(schedule.end_date.date, CompactDate::new(28, Month::February));
    }

    #[test]
    fn test_plan_leap_day_date_span_is_not_extended() {
        let schedule = service(2024)
            .plan(
                DayArg::Calendar(CompactDate::new(19, Month::February)),
                DayArg::Calendar(CompactDate::new(11, Month::March)),
            )
            .unwrap();
        assert_eq!(schedule.duration, 21);
        assert_eq!(schedule.leap_days, vec![2024]);
    }

    #[test]
    fn test_daily_entries() {
        let service = service(2023);
        let schedule = service
            .plan(DayArg::Numeric(10), DayArg::Numeric(5))
            .unwrap();
        let entries = service.daily_entries(&schedule).unwrap();

        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].deposit.pence(), 11);
        assert_eq!(entries[5].deposit.pence(), 16);
        let deposits: Money = entries.iter().map(|e| e.deposit).sum();
        assert_eq!(deposits, schedule.range_total);
        assert_eq!(entries[5].running_total, schedule.cumulative_total);
    }
}
