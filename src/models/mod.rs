//! Core data models for the savings challenge
//!
//! This module contains the value types the challenge is computed over:
//! months, year-less dates, month-length calendars, command-line day
//! arguments and money amounts.

pub mod calendar;
pub mod date;
pub mod day_arg;
pub mod money;
pub mod month;

pub use calendar::{is_leap_year, Calendar};
pub use date::CompactDate;
pub use day_arg::DayArg;
pub use money::Money;
pub use month::Month;
