//! Service layer for the savings challenge
//!
//! The service layer lays challenge days over the calendar and computes the
//! savings totals for a requested range.

pub mod savings;
pub mod timeline;

pub use savings::{calc_amt, ChallengeSchedule, DailyEntry, SavingsService};
pub use timeline::{ChallengeDate, Timeline};
