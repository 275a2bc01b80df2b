//! Reports module
//!
//! Provides report generation for a planned savings range:
//! - Terminal summary with optional colour
//! - Day-by-day breakdown
//! - JSON export

pub mod schedule;

pub use schedule::ScheduleReport;
