//! Savings Challenge - daily savings challenge calculator
//!
//! This library provides the core functionality for the `savings` binary. On
//! challenge day `n` the saver puts away `n + 1` pence; given a starting day
//! and a duration (or two calendar dates) the library works out how much the
//! range needs and how much has been saved altogether, and which calendar
//! dates the range covers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Months, dates, calendars, day arguments and money
//! - `services`: Timeline and savings calculations
//! - `reports`: Terminal and JSON rendering of a schedule
//! - `display`: Ordinal suffixes and colour palette
//! - `cli`: Command handlers
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust
//! use savings_challenge::models::DayArg;
//! use savings_challenge::services::{SavingsService, Timeline};
//!
//! let timeline = Timeline::new(2023, 0, 0)?;
//! let schedule = SavingsService::new(timeline).plan(DayArg::Numeric(10), DayArg::Numeric(5))?;
//! assert_eq!(schedule.range_total.to_string(), "£0.81");
//! # Ok::<(), savings_challenge::SavingsError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{SavingsError, SavingsResult};
