//! Challenge CLI command
//!
//! Bridges the clap arguments to the savings service and prints the report.

use std::io::{self, IsTerminal, Write};

use chrono::Datelike;
use clap::Args;

use crate::config::{SavingsPaths, Settings};
use crate::display::Palette;
use crate::error::SavingsResult;
use crate::reports::ScheduleReport;
use crate::services::{SavingsService, Timeline};

/// Arguments for working out a savings range
#[derive(Args, Debug)]
pub struct ChallengeArgs {
    /// Challenge day to start from, or a date such as 26JAN
    pub challenge_day: String,

    /// Number of days to save for, or an end date such as 14FEB
    pub number_of_days: String,

    /// Days into the start month that challenge day 0 falls on
    #[arg(long, env = "SAVINGS_START_DAY")]
    pub start_day: Option<u32>,

    /// Month of the start date, 0 = January
    #[arg(long, env = "SAVINGS_START_MONTH")]
    pub start_month: Option<u32>,

    /// Year challenge day 0 falls in, 1 to 9999 [default: current year]
    #[arg(long, env = "SAVINGS_YEAR")]
    pub year: Option<i32>,

    /// Remember --start-day/--start-month for later runs
    #[arg(long)]
    pub save_start: bool,

    /// Print the deposit for every day in the range
    #[arg(short, long)]
    pub breakdown: bool,

    /// Print the schedule as JSON
    #[arg(long, conflicts_with = "breakdown")]
    pub json: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Handle a challenge command
pub fn handle_challenge_command(paths: &SavingsPaths, args: ChallengeArgs) -> SavingsResult<()> {
    let settings =
        Settings::load_or_create(paths)?.with_start(args.start_day, args.start_month);
    let year = args
        .year
        .unwrap_or_else(|| chrono::Local::now().date_naive().year());

    let timeline = Timeline::new(year, settings.start_day, settings.start_month)?;
    tracing::info!(
        year,
        start = %settings.describe_start(),
        cycle_length = timeline.cycle_length(),
        "challenge timeline"
    );

    let service = SavingsService::new(timeline);
    let report = ScheduleReport::generate(
        &service,
        &args.challenge_day,
        &args.number_of_days,
        args.breakdown || args.json,
    )?;

    if args.save_start {
        settings.save(paths)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        report.export_json(&mut out)?;
        return Ok(());
    }

    let color = settings.color
        && !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && stdout.is_terminal();
    let palette = Palette::new(color);

    if let Some(table) = report.format_breakdown() {
        writeln!(out, "{}", table)?;
    }
    write!(out, "{}", report.format_terminal(&palette))?;

    Ok(())
}
