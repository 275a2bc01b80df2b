//! Savings Schedule Report
//!
//! Renders a planned savings range as the two-line summary, as a day-by-day
//! table, or as JSON.

use serde::Serialize;
use std::io::Write;

use crate::display::Palette;
use crate::error::{SavingsError, SavingsResult};
use crate::services::{ChallengeSchedule, DailyEntry, SavingsService};

/// Savings Schedule Report
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    /// The planned range and its totals
    pub schedule: ChallengeSchedule,
    /// One entry per day, when a breakdown was asked for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<DailyEntry>>,
}

impl ScheduleReport {
    /// Generate a report from the two raw command-line arguments
    pub fn generate(
        service: &SavingsService,
        first: &str,
        second: &str,
        with_breakdown: bool,
    ) -> SavingsResult<Self> {
        let first = service.classify(first)?;
        let second = service.classify(second)?;
        let schedule = service.plan(first, second)?;

        let entries = if with_breakdown {
            Some(service.daily_entries(&schedule)?)
        } else {
            None
        };

        Ok(Self { schedule, entries })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, palette: &Palette) -> String {
        let schedule = &self.schedule;
        let mut output = String::new();

        output.push_str(&format!(
            "Between {} and {} you will need {} in your current account.\n",
            palette.date(schedule.start_date),
            palette.date(schedule.end_date),
            palette.amount(schedule.range_total),
        ));
        output.push_str(&format!(
            "Giving you a total of {} saved altogether!\n",
            palette.total(format!(" {} ", schedule.cumulative_total)),
        ));

        for year in &schedule.leap_days {
            output.push_str(&format!("Includes 29th February {}.\n", year));
        }

        output
    }

    /// Format the day-by-day table, if one was generated
    pub fn format_breakdown(&self) -> Option<String> {
        let entries = self.entries.as_ref()?;
        let mut output = String::new();

        output.push_str(&format!(
            "{:>5}  {:<20}  {:>10}  {:>12}\n",
            "Day", "Date", "Deposit", "Total"
        ));
        output.push_str(&format!(
            "{:->5}  {:-<20}  {:->10}  {:->12}\n",
            "", "", "", ""
        ));

        for entry in entries {
            output.push_str(&format!(
                "{:>5}  {:<20}  {:>10}  {:>12}\n",
                entry.challenge_day,
                format!("{} {}", entry.date, entry.date.year),
                entry.deposit,
                entry.running_total,
            ));
        }

        output
            .push_str(&format!("{:->5}  {:-<20}  {:->10}  {:->12}\n", "", "", "", ""));
        output.push_str(&format!(
            "{:>5}  {:<20}  {:>10}  {:>12}\n",
            entries.len(),
            "days",
            self.schedule.range_total,
            self.schedule.cumulative_total,
        ));

        Some(output)
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> SavingsResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)
            .map_err(|e| SavingsError::Json(format!("Failed to serialize report: {}", e)))?;
        writeln!(writer)?;
        Ok(())
    }
}
