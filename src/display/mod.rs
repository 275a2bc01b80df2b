//! Display formatting for terminal output
//!
//! Provides the written-date helpers and the colour palette used when
//! printing a savings schedule.

use std::fmt::Display;

use crossterm::style::{style, Color, Stylize};

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// ANSI colours for the parts of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that colours when `enabled`
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never colours
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Dates in the summary line
    pub fn date(&self, text: impl Display) -> String {
        self.paint(text, Color::Cyan, None)
    }

    /// The amount saved over the requested range
    pub fn amount(&self, text: impl Display) -> String {
        self.paint(text, Color::Green, None)
    }

    /// The running total since day 0
    pub fn total(&self, text: impl Display) -> String {
        self.paint(text, Color::White, Some(Color::DarkGreen))
    }

    fn paint(&self, text: impl Display, fg: Color, bg: Option<Color>) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let styled = style(text.to_string()).with(fg);
        match bg {
            Some(bg) => styled.on(bg).to_string(),
            None => styled.to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
