// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Colorize;
use voyageur_core::{BookingSession, CalendarDate, DayCell, MonthGrid, WEEKDAY_HEADERS};

/// Width of one month block: 7 two-character cells and 6 separators.
const MONTH_WIDTH: usize = 20;
const MONTH_GAP: &str = "    ";

/// The two visible months of a booking session, side by side.
#[derive(Debug)]
pub struct CalendarView<'a> {
    session: &'a BookingSession,
    today: CalendarDate,
    styled: bool,
}

impl<'a> CalendarView<'a> {
    pub fn new(session: &'a BookingSession, today: CalendarDate) -> Self {
        Self {
            session,
            today,
            styled: true,
        }
    }

    /// Plain text without terminal styling.
    #[cfg(test)]
    pub fn plain(mut self) -> Self {
        self.styled = false;
        self
    }

    fn month_lines(&self, grid: &MonthGrid) -> Vec<String> {
        let mut lines = vec![
            self.style_title(format!("{:^MONTH_WIDTH$}", grid.month.to_string())),
            WEEKDAY_HEADERS.join(" "),
        ];
        for week in grid.weeks() {
            let mut line = String::new();
            for (i, cell) in week.iter().enumerate() {
                if i > 0 {
                    line.push_str(&self.separator(&week[i - 1], cell));
                }
                line.push_str(&self.day_cell(cell));
            }
            // Pad the last, shorter week by hand since styled cells carry escape codes
            let missing = 7 - week.len();
            lines.push(format!("{line}{}", "   ".repeat(missing)));
        }
        lines
    }

    fn day_cell(&self, cell: &DayCell) -> String {
        let Some(date) = cell.date() else {
            return "  ".to_string();
        };

        let text = format!("{:>2}", date.day());
        if !self.styled {
            return text;
        }

        let state = self.session.day_state(date, self.today);
        if state.is_past {
            text.dimmed().strikethrough().to_string()
        } else if state.is_selected {
            text.black().on_white().bold().to_string()
        } else if state.is_in_range {
            text.underline().to_string()
        } else if date == self.today {
            text.bold().to_string()
        } else {
            text
        }
    }

    /// The gap between two neighbour cells, underlined like the range fill when the
    /// range runs through it.
    fn separator(&self, left: &DayCell, right: &DayCell) -> String {
        match self.styled && self.fills_gap(left, right) {
            true => " ".underline().to_string(),
            false => " ".to_string(),
        }
    }

    fn fills_gap(&self, left: &DayCell, right: &DayCell) -> bool {
        match (left.date(), right.date()) {
            (Some(l), Some(r)) => {
                let state = |d| self.session.day_state(d, self.today);
                state(l).joins(&state(r))
            }
            _ => false,
        }
    }

    fn style_title(&self, title: String) -> String {
        match self.styled {
            true => title.bold().to_string(),
            false => title,
        }
    }
}

impl fmt::Display for CalendarView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.session.visible_months();
        let left = self.month_lines(&first);
        let right = self.month_lines(&second);

        let rows = left.len().max(right.len());
        let blank = " ".repeat(MONTH_WIDTH);
        for i in 0..rows {
            if i > 0 {
                writeln!(f)?;
            }
            let l = left.get(i).unwrap_or(&blank);
            let r = right.get(i).unwrap_or(&blank);
            write!(f, "{l}{MONTH_GAP}{}", r.trim_end())?;
        }
        Ok(())
    }
}
