// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{Datelike, Month, NaiveDate};

use crate::CalendarDate;

/// Weekday column headers of the Sunday-first grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A month of a given year, always normalized to `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, carrying out-of-range month numbers into the year.
    ///
    /// Month 13 of year Y is January of Y+1, month 0 is December of Y-1.
    pub fn new(year: i32, month: i32) -> Self {
        Self::from_index(i64::from(year) * 12 + i64::from(month) - 1)
    }

    /// Months since January of year 0.
    fn from_index(index: i64) -> Self {
        let year = index.div_euclid(12) as i32;
        let month = index.rem_euclid(12) as u32 + 1;
        Self { year, month }
    }

    /// The month containing the given date.
    pub fn of(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Shifts by a whole number of months in either direction.
    pub fn add_months(&self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        Self::from_index(index + i64::from(delta))
    }

    /// The first day of the month.
    pub fn first_day(&self) -> CalendarDate {
        self.naive_first_day().into()
    }

    /// Number of days in the month, i.e. the day number of its last day.
    pub fn days_in_month(&self) -> u32 {
        let next = self.add_months(1).naive_first_day();
        next.pred_opt().map_or(31, |last| last.day())
    }

    /// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
    pub fn weekday_offset(&self) -> u32 {
        self.naive_first_day().weekday().num_days_from_sunday()
    }

    fn naive_first_day(&self) -> NaiveDate {
        // Every normalized month has a 1st within chrono's supported years.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("Unknown", |m| m.name());
        write!(f, "{name} {}", self.year)
    }
}

/// One slot of the 7-column month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Placeholder before the 1st so that columns line up with weekdays.
    Blank,

    /// A day of the month.
    Day(CalendarDate),
}

impl DayCell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            DayCell::Blank => None,
            DayCell::Day(d) => Some(*d),
        }
    }
}

/// The day cells of one month, laid out on a Sunday-first week grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Number of blank cells before the 1st.
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, DayCell::Blank))
            .count()
    }

    /// The cells split into weeks of 7, the last week may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

/// Builds the day cells of a month.
///
/// Out-of-range months are normalized by calendar carry, see [`YearMonth::new`].
pub fn month_grid(year: i32, month: i32) -> MonthGrid {
    let month = YearMonth::new(year, month);
    let blanks = month.weekday_offset() as usize;
    let days = month.days_in_month();

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.resize(blanks, DayCell::Blank);
    cells.extend(
        (1..=days)
            .filter_map(|d| CalendarDate::from_ymd(month.year, month.month, d))
            .map(DayCell::Day),
    );

    MonthGrid { month, cells }
}
