// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, TimeDelta, Weekday};

/// NOTE: Shown to users and accepted on the command line, so it must stay stable.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";

/// A calendar day without a time of day.
///
/// The canonical text form is `YYYY-MM-DD`. Ordering is chronological, which for
/// four-digit years is the same as the lexicographic order of the canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from its parts, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date from the local system clock.
    ///
    /// Reads the clock on every call so the day boundary is always current.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The year of the date.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month of the date, `1..=12`.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day of the month, starting from 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The weekday of the date.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Number of whole days from `self` to `other`, negative if `other` is earlier.
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The date `days` days later, or earlier when negative.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// The underlying chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STABLE_FORMAT_DATEONLY))
    }
}

impl FromStr for CalendarDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), STABLE_FORMAT_DATEONLY)
            .map(Self)
            .map_err(|e| format!("Invalid date '{s}', expected YYYY-MM-DD: {e}"))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
