// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use clap_num::number_range;
use voyageur_core::{CalendarDate, Category, StayDates};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyArgs;

impl PropertyArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the property, as shown by `voyageur listings`")
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("id")
            .cloned()
            .unwrap_or_default()
    }

    pub fn category() -> Arg {
        arg!(--category <CATEGORY> "Only show listings of this category")
            .value_parser(value_parser!(Category))
            .default_value("icons")
    }

    pub fn get_category(matches: &ArgMatches) -> Category {
        matches.get_one("category").copied().unwrap_or_default()
    }

    pub fn months_ahead() -> Arg {
        fn from_0_to_24(s: &str) -> Result<i32, String> {
            number_range(s, 0, 24)
        }

        arg!(--"months-ahead" <N> "Show the calendar N months after the current one")
            .value_parser(from_0_to_24)
            .default_value("0")
    }

    pub fn get_months_ahead(matches: &ArgMatches) -> i32 {
        matches.get_one("months-ahead").copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StayArgs;

impl StayArgs {
    pub fn check_in() -> Arg {
        arg!(--"check-in" <DATE> "Check-in date, YYYY-MM-DD")
    }

    pub fn check_out() -> Arg {
        arg!(--"check-out" <DATE> "Check-out date, YYYY-MM-DD")
    }

    pub fn get_check_in(matches: &ArgMatches) -> Option<String> {
        matches.get_one("check-in").cloned()
    }

    pub fn get_check_out(matches: &ArgMatches) -> Option<String> {
        matches.get_one("check-out").cloned()
    }
}

/// Parses the stay dates typed on the command line.
///
/// A date that does not parse is treated as not given, the same as an empty field.
pub fn parse_stay_dates(check_in: Option<&str>, check_out: Option<&str>) -> StayDates {
    StayDates::new(parse_date(check_in), parse_date(check_out))
}

fn parse_date(s: Option<&str>) -> Option<CalendarDate> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }

    match s.parse() {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(input = s, err = %e, "ignoring unparseable date");
            None
        }
    }
}
