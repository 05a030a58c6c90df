// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use voyageur_core::{PriceQuote, Voyageur};

use crate::arg::{CommonArgs, OutputFormat, PropertyArgs, StayArgs, parse_stay_dates};
use crate::quote_formatter::QuoteFormatter;

#[derive(Debug, Clone)]
pub struct CmdQuote {
    pub id: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdQuote {
    pub const NAME: &str = "quote";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the price breakdown of a stay")
            .arg(PropertyArgs::id())
            .arg(StayArgs::check_in())
            .arg(StayArgs::check_out())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: PropertyArgs::get_id(matches),
            check_in: StayArgs::get_check_in(matches),
            check_out: StayArgs::get_check_out(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, voyageur: &Voyageur) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "quoting stay...");
        let property = voyageur.property(&self.id)?;
        let dates = parse_stay_dates(self.check_in.as_deref(), self.check_out.as_deref());
        let quote = PriceQuote::new(property.price, dates);

        let formatter = QuoteFormatter::new(&voyageur.config().currency)
            .with_output_format(self.output_format);

        if self.output_format == OutputFormat::Table {
            println!(
                "{} {}",
                property.title.bold(),
                format!("{} night", formatter.money(property.price)).dimmed()
            );
        }
        println!("{}", formatter.format(&quote));
        Ok(())
    }
}
