// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use voyageur_core::{Category, Voyageur};

use crate::arg::{CommonArgs, OutputFormat, PropertyArgs};
use crate::listing_formatter::ListingFormatter;

#[derive(Debug, Clone)]
pub struct CmdListings {
    pub category: Category,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl Default for CmdListings {
    fn default() -> Self {
        Self {
            category: Category::Icons,
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }
}

impl CmdListings {
    pub const NAME: &str = "listings";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the available stays")
            .arg(PropertyArgs::category())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            category: PropertyArgs::get_category(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, voyageur: &Voyageur) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing properties...");
        let listings = voyageur.listings(self.category);

        let formatter = ListingFormatter::new(&voyageur.config().currency)
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);

        if self.output_format == OutputFormat::Table {
            println!("🏠 {}", self.category.name().bold());
        }
        print!("{}", formatter.format(&listings));
        if self.output_format == OutputFormat::Json {
            println!();
        }
        Ok(())
    }
}
