// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use voyageur_core::{Voyageur, submit};

use crate::arg::{PropertyArgs, StayArgs, parse_stay_dates};

#[derive(Debug, Clone)]
pub struct CmdReserve {
    pub id: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

impl CmdReserve {
    pub const NAME: &str = "reserve";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Validate the dates and start a reservation, nothing is charged")
            .arg(PropertyArgs::id())
            .arg(StayArgs::check_in())
            .arg(StayArgs::check_out())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: PropertyArgs::get_id(matches),
            check_in: StayArgs::get_check_in(matches),
            check_out: StayArgs::get_check_out(matches),
        }
    }

    pub async fn run(self, voyageur: &Voyageur) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "submitting reservation...");
        let property = voyageur.property(&self.id)?;
        let dates = parse_stay_dates(self.check_in.as_deref(), self.check_out.as_deref());

        let confirmation = submit(&property.title, dates, voyageur.today())?;
        println!("{}", confirmation.to_string().green());
        println!("{}", "You won't be charged yet".dimmed());
        Ok(())
    }
}
