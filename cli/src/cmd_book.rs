// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use voyageur_core::{CalendarDate, Voyageur};

use crate::arg::PropertyArgs;
use crate::tui;

#[derive(Debug, Clone)]
pub struct CmdBook {
    pub id: String,
}

impl CmdBook {
    pub const NAME: &str = "book";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Pick dates interactively in a calendar and reserve")
            .arg(PropertyArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: PropertyArgs::get_id(matches),
        }
    }

    pub async fn run(self, voyageur: &Voyageur) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening booking calendar...");
        let session = voyageur.open(&self.id)?;
        let confirmation = tui::book(
            session,
            Box::new(CalendarDate::today),
            &voyageur.config().currency,
        )?;

        match confirmation {
            Some(confirmation) => {
                println!("{}", confirmation.to_string().green());
                println!("{}", "You won't be charged yet".dimmed());
            }
            None => tracing::debug!("left the calendar without reserving"),
        }
        Ok(())
    }
}
