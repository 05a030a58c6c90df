// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use voyageur_concierge::Concierge;
use voyageur_core::{Property, Voyageur};

use crate::arg::PropertyArgs;
use crate::calendar_view::CalendarView;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdShow {
    pub id: String,
    pub months_ahead: i32,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show a property with its availability calendar")
            .arg(PropertyArgs::id())
            .arg(PropertyArgs::months_ahead())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: PropertyArgs::get_id(matches),
            months_ahead: PropertyArgs::get_months_ahead(matches),
        }
    }

    pub async fn run(self, voyageur: &Voyageur, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing property...");
        let mut session = voyageur.open(&self.id)?;
        session.change_month(self.months_ahead, voyageur.current_month());
        let property = session.property();
        let currency = &voyageur.config().currency;

        println!("{}", property.title.bold());
        println!("{}", headline(property));
        println!("{}{} night", currency.bold(), property.price.to_string().bold());
        println!();

        println!("{}", describe(property, config).await);
        println!();

        if !property.amenities.is_empty() {
            println!("{}", "What this place offers".bold());
            for amenity in &property.amenities {
                println!("  • {amenity}");
            }
            println!();
        }

        println!("{}", CalendarView::new(&session, voyageur.today()));
        Ok(())
    }
}

fn headline(property: &Property) -> String {
    let mut parts = vec![
        format!("★ {}", property.rating),
        property.location.clone(),
        property.distance.clone(),
    ];
    if property.is_guest_favorite {
        parts.push("Guest favorite".to_string());
    }
    parts.join(" · ")
}

/// The catalog description, or a generated one when the catalog has none.
async fn describe(property: &Property, config: &Config) -> String {
    if let Some(description) = &property.description {
        return description.clone();
    }

    Concierge::new(config.concierge.clone())
        .describe_property(&property.title, &property.location, &property.amenities)
        .await
}
