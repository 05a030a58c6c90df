// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use crate::{BookingSession, CalendarDate, Catalog, Category, Config, Property, YearMonth};

/// Voyageur application core.
#[derive(Debug, Clone)]
pub struct Voyageur {
    config: Config,
    catalog: Catalog,
}

impl Voyageur {
    /// Creates a new instance, loading the configured catalog or the bundled one.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path).await?,
            None => Catalog::builtin(),
        };

        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Today's date, read from the clock on every call.
    pub fn today(&self) -> CalendarDate {
        CalendarDate::today()
    }

    /// The real-world current month, the floor of calendar navigation.
    pub fn current_month(&self) -> YearMonth {
        YearMonth::of(self.today())
    }

    /// Listings of a category, see [`Catalog::filter`].
    pub fn listings(&self, category: Category) -> Vec<&Property> {
        self.catalog.filter(category)
    }

    /// Finds a property by id.
    pub fn property(&self, id: &str) -> Result<&Property, Box<dyn Error>> {
        self.catalog
            .get(id)
            .ok_or_else(|| format!("Property not found: {id}").into())
    }

    /// Opens the booking session of a property.
    pub fn open(&self, id: &str) -> Result<BookingSession, Box<dyn Error>> {
        let property = self.property(id)?.clone();
        Ok(BookingSession::open(property, self.today()))
    }
}
