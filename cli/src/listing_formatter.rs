// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use voyageur_core::Property;

use crate::arg::OutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};

#[derive(Debug)]
pub struct ListingFormatter {
    columns: Vec<ListingColumn>,
    format: OutputFormat,
}

impl ListingFormatter {
    pub fn new(currency: &str) -> Self {
        Self {
            columns: vec![
                ListingColumn::Id,
                ListingColumn::Title,
                ListingColumn::Location,
                ListingColumn::Price(currency.to_string()),
                ListingColumn::Rating,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds the category, distance and dates columns.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.extend([
                ListingColumn::Category,
                ListingColumn::Distance,
                ListingColumn::Dates,
            ]);
        }
        self
    }

    pub fn format<'a>(&'a self, properties: &'a [&'a Property]) -> Display<'a> {
        Display {
            properties,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    properties: &'a [&'a Property],
    formatter: &'a ListingFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.properties)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.properties)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ListingColumn {
    Id,
    Title,
    Location,
    Price(String),
    Rating,
    Category,
    Distance,
    Dates,
}

impl<'p> TableColumn<&'p Property> for ListingColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ListingColumn::Id => "ID",
            ListingColumn::Title => "Title",
            ListingColumn::Location => "Location",
            ListingColumn::Price(_) => "Price",
            ListingColumn::Rating => "Rating",
            ListingColumn::Category => "Category",
            ListingColumn::Distance => "Distance",
            ListingColumn::Dates => "Dates",
        }
        .into()
    }

    fn format<'a>(&self, property: &'a &'p Property) -> Cow<'a, str> {
        match self {
            ListingColumn::Id => property.id.as_str().into(),
            ListingColumn::Title => match property.is_guest_favorite {
                true => format!("{} ♥", property.title).into(),
                false => property.title.as_str().into(),
            },
            ListingColumn::Location => property.location.as_str().into(),
            ListingColumn::Price(currency) => format!("{currency}{} night", property.price).into(),
            ListingColumn::Rating => format!("★ {}", property.rating).into(),
            ListingColumn::Category => property.category.name().into(),
            ListingColumn::Distance => property.distance.as_str().into(),
            ListingColumn::Dates => property.dates.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ListingColumn::Price(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, property: &&'p Property) -> Option<Color> {
        match self {
            ListingColumn::Title if property.is_guest_favorite => Some(Color::Magenta),
            ListingColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
