// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::path::Path;

use tokio::fs;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Listing category shown in the category bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Shows every listing.
    #[default]
    Icons,
    Beachfront,
    AmazingPools,
    Cabins,
    Omg,
    Camping,
    TinyHomes,
    Lakefront,
    Arctic,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 9] = [
        Category::Icons,
        Category::Beachfront,
        Category::AmazingPools,
        Category::Cabins,
        Category::Omg,
        Category::Camping,
        Category::TinyHomes,
        Category::Lakefront,
        Category::Arctic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Icons => "Icons",
            Category::Beachfront => "Beachfront",
            Category::AmazingPools => "Amazing pools",
            Category::Cabins => "Cabins",
            Category::Omg => "OMG!",
            Category::Camping => "Camping",
            Category::TinyHomes => "Tiny homes",
            Category::Lakefront => "Lakefront",
            Category::Arctic => "Arctic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bookable property.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    pub distance: String,
    pub dates: String,

    /// Nightly rate in whole currency units.
    pub price: u32,
    pub rating: f32,
    pub category: Category,

    #[serde(default)]
    pub is_guest_favorite: bool,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// The read-only list of properties.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Catalog {
    #[serde(rename = "property", default)]
    properties: Vec<Property>,
}

impl Catalog {
    /// The demo catalog bundled with the application.
    pub fn builtin() -> Self {
        match Self::parse(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(err = %e, "bundled catalog is malformed");
                Self {
                    properties: Vec::new(),
                }
            }
        }
    }

    /// Loads a catalog from a TOML file with `[[property]]` tables.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read catalog at {}: {e}", path.display()))?;

        let catalog = Self::parse(&content)
            .map_err(|e| format!("Failed to parse catalog at {}: {e}", path.display()))?;

        tracing::debug!(count = catalog.properties.len(), "catalog loaded");
        Ok(catalog)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Finds a property by id.
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Properties of a category.
    ///
    /// `Icons` lists everything, and a category with no listings falls back to the
    /// full list so the grid is never empty.
    pub fn filter(&self, category: Category) -> Vec<&Property> {
        let all = || self.properties.iter().collect();
        if category == Category::Icons {
            return all();
        }

        let filtered: Vec<_> = self
            .properties
            .iter()
            .filter(|p| p.category == category)
            .collect();

        if filtered.is_empty() {
            tracing::debug!(%category, "no listings in category, showing all");
            all()
        } else {
            filtered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.properties().len(), 10);

        let paris = catalog.get("fr-1").unwrap();
        assert_eq!(paris.title, "Eiffel Tower View Apartment");
        assert_eq!(paris.price, 350);
        assert_eq!(paris.category, Category::Icons);
        assert!(paris.is_guest_favorite);
        assert_eq!(paris.amenities.len(), 4);
        assert_eq!(paris.description, None);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(Catalog::builtin().get("xx-9").is_none());
    }

    #[test]
    fn icons_lists_everything() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.filter(Category::Icons).len(), 10);
    }

    #[test]
    fn filters_by_category() {
        let catalog = Catalog::builtin();
        let cabins = catalog.filter(Category::Cabins);
        assert_eq!(cabins.len(), 1);
        assert_eq!(cabins[0].id, "uk-1");
    }

    #[test]
    fn empty_category_falls_back_to_all() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.filter(Category::Beachfront).len(), 10);
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::Omg.to_string(), "OMG!");
        assert_eq!(Category::AmazingPools.to_string(), "Amazing pools");
        assert_eq!(Category::ALL.len(), 9);
    }

    #[tokio::test]
    async fn loads_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let content = r#"
[[property]]
id = "pt-1"
title = "Lisbon Riverside Flat"
location = "Lisbon, Portugal"
distance = "Alfama"
dates = "Mar 3 - 8"
price = 130
rating = 4.8
category = "lakefront"
description = "Tiled walls and a view of the Tagus."
"#;
        tokio::fs::write(&path, content).await.unwrap();

        let catalog = Catalog::load(&path).await.unwrap();
        let flat = catalog.get("pt-1").unwrap();
        assert_eq!(flat.category, Category::Lakefront);
        assert!(flat.images.is_empty());
        assert_eq!(
            flat.description.as_deref(),
            Some("Tiled walls and a view of the Tagus.")
        );
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("nope.toml")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
