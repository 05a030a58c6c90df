// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven catalog loading workflow tests.

use std::path::PathBuf;

use voyageur_core::{Category, Config, DateRangeSelection, Voyageur};

use crate::common::TempCatalog;

const CUSTOM_CATALOG: &str = r#"
[[property]]
id = "nl-1"
title = "Canal House"
location = "Amsterdam, Netherlands"
distance = "Jordaan"
dates = "Apr 3 - 8"
price = 210
rating = 4.7
category = "lakefront"
amenities = ["Bikes", "Canal View"]

[[property]]
id = "nl-2"
title = "Dune Cabin"
location = "Texel, Netherlands"
distance = "North Sea"
dates = "Jul 1 - 6"
price = 140
rating = 4.6
category = "cabins"
is_guest_favorite = true
"#;

#[tokio::test]
async fn config_default_uses_builtin_catalog() {
    let voyageur = Voyageur::new(Config::default()).await.unwrap();

    assert_eq!(voyageur.catalog().properties().len(), 10);
    assert_eq!(voyageur.config().currency, "€");
    assert_eq!(voyageur.listings(Category::Icons).len(), 10);
    assert!(
        voyageur
            .listings(Category::Arctic)
            .iter()
            .all(|p| p.category == Category::Arctic)
    );
}

#[tokio::test]
async fn config_catalog_path_replaces_builtin() {
    let catalog = TempCatalog::new(CUSTOM_CATALOG).await.unwrap();
    let config = Config {
        catalog_path: Some(catalog.path.clone()),
        currency: "$".to_string(),
    };

    let voyageur = Voyageur::new(config).await.unwrap();

    assert_eq!(voyageur.catalog().properties().len(), 2);
    assert_eq!(voyageur.config().currency, "$");
    let cabins = voyageur.listings(Category::Cabins);
    assert_eq!(cabins.len(), 1);
    assert_eq!(cabins[0].id, "nl-2");
    assert!(cabins[0].is_guest_favorite);

    // No arctic listings: the full list is shown instead
    assert_eq!(voyageur.listings(Category::Arctic).len(), 2);
}

#[tokio::test]
async fn config_missing_catalog_is_an_error() {
    let config = Config {
        catalog_path: Some(PathBuf::from("/nonexistent/voyageur/catalog.toml")),
        ..Default::default()
    };

    let err = Voyageur::new(config).await.unwrap_err();
    assert!(err.to_string().contains("Failed to read catalog"), "{err}");
}

#[tokio::test]
async fn open_session_by_id() {
    let catalog = TempCatalog::new(CUSTOM_CATALOG).await.unwrap();
    let config = Config {
        catalog_path: Some(catalog.path.clone()),
        ..Default::default()
    };
    let voyageur = Voyageur::new(config).await.unwrap();

    let session = voyageur.open("nl-1").unwrap();
    assert_eq!(session.property().title, "Canal House");
    assert_eq!(*session.selection(), DateRangeSelection::Empty);
    assert_eq!(session.view().month(), voyageur.current_month());

    let err = voyageur.open("fr-1").unwrap_err();
    assert_eq!(err.to_string(), "Property not found: fr-1");
}
