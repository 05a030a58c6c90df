// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories.

use voyageur_core::{CalendarDate, Category, Property};

/// Parses a `YYYY-MM-DD` date.
pub fn date(s: &str) -> CalendarDate {
    s.parse().expect("test dates are valid")
}

/// The fixed "today" of the booking tests, a Saturday.
pub fn today() -> CalendarDate {
    date("2024-06-15")
}

/// A property priced at 350 per night.
pub fn test_property() -> Property {
    TestPropertyBuilder::new("test-1").build()
}

/// Builder for test properties.
#[derive(Debug)]
pub struct TestPropertyBuilder {
    property: Property,
}

impl TestPropertyBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            property: Property {
                id: id.to_string(),
                title: "Test Loft".to_string(),
                location: "Lyon, France".to_string(),
                distance: "Old Town".to_string(),
                dates: "Jun 20 - 25".to_string(),
                price: 350,
                rating: 4.5,
                category: Category::Icons,
                is_guest_favorite: false,
                images: Vec::new(),
                amenities: vec!["Wifi".to_string()],
                description: None,
            },
        }
    }

    #[allow(dead_code)]
    pub fn with_price(mut self, price: u32) -> Self {
        self.property.price = price;
        self
    }

    #[allow(dead_code)]
    pub fn with_category(mut self, category: Category) -> Self {
        self.property.category = category;
        self
    }

    pub fn build(self) -> Property {
        self.property
    }
}
