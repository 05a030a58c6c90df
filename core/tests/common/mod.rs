// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Temporary catalog files with auto-cleanup

mod fixtures;
mod temp_catalog;

#[allow(unused_imports)]
pub use fixtures::{TestPropertyBuilder, date, test_property, today};
pub use temp_catalog::TempCatalog;
