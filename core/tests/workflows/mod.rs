// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the voyageur-core crate.
//!
//! These tests drive a booking session the way the detail view does: clicking
//! days, scrolling months, quoting and submitting.

mod booking_flow;
mod catalog_config;
mod selection_properties;
