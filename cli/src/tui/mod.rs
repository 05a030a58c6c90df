// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod booking_store;
mod calendar_page;
mod component;
mod component_page;
mod dispatcher;

pub use app::book;
