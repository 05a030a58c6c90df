// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of Voyageur.

mod arg;
mod calendar_view;
mod cli;
mod cmd_book;
mod cmd_concierge;
mod cmd_generate_completion;
mod cmd_listings;
mod cmd_quote;
mod cmd_reserve;
mod cmd_show;
mod config;
mod listing_formatter;
mod prompt;
mod quote_formatter;
mod table;
mod tui;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
