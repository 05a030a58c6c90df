// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of Voyageur: the stay calendar, date-range selection, pricing and the
//! reservation guard, plus the property catalog they operate on.

mod calendar;
mod catalog;
mod config;
mod date;
mod error;
mod navigation;
mod pricing;
mod reservation;
mod selection;
mod session;
mod voyageur;

pub use crate::calendar::{DayCell, MonthGrid, WEEKDAY_HEADERS, YearMonth, month_grid};
pub use crate::catalog::{Catalog, Category, Property};
pub use crate::config::{APP_NAME, Config, get_config_dir};
pub use crate::date::CalendarDate;
pub use crate::error::ReservationError;
pub use crate::navigation::ViewMonth;
pub use crate::pricing::{CLEANING_FEE, PriceQuote, SERVICE_FEE_PERCENT, SERVICE_FEE_RATE, nights};
pub use crate::reservation::{Confirmation, submit};
pub use crate::selection::{DateRangeSelection, DayState, StayDates, StayRange};
pub use crate::session::BookingSession;
pub use crate::voyageur::Voyageur;
