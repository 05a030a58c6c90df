// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use crate::calendar::{MonthGrid, YearMonth, month_grid};
use crate::reservation::{Confirmation, submit};
use crate::{
    CalendarDate, DateRangeSelection, DayState, PriceQuote, Property, ReservationError, ViewMonth,
};

/// State of one property detail view: picked dates, visible month and the last
/// validation error.
///
/// Everything is discarded when the session is dropped.
#[derive(Debug, Clone)]
pub struct BookingSession {
    property: Property,
    selection: DateRangeSelection,
    view: ViewMonth,
    error: Option<ReservationError>,
}

impl BookingSession {
    /// Opens the detail view of a property with no dates picked.
    pub fn open(property: Property, today: CalendarDate) -> Self {
        tracing::debug!(id = %property.id, %today, "opening booking session");
        Self {
            property,
            selection: DateRangeSelection::Empty,
            view: ViewMonth::current(today),
            error: None,
        }
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn selection(&self) -> &DateRangeSelection {
        &self.selection
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    /// The error to display, if any.
    pub fn error(&self) -> Option<ReservationError> {
        self.error
    }

    /// Handles a click on a calendar day.
    pub fn select_date(&mut self, clicked: CalendarDate, today: CalendarDate) {
        self.error = None;
        if let Err(e) = self.selection.select_date(clicked, today) {
            tracing::debug!(%clicked, %today, "rejected date click");
            self.error = Some(e);
        }
    }

    /// "Clear dates": drops both endpoints and any error.
    pub fn clear_dates(&mut self) {
        self.selection.clear();
        self.error = None;
    }

    /// Scrolls the calendar by `delta` months, never before `now`.
    pub fn change_month(&mut self, delta: i32, now: YearMonth) {
        self.view = self.view.advance(delta, now);
    }

    /// The price breakdown of the current selection.
    pub fn quote(&self) -> PriceQuote {
        PriceQuote::new(self.property.price, self.selection.stay_dates())
    }

    /// Submits the reservation intent.
    ///
    /// A failure is kept as the session error, a success clears it.
    pub fn reserve(&mut self, today: CalendarDate) -> Result<Confirmation, ReservationError> {
        let result = submit(&self.property.title, self.selection.stay_dates(), today);
        self.error = result.as_ref().err().copied();
        result
    }

    /// The day grids of the two visible months.
    pub fn visible_months(&self) -> [MonthGrid; 2] {
        self.view
            .visible()
            .map(|m| month_grid(m.year(), m.month() as i32))
    }

    pub fn day_state(&self, date: CalendarDate, today: CalendarDate) -> DayState {
        self.selection.day_state(date, today)
    }
}
