// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Booking session workflow tests.

use voyageur_core::{
    BookingSession, DateRangeSelection, DayCell, ReservationError, StayRange, YearMonth,
};

use crate::common::{TestPropertyBuilder, date, test_property, today};

#[test]
fn booking_pick_range_quote_and_reserve() {
    // Arrange
    let mut session = BookingSession::open(test_property(), today());

    // Act - pick June 20 to June 25
    session.select_date(date("2024-06-20"), today());
    session.select_date(date("2024-06-25"), today());

    // Assert - quoted and reservable
    let quote = session.quote();
    assert_eq!(quote.nights, 5);
    assert_eq!(quote.subtotal, 1750);
    assert_eq!(quote.service_fee, 245);
    assert_eq!(quote.cleaning_fee, 45);
    assert_eq!(quote.total, 2040);

    let confirmation = session.reserve(today()).unwrap();
    assert_eq!(
        confirmation.to_string(),
        "Reservation initiated for Test Loft\nDates: 2024-06-20 to 2024-06-25"
    );
    assert_eq!(session.error(), None);
}

#[test]
fn booking_reversed_clicks_are_swapped() {
    let mut session = BookingSession::open(test_property(), today());

    session.select_date(date("2024-07-04"), today());
    session.select_date(date("2024-07-01"), today());

    assert_eq!(
        session.selection().range(),
        StayRange::new(date("2024-07-01"), date("2024-07-04"))
    );
    assert_eq!(session.quote().nights, 3);
}

#[test]
fn booking_past_click_is_rejected_without_losing_selection() {
    let mut session = BookingSession::open(test_property(), today());
    session.select_date(date("2024-06-20"), today());

    session.select_date(date("2024-06-14"), today());

    assert_eq!(session.error(), Some(ReservationError::PastDateClicked));
    assert_eq!(
        *session.selection(),
        DateRangeSelection::CheckIn(date("2024-06-20"))
    );
    assert_eq!(
        session.error().unwrap().to_string(),
        "Cannot select dates in the past."
    );
}

#[test]
fn booking_today_is_selectable() {
    let mut session = BookingSession::open(test_property(), today());

    session.select_date(today(), today());
    session.select_date(date("2024-06-16"), today());

    assert_eq!(session.error(), None);
    assert_eq!(session.quote().nights, 1);
    assert!(session.reserve(today()).is_ok());
}

#[test]
fn booking_new_range_after_completed_one() {
    let mut session = BookingSession::open(test_property(), today());
    session.select_date(date("2024-06-20"), today());
    session.select_date(date("2024-06-25"), today());

    session.select_date(date("2024-06-18"), today());

    assert_eq!(
        *session.selection(),
        DateRangeSelection::CheckIn(date("2024-06-18"))
    );
    assert!(!session.quote().is_priced());
    assert_eq!(
        session.reserve(today()),
        Err(ReservationError::MissingCheckOut)
    );
}

#[test]
fn booking_calendar_grids_follow_navigation() {
    let mut session = BookingSession::open(test_property(), today());
    let now = YearMonth::of(today());

    // June 2024 starts on a Saturday, July on a Monday
    let [june, july] = session.visible_months();
    assert_eq!(june.month, YearMonth::new(2024, 6));
    assert_eq!(june.leading_blanks(), 6);
    assert_eq!(july.leading_blanks(), 1);
    assert_eq!(
        june.cells.last().and_then(DayCell::date),
        Some(date("2024-06-30"))
    );

    // Scrolling back from the current month is a no-op
    session.change_month(-1, now);
    assert_eq!(session.view().month(), now);

    // Forward across the year boundary
    session.change_month(7, now);
    let [jan, feb] = session.visible_months();
    assert_eq!(jan.month, YearMonth::new(2025, 1));
    assert_eq!(feb.month, YearMonth::new(2025, 2));
    assert_eq!(feb.cells.len() - feb.leading_blanks(), 28);
}

#[test]
fn booking_day_states_draw_the_range() {
    let mut session = BookingSession::open(test_property(), today());
    session.select_date(date("2024-06-20"), today());
    session.select_date(date("2024-06-23"), today());

    let start = session.day_state(date("2024-06-20"), today());
    assert!(start.is_selected && start.is_range_start && !start.is_in_range);

    let middle = session.day_state(date("2024-06-21"), today());
    assert!(middle.is_in_range && !middle.is_selected);

    let end = session.day_state(date("2024-06-23"), today());
    assert!(end.is_selected && end.is_range_end);

    let past = session.day_state(date("2024-06-01"), today());
    assert!(past.is_past && !past.is_selected);
}

#[test]
fn booking_clear_dates_then_reserve_reports_missing_check_in() {
    let mut session = BookingSession::open(
        TestPropertyBuilder::new("cheap").with_price(80).build(),
        today(),
    );
    session.select_date(date("2024-06-20"), today());
    session.select_date(date("2024-06-22"), today());
    assert_eq!(session.quote().total, 80 * 2 + 22 + 45);

    session.clear_dates();

    assert_eq!(
        session.reserve(today()),
        Err(ReservationError::MissingCheckIn)
    );
    assert_eq!(
        session.error().unwrap().to_string(),
        "Please select a check-in date."
    );
}
