// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties that must hold for any sequence of calendar clicks.

use voyageur_core::{
    CalendarDate, DateRangeSelection, PriceQuote, ReservationError, StayDates, nights, submit,
};

use crate::common::{date, today};

fn clicks() -> Vec<CalendarDate> {
    [
        "2024-06-10", "2024-06-15", "2024-06-20", "2024-06-18", "2024-06-20", "2024-06-30",
        "2024-06-01", "2024-07-02", "2024-06-16", "2024-06-16", "2024-06-17", "2024-06-14",
    ]
    .into_iter()
    .map(date)
    .collect()
}

#[test]
fn selection_invariants_hold_for_any_click_order() {
    let base = clicks();
    for start in 0..base.len() {
        let mut selection = DateRangeSelection::default();
        for clicked in base.iter().cycle().skip(start).take(base.len() * 2) {
            let before = selection;
            let result = selection.select_date(*clicked, today());

            if *clicked < today() {
                assert_eq!(result, Err(ReservationError::PastDateClicked));
                assert_eq!(selection, before);
            }

            // check-out implies check-in, and both are ordered
            if let Some(check_out) = selection.check_out() {
                let check_in = selection.check_in().unwrap();
                assert!(check_in < check_out);
            }

            // nothing picked is ever in the past
            if let Some(check_in) = selection.check_in() {
                assert!(check_in >= today());
            }

            let quote = PriceQuote::new(350, selection.stay_dates());
            assert_eq!(quote.nights > 0, selection.range().is_some());
        }
    }
}

#[test]
fn clicking_the_check_in_again_clears_it() {
    let mut selection = DateRangeSelection::default();
    selection.select_date(date("2024-06-20"), today()).unwrap();
    selection.select_date(date("2024-06-20"), today()).unwrap();
    assert_eq!(selection, DateRangeSelection::Empty);
}

#[test]
fn nights_examples() {
    assert_eq!(nights(Some(date("2024-06-10")), Some(date("2024-06-17"))), 7);
    assert_eq!(nights(Some(date("2024-02-28")), Some(date("2024-03-01"))), 2);
    assert_eq!(nights(Some(date("2024-06-17")), Some(date("2024-06-10"))), 0);
    assert_eq!(nights(None, Some(date("2024-06-10"))), 0);
    assert_eq!(nights(Some(date("2024-06-10")), None), 0);
}

#[test]
fn guard_rules_apply_in_order() {
    let check = |check_in: Option<&str>, check_out: Option<&str>| {
        submit(
            "Test Loft",
            StayDates::new(check_in.map(date), check_out.map(date)),
            today(),
        )
    };

    assert_eq!(check(None, None), Err(ReservationError::MissingCheckIn));
    assert_eq!(check(None, Some("2024-06-20")), Err(ReservationError::MissingCheckIn));
    assert_eq!(check(Some("2024-06-20"), None), Err(ReservationError::MissingCheckOut));
    assert_eq!(
        check(Some("2024-06-10"), Some("2024-06-20")),
        Err(ReservationError::DatesInPast)
    );
    assert_eq!(
        check(Some("2024-06-20"), Some("2024-06-18")),
        Err(ReservationError::InvalidOrder)
    );
    assert_eq!(
        check(Some("2024-06-20"), Some("2024-06-20")),
        Err(ReservationError::InvalidOrder)
    );
    assert!(check(Some("2024-06-20"), Some("2024-06-21")).is_ok());
}

#[test]
fn unpriced_quote_for_out_of_order_dates() {
    let quote = PriceQuote::new(
        350,
        StayDates::new(Some(date("2024-06-20")), Some(date("2024-06-18"))),
    );
    assert!(!quote.is_priced());
    assert_eq!(quote.subtotal, 0);
    assert_eq!(quote.service_fee, 0);
}
