// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{CalendarDate, ReservationError};

/// A completed stay range, `check_in < check_out` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: CalendarDate,
    check_out: CalendarDate,
}

impl StayRange {
    /// Creates a range, `None` unless `check_in` is strictly before `check_out`.
    pub fn new(check_in: CalendarDate, check_out: CalendarDate) -> Option<Self> {
        (check_in < check_out).then_some(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> CalendarDate {
        self.check_in
    }

    pub fn check_out(&self) -> CalendarDate {
        self.check_out
    }
}

/// Raw check-in/check-out pair, either side may be absent and they may be out of order.
///
/// This is what pricing and the submission guard consume, so that both stay correct
/// for input that did not come through [`DateRangeSelection`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StayDates {
    pub check_in: Option<CalendarDate>,
    pub check_out: Option<CalendarDate>,
}

impl StayDates {
    pub fn new(check_in: Option<CalendarDate>, check_out: Option<CalendarDate>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }
}

/// The stay dates picked on the calendar.
///
/// Only three states are reachable: nothing picked, a pending check-in, or a
/// completed range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeSelection {
    #[default]
    Empty,

    /// Check-in picked, waiting for the check-out click.
    CheckIn(CalendarDate),

    /// Both endpoints picked.
    Range(StayRange),
}

impl DateRangeSelection {
    /// Applies a click on a calendar day.
    ///
    /// Days before `today` are rejected and leave the selection unchanged.
    pub fn select_date(
        &mut self,
        clicked: CalendarDate,
        today: CalendarDate,
    ) -> Result<(), ReservationError> {
        if clicked < today {
            return Err(ReservationError::PastDateClicked);
        }

        *self = match *self {
            DateRangeSelection::Empty | DateRangeSelection::Range(_) => {
                DateRangeSelection::CheckIn(clicked)
            }
            DateRangeSelection::CheckIn(check_in) => match clicked.cmp(&check_in) {
                std::cmp::Ordering::Less => DateRangeSelection::Range(StayRange {
                    check_in: clicked,
                    check_out: check_in,
                }),
                std::cmp::Ordering::Equal => DateRangeSelection::Empty,
                std::cmp::Ordering::Greater => DateRangeSelection::Range(StayRange {
                    check_in,
                    check_out: clicked,
                }),
            },
        };
        Ok(())
    }

    /// Drops both endpoints.
    pub fn clear(&mut self) {
        *self = DateRangeSelection::Empty;
    }

    pub fn check_in(&self) -> Option<CalendarDate> {
        match self {
            DateRangeSelection::Empty => None,
            DateRangeSelection::CheckIn(d) => Some(*d),
            DateRangeSelection::Range(r) => Some(r.check_in),
        }
    }

    pub fn check_out(&self) -> Option<CalendarDate> {
        match self {
            DateRangeSelection::Range(r) => Some(r.check_out),
            _ => None,
        }
    }

    /// The completed range, if any.
    pub fn range(&self) -> Option<StayRange> {
        match self {
            DateRangeSelection::Range(r) => Some(*r),
            _ => None,
        }
    }

    pub fn stay_dates(&self) -> StayDates {
        StayDates::new(self.check_in(), self.check_out())
    }

    /// How a calendar day should be drawn for this selection.
    pub fn day_state(&self, date: CalendarDate, today: CalendarDate) -> DayState {
        let range = self.range();
        DayState {
            is_past: date < today,
            is_selected: Some(date) == self.check_in() || Some(date) == self.check_out(),
            is_in_range: range.is_some_and(|r| r.check_in < date && date < r.check_out),
            is_range_start: range.is_some_and(|r| r.check_in == date),
            is_range_end: range.is_some_and(|r| r.check_out == date),
        }
    }
}

/// Per-day flags derived from a selection, for renderers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DayState {
    /// Before today, not clickable.
    pub is_past: bool,

    /// Equal to the check-in or the check-out.
    pub is_selected: bool,

    /// Strictly between check-in and check-out.
    pub is_in_range: bool,

    /// Check-in of a completed range, the fill extends to its right.
    pub is_range_start: bool,

    /// Check-out of a completed range, the fill extends to its left.
    pub is_range_end: bool,
}

impl DayState {
    /// Whether the range fill runs on from this day into the next one, so the gap
    /// between the two cells is filled too.
    pub fn joins(&self, next: &DayState) -> bool {
        (self.is_range_start || self.is_in_range) && (next.is_in_range || next.is_range_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    const TODAY: &str = "2024-06-01";

    fn click(sel: &mut DateRangeSelection, s: &str) -> Result<(), ReservationError> {
        sel.select_date(date(s), date(TODAY))
    }

    fn assert_invariant(sel: &DateRangeSelection) {
        if let (Some(a), Some(b)) = (sel.check_in(), sel.check_out()) {
            assert!(a < b, "check-in {a} must precede check-out {b}");
        }
    }

    #[test]
    fn first_click_sets_check_in() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-10").unwrap();
        assert_eq!(sel, DateRangeSelection::CheckIn(date("2024-06-10")));
        assert_eq!(sel.check_out(), None);
    }

    #[test]
    fn later_click_completes_range() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-10").unwrap();
        click(&mut sel, "2024-06-17").unwrap();
        assert_eq!(sel.check_in(), Some(date("2024-06-10")));
        assert_eq!(sel.check_out(), Some(date("2024-06-17")));
    }

    #[test]
    fn earlier_click_swaps_endpoints() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-17").unwrap();
        click(&mut sel, "2024-06-10").unwrap();
        assert_eq!(sel.check_in(), Some(date("2024-06-10")));
        assert_eq!(sel.check_out(), Some(date("2024-06-17")));
        assert_invariant(&sel);
    }

    #[test]
    fn same_click_deselects() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-10").unwrap();
        click(&mut sel, "2024-06-10").unwrap();
        assert_eq!(sel, DateRangeSelection::Empty);
    }

    #[test]
    fn click_after_range_starts_fresh() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-10").unwrap();
        click(&mut sel, "2024-06-17").unwrap();
        click(&mut sel, "2024-06-12").unwrap();
        assert_eq!(sel, DateRangeSelection::CheckIn(date("2024-06-12")));
    }

    #[test]
    fn past_click_is_rejected_without_change() {
        for start in [
            DateRangeSelection::Empty,
            DateRangeSelection::CheckIn(date("2024-06-10")),
            DateRangeSelection::Range(
                StayRange::new(date("2024-06-10"), date("2024-06-12")).unwrap(),
            ),
        ] {
            let mut sel = start;
            assert_eq!(
                click(&mut sel, "2024-05-31"),
                Err(ReservationError::PastDateClicked)
            );
            assert_eq!(sel, start);
        }
    }

    #[test]
    fn today_is_selectable() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, TODAY).unwrap();
        assert_eq!(sel.check_in(), Some(date(TODAY)));
    }

    #[test]
    fn invariant_holds_for_click_sequences() {
        let days = [
            "2024-06-05",
            "2024-06-03",
            "2024-06-03",
            "2024-06-09",
            "2024-06-02",
            "2024-06-08",
            "2024-06-08",
            "2024-06-01",
            "2024-05-20",
            "2024-06-04",
            "2024-06-04",
            "2024-06-30",
        ];
        // Every rotation of the sequence exercises a different path through the states.
        for shift in 0..days.len() {
            let mut sel = DateRangeSelection::default();
            for day in days.iter().cycle().skip(shift).take(days.len() * 2) {
                let _ = click(&mut sel, day);
                assert_invariant(&sel);
            }
        }
    }

    #[test]
    fn stay_range_requires_order() {
        assert!(StayRange::new(date("2024-06-10"), date("2024-06-10")).is_none());
        assert!(StayRange::new(date("2024-06-11"), date("2024-06-10")).is_none());
        assert!(StayRange::new(date("2024-06-10"), date("2024-06-11")).is_some());
    }

    #[test]
    fn derives_day_states() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-10").unwrap();
        click(&mut sel, "2024-06-13").unwrap();
        let today = date(TODAY);

        let past = sel.day_state(date("2024-05-30"), today);
        assert!(past.is_past && !past.is_selected);

        let start = sel.day_state(date("2024-06-10"), today);
        assert!(start.is_selected && start.is_range_start && !start.is_in_range);

        let middle = sel.day_state(date("2024-06-11"), today);
        assert!(middle.is_in_range && !middle.is_selected);

        let end = sel.day_state(date("2024-06-13"), today);
        assert!(end.is_selected && end.is_range_end && !end.is_in_range);

        let outside = sel.day_state(date("2024-06-14"), today);
        assert_eq!(outside, DayState::default());
    }

    #[test]
    fn range_fill_joins_neighbours() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-10").unwrap();
        click(&mut sel, "2024-06-12").unwrap();
        let today = date(TODAY);
        let state = |s: &str| sel.day_state(date(s), today);

        assert!(!state("2024-06-09").joins(&state("2024-06-10")));
        assert!(state("2024-06-10").joins(&state("2024-06-11")));
        assert!(state("2024-06-11").joins(&state("2024-06-12")));
        assert!(!state("2024-06-12").joins(&state("2024-06-13")));

        // A one-night stay has no day in between
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-10").unwrap();
        click(&mut sel, "2024-06-11").unwrap();
        let start = sel.day_state(date("2024-06-10"), today);
        let end = sel.day_state(date("2024-06-11"), today);
        assert!(start.joins(&end));
    }

    #[test]
    fn pending_check_in_has_no_range_fill() {
        let mut sel = DateRangeSelection::default();
        click(&mut sel, "2024-06-10").unwrap();
        let state = sel.day_state(date("2024-06-10"), date(TODAY));
        assert!(state.is_selected);
        assert!(!state.is_range_start && !state.is_range_end);
    }
}
