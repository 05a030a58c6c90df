// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{CalendarDate, YearMonth};

/// The month anchoring the two-month calendar display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth(YearMonth);

impl ViewMonth {
    pub fn new(month: YearMonth) -> Self {
        Self(month)
    }

    /// The view of the month containing `today`.
    pub fn current(today: CalendarDate) -> Self {
        Self(YearMonth::of(today))
    }

    pub fn month(&self) -> YearMonth {
        self.0
    }

    /// Moves the view by `delta` months, never before `now`.
    ///
    /// A move that would land before the real current month returns the view
    /// unchanged. Moving forward always succeeds.
    pub fn advance(self, delta: i32, now: YearMonth) -> Self {
        let shifted = self.0.add_months(delta);
        if shifted < now {
            tracing::debug!(%shifted, %now, "refusing to navigate before the current month");
            self
        } else {
            Self(shifted)
        }
    }

    /// The two consecutive months shown side by side.
    pub fn visible(&self) -> [YearMonth; 2] {
        [self.0, self.0.add_months(1)]
    }
}
