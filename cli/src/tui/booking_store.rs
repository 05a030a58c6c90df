// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, fmt, rc::Rc};

use voyageur_core::{BookingSession, CalendarDate, Confirmation, YearMonth};

use crate::tui::dispatcher::{Action, Dispatcher};

/// Source of today's date, read again for every action and every frame.
pub type Clock = Box<dyn Fn() -> CalendarDate>;

pub struct BookingStore {
    pub session: BookingSession,
    clock: Clock,

    /// The day under the keyboard cursor, always within the visible months.
    pub cursor: CalendarDate,

    /// The last accepted reservation, dropped on the next change of dates.
    pub confirmation: Option<Confirmation>,
}

impl BookingStore {
    pub fn new(session: BookingSession, clock: Clock) -> Self {
        let cursor = session.view().month().first_day().max(clock());
        Self {
            session,
            clock,
            cursor,
            confirmation: None,
        }
    }

    pub fn today(&self) -> CalendarDate {
        (self.clock)()
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            let today = that.today();
            match *action {
                Action::MoveCursor(days) => that.move_cursor(days, today),
                Action::SelectDate => {
                    let cursor = that.cursor;
                    that.session.select_date(cursor, today);
                    that.confirmation = None;
                }
                Action::ChangeMonth(delta) => that.change_month(delta, today),
                Action::ClearDates => {
                    that.session.clear_dates();
                    that.confirmation = None;
                }
                Action::Reserve => {
                    that.confirmation = that.session.reserve(today).ok();
                }
            }
        }));
        dispatcher.register(callback);
    }

    fn move_cursor(&mut self, days: i64, today: CalendarDate) {
        let Some(target) = self.cursor.add_days(days) else {
            return;
        };
        let now = YearMonth::of(today);
        let month = YearMonth::of(target);
        if month < now {
            return;
        }

        self.cursor = target;
        let [first, second] = self.session.view().visible();
        if month < first {
            self.session.change_month(months_between(first, month), now);
        } else if month > second {
            self.session.change_month(months_between(second, month), now);
        }
    }

    fn change_month(&mut self, delta: i32, today: CalendarDate) {
        self.session.change_month(delta, YearMonth::of(today));
        let [first, second] = self.session.view().visible();
        let month = YearMonth::of(self.cursor);
        if month < first || month > second {
            self.cursor = first.first_day().max(today);
        }
    }
}

impl fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingStore")
            .field("session", &self.session)
            .field("cursor", &self.cursor)
            .field("confirmation", &self.confirmation)
            .finish_non_exhaustive()
    }
}

fn months_between(from: YearMonth, to: YearMonth) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}
