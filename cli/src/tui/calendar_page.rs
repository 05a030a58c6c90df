// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use voyageur_core::{CalendarDate, DayCell, DayState, MonthGrid, WEEKDAY_HEADERS};

use crate::quote_formatter::{QuoteFormatter, SELECT_DATES_HINT};
use crate::tui::booking_store::BookingStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

const MONTH_WIDTH: u16 = 20;
const MONTH_GAP: u16 = 4;

/// Two months of days with the price of the picked stay below.
pub struct CalendarPage {
    formatter: QuoteFormatter,
}

impl CalendarPage {
    pub fn new(currency: &str) -> Self {
        Self {
            formatter: QuoteFormatter::new(currency),
        }
    }

    fn header(&self, store: &BookingStore) -> Vec<Line<'static>> {
        let property = store.session.property();
        let mut headline = vec![
            Span::raw(format!("★ {}", property.rating)),
            Span::raw(format!(" · {} · {}", property.location, property.distance)),
        ];
        if property.is_guest_favorite {
            headline.push(" · Guest favorite".magenta());
        }

        vec![
            Line::from(Span::raw(property.title.clone()).bold()),
            Line::from(headline),
            Line::from(vec![
                Span::raw(self.formatter.money(property.price)).bold(),
                " night".into(),
            ]),
        ]
    }

    fn price(&self, store: &BookingStore) -> Vec<Line<'static>> {
        let quote = store.session.quote();
        let rows = self.formatter.breakdown(&quote);
        if rows.is_empty() {
            return vec![Line::from(SELECT_DATES_HINT.dark_gray())];
        }

        let last = rows.len() - 1;
        rows.into_iter()
            .enumerate()
            .map(|(i, (label, amount))| {
                let line = Line::from(format!("{label:<28}{amount:>10}"));
                if i == last { line.bold() } else { line }
            })
            .collect()
    }

    fn status(&self, store: &BookingStore) -> Vec<Line<'static>> {
        if let Some(e) = store.session.error() {
            return vec![Line::from(Span::raw(e.to_string()).red())];
        }

        match &store.confirmation {
            Some(confirmation) => {
                let mut lines: Vec<Line> = confirmation
                    .to_string()
                    .lines()
                    .map(|l| Line::from(Span::raw(l.to_string()).green()))
                    .collect();
                lines.push(Line::from("You won't be charged yet".dark_gray()));
                lines
            }
            None => Vec::new(),
        }
    }
}

impl Component<BookingStore> for CalendarPage {
    fn render(&self, store: &Rc<RefCell<BookingStore>>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let [header, months, price, status] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(self.header(&store)).render(header, buf);

        let [left, _, right] = Layout::horizontal([
            Constraint::Length(MONTH_WIDTH),
            Constraint::Length(MONTH_GAP),
            Constraint::Length(MONTH_WIDTH),
        ])
        .areas(months);
        let today = store.today();
        let [first, second] = store.session.visible_months();
        Paragraph::new(month_lines(&store, &first, today)).render(left, buf);
        Paragraph::new(month_lines(&store, &second, today)).render(right, buf);

        Paragraph::new(self.price(&store)).render(price, buf);
        Paragraph::new(self.status(&store))
            .wrap(Wrap { trim: true })
            .render(status, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &Rc<RefCell<BookingStore>>,
        key: KeyCode,
    ) -> Option<Message> {
        let action = match key {
            KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(-1),
            KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(1),
            KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(-7),
            KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(7),
            KeyCode::Enter | KeyCode::Char(' ') => Action::SelectDate,
            KeyCode::Char('[') | KeyCode::PageUp => Action::ChangeMonth(-1),
            KeyCode::Char(']') | KeyCode::PageDown => Action::ChangeMonth(1),
            KeyCode::Char('c') => Action::ClearDates,
            KeyCode::Char('r') => Action::Reserve,
            _ => return None,
        };
        dispatcher.dispatch(&action);
        Some(Message::Handled)
    }
}

fn month_lines(
    store: &BookingStore,
    grid: &MonthGrid,
    today: CalendarDate,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::raw(grid.month.to_string()).bold()).centered(),
        Line::from(Span::raw(WEEKDAY_HEADERS.join(" ")).dark_gray()),
    ];
    for week in grid.weeks() {
        let states: Vec<Option<DayState>> = week
            .iter()
            .map(|cell| cell.date().map(|d| store.session.day_state(d, today)))
            .collect();

        let mut spans = Vec::with_capacity(week.len() * 2);
        for (i, cell) in week.iter().enumerate() {
            if i > 0 {
                spans.push(separator(states[i - 1], states[i]));
            }
            spans.push(day_span(store, cell, states[i], today));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// The gap between two cells, filled when the range runs through it.
fn separator(left: Option<DayState>, right: Option<DayState>) -> Span<'static> {
    match (left, right) {
        (Some(l), Some(r)) if l.joins(&r) => Span::styled(" ", Style::new().on_dark_gray()),
        _ => Span::raw(" "),
    }
}

fn day_span(
    store: &BookingStore,
    cell: &DayCell,
    state: Option<DayState>,
    today: CalendarDate,
) -> Span<'static> {
    let (Some(date), Some(state)) = (cell.date(), state) else {
        return Span::raw("  ");
    };

    let mut style = Style::new();
    if state.is_past {
        style = style.dark_gray().crossed_out();
    } else if state.is_selected {
        style = style.black().on_white().bold();
    } else if state.is_in_range {
        style = style.on_dark_gray();
    } else if date == today {
        style = style.bold();
    }
    if date == store.cursor {
        style = style.reversed();
    }
    Span::styled(format!("{:>2}", date.day()), style)
}
