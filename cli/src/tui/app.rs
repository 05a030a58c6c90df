// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use voyageur_core::{BookingSession, Confirmation};

use crate::tui::booking_store::{BookingStore, Clock};
use crate::tui::calendar_page::CalendarPage;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::Dispatcher;

/// Runs the interactive booking calendar until the user leaves.
///
/// Today's date is taken from `clock` on every key press and every frame. Returns
/// the last reservation accepted before leaving, if any.
pub fn book(
    session: BookingSession,
    clock: Clock,
    currency: &str,
) -> Result<Option<Confirmation>, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(BookingStore::new(session, clock)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        BookingStore::register_to(store.clone(), &mut dispatcher);
        let mut view = BookingView::new(dispatcher, currency);

        loop {
            if let Err(e) = view.draw(&store, &mut terminal) {
                break Err(e);
            }

            match view.read_event(&store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store.confirmation)
}

struct BookingView {
    dispatcher: Dispatcher,
    page: SinglePage<BookingStore, CalendarPage>,
}

impl BookingView {
    fn new(dispatcher: Dispatcher, currency: &str) -> Self {
        let page = SinglePage::new(
            "Voyageur".to_owned(),
            instructions(),
            CalendarPage::new(currency),
        );
        Self { dispatcher, page }
    }

    fn draw(
        &self,
        store: &Rc<RefCell<BookingStore>>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        terminal.draw(|frame| {
            let area = frame.area();
            self.page.render(store, area, frame.buffer_mut());
        })?;
        Ok(())
    }

    fn read_event(
        &mut self,
        store: &Rc<RefCell<BookingStore>>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.page.on_key(&mut self.dispatcher, store, key.code))
            }
            _ => Ok(None),
        }
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Move ".into(),
        "<Arrows>".blue().bold(),
        " Pick ".into(),
        "<Enter>".blue().bold(),
        " Month ".into(),
        "<[ ]>".blue().bold(),
        " Clear ".into(),
        "<c>".blue().bold(),
        " Reserve ".into(),
        "<r>".blue().bold(),
        " Exit ".into(),
        "<Esc> ".blue().bold(),
    ])
}
