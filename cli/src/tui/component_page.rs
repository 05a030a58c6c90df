// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

pub struct SinglePage<S, C: Component<S>> {
    title: String,
    instructions: Line<'static>,
    inner: C,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(title: String, instructions: Line<'static>, inner: C) -> Self {
        Self {
            title,
            instructions,
            inner,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, store: &Rc<RefCell<S>>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", self.title).bold());
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(title.centered())
            .title_bottom(self.instructions.clone().centered())
            .white();

        let inner_area = block.inner(area);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<S>>,
        key: KeyCode,
    ) -> Option<Message> {
        if let Some(msg) = self.inner.on_key(dispatcher, store, key) {
            return Some(msg);
        }

        match key {
            KeyCode::Esc | KeyCode::Char('q') => Some(Message::Exit),
            _ => None,
        }
    }
}
