// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use cliclack::{input, intro, log, note, outro};

const CHAT_NOTE: &str = "\
• Ask about the area, food, culture or getting around
• /itinerary     a 3-day itinerary for this place
• /itinerary 5   a 5-day itinerary
• /exit          leave the chat (or press Esc)";

/// What the traveller typed in the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Message(String),
    Itinerary(u32),
    Exit,
}

impl ChatInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            _ if line.is_empty() || line == "/exit" || line == "/quit" => ChatInput::Exit,
            None if line == "/itinerary" => ChatInput::Itinerary(3),
            Some(("/itinerary", days)) => match days.trim().parse() {
                Ok(days) if (1..=14).contains(&days) => ChatInput::Itinerary(days),
                _ => ChatInput::Message(line.to_string()),
            },
            _ => ChatInput::Message(line.to_string()),
        }
    }
}

pub fn chat_intro(title: &str, greeting: &str) -> Result<(), Box<dyn std::error::Error>> {
    intro(format!("Voyageur Concierge · {title}"))?;
    note("Tips", CHAT_NOTE)?;
    log::info(greeting)?;
    Ok(())
}

pub fn prompt_chat() -> Result<ChatInput, Box<dyn std::error::Error>> {
    let result: io::Result<String> = input("You")
        .placeholder("e.g., Where can I find the best croissants?")
        .interact();

    match result {
        Ok(line) => Ok(ChatInput::parse(&line)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(ChatInput::Exit),
        Err(e) => Err(e.into()),
    }
}

pub fn chat_outro() -> Result<(), Box<dyn std::error::Error>> {
    outro("Bon voyage!")?;
    Ok(())
}
