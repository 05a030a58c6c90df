// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};

use clap::{ArgMatches, Command, arg};
use clap_num::number_range;
use colored::Colorize;
use voyageur_concierge::Concierge;
use voyageur_core::Voyageur;

use crate::arg::PropertyArgs;
use crate::config::Config;
use crate::prompt::{ChatInput, chat_intro, chat_outro, prompt_chat};

#[derive(Debug, Clone)]
pub struct CmdConcierge {
    pub id: String,
    pub itinerary: Option<u32>,
}

impl CmdConcierge {
    pub const NAME: &str = "concierge";

    pub fn command() -> Command {
        fn from_1_to_14(s: &str) -> Result<u32, String> {
            number_range(s, 1, 14)
        }

        Command::new(Self::NAME)
            .about("Chat with the travel concierge about a property")
            .arg(PropertyArgs::id())
            .arg(
                arg!(--itinerary <DAYS> "Print a short itinerary instead of chatting")
                    .value_parser(from_1_to_14),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: PropertyArgs::get_id(matches),
            itinerary: matches.get_one("itinerary").copied(),
        }
    }

    pub async fn run(self, voyageur: &Voyageur, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "starting concierge...");
        let property = voyageur.property(&self.id)?;
        let concierge = Concierge::new(config.concierge.clone());

        if let Some(days) = self.itinerary {
            let text = concierge.suggest_itinerary(&property.location, days).await;
            println!("{}", text);
            return Ok(());
        }

        let Some(mut chat) = concierge.chat(&property.location) else {
            return Err(
                "The concierge needs an API key: set VOYAGEUR_API_KEY or `[concierge].api_key`"
                    .into(),
            );
        };

        chat_intro(&property.title, chat.greeting())?;
        loop {
            let input = prompt_chat()?;
            match input {
                ChatInput::Exit => break,
                ChatInput::Itinerary(days) => {
                    let text = concierge.suggest_itinerary(&property.location, days).await;
                    println!("{}", text);
                }
                ChatInput::Message(message) => {
                    print!("{} ", "Concierge:".cyan().bold());
                    chat.send(&message, |chunk| {
                        print!("{chunk}");
                        let _ = io::stdout().flush();
                    })
                    .await;
                    println!();
                }
            }
        }
        chat_outro()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_concierge() {
        let cmd = Command::new("test").subcommand(CmdConcierge::command());
        let matches = cmd
            .try_get_matches_from(["test", "concierge", "fr-1", "--itinerary", "4"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdConcierge::NAME).unwrap();
        let parsed = CmdConcierge::from(sub_matches);
        assert_eq!(parsed.id, "fr-1");
        assert_eq!(parsed.itinerary, Some(4));
    }

    #[test]
    fn test_itinerary_range() {
        let cmd = Command::new("test").subcommand(CmdConcierge::command());
        assert!(
            cmd.clone()
                .try_get_matches_from(["test", "concierge", "fr-1", "--itinerary", "0"])
                .is_err()
        );
        assert!(
            cmd.try_get_matches_from(["test", "concierge", "fr-1", "--itinerary", "15"])
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_offline_itinerary_falls_back() {
        let voyageur = Voyageur::new(Default::default()).await.unwrap();
        let cmd = CmdConcierge {
            id: "fr-1".to_string(),
            itinerary: Some(3),
        };
        let mut config = Config::default();
        config.concierge.base_url = "http://127.0.0.1:9".to_string();
        // Either offline or unreachable, the command prints a fallback and succeeds
        assert!(cmd.run(&voyageur, &config).await.is_ok());
    }
}
