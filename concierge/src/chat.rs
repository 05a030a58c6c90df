// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use futures::StreamExt;

use crate::client::ConciergeClient;
use crate::error::ConciergeError;
use crate::prompt;
use crate::types::{Content, GenerateRequest, Role};

/// A multi-turn conversation with the concierge about one property.
#[derive(Debug, Clone)]
pub struct ChatSession {
    client: ConciergeClient,
    location: String,
    greeting: String,
    history: Vec<Content>,
}

impl ChatSession {
    pub(crate) fn new(client: ConciergeClient, location: &str) -> Self {
        Self {
            client,
            location: location.to_string(),
            greeting: prompt::greeting(location),
            history: Vec::new(),
        }
    }

    /// The opening line shown before the first message.
    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Turns exchanged with the service so far.
    #[must_use]
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Sends a message and streams the reply into `on_chunk`.
    ///
    /// Returns the full reply. When the service fails or answers nothing, the fallback
    /// text goes through `on_chunk` as well and is returned. A failed turn is not kept
    /// in the history.
    pub async fn send(&mut self, message: &str, mut on_chunk: impl FnMut(&str)) -> String {
        let turns = self.history.len();
        self.history.push(Content::new(
            Role::User,
            prompt::with_context(&self.location, message),
        ));

        match self.stream_reply(&mut on_chunk).await {
            Ok(reply) => {
                self.history.push(Content::new(Role::Model, reply.clone()));
                reply
            }
            Err(e) => {
                tracing::warn!(err = %e, "concierge chat failed");
                self.history.truncate(turns);
                on_chunk(prompt::CHAT_FALLBACK);
                prompt::CHAT_FALLBACK.to_string()
            }
        }
    }

    async fn stream_reply(&self, on_chunk: &mut impl FnMut(&str)) -> Result<String, ConciergeError> {
        let request = GenerateRequest {
            contents: self.history.clone(),
            system_instruction: Some(Content::system(prompt::SYSTEM_INSTRUCTION)),
        };

        let mut stream = self.client.stream(&request).await?;
        let mut reply = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            on_chunk(&chunk);
            reply.push_str(&chunk);
        }

        if reply.trim().is_empty() {
            return Err(ConciergeError::EmptyReply);
        }
        Ok(reply)
    }
}
