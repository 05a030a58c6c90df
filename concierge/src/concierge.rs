// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use crate::chat::ChatSession;
use crate::client::ConciergeClient;
use crate::config::ConciergeConfig;
use crate::error::ConciergeError;
use crate::prompt;
use crate::types::GenerateRequest;

/// Travel concierge answering with fallback texts whenever the service fails.
#[derive(Debug, Clone)]
pub struct Concierge {
    client: Option<ConciergeClient>,
}

impl Concierge {
    /// Creates a concierge, offline when no API key is available.
    #[must_use]
    pub fn new(config: ConciergeConfig) -> Self {
        let client = match ConciergeClient::new(config) {
            Ok(client) => Some(client),
            Err(ConciergeError::MissingApiKey) => {
                tracing::debug!("no concierge API key, running offline");
                None
            }
            Err(e) => {
                tracing::warn!(err = %e, "failed to create concierge client");
                None
            }
        };
        Self { client }
    }

    /// Whether the concierge can reach the service at all.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.client.is_some()
    }

    /// Writes a listing description.
    pub async fn describe_property(&self, title: &str, location: &str, amenities: &[String]) -> String {
        let request = GenerateRequest::prompt(prompt::description(title, location, amenities));
        match self.generate(&request).await {
            Ok(text) => text,
            Err(ConciergeError::EmptyReply) => prompt::DESCRIPTION_EMPTY_FALLBACK.to_string(),
            Err(e) => {
                tracing::warn!(err = %e, "failed to generate description");
                prompt::DESCRIPTION_FALLBACK.to_string()
            }
        }
    }

    /// Suggests a short itinerary of `days` days.
    pub async fn suggest_itinerary(&self, location: &str, days: u32) -> String {
        let request = GenerateRequest::prompt(prompt::itinerary(location, days));
        match self.generate(&request).await {
            Ok(text) => text,
            Err(ConciergeError::EmptyReply) => prompt::ITINERARY_EMPTY_FALLBACK.to_string(),
            Err(e) => {
                tracing::warn!(err = %e, "failed to suggest itinerary");
                prompt::itinerary_fallback(location)
            }
        }
    }

    /// Starts a chat about the property at `location`, `None` when offline.
    #[must_use]
    pub fn chat(&self, location: &str) -> Option<ChatSession> {
        self.client
            .clone()
            .map(|client| ChatSession::new(client, location))
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, ConciergeError> {
        match &self.client {
            Some(client) => client.generate(request).await,
            None => Err(ConciergeError::MissingApiKey),
        }
    }
}
