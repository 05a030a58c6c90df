// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with API key handling.

use reqwest::{Client, RequestBuilder, Response};

use crate::config::ConciergeConfig;
use crate::error::ConciergeError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the generative text service.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    api_key: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available or HTTP client creation fails.
    pub fn new(config: &ConciergeConfig) -> Result<Self, ConciergeError> {
        let api_key = config
            .resolve_api_key()
            .ok_or(ConciergeError::MissingApiKey)?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Builds a POST request carrying the API key.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url).header(API_KEY_HEADER, &self.api_key)
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ConciergeError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        Err(ConciergeError::Status {
            code: status.as_u16(),
            body,
        })
    }
}
