// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Concierge client errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum ConciergeError {
    /// HTTP layer error.
    Http(String),

    /// The service answered with an error status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// The response body could not be decoded.
    Decode(String),

    /// No API key configured or found in the environment.
    MissingApiKey,

    /// The service answered without any text.
    EmptyReply,
}

impl fmt::Display for ConciergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status { code, body } => write!(f, "Service returned {code}: {body}"),
            Self::Decode(e) => write!(f, "Invalid service response: {e}"),
            Self::MissingApiKey => write!(f, "No concierge API key configured"),
            Self::EmptyReply => write!(f, "The service returned no text"),
        }
    }
}

impl std::error::Error for ConciergeError {}

impl From<reqwest::Error> for ConciergeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ConciergeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
