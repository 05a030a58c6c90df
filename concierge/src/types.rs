// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types of the `generateContent` API.

use serde::{Deserialize, Serialize};

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The traveller.
    User,
    /// The model.
    Model,
}

/// A piece of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part, absent for non-text parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One message, made of parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Author, absent on system instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Message parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-text message by `role`.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }

    /// A system instruction, which carries no role.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }

    /// The text parts joined together.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts.iter().filter_map(|p| p.text.as_deref()).collect()
    }
}

/// Body of a `generateContent` or `streamGenerateContent` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Conversation so far, the last item is the prompt.
    pub contents: Vec<Content>,
    /// Persona of the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

impl GenerateRequest {
    /// A one-shot request with a single user prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::new(Role::User, text)],
            system_instruction: None,
        }
    }

    /// Sets the system instruction.
    #[must_use]
    pub fn with_system(mut self, text: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::system(text));
        self
    }
}

/// Response of a `generateContent` call, or one event of a stream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Candidate answers, the first one is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate answer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated message.
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, empty when there is none.
    #[must_use]
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(Content::text)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_request_in_camel_case() {
        let request = GenerateRequest::prompt("Hello").with_system("Be nice");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Hello" }] }],
                "systemInstruction": { "parts": [{ "text": "Be nice" }] },
            })
        );
    }

    #[test]
    fn joins_text_of_first_candidate() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {
                        "content": { "role": "model", "parts": [{ "text": "Sun" }, { "text": "set" }] },
                        "finishReason": "STOP"
                    },
                    { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
                ],
                "usageMetadata": { "totalTokenCount": 12 }
            }"#,
        )
        .unwrap();
        assert_eq!(response.text(), "Sunset");
        assert_eq!(
            response.candidates[0].finish_reason.as_deref(),
            Some("STOP")
        );
    }

    #[test]
    fn empty_response_has_no_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
    }
}
