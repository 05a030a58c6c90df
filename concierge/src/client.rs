// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Client of the `generateContent` API.

use std::collections::VecDeque;
use std::sync::Arc;

use futures::stream::{BoxStream, Stream, StreamExt};

use crate::config::ConciergeConfig;
use crate::error::ConciergeError;
use crate::http::HttpClient;
use crate::types::{GenerateRequest, GenerateResponse};

/// Text chunks of a streamed answer, in arrival order.
pub type TextStream = BoxStream<'static, Result<String, ConciergeError>>;

/// Client for one model of the generative text service.
///
/// # Example
///
/// ```ignore
/// use voyageur_concierge::{ConciergeClient, ConciergeConfig, GenerateRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConciergeConfig {
///     api_key: Some("secret".to_string()),
///     ..Default::default()
/// };
///
/// let client = ConciergeClient::new(config)?;
/// let text = client.generate(&GenerateRequest::prompt("Hello")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConciergeClient {
    http: Arc<HttpClient>,
    config: ConciergeConfig,
}

impl ConciergeClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available or HTTP client initialization fails.
    pub fn new(config: ConciergeConfig) -> Result<Self, ConciergeError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Model used by this client.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generates a complete answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the answer carries no text.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, ConciergeError> {
        let url = self.method_url("generateContent");
        tracing::debug!(model = %self.config.model, "generating content");
        let resp = self.http.execute(self.http.post(&url).json(request)).await?;
        let body: GenerateResponse = resp.json().await?;

        let text = body.text();
        if text.trim().is_empty() {
            return Err(ConciergeError::EmptyReply);
        }
        Ok(text)
    }

    /// Streams an answer as server-sent events.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails before streaming starts, later failures are
    /// items of the stream.
    pub async fn stream(&self, request: &GenerateRequest) -> Result<TextStream, ConciergeError> {
        let url = format!("{}?alt=sse", self.method_url("streamGenerateContent"));
        tracing::debug!(model = %self.config.model, "streaming content");
        let resp = self.http.execute(self.http.post(&url).json(request)).await?;
        Ok(sse_text_chunks(Box::pin(resp.bytes_stream())).boxed())
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            method
        )
    }
}

struct SseState<S> {
    bytes: S,
    buffer: Vec<u8>,
    ready: VecDeque<Result<String, ConciergeError>>,
    done: bool,
}

impl<S> SseState<S> {
    /// Moves every complete line of the buffer into `ready`.
    fn drain_lines(&mut self) {
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            if let Some(item) = parse_sse_line(line.trim_end()) {
                self.ready.push_back(item);
            }
        }
    }
}

/// Text of one `data:` line, `None` for other fields, blank lines and empty chunks.
fn parse_sse_line(line: &str) -> Option<Result<String, ConciergeError>> {
    let data = line.strip_prefix("data:")?.trim();
    if data.is_empty() {
        return None;
    }

    match serde_json::from_str::<GenerateResponse>(data) {
        Ok(resp) => {
            let text = resp.text();
            (!text.is_empty()).then_some(Ok(text))
        }
        Err(e) => Some(Err(e.into())),
    }
}

fn sse_text_chunks<S, B>(bytes: S) -> impl Stream<Item = Result<String, ConciergeError>>
where
    S: Stream<Item = Result<B, reqwest::Error>> + Unpin,
    B: AsRef<[u8]>,
{
    let state = SseState {
        bytes,
        buffer: Vec::new(),
        ready: VecDeque::new(),
        done: false,
    };

    futures::stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.ready.pop_front() {
                return Some((item, state));
            }
            if state.done {
                return None;
            }

            match state.bytes.next().await {
                Some(Ok(chunk)) => {
                    state.buffer.extend_from_slice(chunk.as_ref());
                    state.drain_lines();
                }
                Some(Err(e)) => {
                    state.done = true;
                    state.ready.push_back(Err(e.into()));
                }
                None => {
                    state.done = true;
                    state.buffer.push(b'\n');
                    state.drain_lines();
                }
            }
        }
    })
}
