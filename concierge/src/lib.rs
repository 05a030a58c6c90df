// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! AI travel concierge backed by a generative text service (Gemini `generateContent` API).
//!
//! Every user-facing call degrades to a fixed fallback text instead of failing, the
//! concierge is a nice-to-have next to the booking flow.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod chat;
mod client;
mod concierge;
mod config;
mod error;
mod http;
mod prompt;
mod types;

pub use crate::chat::ChatSession;
pub use crate::client::{ConciergeClient, TextStream};
pub use crate::concierge::Concierge;
pub use crate::config::ConciergeConfig;
pub use crate::error::ConciergeError;
pub use crate::prompt::{
    CHAT_FALLBACK, DESCRIPTION_EMPTY_FALLBACK, DESCRIPTION_FALLBACK, ITINERARY_EMPTY_FALLBACK,
    SYSTEM_INSTRUCTION,
};
pub use crate::types::{Content, GenerateRequest, GenerateResponse, Part, Role};
