// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

/// Environment variables consulted, in order, when no API key is configured.
const API_KEY_ENVS: &[&str] = &["VOYAGEUR_API_KEY", "API_KEY"];

/// Generative text service configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ConciergeConfig {
    /// Base URL of the service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key, read from the environment when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("voyageur-concierge/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ConciergeConfig {
    /// The configured API key, or the first non-empty one found in the environment.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                API_KEY_ENVS
                    .iter()
                    .filter_map(|name| std::env::var(name).ok())
                    .find(|k| !k.trim().is_empty())
            })
    }
}
