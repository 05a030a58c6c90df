// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;
use voyageur_concierge::ConciergeConfig;
use voyageur_core::{APP_NAME, Config as CoreConfig, get_config_dir};

const VOYAGEUR_CONFIG_ENV: &str = "VOYAGEUR_CONFIG";
const VOYAGEUR_DEV_ENV: &str = "VOYAGEUR_DEV";

const VOYAGEUR_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const VOYAGEUR_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(VOYAGEUR_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({VOYAGEUR_DEV_ENV} is set): config must be explicitly specified via --config or {VOYAGEUR_CONFIG_ENV} environment variable",
            ).into());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(ConfigRaw::default().split());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(ConfigRaw::split)
}

/// Configuration of the command-line front end.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Concierge service settings.
    pub concierge: ConciergeConfig,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    concierge: ConciergeConfig,
}

impl ConfigRaw {
    fn split(self) -> (CoreConfig, Config) {
        (
            self.core,
            Config {
                concierge: self.concierge,
            },
        )
    }
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    if let Ok(val) = std::env::var(VOYAGEUR_DEV_ENV) {
        let lower = val.to_lowercase();
        if VOYAGEUR_DEV_VALID_TRUE.contains(&lower.as_str()) {
            Some(true)
        } else if VOYAGEUR_DEV_VALID_FALSE.contains(&lower.as_str()) {
            Some(false)
        } else {
            tracing::warn!(
                "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
                VOYAGEUR_DEV_ENV,
                val,
                VOYAGEUR_DEV_VALID_TRUE.join(", "),
                VOYAGEUR_DEV_VALID_FALSE.join(", ")
            );
            None
        }
    } else {
        None
    }
}
