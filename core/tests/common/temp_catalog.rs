// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary catalog files for integration tests.

use std::path::PathBuf;

use tokio::fs;

/// A catalog file in its own temporary directory, removed on drop.
#[derive(Debug)]
pub struct TempCatalog {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl TempCatalog {
    /// Writes `content` to a fresh `catalog.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file writing fails.
    pub async fn new(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("catalog.toml");
        fs::write(&path, content).await?;
        Ok(Self { _dir: dir, path })
    }
}
