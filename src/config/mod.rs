//
//  hangar-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Management
//!
//! The CLI's configuration lives in a TOML file at the platform config
//! location:
//!
//! - Linux: `~/.config/hangar/config.toml`
//! - macOS: `~/Library/Application Support/hangar/config.toml`
//! - Windows: `%APPDATA%\hangar\config.toml`
//!
//! The session token is kept separately, in a raw owner-only file next to
//! the config (see [`Config::token_file`]), so it never travels with the
//! config when people copy it around.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Persistent CLI configuration.
///
/// Every field has a flag or environment override at the CLI layer; the
/// config only supplies defaults.
///
/// # Example
///
/// ```rust,no_run
/// use hangar_cli::config::Config;
///
/// let mut config = Config::load()?;
/// config.api_host = "https://api.hangar.example.com".to_string();
/// config.save()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Hangar API.
    #[serde(default)]
    pub api_host: String,

    /// Base URL of the Vault server used for login and secrets.
    #[serde(default)]
    pub vault_addr: String,

    /// Explicit session token file path; defaults next to the config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
}

impl Config {
    /// Returns the path of the configuration file.
    pub fn path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Loads the configuration, yielding defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Loads the configuration from an explicit path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("malformed config at {}", path.display()))
    }

    /// Writes the configuration back, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(&path, raw).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Resolves the session token file path.
    ///
    /// Uses the explicit `token_file` when configured, otherwise `token`
    /// in the config directory.
    pub fn token_file(&self) -> Result<PathBuf> {
        match &self.token_file {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.config_dir().join("token")),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("io", "hangar", "hangar")
        .context("could not determine a home directory for configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            api_host: "https://api.hangar.example.com".to_string(),
            vault_addr: "https://vault.example.com".to_string(),
            token_file: Some(PathBuf::from("/tmp/hangar-token")),
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert_eq!(back.api_host, config.api_host);
        assert_eq!(back.token_file, config.token_file);
    }

    #[test]
    fn missing_fields_default() {
        let config: Config = toml::from_str("api_host = \"https://api.example.com\"").unwrap();
        assert!(config.vault_addr.is_empty());
        assert!(config.token_file.is_none());
    }

    #[test]
    fn from_file_reports_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_host = [broken").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
