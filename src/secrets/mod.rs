//
//  hangar-cli
//  secrets/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Vault Secret Access
//!
//! Thin wrapper over Vault's logical HTTP API. All access goes through an
//! explicit [`VaultConfig`] carrying the server address and the client
//! token; there is no process-wide mutable state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hangar_cli::secrets::VaultConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let vault = VaultConfig::new("https://vault.example.com", "hvs.token")?;
//! let secret = vault.read("secret/apps/storefront").await?;
//! if let Some(value) = secret.data.get("db_password") {
//!     println!("db_password = {value}");
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// A secret read from Vault: its path and the key/value data stored there.
#[derive(Debug, Default, Clone)]
pub struct Secret {
    /// Logical path the secret was read from.
    pub path: String,

    /// Key/value payload under the server's `data` stanza.
    pub data: BTreeMap<String, Value>,
}

/// The shape Vault answers logical reads with.
#[derive(Deserialize)]
struct LogicalResponse {
    #[serde(default)]
    data: BTreeMap<String, Value>,
}

/// Handle to an authenticated Vault server.
///
/// Replaces the package-level vault globals of earlier tooling: callers
/// construct one explicitly, usually via
/// [`from_token_file`](Self::from_token_file), and pass it to whatever
/// needs secret access.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Base URL of the Vault server, no trailing slash.
    addr: String,

    /// Client token presented as `X-Vault-Token`.
    token: String,

    /// Shared HTTP client.
    http: reqwest::Client,
}

impl VaultConfig {
    /// Creates a handle from an address and a client token.
    pub fn new(addr: &str, token: &str) -> Result<Self> {
        Ok(Self {
            addr: addr.trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
            http: reqwest::Client::builder()
                .user_agent(format!("hangar/{}", crate::VERSION))
                .build()
                .context("failed to create HTTP client")?,
        })
    }

    /// Creates a handle using the session token persisted by `auth login`.
    pub fn from_token_file(addr: &str, token_file: &Path) -> Result<Self> {
        let token = crate::auth::read_token(token_file)?;
        Self::new(addr, &token)
    }

    /// Returns the address this handle talks to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Reads the secret at a logical path.
    pub async fn read(&self, path: &str) -> Result<Secret> {
        let response = self
            .http
            .get(self.endpoint(path))
            .header("X-Vault-Token", &self.token)
            .send()
            .await
            .with_context(|| format!("failed to reach vault at {}", self.addr))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("vault read of {path} failed ({status}): {body}");
        }

        let logical: LogicalResponse = response
            .json()
            .await
            .with_context(|| format!("vault answered {path} with a malformed body"))?;
        Ok(Secret {
            path: path.to_string(),
            data: logical.data,
        })
    }

    /// Writes key/value data to a logical path.
    pub async fn write(&self, path: &str, data: &BTreeMap<String, Value>) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint(path))
            .header("X-Vault-Token", &self.token)
            .json(data)
            .send()
            .await
            .with_context(|| format!("failed to reach vault at {}", self.addr))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("vault write of {path} failed ({status}): {body}");
        }
        Ok(())
    }

    /// Deletes the secret at a logical path.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint(path))
            .header("X-Vault-Token", &self.token)
            .send()
            .await
            .with_context(|| format!("failed to reach vault at {}", self.addr))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("vault delete of {path} failed ({status}): {body}");
        }
        Ok(())
    }

    /// Looks up details of the token this handle authenticates with.
    ///
    /// Useful for `auth status`: display name, policies, TTL.
    pub async fn token_details(&self) -> Result<BTreeMap<String, Value>> {
        let secret = self.read("auth/token/lookup-self").await?;
        Ok(secret.data)
    }

    /// Builds the full URL for a logical path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.addr, path.trim_start_matches('/'))
    }
}

/// Picks the editor used for editing secrets interactively.
///
/// Honors `SECRET_EDITOR` so secrets can open in a different editor than
/// everything else, falls back to `EDITOR`, then to the given default.
pub fn secret_editor(default_editor: &str) -> String {
    pick_editor(
        std::env::var("SECRET_EDITOR").ok(),
        std::env::var("EDITOR").ok(),
        default_editor,
    )
}

fn pick_editor(
    secret_editor: Option<String>,
    editor: Option<String>,
    default_editor: &str,
) -> String {
    secret_editor
        .or(editor)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| default_editor.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let vault = VaultConfig::new("https://vault.example.com/", "t").unwrap();
        assert_eq!(
            vault.endpoint("/secret/apps/storefront"),
            "https://vault.example.com/v1/secret/apps/storefront"
        );
    }

    #[tokio::test]
    async fn read_unwraps_data_stanza() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/secret/apps/storefront")
            .match_header("X-Vault-Token", "hvs.token")
            .with_status(200)
            .with_body(r#"{"data":{"db_password":"swordfish"},"lease_id":""}"#)
            .create_async()
            .await;

        let vault = VaultConfig::new(&server.url(), "hvs.token").unwrap();
        let secret = vault.read("secret/apps/storefront").await.unwrap();
        assert_eq!(secret.data["db_password"], "swordfish");
        assert_eq!(secret.path, "secret/apps/storefront");
    }

    #[tokio::test]
    async fn failed_read_names_the_path() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/secret/absent")
            .with_status(404)
            .with_body(r#"{"errors":[]}"#)
            .create_async()
            .await;

        let vault = VaultConfig::new(&server.url(), "hvs.token").unwrap();
        let err = vault.read("secret/absent").await.unwrap_err();
        assert!(format!("{err:#}").contains("secret/absent"));
    }

    #[tokio::test]
    async fn write_posts_data_with_token_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/secret/apps/storefront")
            .match_header("X-Vault-Token", "hvs.token")
            .match_body(mockito::Matcher::JsonString(
                r#"{"db_password":"swordfish"}"#.to_string(),
            ))
            .with_status(204)
            .create_async()
            .await;

        let vault = VaultConfig::new(&server.url(), "hvs.token").unwrap();
        let mut data = BTreeMap::new();
        data.insert("db_password".to_string(), Value::from("swordfish"));
        vault.write("secret/apps/storefront", &data).await.unwrap();
        mock.assert_async().await;
    }

    #[test]
    fn editor_falls_back_to_default() {
        assert_eq!(pick_editor(None, None, "vi"), "vi");
        assert_eq!(pick_editor(None, Some(String::new()), "vi"), "vi");
    }

    #[test]
    fn secret_editor_override_wins() {
        assert_eq!(
            pick_editor(Some("nvim".to_string()), Some("nano".to_string()), "vi"),
            "nvim"
        );
        assert_eq!(pick_editor(None, Some("nano".to_string()), "vi"), "nano");
    }
}
