//
//  hangar-cli
//  auth/github.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Vault GitHub login.
//!
//! Exchanges a GitHub personal access token for a Vault client token via
//! Vault's GitHub auth method. The resulting token is what the rest of the
//! CLI persists and presents as the bearer session token.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// The `auth` stanza of a Vault login response.
#[derive(Deserialize)]
struct LoginAuth {
    client_token: String,
}

/// A Vault login response; only the `auth` stanza is of interest.
#[derive(Deserialize)]
struct LoginResponse {
    auth: LoginAuth,
}

/// Logs into Vault with a GitHub token and returns the issued client token.
///
/// Posts to `{vault_addr}/v1/auth/github/login` with the GitHub token in
/// the JSON body, per Vault's GitHub auth method.
///
/// # Parameters
///
/// * `vault_addr` - Base URL of the Vault server
/// * `github_token` - A GitHub personal access token with org read scope
///
/// # Errors
///
/// Returns an error when the server is unreachable, rejects the token, or
/// answers without an `auth.client_token`.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() -> anyhow::Result<()> {
/// let token =
///     hangar_cli::auth::github_login("https://vault.example.com", "ghp_abc123").await?;
/// hangar_cli::auth::write_token(&token, std::path::Path::new("/tmp/token"))?;
/// # Ok(())
/// # }
/// ```
pub async fn github_login(vault_addr: &str, github_token: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(format!("hangar/{}", crate::VERSION))
        .build()
        .context("failed to create HTTP client")?;

    let url = format!(
        "{}/v1/auth/github/login",
        vault_addr.trim_end_matches('/')
    );
    let response = client
        .post(&url)
        .json(&serde_json::json!({ "token": github_token }))
        .send()
        .await
        .with_context(|| format!("failed to reach vault at {vault_addr}"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("vault github login failed ({status}): {body}");
    }

    let login: LoginResponse = response
        .json()
        .await
        .context("vault login response missing auth.client_token")?;
    Ok(login.auth.client_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_extracts_client_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/auth/github/login")
            .match_body(mockito::Matcher::JsonString(
                r#"{"token":"ghp_abc123"}"#.to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"auth":{"client_token":"hvs.issued"},"lease_duration":0}"#)
            .create_async()
            .await;

        let token = github_login(&server.url(), "ghp_abc123").await.unwrap();
        assert_eq!(token, "hvs.issued");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_login_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/auth/github/login")
            .with_status(400)
            .with_body(r#"{"errors":["github token is invalid"]}"#)
            .create_async()
            .await;

        let err = github_login(&server.url(), "bad").await.unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("400"));
        assert!(text.contains("github token is invalid"));
    }
}
