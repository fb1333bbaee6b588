//
//  hangar-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod app;
mod auth;
mod build;
mod client;
mod deploy;
mod ping;
mod secret;
mod user;

pub use app::AppCommand;
pub use auth::AuthCommand;
pub use build::BuildCommand;
pub use client::ClientCommand;
pub use deploy::DeployCommand;
pub use ping::PingCommand;
pub use secret::SecretCommand;
pub use user::UserCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::{ApiClient, Credentials};
use crate::config::Config;
use crate::secrets::VaultConfig;

/// Hangar CLI - Manage applications, deploys, and builds from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "hangar",
    version,
    about = "Manage Hangar applications, deploys, and builds from the command line",
    propagate_version = true,
    after_help = "Use 'hangar <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Hangar API host
    #[arg(long, global = true, env = "HANGAR_HOST")]
    pub host: Option<String>,

    /// Bearer session token (overrides the persisted token file)
    #[arg(long, global = true, env = "HANGAR_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Admin token (takes precedence over every other credential)
    #[arg(long, global = true, env = "HANGAR_ADMIN_TOKEN", hide_env_values = true)]
    pub admin_token: Option<String>,

    /// Vault server address for login and secrets
    #[arg(long, global = true, env = "HANGAR_VAULT_ADDR")]
    pub vault_addr: Option<String>,

    /// Output as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Builds an authenticated API client from flags, environment, config
    /// file, and the persisted session token, in that order.
    pub fn api(&self) -> Result<ApiClient> {
        let config = Config::load()?;
        let host = self
            .host
            .clone()
            .or_else(|| (!config.api_host.is_empty()).then(|| config.api_host.clone()))
            .context("no API host configured; pass --host or set api_host in the config file")?;

        Ok(ApiClient::new(&host)?.with_auth(self.credentials(&config)))
    }

    /// Builds a Vault handle using the persisted session token.
    pub fn vault(&self) -> Result<VaultConfig> {
        let config = Config::load()?;
        let addr = self
            .vault_addr
            .clone()
            .or_else(|| (!config.vault_addr.is_empty()).then(|| config.vault_addr.clone()))
            .context(
                "no vault address configured; pass --vault-addr or set vault_addr in the config file",
            )?;

        if let Some(token) = &self.token {
            return VaultConfig::new(&addr, token);
        }
        VaultConfig::from_token_file(&addr, &config.token_file()?)
    }

    /// Resolves credentials: explicit admin token, explicit bearer token,
    /// then the persisted session token. Absent all three, requests go out
    /// unauthenticated.
    fn credentials(&self, config: &Config) -> Credentials {
        if let Some(admin) = &self.admin_token {
            return Credentials::admin(admin.clone());
        }
        if let Some(token) = &self.token {
            return Credentials::bearer(token.clone());
        }
        match config
            .token_file()
            .and_then(|path| crate::auth::read_token(&path))
        {
            Ok(token) => Credentials::bearer(token),
            Err(_) => Credentials::default(),
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate against Vault and manage the session token
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Manage applications
    App(AppCommand),

    /// Manage client organizations
    Client(ClientCommand),

    /// Manage deploys
    Deploy(DeployCommand),

    /// Manage users
    User(UserCommand),

    /// Inspect builds
    Build(BuildCommand),

    /// Read and write Vault secrets
    Secret(SecretCommand),

    /// Wait for an endpoint to answer with an expected status
    Ping(PingCommand),

    /// Print version information
    Version,
}
