//
//  hangar-cli
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands
//!
//! ## Examples
//!
//! ```bash
//! # Log in with a GitHub token (prompts if omitted)
//! hangar auth login
//! hangar auth login --github-token ghp_abc123
//!
//! # Show details of the current session token
//! hangar auth status
//!
//! # Forget the session token
//! hangar auth logout
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use dialoguer::Password;

use crate::auth::{github_login, write_token};
use crate::config::Config;
use crate::output::{print_json, TableBuilder};

use super::GlobalOptions;

/// Authenticate against Vault and manage the session token
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Exchange a GitHub token for a session token and persist it
    Login(LoginArgs),

    /// Show details of the current session token
    Status,

    /// Remove the persisted session token
    Logout,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// GitHub personal access token (prompts when omitted)
    #[arg(long, env = "HANGAR_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Status => status(global).await,
            AuthSubcommand::Logout => logout(),
        }
    }
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let vault_addr = global
        .vault_addr
        .clone()
        .or_else(|| (!config.vault_addr.is_empty()).then(|| config.vault_addr.clone()))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no vault address configured; pass --vault-addr or set vault_addr in the config file"
            )
        })?;

    let github_token = match &args.github_token {
        Some(token) => token.clone(),
        None => Password::new()
            .with_prompt("GitHub personal access token")
            .interact()?,
    };

    let session_token = github_login(&vault_addr, &github_token).await?;
    let token_path = config.token_file()?;
    write_token(&session_token, &token_path)?;

    println!(
        "{} Session token written to {}",
        style("✓").green(),
        token_path.display()
    );
    Ok(())
}

async fn status(global: &GlobalOptions) -> Result<()> {
    let vault = global.vault()?;
    let details = vault.token_details().await?;

    if global.json {
        return print_json(&details);
    }

    let mut table = TableBuilder::new().headers(["FIELD", "VALUE"]);
    for field in ["display_name", "policies", "ttl", "num_uses"] {
        if let Some(value) = details.get(field) {
            table = table.row([field.to_string(), value.to_string()]);
        }
    }
    table.print();
    Ok(())
}

fn logout() -> Result<()> {
    let config = Config::load()?;
    let token_path = config.token_file()?;
    if token_path.exists() {
        std::fs::remove_file(&token_path)?;
        println!("{} Session token removed", style("✓").green());
    } else {
        println!("No session token to remove");
    }
    Ok(())
}
