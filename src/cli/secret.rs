//
//  hangar-cli
//  cli/secret.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Vault secret commands

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use dialoguer::Confirm;
use serde_json::Value;

use crate::output::{print_json, TableBuilder};

use super::GlobalOptions;

/// Read and write Vault secrets
#[derive(Args, Debug)]
pub struct SecretCommand {
    #[command(subcommand)]
    pub command: SecretSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SecretSubcommand {
    /// Read the secret at a path
    Get(GetArgs),

    /// Write key/value pairs to a path
    Set(SetArgs),

    /// Delete the secret at a path
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Logical secret path, e.g. secret/apps/storefront
    pub path: String,

    /// Print only the value of this key
    #[arg(long)]
    pub field: Option<String>,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Logical secret path
    pub path: String,

    /// key=value pairs to store
    #[arg(required = true, value_name = "KEY=VALUE")]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Logical secret path
    pub path: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl SecretCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let vault = global.vault()?;
        match &self.command {
            SecretSubcommand::Get(args) => {
                let secret = vault.read(&args.path).await?;

                if let Some(field) = &args.field {
                    match secret.data.get(field) {
                        Some(Value::String(s)) => println!("{s}"),
                        Some(value) => println!("{value}"),
                        None => bail!("no field {field:?} at {}", args.path),
                    }
                    return Ok(());
                }
                if global.json {
                    return print_json(&secret.data);
                }
                let mut table = TableBuilder::new().headers(["KEY", "VALUE"]);
                for (key, value) in &secret.data {
                    let rendered = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    table = table.row([key.clone(), rendered]);
                }
                table.print();
            }
            SecretSubcommand::Set(args) => {
                let mut data = BTreeMap::new();
                for field in &args.fields {
                    let Some((key, value)) = field.split_once('=') else {
                        bail!("fields must be KEY=VALUE, got {field:?}");
                    };
                    data.insert(key.to_string(), Value::from(value));
                }
                vault.write(&args.path, &data).await?;
                println!(
                    "{} wrote {} key(s) to {}",
                    style("✓").green(),
                    data.len(),
                    args.path
                );
            }
            SecretSubcommand::Delete(args) => {
                if !args.yes {
                    let confirmed = Confirm::new()
                        .with_prompt(format!("Delete secret at {}?", args.path))
                        .default(false)
                        .interact()?;
                    if !confirmed {
                        println!("aborted");
                        return Ok(());
                    }
                }
                vault.delete(&args.path).await?;
                println!("{} deleted {}", style("✓").green(), args.path);
            }
        }
        Ok(())
    }
}
