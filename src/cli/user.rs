//
//  hangar-cli
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User management commands
//!
//! Users are addressed by their server-assigned id, so `get` and `delete`
//! take the id shown in `user list`.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::resources::{User, UserList};
use crate::output::{print_json, TableBuilder};

use super::GlobalOptions;

/// Manage users
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// List users
    #[command(visible_alias = "ls")]
    List,

    /// Show one user
    Get(GetArgs),

    /// Create a user
    Create(CreateArgs),

    /// Delete a user
    #[command(visible_alias = "rm")]
    Delete(GetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Login name
    pub username: String,

    /// Hashed password (the API stores hashes, never plaintext)
    #[arg(long)]
    pub hashpw: String,
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        match &self.command {
            UserSubcommand::List => {
                let mut users = UserList::default();
                api.get(&mut users).await?;

                if global.json {
                    return print_json(&users.items);
                }
                let mut table = TableBuilder::new().headers(["ID", "USERNAME", "CREATED"]);
                for user in &users.items {
                    table = table.row([
                        user.id.clone(),
                        user.username.clone(),
                        user.created.clone(),
                    ]);
                }
                table.print();
            }
            UserSubcommand::Get(args) => {
                let mut user = User {
                    id: args.id.clone(),
                    ..Default::default()
                };
                api.get(&mut user).await?;

                if global.json {
                    return print_json(&user);
                }
                TableBuilder::new()
                    .headers(["FIELD", "VALUE"])
                    .row(["ID".to_string(), user.id.clone()])
                    .row(["USERNAME".to_string(), user.username.clone()])
                    .row(["CREATED".to_string(), user.created.clone()])
                    .row(["UPDATED".to_string(), user.updated.clone()])
                    .print();
            }
            UserSubcommand::Create(args) => {
                let mut user = User {
                    username: args.username.clone(),
                    hashpw: args.hashpw.clone(),
                    ..Default::default()
                };
                api.post(&mut user).await?;

                if global.json {
                    return print_json(&user);
                }
                println!(
                    "{} Created user {} ({})",
                    style("✓").green(),
                    user.username,
                    user.id
                );
            }
            UserSubcommand::Delete(args) => {
                let mut user = User {
                    id: args.id.clone(),
                    ..Default::default()
                };
                api.get(&mut user).await?;
                api.delete(&user).await?;
                println!("{} Deleted user {}", style("✓").green(), args.id);
            }
        }
        Ok(())
    }
}
