//
//  hangar-cli
//  cli/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client organization management commands
//!
//! ## Examples
//!
//! ```bash
//! hangar client list
//! hangar client get acme
//! hangar client create acme --email ops@acme.io --phone 555-0100
//! hangar client update acme --email billing@acme.io
//! hangar client delete acme
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::resources::{ClientList, ClientRecord};
use crate::output::{print_json, TableBuilder};

use super::GlobalOptions;

/// Manage client organizations
#[derive(Args, Debug)]
pub struct ClientCommand {
    #[command(subcommand)]
    pub command: ClientSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ClientSubcommand {
    /// List clients
    #[command(visible_alias = "ls")]
    List,

    /// Show one client
    Get(GetArgs),

    /// Create a client
    Create(CreateArgs),

    /// Update a client's contact details
    Update(UpdateArgs),

    /// Delete a client
    #[command(visible_alias = "rm")]
    Delete(GetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Client name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Client name
    pub name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Contact phone
    #[arg(long, default_value = "")]
    pub phone: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Client name
    pub name: String,

    /// New contact email
    #[arg(long)]
    pub email: Option<String>,

    /// New contact phone
    #[arg(long)]
    pub phone: Option<String>,
}

impl ClientCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        match &self.command {
            ClientSubcommand::List => {
                let mut clients = ClientList::default();
                api.get(&mut clients).await?;

                if global.json {
                    return print_json(&clients.items);
                }
                let mut table = TableBuilder::new().headers(["NAME", "EMAIL", "PHONE", "CREATED"]);
                for client in &clients.items {
                    table = table.row([
                        client.name.clone(),
                        client.email.clone(),
                        client.phone.clone(),
                        client.created.clone(),
                    ]);
                }
                table.print();
            }
            ClientSubcommand::Get(args) => {
                let mut client = ClientRecord {
                    name: args.name.clone(),
                    ..Default::default()
                };
                api.get(&mut client).await?;

                if global.json {
                    return print_json(&client);
                }
                TableBuilder::new()
                    .headers(["FIELD", "VALUE"])
                    .row(["NAME".to_string(), client.name.clone()])
                    .row(["EMAIL".to_string(), client.email.clone()])
                    .row(["PHONE".to_string(), client.phone.clone()])
                    .row(["CREATED".to_string(), client.created.clone()])
                    .print();
            }
            ClientSubcommand::Create(args) => {
                let mut client = ClientRecord {
                    name: args.name.clone(),
                    email: args.email.clone(),
                    phone: args.phone.clone(),
                    ..Default::default()
                };
                api.post(&mut client).await?;

                if global.json {
                    return print_json(&client);
                }
                println!("{} Created client {}", style("✓").green(), client.name);
            }
            ClientSubcommand::Update(args) => {
                let mut client = ClientRecord {
                    name: args.name.clone(),
                    ..Default::default()
                };
                api.get(&mut client).await?;

                if let Some(email) = &args.email {
                    client.email = email.clone();
                }
                if let Some(phone) = &args.phone {
                    client.phone = phone.clone();
                }
                api.patch(&mut client).await?;

                if global.json {
                    return print_json(&client);
                }
                println!("{} Updated client {}", style("✓").green(), args.name);
            }
            ClientSubcommand::Delete(args) => {
                let mut client = ClientRecord {
                    name: args.name.clone(),
                    ..Default::default()
                };
                api.get(&mut client).await?;
                api.delete(&client).await?;
                println!("{} Deleted client {}", style("✓").green(), args.name);
            }
        }
        Ok(())
    }
}
