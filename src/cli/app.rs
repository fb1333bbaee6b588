//
//  hangar-cli
//  cli/app.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Application management commands
//!
//! ## Examples
//!
//! ```bash
//! hangar app list
//! hangar app get storefront
//! hangar app create storefront --repo git@host:acme/storefront --repo-org acme
//! hangar app update storefront --repo git@host:acme/shop
//! hangar app delete storefront
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::resources::{Application, ApplicationList};
use crate::output::{print_json, TableBuilder};

use super::GlobalOptions;

/// Manage applications
#[derive(Args, Debug)]
pub struct AppCommand {
    #[command(subcommand)]
    pub command: AppSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AppSubcommand {
    /// List applications
    #[command(visible_alias = "ls")]
    List,

    /// Show one application
    Get(GetArgs),

    /// Create an application
    Create(CreateArgs),

    /// Update an application's repository settings
    Update(UpdateArgs),

    /// Delete an application
    #[command(visible_alias = "rm")]
    Delete(GetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Application id
    pub app_id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Application id
    pub app_id: String,

    /// Human-readable name (defaults to the id)
    #[arg(long)]
    pub name: Option<String>,

    /// Repository clone URL
    #[arg(long)]
    pub repo: String,

    /// Repository organization
    #[arg(long)]
    pub repo_org: String,

    /// Owning client name
    #[arg(long)]
    pub client: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Application id
    pub app_id: String,

    /// New repository clone URL
    #[arg(long)]
    pub repo: Option<String>,

    /// New repository organization
    #[arg(long)]
    pub repo_org: Option<String>,

    /// New human-readable name
    #[arg(long)]
    pub name: Option<String>,
}

impl AppCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        match &self.command {
            AppSubcommand::List => {
                let mut apps = ApplicationList::default();
                api.get(&mut apps).await?;

                if global.json {
                    return print_json(&apps.items);
                }
                println!(
                    "{} of {} applications",
                    apps.items.len(),
                    apps.meta.total
                );
                let mut table =
                    TableBuilder::new().headers(["APP ID", "NAME", "ORG", "CLIENT", "CREATED"]);
                for app in &apps.items {
                    table = table.row([
                        app.app_id.clone(),
                        app.name.clone(),
                        app.repo_org.clone(),
                        app.client.name.clone(),
                        app.created.clone(),
                    ]);
                }
                table.print();
            }
            AppSubcommand::Get(args) => {
                let mut app = Application {
                    app_id: args.app_id.clone(),
                    ..Default::default()
                };
                api.get(&mut app).await?;

                if global.json {
                    return print_json(&app);
                }
                describe(&app);
            }
            AppSubcommand::Create(args) => {
                let mut app = Application {
                    app_id: args.app_id.clone(),
                    name: args.name.clone().unwrap_or_else(|| args.app_id.clone()),
                    repo: args.repo.clone(),
                    repo_org: args.repo_org.clone(),
                    ..Default::default()
                };
                if let Some(client) = &args.client {
                    app.client.name = client.clone();
                }
                api.post(&mut app).await?;

                if global.json {
                    return print_json(&app);
                }
                println!("{} Created application {}", style("✓").green(), app.app_id);
            }
            AppSubcommand::Update(args) => {
                let mut app = Application {
                    app_id: args.app_id.clone(),
                    ..Default::default()
                };
                api.get(&mut app).await?;

                if let Some(repo) = &args.repo {
                    app.repo = repo.clone();
                }
                if let Some(repo_org) = &args.repo_org {
                    app.repo_org = repo_org.clone();
                }
                if let Some(name) = &args.name {
                    app.name = name.clone();
                }
                api.patch(&mut app).await?;

                if global.json {
                    return print_json(&app);
                }
                println!("{} Updated application {}", style("✓").green(), app.app_id);
            }
            AppSubcommand::Delete(args) => {
                // fetch first so the delete carries a current If-Match
                let mut app = Application {
                    app_id: args.app_id.clone(),
                    ..Default::default()
                };
                api.get(&mut app).await?;
                api.delete(&app).await?;
                println!("{} Deleted application {}", style("✓").green(), args.app_id);
            }
        }
        Ok(())
    }
}

fn describe(app: &Application) {
    let mut table = TableBuilder::new()
        .headers(["FIELD", "VALUE"])
        .row(["APP ID".to_string(), app.app_id.clone()])
        .row(["NAME".to_string(), app.name.clone()])
        .row(["REPO".to_string(), app.repo.clone()])
        .row(["ORG".to_string(), app.repo_org.clone()])
        .row(["CLIENT".to_string(), app.client.name.clone()])
        .row(["CREATED".to_string(), app.created.clone()]);
    for deploy in &app.deploys {
        table = table.row(["DEPLOY".to_string(), deploy.deploy_id.clone()]);
    }
    table.print();
}
