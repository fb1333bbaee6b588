//
//  hangar-cli
//  cli/deploy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deploy management commands
//!
//! ## Examples
//!
//! ```bash
//! hangar deploy list
//! hangar deploy get storefront-staging
//! hangar deploy create storefront-staging --branch main --hostname staging.acme.io
//! hangar deploy update storefront-staging --branch release
//! hangar deploy delete storefront-staging
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::resources::{Deploy, DeployList};
use crate::output::table::format_bool;
use crate::output::{print_json, TableBuilder};

use super::GlobalOptions;

/// Manage deploys
#[derive(Args, Debug)]
pub struct DeployCommand {
    #[command(subcommand)]
    pub command: DeploySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DeploySubcommand {
    /// List deploys
    #[command(visible_alias = "ls")]
    List,

    /// Show one deploy
    Get(GetArgs),

    /// Create a deploy
    Create(CreateArgs),

    /// Update a deploy
    Update(UpdateArgs),

    /// Delete a deploy
    #[command(visible_alias = "rm")]
    Delete(GetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Deploy id
    pub deploy_id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Deploy id
    pub deploy_id: String,

    /// Branch the deploy tracks
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Hostname the deploy will serve
    #[arg(long)]
    pub hostname: String,

    /// Provisioning template
    #[arg(long)]
    pub template: Option<String>,

    /// Serving protocol
    #[arg(long, default_value = "https")]
    pub protocol: String,

    /// Guard the deploy with basic auth (USER:PASS)
    #[arg(long, value_name = "USER:PASS")]
    pub basic_auth: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Deploy id
    pub deploy_id: String,

    /// New branch
    #[arg(long)]
    pub branch: Option<String>,

    /// New hostname
    #[arg(long)]
    pub hostname: Option<String>,

    /// New template
    #[arg(long)]
    pub template: Option<String>,
}

impl DeployCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        match &self.command {
            DeploySubcommand::List => {
                let mut deploys = DeployList::default();
                api.get(&mut deploys).await?;

                if global.json {
                    return print_json(&deploys.items);
                }
                println!("{} of {} deploys", deploys.items.len(), deploys.meta.total);
                let mut table =
                    TableBuilder::new().headers(["DEPLOY ID", "BRANCH", "URL", "MANAGED"]);
                for deploy in &deploys.items {
                    table = table.row([
                        deploy.deploy_id.clone(),
                        deploy.branch.clone(),
                        deploy.url.clone(),
                        format_bool(deploy.auto_managed).to_string(),
                    ]);
                }
                table.print();
            }
            DeploySubcommand::Get(args) => {
                let mut deploy = Deploy {
                    deploy_id: args.deploy_id.clone(),
                    ..Default::default()
                };
                api.get(&mut deploy).await?;

                if global.json {
                    return print_json(&deploy);
                }
                describe(&deploy);
            }
            DeploySubcommand::Create(args) => {
                let mut deploy = Deploy {
                    deploy_id: args.deploy_id.clone(),
                    branch: args.branch.clone(),
                    hostname: args.hostname.clone(),
                    template: args.template.clone().unwrap_or_default(),
                    protocol: args.protocol.clone(),
                    ..Default::default()
                };
                if let Some(pair) = &args.basic_auth {
                    let (user, pass) = pair.split_once(':').ok_or_else(|| {
                        anyhow::anyhow!("--basic-auth expects USER:PASS, got {pair:?}")
                    })?;
                    deploy.basic_auth_user = user.to_string();
                    deploy.basic_auth_pass = pass.to_string();
                }
                api.post(&mut deploy).await?;

                if global.json {
                    return print_json(&deploy);
                }
                println!("{} Created deploy {}", style("✓").green(), deploy.deploy_id);
            }
            DeploySubcommand::Update(args) => {
                let mut deploy = Deploy {
                    deploy_id: args.deploy_id.clone(),
                    ..Default::default()
                };
                api.get(&mut deploy).await?;

                if let Some(branch) = &args.branch {
                    deploy.branch = branch.clone();
                }
                if let Some(hostname) = &args.hostname {
                    deploy.hostname = hostname.clone();
                }
                if let Some(template) = &args.template {
                    deploy.template = template.clone();
                }
                api.patch(&mut deploy).await?;

                if global.json {
                    return print_json(&deploy);
                }
                println!("{} Updated deploy {}", style("✓").green(), args.deploy_id);
            }
            DeploySubcommand::Delete(args) => {
                let mut deploy = Deploy {
                    deploy_id: args.deploy_id.clone(),
                    ..Default::default()
                };
                api.get(&mut deploy).await?;
                api.delete(&deploy).await?;
                println!("{} Deleted deploy {}", style("✓").green(), args.deploy_id);
            }
        }
        Ok(())
    }
}

fn describe(deploy: &Deploy) {
    let app_id = deploy
        .application
        .as_ref()
        .map(|app| app.app_id.clone())
        .unwrap_or_default();
    TableBuilder::new()
        .headers(["FIELD", "VALUE"])
        .row(["DEPLOY ID".to_string(), deploy.deploy_id.clone()])
        .row(["NAME".to_string(), deploy.name.clone()])
        .row(["APP".to_string(), app_id])
        .row(["BRANCH".to_string(), deploy.branch.clone()])
        .row(["TEMPLATE".to_string(), deploy.template.clone()])
        .row(["URL".to_string(), deploy.url.clone()])
        .row(["AUTH USER".to_string(), deploy.basic_auth_user.clone()])
        .row([
            "AUTO MANAGED".to_string(),
            format_bool(deploy.auto_managed).to_string(),
        ])
        .row(["CREATED".to_string(), deploy.created.clone()])
        .print();
}
