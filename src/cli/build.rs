//
//  hangar-cli
//  cli/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build inspection commands
//!
//! Builds are produced by the platform's webhook pipeline; the CLI only
//! reads them.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{Build, BuildList};
use crate::output::{print_json, TableBuilder};

use super::GlobalOptions;

/// Inspect builds
#[derive(Args, Debug)]
pub struct BuildCommand {
    #[command(subcommand)]
    pub command: BuildSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BuildSubcommand {
    /// List builds
    #[command(visible_alias = "ls")]
    List,

    /// Show one build
    Get(GetArgs),

    /// Print a build's captured logs
    Logs(GetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Build id
    pub id: String,
}

impl BuildCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        match &self.command {
            BuildSubcommand::List => {
                let mut builds = BuildList::default();
                api.get(&mut builds).await?;

                if global.json {
                    return print_json(&builds.items);
                }
                println!("{} of {} builds", builds.items.len(), builds.meta.total);
                let mut table =
                    TableBuilder::new().headers(["ID", "REPO", "BRANCH", "#", "STATE"]);
                for build in &builds.items {
                    table = table.row([
                        build.id.clone(),
                        build.repo_name.clone(),
                        build.branch.clone(),
                        build.build.to_string(),
                        build.state.clone(),
                    ]);
                }
                table.print();
            }
            BuildSubcommand::Get(args) => {
                let mut build = Build {
                    id: args.id.clone(),
                    ..Default::default()
                };
                api.get(&mut build).await?;

                if global.json {
                    return print_json(&build);
                }
                TableBuilder::new()
                    .headers(["FIELD", "VALUE"])
                    .row(["ID".to_string(), build.id.clone()])
                    .row(["REPO".to_string(), build.repo_name.clone()])
                    .row(["REGISTRY".to_string(), build.registry.clone()])
                    .row(["BRANCH".to_string(), build.branch.clone()])
                    .row(["BUILD #".to_string(), build.build.to_string()])
                    .row(["STATE".to_string(), build.state.clone()])
                    .row(["CLIENT".to_string(), build.client.name.clone()])
                    .row(["CREATED".to_string(), build.created.clone()])
                    .print();
            }
            BuildSubcommand::Logs(args) => {
                let mut build = Build {
                    id: args.id.clone(),
                    ..Default::default()
                };
                api.get(&mut build).await?;
                print!("{}", build.logs);
            }
        }
        Ok(())
    }
}
