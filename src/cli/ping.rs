//
//  hangar-cli
//  cli/ping.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint probing command

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::net::{ensure_http_status, is_tcp_port_available, ProbeOptions};

use super::GlobalOptions;

/// Wait for an endpoint to answer with an expected status
#[derive(Args, Debug)]
pub struct PingCommand {
    /// URL to probe, e.g. https://staging.acme.io
    pub url: String,

    /// Status code that counts as a match
    #[arg(long, default_value_t = 200)]
    pub expect: u16,

    /// Total seconds to keep polling before giving up
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    /// Seconds between probe attempts
    #[arg(long, default_value_t = 20)]
    pub interval: u64,

    /// Basic-auth credentials as USER:PASS
    #[arg(long, value_name = "USER:PASS")]
    pub basic_auth: Option<String>,

    /// Check a local TCP port instead of probing over HTTP
    #[arg(long, conflicts_with_all = ["expect", "basic_auth"])]
    pub port: Option<u16>,
}

impl PingCommand {
    pub async fn run(&self, _global: &GlobalOptions) -> Result<()> {
        if let Some(port) = self.port {
            if is_tcp_port_available(port) {
                println!("{} port {port} is free", style("✓").green());
            } else {
                bail!("port {port} is already in use");
            }
            return Ok(());
        }

        let mut opts = ProbeOptions::new(&self.url)
            .expect_status(self.expect)
            .timeout(Duration::from_secs(self.timeout))
            .interval(Duration::from_secs(self.interval));
        if let Some(pair) = &self.basic_auth {
            let Some((username, password)) = pair.split_once(':') else {
                bail!("--basic-auth must be USER:PASS");
            };
            opts = opts.basic_auth(username, password);
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        spinner.set_message(format!("waiting for {} to answer {}", self.url, self.expect));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = ensure_http_status(&opts).await;
        spinner.finish_and_clear();

        result?;
        println!("{} {} answered {}", style("✓").green(), self.url, self.expect);
        Ok(())
    }
}
