//
//  hangar-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Hangar CLI Library
//!
//! A command-line interface library for the Hangar deployment platform,
//! managing applications, deploys, client organizations, users, and builds
//! from the terminal.
//!
//! ## Overview
//!
//! This library provides the core functionality for the `hangar` CLI tool.
//! Every platform resource speaks the same HTTP contract: a resource knows
//! its paths, its wire payloads, and its concurrency token, and a single
//! dispatcher carries it over GET/POST/PATCH/DELETE with optimistic
//! concurrency via `If-Match`.
//!
//! ## Features
//!
//! - **Uniform Resource Access**: One [`api::Entity`] contract for every resource
//! - **Optimistic Concurrency**: Writes carry the server's `_etag` as `If-Match`
//! - **Layered Authentication**: Admin token, bearer session token, or basic auth
//! - **Vault Integration**: GitHub-backed login and secret read/write
//! - **Deploy Verification**: Poll an endpoint until it answers as expected
//! - **Interactive & Scriptable**: Table output for humans, `--json` for automation
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: The entity contract, HTTP dispatcher, and resource types
//! - [`auth`]: Session token persistence and Vault GitHub login
//! - [`secrets`]: Vault secret access
//! - [`config`]: Configuration file management
//! - [`net`]: HTTP endpoint probing
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hangar_cli::api::{ApiClient, Credentials};
//! use hangar_cli::api::resources::Application;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = ApiClient::new("https://api.hangar.example.com")?
//!     .with_auth(Credentials::bearer("session-token"));
//!
//! let mut app = Application {
//!     app_id: "storefront".to_string(),
//!     ..Default::default()
//! };
//! api.get(&mut app).await?;
//! println!("{} belongs to {}", app.app_id, app.client.name);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the
/// clap derive API. Each command module handles parsing and execution of its
/// respective functionality.
pub mod cli;

/// The entity contract, HTTP dispatcher, and resource types.
///
/// This module provides the [`api::Entity`] trait every platform resource
/// implements, the [`api::ApiClient`] that carries entities over the wire,
/// and the resource types themselves under [`api::resources`].
pub mod api;

/// Session token persistence and Vault GitHub login.
///
/// Handles:
/// - Exchanging a GitHub personal access token for a Vault client token
/// - Persisting the session token to disk, readable only by the owner
pub mod auth;

/// Vault secret access.
///
/// Thin wrapper over Vault's logical HTTP API through an explicit handle
/// carrying the server address and client token.
pub mod secrets;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/hangar/config.toml`
/// - macOS: `~/Library/Application Support/hangar/config.toml`
/// - Windows: `%APPDATA%\hangar\config.toml`
pub mod config;

/// HTTP endpoint probing.
///
/// Polls an endpoint on a fixed interval until it answers with an expected
/// status or a timeout elapses. Used to verify deploys after provisioning.
pub mod net;

/// Output formatting for different modes.
///
/// Provides formatters for:
/// - Table format: Human-readable tables for interactive use
/// - JSON format: Structured output for scripting and automation
pub mod output;

/// Re-export of the main CLI struct for convenient access.
///
/// The [`Cli`] struct represents the root command and is the entry point
/// for parsing command-line arguments.
pub use cli::Cli;

/// Re-export of the configuration struct.
///
/// The [`Config`] struct provides access to the user's CLI configuration:
/// the API host, the Vault address, and the session token location.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "hangar";

/// Application version constant.
///
/// The current version of the CLI, automatically derived from Cargo.toml
/// at compile time using the `CARGO_PKG_VERSION` environment variable.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments. Use `--help` to see correct usage.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed. Run `hangar auth login`.
    pub const AUTH_ERROR: i32 = 4;
}
