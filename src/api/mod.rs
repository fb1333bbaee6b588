//
//  hangar-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP client for the Hangar resource-management API.
//!
//! ## Architecture
//!
//! - [`client`]: the request dispatcher ([`ApiClient`]) and [`Credentials`]
//! - [`entity`]: the [`Entity`] contract every resource implements
//! - [`envelope`]: list envelope (`_items`/`_meta`) and single-object decode
//! - [`error`]: the [`ApiError`] taxonomy
//! - [`resources`]: the concrete resource types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hangar_cli::api::{ApiClient, Credentials};
//! use hangar_cli::api::resources::Deploy;
//!
//! # async fn example() -> Result<(), hangar_cli::api::ApiError> {
//! let api = ApiClient::new("https://api.hangar.example.com")?
//!     .with_auth(Credentials::bearer("session-token"));
//!
//! let mut deploy = Deploy {
//!     deploy_id: "storefront-staging".to_string(),
//!     ..Default::default()
//! };
//! api.get(&mut deploy).await?;
//! deploy.branch = "release".to_string();
//! api.patch(&mut deploy).await?;
//! # Ok(())
//! # }
//! ```

/// Request dispatcher and credentials.
pub mod client;

/// The entity capability contract.
pub mod entity;

/// Response envelope types and helpers.
pub mod envelope;

/// API error taxonomy.
pub mod error;

/// Concrete resource types.
pub mod resources;

pub use client::{ApiClient, Credentials};
pub use entity::{Entity, Method};
pub use envelope::ListMeta;
pub use error::ApiError;
