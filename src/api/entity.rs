//
//  hangar-cli
//  api/entity.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Entity Contract
//!
//! This module defines the capability set every Hangar API resource must
//! provide so the request dispatcher can stay agnostic of resource-specific
//! schemas and addressing.
//!
//! ## Overview
//!
//! The Hangar API is an Eve-style REST API: every resource kind has a
//! collection endpoint (used for creation and listing) and an item endpoint
//! keyed by a resource-specific field. Server-assigned bookkeeping fields
//! (`_id`, `_etag`, `_created`, `_updated`) appear on every resource and are
//! stripped from outbound payloads.
//!
//! A resource participates in the request layer by implementing [`Entity`]:
//!
//! - [`path_for`](Entity::path_for) resolves the relative path per verb
//! - [`create_payload`](Entity::create_payload) produces the POST body
//! - [`update_payload`](Entity::update_payload) produces the PATCH body
//! - [`concurrency_token`](Entity::concurrency_token) reports the last `_etag`
//! - [`apply_response`](Entity::apply_response) overwrites the value from a
//!   response body
//!
//! ## Example
//!
//! ```rust,no_run
//! use hangar_cli::api::{ApiClient, Credentials};
//! use hangar_cli::api::resources::Application;
//!
//! # async fn example() -> Result<(), hangar_cli::api::ApiError> {
//! let client = ApiClient::new("https://api.hangar.example.com")?
//!     .with_auth(Credentials::bearer("session-token"));
//!
//! let mut app = Application {
//!     app_id: "storefront".to_string(),
//!     ..Default::default()
//! };
//! client.get(&mut app).await?;
//! println!("{} tracks {}", app.app_id, app.repo);
//! # Ok(())
//! # }
//! ```

use crate::api::error::ApiError;

/// The four verbs the dispatcher issues.
///
/// Passed to [`Entity::path_for`] so a resource can resolve its collection
/// path for creation and its item path for everything else. The mapping to
/// HTTP methods is fixed: read is GET, create is POST, update is PATCH,
/// delete is DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read a single resource (or a list entity's collection).
    Get,
    /// Create a new resource at the collection path.
    Post,
    /// Partially update an existing resource.
    Patch,
    /// Delete an existing resource.
    Delete,
}

/// Capability set implemented by every Hangar API resource.
///
/// The dispatcher ([`ApiClient`](crate::api::ApiClient)) only ever talks to
/// resources through this trait; no shared base type exists. Each resource
/// type implements the five operations independently with its own field
/// schema and path convention.
///
/// # Contract
///
/// - `path_for` is pure: no I/O, stable output per verb.
/// - `create_payload`/`update_payload` operate on a local copy and never
///   mutate the value they are called on. Server-assigned fields (`_id`,
///   `_etag`, `_created`, `_updated`) are always stripped; `update_payload`
///   additionally strips the resource's own key field, which is immutable
///   once created.
/// - `concurrency_token` returns the empty string for a value that has never
///   been fetched or created.
/// - `apply_response` fully overwrites the value on success. On failure the
///   value is in an undefined partial state and the caller must treat the
///   call as failed outright.
pub trait Entity {
    /// Returns the relative path for the given verb.
    ///
    /// For [`Method::Post`] this is the collection path (for example
    /// `application`); for the remaining verbs it is the collection path
    /// joined with the resource's key field (for example
    /// `application/storefront`).
    fn path_for(&self, method: Method) -> String;

    /// Serializes the resource for creation.
    ///
    /// Server-assigned fields are cleared on a local copy before encoding,
    /// so they never travel outbound even if set in memory.
    fn create_payload(&self) -> Result<Vec<u8>, ApiError>;

    /// Serializes the resource for a partial update.
    ///
    /// Same stripping as [`create_payload`](Self::create_payload), plus the
    /// resource's own key field.
    fn update_payload(&self) -> Result<Vec<u8>, ApiError>;

    /// Returns the last-known ETag, empty if the resource was never fetched.
    fn concurrency_token(&self) -> &str;

    /// Overwrites this value from a raw response body.
    ///
    /// Fails with [`ApiError::Decode`] when the body is not valid JSON for
    /// this resource's schema.
    fn apply_response(&mut self, body: &[u8]) -> Result<(), ApiError>;
}
