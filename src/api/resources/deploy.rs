//
//  hangar-cli
//  api/resources/deploy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deploy resource: a provisioned environment for an application, bound to
//! a branch and hostname.

use serde::{Deserialize, Serialize};

use crate::api::entity::{Entity, Method};
use crate::api::envelope::{decode_single, ListMeta};
use crate::api::error::ApiError;
use crate::api::resources::Application;

/// A deploy record.
///
/// Addressed by `deploy_id`; the collection path is `deploys`. The nested
/// application is boxed because [`Application`] in turn embeds its deploys.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deploy {
    /// Unique deploy id; the key field for item paths.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deploy_id: String,

    /// Human-readable name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Application this deploy belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Box<Application>>,

    /// Provisioning template.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template: String,

    /// Branch the deploy tracks.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub branch: String,

    /// Hostname the deploy serves.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,

    /// Serving protocol, `http` or `https`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,

    /// Basic-auth username guarding non-production deploys.
    #[serde(default, rename = "basicauth_user", skip_serializing_if = "String::is_empty")]
    pub basic_auth_user: String,

    /// Basic-auth password guarding non-production deploys.
    #[serde(default, rename = "basicauth_pass", skip_serializing_if = "String::is_empty")]
    pub basic_auth_pass: String,

    /// Whether the platform manages this deploy's lifecycle.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_managed: bool,

    /// Source deploy to migrate content from, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub migrate_from: String,

    /// Public URL once provisioned.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Server-assigned creation timestamp.
    #[serde(default, rename = "_created", skip_serializing_if = "String::is_empty")]
    pub created: String,

    /// Server-assigned concurrency token.
    #[serde(default, rename = "_etag", skip_serializing_if = "String::is_empty")]
    pub etag: String,

    /// Server-assigned identifier.
    #[serde(default, rename = "_id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Server-assigned last-update timestamp.
    #[serde(default, rename = "_updated", skip_serializing_if = "String::is_empty")]
    pub updated: String,
}

impl Deploy {
    fn clear_server_fields(&mut self) {
        self.id.clear();
        self.etag.clear();
        self.created.clear();
        self.updated.clear();
    }
}

impl Entity for Deploy {
    fn path_for(&self, method: Method) -> String {
        match method {
            Method::Post => "deploys".to_string(),
            _ => format!("deploys/{}", self.deploy_id),
        }
    }

    fn create_payload(&self) -> Result<Vec<u8>, ApiError> {
        let mut wire = self.clone();
        wire.clear_server_fields();
        Ok(serde_json::to_vec(&wire)?)
    }

    fn update_payload(&self) -> Result<Vec<u8>, ApiError> {
        let mut wire = self.clone();
        wire.clear_server_fields();
        // deploy_id is the addressing field and cannot be patched
        wire.deploy_id.clear();
        Ok(serde_json::to_vec(&wire)?)
    }

    fn concurrency_token(&self) -> &str {
        &self.etag
    }

    fn apply_response(&mut self, body: &[u8]) -> Result<(), ApiError> {
        *self = decode_single(body)?;
        Ok(())
    }
}

/// Read-only list of deploys.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DeployList {
    /// Items on the current page.
    #[serde(default, rename = "_items")]
    pub items: Vec<Deploy>,

    /// Pagination metadata.
    #[serde(default, rename = "_meta")]
    pub meta: ListMeta,
}

impl Entity for DeployList {
    fn path_for(&self, _method: Method) -> String {
        "deploys".to_string()
    }

    fn create_payload(&self) -> Result<Vec<u8>, ApiError> {
        Ok(b"{}".to_vec())
    }

    fn update_payload(&self) -> Result<Vec<u8>, ApiError> {
        Ok(b"{}".to_vec())
    }

    fn concurrency_token(&self) -> &str {
        ""
    }

    fn apply_response(&mut self, body: &[u8]) -> Result<(), ApiError> {
        *self = serde_json::from_slice(body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn paths_join_on_deploy_id() {
        let deploy = Deploy {
            deploy_id: "storefront-staging".to_string(),
            ..Default::default()
        };
        assert_eq!(deploy.path_for(Method::Post), "deploys");
        assert_eq!(deploy.path_for(Method::Patch), "deploys/storefront-staging");
    }

    #[test]
    fn update_payload_strips_key_and_server_fields() {
        let deploy = Deploy {
            deploy_id: "storefront-staging".to_string(),
            branch: "main".to_string(),
            hostname: "staging.acme.io".to_string(),
            etag: "e9".to_string(),
            id: "77".to_string(),
            created: "yesterday".to_string(),
            updated: "today".to_string(),
            ..Default::default()
        };
        let wire: Value = serde_json::from_slice(&deploy.update_payload().unwrap()).unwrap();
        assert!(wire.get("deploy_id").is_none());
        assert!(wire.get("_etag").is_none());
        assert!(wire.get("_created").is_none());
        assert_eq!(wire["branch"], "main");
        assert_eq!(wire["hostname"], "staging.acme.io");
    }

    #[test]
    fn cleared_fields_are_absent_not_empty() {
        let deploy = Deploy {
            deploy_id: "d1".to_string(),
            ..Default::default()
        };
        let wire: Value = serde_json::from_slice(&deploy.create_payload().unwrap()).unwrap();
        // only deploy_id is set, so only deploy_id appears
        assert_eq!(wire.as_object().unwrap().len(), 1);
    }

    #[test]
    fn nested_application_round_trips() {
        let body = br#"{"deploy_id":"d1","application":{"app_id":"storefront"},"_etag":"e2"}"#;
        let mut deploy = Deploy::default();
        deploy.apply_response(body).unwrap();
        assert_eq!(deploy.application.as_ref().unwrap().app_id, "storefront");
        assert_eq!(deploy.concurrency_token(), "e2");
    }
}
