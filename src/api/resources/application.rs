//
//  hangar-cli
//  api/resources/application.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Application resource: a repository-backed project owned by a client,
//! carrying the deploys provisioned for it.

use serde::{Deserialize, Serialize};

use crate::api::entity::{Entity, Method};
use crate::api::envelope::{decode_single, ListMeta};
use crate::api::error::ApiError;
use crate::api::resources::{ClientRecord, Deploy};

/// An application record.
///
/// Addressed by `app_id`; the collection path is `application`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Unique application id; the key field for item paths.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub app_id: String,

    /// Owning client organization.
    #[serde(default)]
    pub client: ClientRecord,

    /// Deploys provisioned for this application.
    #[serde(default)]
    pub deploys: Vec<Deploy>,

    /// Identifier of the repository webhook driving builds.
    #[serde(default)]
    pub github_hook_id: i64,

    /// Repository organization.
    #[serde(default)]
    pub repo_org: String,

    /// Human-readable name.
    #[serde(default)]
    pub name: String,

    /// Repository clone URL.
    #[serde(default)]
    pub repo: String,

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

impl Application {
    fn clear_server_fields(&mut self) {
        self.id.clear();
        self.etag.clear();
        self.created.clear();
        self.updated.clear();
    }
}

impl Entity for Application {
    fn path_for(&self, method: Method) -> String {
        match method {
            Method::Post => "application".to_string(),
            _ => format!("application/{}", self.app_id),
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
        // app_id is the addressing field and cannot be patched
        wire.app_id.clear();
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

/// Read-only list of applications.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ApplicationList {
    /// Items on the current page.
    #[serde(default, rename = "_items")]
    pub items: Vec<Application>,

    /// Pagination metadata.
    #[serde(default, rename = "_meta")]
    pub meta: ListMeta,
}

impl Entity for ApplicationList {
    fn path_for(&self, _method: Method) -> String {
        "application".to_string()
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

    fn populated() -> Application {
        Application {
            app_id: "storefront".to_string(),
            repo_org: "acme".to_string(),
            name: "storefront".to_string(),
            repo: "git@host:acme/storefront".to_string(),
            github_hook_id: 42,
            created: "Tue, 02 Sep 2025 10:00:00 GMT".to_string(),
            etag: "e1".to_string(),
            id: "5559".to_string(),
            updated: "Tue, 02 Sep 2025 11:00:00 GMT".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn post_uses_collection_path() {
        let app = populated();
        assert_eq!(app.path_for(Method::Post), "application");
        assert_eq!(app.path_for(Method::Get), "application/storefront");
    }

    #[test]
    fn create_payload_never_carries_etag_or_timestamps() {
        let wire: Value = serde_json::from_slice(&populated().create_payload().unwrap()).unwrap();
        for field in ["_id", "_etag", "_created", "_updated"] {
            assert!(wire.get(field).is_none(), "{field} leaked into create payload");
        }
        assert_eq!(wire["app_id"], "storefront");
        assert_eq!(wire["github_hook_id"], 42);
    }

    #[test]
    fn update_payload_never_carries_identifier() {
        let wire: Value = serde_json::from_slice(&populated().update_payload().unwrap()).unwrap();
        assert!(wire.get("app_id").is_none());
        assert!(wire.get("_id").is_none());
        assert!(wire.get("_etag").is_none());
        assert_eq!(wire["repo_org"], "acme");
    }

    #[test]
    fn list_decodes_envelope() {
        let body = br#"{"_items":[{"app_id":"a"},{"app_id":"b"}],"_meta":{"max_results":25,"page":1,"total":2}}"#;
        let mut list = ApplicationList::default();
        list.apply_response(body).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.meta.total, 2);
    }
}
