//
//  hangar-cli
//  api/resources/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build resource: one image build for a repository branch, with its state
//! and captured logs.

use serde::{Deserialize, Serialize};

use crate::api::entity::{Entity, Method};
use crate::api::envelope::{decode_single, ListMeta};
use crate::api::error::ApiError;
use crate::api::resources::ClientRecord;

/// A build record, addressed by the server-assigned `_id`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Build {
    /// Server-assigned creation timestamp.
    #[serde(default, rename = "_created", skip_serializing_if = "String::is_empty")]
    pub created: String,

    /// Server-assigned concurrency token.
    #[serde(default, rename = "_etag", skip_serializing_if = "String::is_empty")]
    pub etag: String,

    /// Server-assigned identifier; the key field for item paths.
    #[serde(default, rename = "_id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Server-assigned last-update timestamp.
    #[serde(default, rename = "_updated", skip_serializing_if = "String::is_empty")]
    pub updated: String,

    /// Human-readable name; immutable once created.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Repository the build ran against.
    #[serde(default)]
    pub repo_name: String,

    /// Registry the built image was pushed to.
    #[serde(default)]
    pub registry: String,

    /// Branch that was built.
    #[serde(default)]
    pub branch: String,

    /// Build state as reported by the builder.
    #[serde(default)]
    pub state: String,

    /// Captured build logs.
    #[serde(default)]
    pub logs: String,

    /// Sequential build number.
    #[serde(default)]
    pub build: i64,

    /// Client organization the build belongs to.
    #[serde(default)]
    pub client: ClientRecord,
}

impl Build {
    fn clear_server_fields(&mut self) {
        self.id.clear();
        self.etag.clear();
        self.created.clear();
        self.updated.clear();
    }
}

impl Entity for Build {
    fn path_for(&self, method: Method) -> String {
        match method {
            Method::Post => "builds".to_string(),
            _ => format!("builds/{}", self.id),
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
        // name is fixed at creation and cannot be patched
        wire.name.clear();
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

/// Read-only list of builds.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BuildList {
    /// Items on the current page.
    #[serde(default, rename = "_items")]
    pub items: Vec<Build>,

    /// Pagination metadata.
    #[serde(default, rename = "_meta")]
    pub meta: ListMeta,
}

impl Entity for BuildList {
    fn path_for(&self, _method: Method) -> String {
        "builds".to_string()
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
    fn item_path_uses_server_id() {
        let build = Build {
            id: "b-900".to_string(),
            ..Default::default()
        };
        assert_eq!(build.path_for(Method::Get), "builds/b-900");
        assert_eq!(build.path_for(Method::Post), "builds");
    }

    #[test]
    fn update_payload_strips_name_too() {
        let build = Build {
            id: "b-900".to_string(),
            etag: "e7".to_string(),
            name: "storefront-main-12".to_string(),
            repo_name: "storefront".to_string(),
            branch: "main".to_string(),
            state: "running".to_string(),
            build: 12,
            ..Default::default()
        };
        let wire: Value = serde_json::from_slice(&build.update_payload().unwrap()).unwrap();
        assert!(wire.get("name").is_none());
        assert!(wire.get("_id").is_none());
        assert_eq!(wire["state"], "running");
        assert_eq!(wire["build"], 12);
    }

    #[test]
    fn create_payload_keeps_name() {
        let build = Build {
            name: "storefront-main-12".to_string(),
            etag: "e7".to_string(),
            ..Default::default()
        };
        let wire: Value = serde_json::from_slice(&build.create_payload().unwrap()).unwrap();
        assert_eq!(wire["name"], "storefront-main-12");
        assert!(wire.get("_etag").is_none());
    }
}
