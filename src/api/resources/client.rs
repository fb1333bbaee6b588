//
//  hangar-cli
//  api/resources/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client resource: an organization that owns applications.
//!
//! Clients are addressed by `name`, so the name doubles as the key field
//! and cannot be changed after creation.

use serde::{Deserialize, Serialize};

use crate::api::entity::{Entity, Method};
use crate::api::envelope::{decode_single, ListMeta};
use crate::api::error::ApiError;

/// A client organization record.
///
/// Named `ClientRecord` rather than `Client` to keep it visually distinct
/// from the HTTP client types in this crate.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
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

    /// Contact email.
    #[serde(default)]
    pub email: String,

    /// Unique client name; the key field for item paths.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
}

impl ClientRecord {
    fn clear_server_fields(&mut self) {
        self.id.clear();
        self.etag.clear();
        self.created.clear();
        self.updated.clear();
    }
}

impl Entity for ClientRecord {
    fn path_for(&self, method: Method) -> String {
        match method {
            Method::Post => "client".to_string(),
            _ => format!("client/{}", self.name),
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
        // name is the addressing field and cannot be patched
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

/// Read-only list of clients.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ClientList {
    /// Items on the current page.
    #[serde(default, rename = "_items")]
    pub items: Vec<ClientRecord>,

    /// Pagination metadata.
    #[serde(default, rename = "_meta")]
    pub meta: ListMeta,
}

impl Entity for ClientList {
    fn path_for(&self, _method: Method) -> String {
        "client".to_string()
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

    fn populated() -> ClientRecord {
        ClientRecord {
            created: "Tue, 02 Sep 2025 10:00:00 GMT".to_string(),
            etag: "abc123".to_string(),
            id: "68b7".to_string(),
            updated: "Tue, 02 Sep 2025 11:00:00 GMT".to_string(),
            email: "ops@acme.io".to_string(),
            name: "acme".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn paths_per_verb() {
        let record = populated();
        assert_eq!(record.path_for(Method::Post), "client");
        assert_eq!(record.path_for(Method::Get), "client/acme");
        assert_eq!(record.path_for(Method::Patch), "client/acme");
        assert_eq!(record.path_for(Method::Delete), "client/acme");
    }

    #[test]
    fn create_payload_strips_server_fields_only() {
        let record = populated();
        let wire: Value = serde_json::from_slice(&record.create_payload().unwrap()).unwrap();
        assert!(wire.get("_id").is_none());
        assert!(wire.get("_etag").is_none());
        assert!(wire.get("_created").is_none());
        assert!(wire.get("_updated").is_none());
        assert_eq!(wire["name"], "acme");
        assert_eq!(wire["email"], "ops@acme.io");
        // caller's value is untouched
        assert_eq!(record.etag, "abc123");
    }

    #[test]
    fn update_payload_also_strips_key_field() {
        let wire: Value = serde_json::from_slice(&populated().update_payload().unwrap()).unwrap();
        assert!(wire.get("name").is_none());
        assert!(wire.get("_id").is_none());
        assert!(wire.get("_etag").is_none());
        assert_eq!(wire["phone"], "555-0100");
    }

    #[test]
    fn decode_then_encode_round_trips_business_fields() {
        let body = br#"{"name":"acme","email":"ops@acme.io","phone":"555-0100","_id":"68b7","_etag":"abc123"}"#;
        let mut record = ClientRecord::default();
        record.apply_response(body).unwrap();

        let wire: Value = serde_json::from_slice(&record.create_payload().unwrap()).unwrap();
        assert_eq!(wire["name"], "acme");
        assert_eq!(wire["email"], "ops@acme.io");
        assert_eq!(wire["phone"], "555-0100");
    }

    #[test]
    fn fresh_record_has_empty_concurrency_token() {
        assert_eq!(ClientRecord::default().concurrency_token(), "");
    }
}
