//
//  hangar-cli
//  api/resources/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User resource: an account known to the API.
//!
//! Users are the one resource kind addressed by the server-assigned `_id`,
//! so the update payload has no extra key field to strip.

use serde::{Deserialize, Serialize};

use crate::api::entity::{Entity, Method};
use crate::api::envelope::{decode_single, ListMeta};
use crate::api::error::ApiError;

/// A user record.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    #[serde(default)]
    pub username: String,

    /// Hashed password as stored by the API.
    #[serde(default)]
    pub hashpw: String,

    /// Session token issued to this user, if any.
    #[serde(default, rename = "auth_token", skip_serializing_if = "String::is_empty")]
    pub token: String,

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
}

impl User {
    fn clear_server_fields(&mut self) {
        self.id.clear();
        self.etag.clear();
        self.created.clear();
        self.updated.clear();
    }
}

impl Entity for User {
    fn path_for(&self, method: Method) -> String {
        match method {
            Method::Post => "users".to_string(),
            _ => format!("users/{}", self.id),
        }
    }

    fn create_payload(&self) -> Result<Vec<u8>, ApiError> {
        let mut wire = self.clone();
        wire.clear_server_fields();
        Ok(serde_json::to_vec(&wire)?)
    }

    fn update_payload(&self) -> Result<Vec<u8>, ApiError> {
        // the addressing field is _id, which is server-assigned and already
        // stripped with the rest of the bookkeeping fields
        let mut wire = self.clone();
        wire.clear_server_fields();
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

/// Read-only list of users.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UserList {
    /// Items on the current page.
    #[serde(default, rename = "_items")]
    pub items: Vec<User>,

    /// Pagination metadata.
    #[serde(default, rename = "_meta")]
    pub meta: ListMeta,
}

impl Entity for UserList {
    fn path_for(&self, _method: Method) -> String {
        "users".to_string()
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
        let user = User {
            username: "drew".to_string(),
            id: "68b7".to_string(),
            ..Default::default()
        };
        assert_eq!(user.path_for(Method::Get), "users/68b7");
        assert_eq!(user.path_for(Method::Post), "users");
    }

    #[test]
    fn update_payload_keeps_username() {
        let user = User {
            username: "drew".to_string(),
            hashpw: "$2b$salted".to_string(),
            id: "68b7".to_string(),
            etag: "e3".to_string(),
            ..Default::default()
        };
        let wire: Value = serde_json::from_slice(&user.update_payload().unwrap()).unwrap();
        assert_eq!(wire["username"], "drew");
        assert!(wire.get("_id").is_none());
        assert!(wire.get("_etag").is_none());
    }

    #[test]
    fn auth_token_survives_round_trip() {
        let mut user = User::default();
        user.apply_response(br#"{"username":"drew","auth_token":"sess","_etag":"e4"}"#)
            .unwrap();
        assert_eq!(user.token, "sess");

        let wire: Value = serde_json::from_slice(&user.create_payload().unwrap()).unwrap();
        assert_eq!(wire["auth_token"], "sess");
        assert!(wire.get("_etag").is_none());
    }
}
