//
//  hangar-cli
//  api/envelope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Envelope Handling
//!
//! The Hangar API answers in two shapes: a single-item response is a flat
//! JSON object, while a list response wraps items under `_items` with a
//! sibling `_meta` object reporting page size, page number, and total count.
//!
//! Keyed lookups occasionally come back as a one-item list envelope instead
//! of a flat object, so the single-object decode path must handle both.
//! [`decode_single`] does exactly that: when `_items` is present the first
//! item is unwrapped, otherwise the body is decoded as a flat object.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination metadata reported alongside `_items` in list responses.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ListMeta {
    /// Page size the server applied.
    #[serde(default)]
    pub max_results: u32,

    /// Page number, 1-indexed.
    #[serde(default)]
    pub page: u32,

    /// Total item count across all pages.
    #[serde(default)]
    pub total: u32,
}

/// Decodes a single-object response body, unwrapping a list envelope if the
/// server answered with one.
///
/// # Errors
///
/// Fails when the body is not valid JSON, when the envelope is present but
/// empty, or when the (unwrapped) object does not match `T`'s schema.
///
/// # Example
///
/// ```rust
/// use hangar_cli::api::envelope::decode_single;
/// use hangar_cli::api::resources::ClientRecord;
///
/// let flat: ClientRecord = decode_single(br#"{"name":"acme"}"#).unwrap();
/// let wrapped: ClientRecord =
///     decode_single(br#"{"_items":[{"name":"acme"}],"_meta":{"total":1}}"#).unwrap();
/// assert_eq!(flat.name, wrapped.name);
/// ```
pub fn decode_single<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;

    if let Some(items) = value.get("_items").and_then(Value::as_array) {
        return match items.first() {
            Some(first) => T::deserialize(first),
            None => Err(serde::de::Error::custom("empty _items envelope")),
        };
    }

    T::deserialize(value)
}
