//
//  hangar-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Dispatcher
//!
//! This module provides the core HTTP client for the Hangar API. It performs
//! exactly one HTTP exchange per call, enforcing a uniform authentication and
//! concurrency-control policy across all resource types.
//!
//! ## Features
//!
//! - One generic operation per verb, parameterized over [`Entity`]
//! - Authentication header selection with fixed precedence
//! - ETag optimistic concurrency on update and delete (`If-Match`)
//! - Strict 200-299 success range with distinguished 401/406 mapping
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hangar_cli::api::{ApiClient, Credentials};
//! use hangar_cli::api::resources::ClientRecord;
//!
//! # async fn example() -> Result<(), hangar_cli::api::ApiError> {
//! let api = ApiClient::new("https://api.hangar.example.com")?
//!     .with_auth(Credentials::bearer("session-token"));
//!
//! let mut record = ClientRecord {
//!     name: "acme".to_string(),
//!     ..Default::default()
//! };
//! api.get(&mut record).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::header::{CONTENT_TYPE, IF_MATCH};
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::entity::{Entity, Method};
use crate::api::error::ApiError;

/// Authentication material for a Hangar API session.
///
/// At most one of admin token, bearer token, or username+password is used
/// per request, selected by a strict precedence order (see
/// [`authorize`](Self::authorize)). Constructed by the caller per session
/// and immutable for the duration of a request.
///
/// # Example
///
/// ```rust
/// use hangar_cli::api::Credentials;
///
/// let admin = Credentials::admin("ops-master-key");
/// let session = Credentials::bearer("session-token");
/// let basic = Credentials::basic("drew", "hunter2");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Username for basic authentication.
    #[serde(default)]
    pub username: String,

    /// Password for basic authentication. Never serialized.
    #[serde(skip)]
    pub password: String,

    /// Bearer session token, as issued by the API on login.
    #[serde(default, rename = "auth_token")]
    pub token: String,

    /// Admin token, sent with the custom `token` scheme.
    #[serde(default, rename = "admin_token")]
    pub admin_token: String,
}

impl Credentials {
    /// Creates credentials holding only an admin token.
    pub fn admin(token: impl Into<String>) -> Self {
        Self {
            admin_token: token.into(),
            ..Default::default()
        }
    }

    /// Creates credentials holding only a bearer session token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Creates credentials holding a username and password pair.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Applies the authentication header to a request.
    ///
    /// Precedence is fixed and identical for all four verbs: an admin token
    /// is sent as `Authorization: token <t>`; otherwise a bearer token is
    /// sent as `Authorization: Bearer <t>`; otherwise a username/password
    /// pair is sent as basic auth; otherwise no auth header is added.
    ///
    /// # Parameters
    ///
    /// - `request`: the [`RequestBuilder`] to authorize.
    ///
    /// # Returns
    ///
    /// The builder with at most one `Authorization` header applied.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if !self.admin_token.is_empty() {
            request.header("Authorization", format!("token {}", self.admin_token))
        } else if !self.token.is_empty() {
            request.bearer_auth(&self.token)
        } else if !self.username.is_empty() && !self.password.is_empty() {
            request.basic_auth(&self.username, Some(&self.password))
        } else {
            request
        }
    }

    /// Whether a bearer token would be the credential actually sent.
    ///
    /// True only when the session token is set and no admin token shadows
    /// it. Used to split 401 responses into bad-token vs bad-credentials.
    fn sends_bearer(&self) -> bool {
        self.admin_token.is_empty() && !self.token.is_empty()
    }
}

/// The main HTTP client for the Hangar API.
///
/// `ApiClient` binds a base host and optional [`Credentials`], and exposes
/// one operation per verb, each taking an [`Entity`]. Every operation issues
/// a single HTTP exchange; there is no retry, pooling strategy, caching, or
/// batching at this layer. The client holds no mutable state between calls,
/// so it can be shared freely across tasks.
///
/// # Creating a client
///
/// ```rust,no_run
/// use hangar_cli::api::{ApiClient, Credentials};
///
/// let api = ApiClient::new("https://api.hangar.example.com")?
///     .with_auth(Credentials::admin("ops-master-key"));
/// # Ok::<(), hangar_cli::api::ApiError>(())
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The underlying HTTP client.
    http: reqwest::Client,
    /// The base host all entity paths are resolved against.
    host: Url,
    /// Optional authentication material.
    auth: Option<Credentials>,
}

impl ApiClient {
    /// Creates a client bound to the given base host.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PathResolution`] when the host is not a valid
    /// absolute URL, or [`ApiError::Transport`] when the HTTP client cannot
    /// be constructed.
    pub fn new(host: &str) -> Result<Self, ApiError> {
        let host = Url::parse(host).map_err(|e| ApiError::PathResolution(e.to_string()))?;
        if host.cannot_be_a_base() {
            return Err(ApiError::PathResolution(format!(
                "{host} cannot carry a resource path"
            )));
        }

        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(format!("hangar/{}", crate::VERSION))
                .build()?,
            host,
            auth: None,
        })
    }

    /// Sets the credentials for this client, builder style.
    pub fn with_auth(mut self, auth: Credentials) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns the base host this client resolves entity paths against.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Reads an entity: GET, no body, decode response into the entity.
    ///
    /// On success the entity is fully overwritten with the server's copy,
    /// including `_etag` for later update/delete calls.
    pub async fn get<E: Entity>(&self, entity: &mut E) -> Result<(), ApiError> {
        let body = self
            .exchange(Method::Get, &entity.path_for(Method::Get), None, None)
            .await?;
        entity.apply_response(&body)
    }

    /// Creates an entity: POST with the create payload, decode response.
    ///
    /// Server-assigned fields (`_id`, `_etag`, timestamps) become visible on
    /// the entity after a successful call.
    pub async fn post<E: Entity>(&self, entity: &mut E) -> Result<(), ApiError> {
        let payload = entity.create_payload()?;
        let body = self
            .exchange(
                Method::Post,
                &entity.path_for(Method::Post),
                Some(payload),
                None,
            )
            .await?;
        entity.apply_response(&body)
    }

    /// Updates an entity: PATCH with the update payload and `If-Match`.
    ///
    /// A stale concurrency token makes the server reject the update, which
    /// surfaces as an error rather than a silent overwrite; the in-memory
    /// entity is left untouched in that case.
    pub async fn patch<E: Entity>(&self, entity: &mut E) -> Result<(), ApiError> {
        let payload = entity.update_payload()?;
        let etag = entity.concurrency_token().to_string();
        let body = self
            .exchange(
                Method::Patch,
                &entity.path_for(Method::Patch),
                Some(payload),
                Some(&etag),
            )
            .await?;
        entity.apply_response(&body)
    }

    /// Deletes an entity: DELETE with `If-Match`, no decode on success.
    pub async fn delete<E: Entity>(&self, entity: &E) -> Result<(), ApiError> {
        self.exchange(
            Method::Delete,
            &entity.path_for(Method::Delete),
            None,
            Some(entity.concurrency_token()),
        )
        .await?;
        Ok(())
    }

    /// Joins an entity-relative path onto the base host.
    fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::PathResolution(format!("{} cannot carry a resource path", self.host))
            })?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    /// Performs one HTTP exchange and returns the raw response body.
    ///
    /// All four verbs funnel through here so the header policy and status
    /// mapping exist exactly once.
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        payload: Option<Vec<u8>>,
        if_match: Option<&str>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = self.url_for(path)?;

        let mut request = match method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
            Method::Patch => self.http.patch(url),
            Method::Delete => self.http.delete(url),
        };

        request = request.header(CONTENT_TYPE, "application/json");
        if let Some(etag) = if_match {
            request = request.header(IF_MATCH, etag);
        }
        if let Some(auth) = &self.auth {
            request = auth.authorize(request);
        }
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(self.status_error(status));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Maps a non-2xx status to the error taxonomy.
    ///
    /// 401 splits on whether a bearer token was the credential in play;
    /// 406 means the token is no longer accepted, regardless of method.
    fn status_error(&self, status: reqwest::StatusCode) -> ApiError {
        let bearer = self.auth.as_ref().is_some_and(Credentials::sends_bearer);
        match status.as_u16() {
            401 if bearer => ApiError::BadToken,
            401 => ApiError::BadCredentials,
            406 => ApiError::TokenExpired,
            code => ApiError::Status {
                code,
                text: status
                    .canonical_reason()
                    .unwrap_or("unrecognized status")
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::resources::{Application, ApplicationList, ClientRecord};

    #[test]
    fn new_rejects_malformed_host() {
        let err = ApiClient::new("://not-a-host").unwrap_err();
        assert!(matches!(err, ApiError::PathResolution(_)));
    }

    #[test]
    fn url_joins_host_path_and_entity_path() {
        let api = ApiClient::new("https://api.example.com/v1/").unwrap();
        let url = api.url_for("client/acme").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/client/acme");
    }

    #[tokio::test]
    async fn admin_token_takes_precedence_over_everything() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/client/acme")
            .match_header("Authorization", "token master-key")
            .with_status(200)
            .with_body(r#"{"name":"acme","email":"ops@acme.io","phone":""}"#)
            .create_async()
            .await;

        let creds = Credentials {
            username: "drew".to_string(),
            password: "hunter2".to_string(),
            token: "session".to_string(),
            admin_token: "master-key".to_string(),
        };
        let api = ApiClient::new(&server.url()).unwrap().with_auth(creds);

        let mut record = ClientRecord {
            name: "acme".to_string(),
            ..Default::default()
        };
        api.get(&mut record).await.unwrap();

        mock.assert_async().await;
        assert_eq!(record.email, "ops@acme.io");
    }

    #[tokio::test]
    async fn basic_auth_used_when_no_tokens_present() {
        let mut server = mockito::Server::new_async().await;
        // "drew:hunter2" base64-encoded
        let mock = server
            .mock("GET", "/client/acme")
            .match_header("Authorization", "Basic ZHJldzpodW50ZXIy")
            .with_status(200)
            .with_body(r#"{"name":"acme","email":"","phone":""}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url())
            .unwrap()
            .with_auth(Credentials::basic("drew", "hunter2"));

        let mut record = ClientRecord {
            name: "acme".to_string(),
            ..Default::default()
        };
        api.get(&mut record).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn username_without_password_sends_no_auth_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/client/acme")
            .match_header("Authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"name":"acme","email":"","phone":""}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url()).unwrap().with_auth(Credentials {
            username: "drew".to_string(),
            ..Default::default()
        });

        let mut record = ClientRecord {
            name: "acme".to_string(),
            ..Default::default()
        };
        api.get(&mut record).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_populates_name_and_concurrency_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/client/killah")
            .with_status(200)
            .with_body(r#"{"name":"killah","_etag":"abc123"}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url()).unwrap();
        let mut record = ClientRecord {
            name: "killah".to_string(),
            ..Default::default()
        };
        api.get(&mut record).await.unwrap();

        assert_eq!(record.name, "killah");
        assert_eq!(record.concurrency_token(), "abc123");
        assert!(record.id.is_empty());
    }

    #[tokio::test]
    async fn stale_etag_update_fails_and_leaves_entity_untouched() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PATCH", "/client/acme")
            .match_header("If-Match", "current")
            .with_status(200)
            .with_body(r#"{"name":"acme","_etag":"next"}"#)
            .create_async()
            .await;
        server
            .mock("PATCH", "/client/acme")
            .match_header("If-Match", "stale")
            .with_status(412)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url()).unwrap();
        let mut record = ClientRecord {
            name: "acme".to_string(),
            email: "ops@acme.io".to_string(),
            etag: "stale".to_string(),
            ..Default::default()
        };
        let before = record.clone();

        let err = api.patch(&mut record).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { code: 412, .. }));
        assert_eq!(record.email, before.email);
        assert_eq!(record.etag, before.etag);
    }

    #[tokio::test]
    async fn delete_sends_if_match_and_skips_decode() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/client/acme")
            .match_header("If-Match", "abc123")
            .with_status(204)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url()).unwrap();
        let record = ClientRecord {
            name: "acme".to_string(),
            etag: "abc123".to_string(),
            ..Default::default()
        };
        api.delete(&record).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unauthorized_without_bearer_reports_bad_credentials() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/client/acme")
            .with_status(401)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url())
            .unwrap()
            .with_auth(Credentials::basic("drew", "wrong"));
        let mut record = ClientRecord {
            name: "acme".to_string(),
            ..Default::default()
        };
        let err = api.get(&mut record).await.unwrap_err();
        assert!(matches!(err, ApiError::BadCredentials));
    }

    #[tokio::test]
    async fn unauthorized_with_bearer_reports_bad_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/client/acme")
            .with_status(401)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url())
            .unwrap()
            .with_auth(Credentials::bearer("revoked"));
        let mut record = ClientRecord {
            name: "acme".to_string(),
            ..Default::default()
        };
        let err = api.get(&mut record).await.unwrap_err();
        assert!(matches!(err, ApiError::BadToken));
    }

    #[tokio::test]
    async fn not_acceptable_reports_token_expired_for_any_method() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/client/acme")
            .with_status(406)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url())
            .unwrap()
            .with_auth(Credentials::admin("old-master"));
        let mut record = ClientRecord {
            name: "acme".to_string(),
            ..Default::default()
        };
        let err = api.get(&mut record).await.unwrap_err();
        assert!(matches!(err, ApiError::TokenExpired));
    }

    #[tokio::test]
    async fn post_surfaces_server_assigned_fields() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/application")
            .with_status(201)
            .with_body(
                r#"{"app_id":"storefront","name":"storefront","repo":"git@host:acme/storefront","repo_org":"acme","_id":"5559","_etag":"e1","_created":"now","_updated":"now"}"#,
            )
            .create_async()
            .await;

        let api = ApiClient::new(&server.url()).unwrap();
        let mut app = Application {
            app_id: "storefront".to_string(),
            name: "storefront".to_string(),
            ..Default::default()
        };
        api.post(&mut app).await.unwrap();

        assert_eq!(app.id, "5559");
        assert_eq!(app.concurrency_token(), "e1");
        assert_eq!(app.created, "now");
    }

    #[tokio::test]
    async fn list_envelope_decodes_items_and_meta() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/application")
            .with_status(200)
            .with_body(
                r#"{"_items":[{"app_id":"storefront","name":"storefront"}],"_meta":{"total":1}}"#,
            )
            .create_async()
            .await;

        let api = ApiClient::new(&server.url()).unwrap();
        let mut apps = ApplicationList::default();
        api.get(&mut apps).await.unwrap();

        assert_eq!(apps.items.len(), 1);
        assert_eq!(apps.items[0].app_id, "storefront");
        assert_eq!(apps.meta.total, 1);
    }
}
