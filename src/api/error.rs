//
//  hangar-cli
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Error Types
//!
//! Unified error type for all Hangar API operations. Every variant is
//! terminal for the current call; the dispatcher never retries. Callers
//! decide whether to retry, prompt for re-authentication, or abort.
//!
//! ## Variants at a glance
//!
//! | Variant | Meaning | Source |
//! |---------|---------|--------|
//! | `PathResolution` | Malformed base host URL | client construction |
//! | `Transport` | DNS/connect/timeout failure | `reqwest` |
//! | `Status` | Non-2xx response | status line + code |
//! | `Decode` | Malformed or schema-mismatched body | `serde_json` |
//! | `BadCredentials` | 401 without a bearer token | auth policy |
//! | `BadToken` | 401 with a bearer token | auth policy |
//! | `TokenExpired` | 406, any auth method | auth policy |

use thiserror::Error;

/// Error type for all Hangar API operations.
///
/// No partial-success state is ever exposed: an entity is either left in its
/// pre-call state (error before decode) or fully overwritten (successful
/// decode).
///
/// # Example
///
/// ```rust
/// use hangar_cli::api::ApiError;
///
/// fn describe(err: &ApiError) -> &'static str {
///     match err {
///         ApiError::TokenExpired => "log in again",
///         ApiError::BadToken | ApiError::BadCredentials => "check your credentials",
///         ApiError::Transport(_) => "check your connection",
///         _ => "request failed",
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base host could not be parsed as a URL.
    #[error("invalid API host: {0}")]
    PathResolution(String),

    /// A network-level failure: DNS, connection refused, timeout.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 200-299 success range.
    ///
    /// Carries the status text and numeric code from the response line.
    #[error("{text}: {code}")]
    Status {
        /// Numeric HTTP status code.
        code: u16,
        /// Canonical status text (for example `Not Found`).
        text: String,
    },

    /// The response body was not valid wire format for the resource schema.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// 401 while authenticating with something other than a bearer token.
    #[error("bad credentials")]
    BadCredentials,

    /// 401 while authenticating with a bearer token.
    #[error("bad token; run `hangar auth login` to obtain a new one")]
    BadToken,

    /// 406: the session token is no longer accepted.
    #[error("token expired; run `hangar auth login` to obtain a new one")]
    TokenExpired,
}
