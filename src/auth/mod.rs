//
//  hangar-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Helpers
//!
//! Session token persistence and the Vault GitHub login flow.
//!
//! The session token is kept in a plain file with owner-only permissions,
//! containing the raw token text and nothing else. The file lives next to
//! the CLI configuration by default (see
//! [`Config::token_file`](crate::config::Config::token_file)).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

mod github;

pub use github::github_login;

/// Writes a session token to a file with owner-only permissions.
///
/// Parent directories are created as needed. The file contains the raw
/// token text with no wrapping structure, so it can be read back by other
/// tools with a plain `cat`.
///
/// # Parameters
///
/// * `token` - The raw token text to persist
/// * `path` - Destination file path
///
/// # Errors
///
/// Returns an error if the file or its parent directories cannot be
/// created, or if permissions cannot be restricted.
pub fn write_token(token: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, token).with_context(|| format!("failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)
            .with_context(|| format!("failed to restrict permissions on {}", path.display()))?;
    }

    Ok(())
}

/// Reads a session token back from a file, trimming surrounding whitespace.
///
/// # Errors
///
/// Returns an error naming the path and pointing at `hangar auth login`
/// when the file is missing or unreadable.
pub fn read_token(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).with_context(|| {
        format!(
            "no session token at {}; run `hangar auth login`",
            path.display()
        )
    })?;
    Ok(raw.trim().to_string())
}
