//
//  hangar-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Rendering for CLI results: Unicode tables for humans, pretty-printed
//! JSON for scripts (`--json`).

pub mod table;

pub use table::{create_table, TableBuilder};

use anyhow::Result;
use serde::Serialize;

/// Prints any serializable value as pretty JSON on stdout.
///
/// Used by every command when `--json` is set, so automation gets the wire
/// fields rather than the table rendering.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
