//
//  hangar-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tabular rendering built on `comfy_table`: a builder with headers and
//! rows, UTF-8 borders, and dynamic arrangement to the terminal width.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hangar_cli::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["DEPLOY", "BRANCH", "URL"])
//!     .row(["storefront-staging", "main", "https://staging.acme.io"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a new styled table with default settings.
///
/// UTF-8 full borders, dynamic content arrangement. Prefer
/// [`TableBuilder`] unless you need the raw [`Table`].
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing formatted tables with a fluent API.
///
/// Headers get a cyan accent when color is enabled; color is on by default
/// and can be switched off for non-terminal output.
pub struct TableBuilder {
    table: Table,
    use_color: bool,
}

impl TableBuilder {
    /// Creates a builder with color enabled.
    pub fn new() -> Self {
        Self {
            table: create_table(),
            use_color: true,
        }
    }

    /// Toggles colored headers.
    pub fn color(mut self, enabled: bool) -> Self {
        self.use_color = enabled;
        self
    }

    /// Sets the header row.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| {
                let cell = Cell::new(h.into());
                if self.use_color {
                    cell.fg(Color::Cyan)
                } else {
                    cell
                }
            })
            .collect();
        self.table.set_header(cells);
        self
    }

    /// Appends a data row.
    pub fn row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .add_row(row.into_iter().map(Into::into).collect::<Vec<String>>());
        self
    }

    /// Renders the table to a string.
    pub fn render(self) -> String {
        self.table.to_string()
    }

    /// Prints the table to stdout.
    pub fn print(self) {
        println!("{}", self.table);
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a boolean as `Yes`/`No` for table cells.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_and_rows() {
        let rendered = TableBuilder::new()
            .color(false)
            .headers(["NAME", "BRANCH"])
            .row(["storefront-staging", "main"])
            .render();
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("storefront-staging"));
    }

    #[test]
    fn formats_bools() {
        assert_eq!(format_bool(true), "Yes");
        assert_eq!(format_bool(false), "No");
    }
}
