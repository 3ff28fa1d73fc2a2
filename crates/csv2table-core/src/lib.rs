//! CSV to Markdown table conversion
//!
//! A linear pipeline: [`split`] cuts each line into fields,
//! [`table::TableBuilder`] buffers rows and measures column widths, and
//! [`render::MarkdownRenderer`] writes the padded GFM table.

// Core modules
pub mod config;
pub mod error;
pub mod render;
pub mod split;
pub mod table;
pub mod width;

// Re-export commonly used types
pub use config::{Limits, RaggedPolicy, TableOptions};
pub use error::{Csv2TableError, Result};
pub use render::MarkdownRenderer;
pub use table::{Row, Table, TableBuilder};

use std::io::{BufRead, Write};

/// Read all of `input`, then write the Markdown table to `output`
///
/// Nothing is written if building the table fails.
///
/// # Errors
///
/// Returns `InputReadFailed` or `RaggedRow` from the builder, and
/// `OutputWriteFailed` if `output` rejects a write.
pub fn convert<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: TableOptions,
) -> Result<Table> {
    let mut builder = TableBuilder::new(options);
    builder.read_from(input)?;
    let table = builder.finish();

    MarkdownRenderer::new().write_to(&table, output)?;
    Ok(table)
}
