//! Convert command - read CSV, write the Markdown table to stdout

use crate::input::Input;
use crate::output;
use anyhow::Result;
use csv2table_core::{Csv2TableError, TableOptions, convert};

/// Convert `input` to a Markdown table on stdout
///
/// # Arguments
///
/// * `input` - CSV source
/// * `options` - Ragged-row policy and optional limits
pub fn run(input: Input, options: TableOptions) -> Result<()> {
    log::debug!("reading {input} with {options:?}");

    let reader = input.open()?;
    let mut out = output::stdout();

    match convert(reader, &mut out, options) {
        Ok(table) => {
            log::info!(
                "rendered {} row(s) x {} column(s) from {}",
                table.len(),
                table.column_count(),
                input
            );
            Ok(())
        }
        Err(Csv2TableError::OutputWriteFailed(err)) if output::is_broken_pipe(&err) => {
            log::debug!("stdout closed early: {err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
