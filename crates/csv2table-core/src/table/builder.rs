use super::{Row, Table};
use crate::config::{RaggedPolicy, TableOptions};
use crate::error::{Csv2TableError, Result};
use crate::split::{cut_at_terminator, split_fields};
use crate::width::display_width;
use std::io::BufRead;

/// Incremental table builder
///
/// Feed lines with [`push_line`](Self::push_line) or a whole stream with
/// [`read_from`](Self::read_from), then call [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct TableBuilder {
    options: TableOptions,
    table: Table,
    rows_dropped: bool,
    columns_folded: bool,
}

impl TableBuilder {
    pub fn new(options: TableOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Number of rows accepted so far
    pub fn row_count(&self) -> usize {
        self.table.rows.len()
    }

    /// Whether the row cap has been reached
    pub fn is_full(&self) -> bool {
        !self.options.limits.accepts_row(self.row_count())
    }

    /// Split one line and add it as a row
    ///
    /// Lines past the row cap are dropped.
    ///
    /// # Errors
    ///
    /// Returns `RaggedRow` under [`RaggedPolicy::Reject`] when the field
    /// count differs from the first row's.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        if self.is_full() {
            if !self.rows_dropped {
                log::warn!(
                    "row limit of {} reached; ignoring remaining input",
                    self.row_count()
                );
                self.rows_dropped = true;
            }
            return Ok(());
        }

        let split = split_fields(line, self.options.limits.max_fields());
        if split.folded && !self.columns_folded {
            log::warn!(
                "row {} exceeds the column limit; extra fields folded into the last column",
                self.row_count() + 1
            );
            self.columns_folded = true;
        }

        self.push_row(Row::new(split.fields))
    }

    fn push_row(&mut self, row: Row) -> Result<()> {
        let row_number = self.row_count() + 1;

        if self.table.rows.is_empty() {
            self.table.column_count = row.len();
            log::debug!("column count fixed at {}", row.len());
        } else if row.len() != self.table.column_count {
            match self.options.ragged {
                RaggedPolicy::Reject => {
                    return Err(Csv2TableError::RaggedRow {
                        row: row_number,
                        found: row.len(),
                        expected: self.table.column_count,
                    });
                }
                RaggedPolicy::Pad => log::debug!(
                    "row {} has {} field(s), expected {}",
                    row_number,
                    row.len(),
                    self.table.column_count
                ),
            }
        }

        if self.table.widths.len() < row.len() {
            self.table.widths.resize(row.len(), 0);
        }
        for (width, field) in self.table.widths.iter_mut().zip(row.fields()) {
            *width = (*width).max(display_width(field));
        }

        log::trace!("row {}: {:?}", row_number, row.fields());
        self.table.rows.push(row);
        Ok(())
    }

    /// Read every line of `reader` into the table
    ///
    /// Lines are cut at their first `\r` or `\n`. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns `InputReadFailed` if the reader fails, or `RaggedRow` as
    /// described in [`push_line`](Self::push_line).
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|source| {
                Csv2TableError::InputReadFailed {
                    rows_read: self.row_count(),
                    source,
                }
            })?;
            if read == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&buf);
            self.push_line(cut_at_terminator(&text))?;

            if self.rows_dropped {
                break;
            }
        }

        Ok(())
    }

    pub fn finish(self) -> Table {
        log::debug!(
            "table built: {} row(s), {} column(s), widths {:?}",
            self.table.rows.len(),
            self.table.column_count,
            self.table.widths
        );
        self.table
    }
}
