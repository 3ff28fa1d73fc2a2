//! Markdown table rendering
//!
//! Turns a built [`Table`] into GFM table lines:
//!
//! ```text
//! | a | bb | ccc |
//! | - | -- | --- |
//! | x | y  | z   |
//! ```
//!
//! Every row is rendered with exactly `column_count` cells, each padded to
//! the column's width. Short rows get empty cells; fields past the column
//! count are not rendered.

use crate::table::{Row, Table};
use crate::width::pad_to_width;
use std::io::Write;

/// GFM table renderer
pub struct MarkdownRenderer;

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        MarkdownRenderer
    }

    /// Render the table as lines (header, separator, body)
    ///
    /// Returns no lines for an empty table.
    pub fn lines(&self, table: &Table) -> Vec<String> {
        let Some(header) = table.header() else {
            return Vec::new();
        };

        let widths = self.column_widths(table);
        let mut lines = Vec::with_capacity(table.len() + 1);
        lines.push(self.format_row(header, &widths));
        lines.push(self.format_separator(&widths));
        lines.extend(table.body().iter().map(|row| self.format_row(row, &widths)));
        lines
    }

    /// Render the table to a string, one `\n`-terminated line per row
    pub fn render_to_string(&self, table: &Table) -> String {
        self.lines(table)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }

    /// Write the rendered table to `out`
    ///
    /// # Errors
    ///
    /// Propagates write errors from `out`.
    pub fn write_to<W: Write>(&self, table: &Table, out: &mut W) -> std::io::Result<()> {
        for line in self.lines(table) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    /// Widths of the rendered columns (first `column_count` entries)
    fn column_widths(&self, table: &Table) -> Vec<usize> {
        (0..table.column_count())
            .map(|index| table.column_width(index))
            .collect()
    }

    /// Format a single row (e.g., "| a | bb |")
    fn format_row(&self, row: &Row, widths: &[usize]) -> String {
        let cells: String = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| format!(" {} |", pad_to_width(row.cell(index), width)))
            .collect();

        format!("|{cells}")
    }

    /// Format the dash separator (e.g., "| - | -- |")
    fn format_separator(&self, widths: &[usize]) -> String {
        let cells: String = widths
            .iter()
            .map(|&width| format!(" {} |", "-".repeat(width)))
            .collect();

        format!("|{cells}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableBuilder;

    fn table_from(input: &str) -> Table {
        let mut builder = TableBuilder::default();
        builder.read_from(input.as_bytes()).unwrap();
        builder.finish()
    }

    #[test]
    fn test_basic_table() {
        let table = table_from("a,bb,ccc\nx,y,z\n");
        let lines = MarkdownRenderer::new().lines(&table);

        assert_eq!(
            lines,
            vec!["| a | bb | ccc |", "| - | -- | --- |", "| x | y  | z   |"]
        );
    }

    #[test]
    fn test_body_widens_columns() {
        let table = table_from("id,name\n1,Alexandra\n22,Bo\n");
        let output = MarkdownRenderer::new().render_to_string(&table);

        assert_eq!(
            output,
            "| id | name      |\n\
             | -- | --------- |\n\
             | 1  | Alexandra |\n\
             | 22 | Bo        |\n"
        );
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let table = table_from("");
        assert!(MarkdownRenderer::new().lines(&table).is_empty());
        assert_eq!(MarkdownRenderer::new().render_to_string(&table), "");
    }

    #[test]
    fn test_header_only() {
        let table = table_from("a,b\n");
        assert_eq!(
            MarkdownRenderer::new().lines(&table),
            vec!["| a | b |", "| - | - |"]
        );
    }

    #[test]
    fn test_zero_width_column() {
        let table = table_from(",x\n,y\n");
        assert_eq!(
            MarkdownRenderer::new().lines(&table),
            vec!["|  | x |", "|  | - |", "|  | y |"]
        );
    }

    #[test]
    fn test_short_row_is_padded() {
        let table = table_from("a,bb,ccc\nx\n");
        assert_eq!(
            MarkdownRenderer::new().lines(&table)[2],
            "| x |    |     |"
        );
    }

    #[test]
    fn test_long_row_is_cut_to_column_count() {
        let table = table_from("a,b\nx,y,zzzz\n");
        let lines = MarkdownRenderer::new().lines(&table);
        assert_eq!(lines[0], "| a | b |");
        assert_eq!(lines[2], "| x | y |");
    }

    #[test]
    fn test_quoted_comma_cell() {
        let table = table_from("\"a,b\",c\n");
        assert_eq!(
            MarkdownRenderer::new().lines(&table),
            vec!["| a,b | c |", "| --- | - |"]
        );
    }

    #[test]
    fn test_wide_characters_align() {
        let table = table_from("name\n日本\nab\n");
        assert_eq!(
            MarkdownRenderer::new().lines(&table),
            vec!["| name |", "| ---- |", "| 日本 |", "| ab   |"]
        );
    }

    #[test]
    fn test_write_to_matches_string() {
        let table = table_from("a,b\n1,2\n");
        let renderer = MarkdownRenderer::new();
        let mut out = Vec::new();
        renderer.write_to(&table, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), renderer.render_to_string(&table));
    }
}
