/// One parsed input line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`, or `""` when the row is too short
    pub fn cell(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Buffered rows with per-column widths
///
/// `column_count` is fixed by the first row. `widths` covers every column
/// index seen in any row, so it can be longer than `column_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub(super) rows: Vec<Row>,
    pub(super) column_count: usize,
    pub(super) widths: Vec<usize>,
}

impl Table {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Widest cell seen per column index, over all rows
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Width of a rendered column (0 for a column no row reached)
    pub fn column_width(&self, index: usize) -> usize {
        self.widths.get(index).copied().unwrap_or(0)
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// All rows after the header
    pub fn body(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }
}
