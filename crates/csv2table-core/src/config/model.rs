/// Optional caps on the amount of input kept
///
/// `None` means unbounded. When a cap is set, input beyond it is
/// truncated silently (a warning is logged once per table).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Rows beyond this count are ignored
    pub max_rows: Option<usize>,

    /// Fields beyond this count are folded into the last accepted field
    pub max_columns: Option<usize>,
}

impl Limits {
    /// Field bound handed to the line splitter
    pub fn max_fields(&self) -> usize {
        self.max_columns.unwrap_or(usize::MAX)
    }

    /// Whether another row may be accepted after `rows` rows
    pub fn accepts_row(&self, rows: usize) -> bool {
        self.max_rows.is_none_or(|max| rows < max)
    }
}

/// How rows whose field count differs from the header are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RaggedPolicy {
    /// Missing cells render empty, surplus fields are not rendered
    #[default]
    Pad,

    /// Any ragged row is an error
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub limits: Limits,
    pub ragged: RaggedPolicy,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_ragged(mut self, ragged: RaggedPolicy) -> Self {
        self.ragged = ragged;
        self
    }
}
