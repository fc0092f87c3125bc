//! Ordered record of copy events.
//!
//! No ranking and no dedup: the log is a faithful history of what the user
//! copied, in order, including repeats. Its two serializations target
//! spreadsheet paste: newline-joined for one phrase per row, tab-joined for
//! one row with one phrase per column.

/// Append-only-by-default sequence of copied phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultLog {
    rows: Vec<String>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from a persisted payload, preserving order and duplicates.
    pub fn from_rows(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Add a phrase as the new last row. Always succeeds.
    pub fn append(&mut self, phrase: &str) {
        self.rows.push(phrase.to_string());
    }

    /// Remove the row at `index`; out-of-range is a no-op.
    /// Returns whether a row was removed.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.rows.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Rows joined with `\n`: pastes as one column, one phrase per row.
    pub fn serialize_column(&self) -> String {
        self.rows.join("\n")
    }

    /// Rows joined with `\t`: pastes as one row, one phrase per column.
    pub fn serialize_row(&self) -> String {
        self.rows.join("\t")
    }
}
