//! Wrap-around selection cursor over the current suggestion list.
//!
//! The cursor is transient presentation state: it never outlives one
//! suggestion list. Whenever the list changes size it resets to the first
//! entry (or to nothing when the list is empty), matching the original
//! ArrowUp/ArrowDown behavior.

/// Index into the current candidate list, or unset when the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    len: usize,
    index: Option<usize>,
}

impl Default for SelectionCursor {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SelectionCursor {
    /// Cursor over a list of `len` candidates, resting on the first entry
    /// when the list is non-empty.
    pub fn new(len: usize) -> Self {
        Self { len, index: if len > 0 { Some(0) } else { None } }
    }

    /// Selected index, `None` when nothing is selectable.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The cursor as the conventional `-1..=len-1` integer.
    pub fn raw(&self) -> i64 {
        self.index.map(|i| i as i64).unwrap_or(-1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Re-sync the cursor to a new list length, resetting the selection.
    pub fn sync_len(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Step down, wrapping from the last entry to the first.
    pub fn next(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.len);
        }
    }

    /// Step up, wrapping from the first entry to the last.
    pub fn prev(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + self.len - 1) % self.len);
        }
    }
}
