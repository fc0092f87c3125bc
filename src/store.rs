//! PhraseStore - process-wide owner of the catalog and result log.
//!
//! Wires the pure core (ranking, catalog, log) to the platform collaborators:
//! clipboard, key-value storage, file delivery and confirmation prompts.
//! Every mutation persists the affected store best-effort before returning;
//! the log is only ever appended to after the clipboard write succeeded.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::Catalog;
use crate::export::ExportFormat;
use crate::interface::{ClipboardWriter, ConfirmPrompt, CopydeckError, FileSink, KeyValueStore};
use crate::persist;
use crate::ranking;
use crate::result_log::ResultLog;

/// Thread-safe phrase store.
///
/// All operations run to completion on the calling thread; the mutexes exist
/// so the store is `Send + Sync`, not because anything here blocks.
pub struct PhraseStore {
    catalog: Mutex<Catalog>,
    log: Mutex<ResultLog>,
    clipboard: Arc<dyn ClipboardWriter>,
    storage: Arc<dyn KeyValueStore>,
    files: Arc<dyn FileSink>,
    prompt: Arc<dyn ConfirmPrompt>,
}

impl PhraseStore {
    /// Create a store, restoring both collections from the key-value
    /// collaborator. Absent or malformed payloads fall back to the default
    /// catalog and an empty log.
    pub fn new(
        clipboard: Arc<dyn ClipboardWriter>,
        storage: Arc<dyn KeyValueStore>,
        files: Arc<dyn FileSink>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        let catalog = persist::load_catalog(storage.as_ref());
        let log = persist::load_rows(storage.as_ref());
        Self {
            catalog: Mutex::new(catalog),
            log: Mutex::new(log),
            clipboard,
            storage,
            files,
            prompt,
        }
    }

    fn persist_catalog(&self, catalog: &Catalog) {
        persist::save_catalog(self.storage.as_ref(), catalog);
    }

    fn persist_rows(&self, log: &ResultLog) {
        persist::save_rows(self.storage.as_ref(), log);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Suggestions
    // ─────────────────────────────────────────────────────────────────────────

    /// Ranked suggestions for a query, capped at the default limit of 25.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        ranking::rank_default(self.catalog.lock().phrases(), query)
    }

    /// Ranked suggestions with an explicit cap.
    pub fn suggestions_limited(&self, query: &str, limit: usize) -> Vec<String> {
        ranking::rank(self.catalog.lock().phrases(), query, limit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Copy flow
    // ─────────────────────────────────────────────────────────────────────────

    /// Copy one phrase. On success the phrase becomes the log's new last row
    /// and the log is persisted; on failure the log is untouched and the
    /// error carries the clipboard's reason.
    pub fn copy_phrase(&self, phrase: &str) -> Result<(), CopydeckError> {
        self.clipboard.write_text(phrase)?;
        let mut log = self.log.lock();
        log.append(phrase);
        self.persist_rows(&log);
        Ok(())
    }

    /// Copy the whole log, newline-joined (pastes as one column).
    /// A bulk copy is not itself a copy event, so nothing is appended.
    pub fn copy_all_as_column(&self) -> Result<(), CopydeckError> {
        let payload = self.log.lock().serialize_column();
        self.clipboard.write_text(&payload)
    }

    /// Copy the whole log, tab-joined (pastes as one row).
    pub fn copy_all_as_row(&self) -> Result<(), CopydeckError> {
        let payload = self.log.lock().serialize_row();
        self.clipboard.write_text(&payload)
    }

    /// Copy the filtered custom subset, newline-joined.
    pub fn copy_custom(&self, filter: &str) -> Result<(), CopydeckError> {
        let payload = self.catalog.lock().filter_custom(filter).join("\n");
        self.clipboard.write_text(&payload)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a phrase to the front of the catalog. Returns whether the catalog
    /// changed (blank input and exact duplicates are no-ops).
    pub fn add_phrase(&self, phrase: &str) -> bool {
        let mut catalog = self.catalog.lock();
        let changed = catalog.insert_front(phrase);
        if changed {
            self.persist_catalog(&catalog);
        }
        changed
    }

    /// Union a pasted multi-line block into the catalog.
    /// Returns the number of phrases added.
    pub fn import_bulk(&self, raw_text: &str) -> usize {
        let mut catalog = self.catalog.lock();
        let added = catalog.bulk_import(raw_text);
        if added > 0 {
            self.persist_catalog(&catalog);
        }
        added
    }

    /// Remove a phrase (exact match). Returns whether anything was removed.
    pub fn remove_phrase(&self, phrase: &str) -> bool {
        let mut catalog = self.catalog.lock();
        let removed = catalog.remove(phrase);
        if removed {
            self.persist_catalog(&catalog);
        }
        removed
    }

    /// Replace the catalog with the default set.
    pub fn reset_to_default(&self) {
        let mut catalog = self.catalog.lock();
        catalog.reset_to_default();
        self.persist_catalog(&catalog);
    }

    /// Remove every custom entry, gated by the confirmation collaborator.
    /// Returns the number of entries removed (0 when there was nothing to
    /// remove or the user declined).
    pub fn clear_custom(&self) -> usize {
        let count = self.catalog.lock().custom_subset().len();
        if count == 0 {
            return 0;
        }
        let message = format!("Remove all {count} custom phrases?");
        if !self.prompt.confirm(&message) {
            return 0;
        }
        let mut catalog = self.catalog.lock();
        let removed = catalog.clear_custom();
        if removed > 0 {
            self.persist_catalog(&catalog);
        }
        removed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog views
    // ─────────────────────────────────────────────────────────────────────────

    /// Snapshot of the full catalog in stored order.
    pub fn phrases(&self) -> Vec<String> {
        self.catalog.lock().phrases().to_vec()
    }

    pub fn phrase_count(&self) -> usize {
        self.catalog.lock().len()
    }

    /// The custom subset, optionally filtered by a normalized-substring
    /// query (blank filter returns the whole subset).
    pub fn custom_phrases(&self, filter: &str) -> Vec<String> {
        self.catalog.lock().filter_custom(filter)
    }

    pub fn custom_count(&self) -> usize {
        self.catalog.lock().custom_subset().len()
    }

    /// Hand the filtered custom subset to the file collaborator, stamped
    /// with the current UTC date.
    pub fn export_custom(&self, filter: &str, format: ExportFormat) {
        let phrases = self.catalog.lock().filter_custom(filter);
        self.files.download_file(
            &format.filename_today(),
            &format.payload(&phrases),
            format.mime_type(),
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Result log
    // ─────────────────────────────────────────────────────────────────────────

    /// Snapshot of the log rows in copy order.
    pub fn rows(&self) -> Vec<String> {
        self.log.lock().rows().to_vec()
    }

    pub fn row_count(&self) -> usize {
        self.log.lock().len()
    }

    /// Remove the row at `index`; out-of-range is a no-op.
    pub fn remove_row(&self, index: usize) -> bool {
        let mut log = self.log.lock();
        let removed = log.remove_at(index);
        if removed {
            self.persist_rows(&log);
        }
        removed
    }

    /// Empty the log.
    pub fn clear_rows(&self) {
        let mut log = self.log.lock();
        log.clear();
        self.persist_rows(&log);
    }
}
