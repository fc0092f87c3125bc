//! Collaborator interfaces consumed by the core.
//!
//! The UI/platform layer implements these traits and hands them to
//! [`PhraseStore`](crate::PhraseStore). The core reacts only to
//! success/failure, never to clipboard content or storage internals.

use thiserror::Error;

/// Error type for copydeck operations
#[derive(Debug, Error)]
pub enum CopydeckError {
    /// The clipboard collaborator rejected the write. The message carries the
    /// underlying reason so the UI can surface it; the result log is left
    /// unmodified when this is returned.
    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),
}

/// Writes a payload to the system clipboard.
/// Called once per copy action and once per bulk copy-all action.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, payload: &str) -> Result<(), CopydeckError>;
}

/// Persistent key-value storage for the catalog and result log.
///
/// `save` is fire-and-forget best-effort; a failed save is invisible to the
/// core. A value that later fails to decode is treated as absent (§ fallback
/// handling in [`persist`](crate::persist)).
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Delivers an exported file to the user (browser download, share sheet, ...).
pub trait FileSink: Send + Sync {
    fn download_file(&self, filename: &str, content: &str, mime_type: &str);
}

/// Yes/no confirmation prompt, gating destructive bulk operations.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}
