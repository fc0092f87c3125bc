//! Round-tripping the catalog and result log through the key-value
//! collaborator.
//!
//! Payloads are plain JSON arrays of strings so any reversible store works.
//! A payload that fails to parse is treated as absent: the catalog falls back
//! to the default set and the result log to empty, rather than failing
//! startup.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::interface::KeyValueStore;
use crate::result_log::ResultLog;

/// Storage key for the catalog payload.
pub const ITEMS_KEY: &str = "autocomplete_items_v1";
/// Storage key for the result-log payload.
pub const ROWS_KEY: &str = "autocomplete_rows_v1";

/// Wire form of both stores: a JSON array of strings, element order
/// preserved exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
struct PhraseList(Vec<String>);

/// Encode an ordered phrase sequence. String-only payloads cannot fail to
/// serialize; the fallback keeps the signature infallible anyway.
pub fn encode(phrases: &[String]) -> String {
    serde_json::to_string(&PhraseList(phrases.to_vec())).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored payload. `None` for absent or malformed input.
pub fn decode(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?;
    serde_json::from_str::<PhraseList>(raw).ok().map(|p| p.0)
}

/// Load the catalog, falling back to the default set.
pub fn load_catalog(storage: &dyn KeyValueStore) -> Catalog {
    match decode(storage.load(ITEMS_KEY).as_deref()) {
        Some(phrases) => Catalog::from_phrases(phrases),
        None => Catalog::with_defaults(),
    }
}

/// Load the result log, falling back to empty.
pub fn load_rows(storage: &dyn KeyValueStore) -> ResultLog {
    match decode(storage.load(ROWS_KEY).as_deref()) {
        Some(rows) => ResultLog::from_rows(rows),
        None => ResultLog::new(),
    }
}

pub fn save_catalog(storage: &dyn KeyValueStore, catalog: &Catalog) {
    storage.save(ITEMS_KEY, &encode(catalog.phrases()));
}

pub fn save_rows(storage: &dyn KeyValueStore, log: &ResultLog) {
    storage.save(ROWS_KEY, &encode(log.rows()));
}
