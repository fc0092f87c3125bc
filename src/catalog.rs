//! Deduplicated ordered phrase catalog, seeded from a fixed default set.
//!
//! Phrase equality is exact (case- and diacritic-sensitive); normalization
//! only ever applies to matching, never to storage. Every mutator leaves the
//! catalog free of duplicates.

use once_cell::sync::Lazy;

use crate::normalize::normalize;

/// The immutable seed catalog. Also the classifier for "custom" entries and
/// the target of [`Catalog::reset_to_default`].
pub static DEFAULT_PHRASES: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "CARTON BOX NO.30",
        "CARTON BOX NO.38",
        "CARTON BOX NO.26",
        "CARTON BOX NO SCREEN",
        "CARTON BOX 40x40x20 cm.",
        "CARTON BOX NO.1 พิมพ์โลโก้ พิมพ์ NO.กล่อง",
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

/// An ordered sequence of unique phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    phrases: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Catalog {
    /// A catalog holding exactly the default set.
    pub fn with_defaults() -> Self {
        Self { phrases: DEFAULT_PHRASES.clone() }
    }

    /// Build from an arbitrary phrase list (e.g. a persisted payload),
    /// dropping exact duplicates while keeping first occurrences in order.
    pub fn from_phrases(phrases: Vec<String>) -> Self {
        let mut catalog = Self { phrases: Vec::with_capacity(phrases.len()) };
        for phrase in phrases {
            if !catalog.phrases.contains(&phrase) {
                catalog.phrases.push(phrase);
            }
        }
        catalog
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.iter().any(|p| p == phrase)
    }

    /// Prepend a phrase so it surfaces first in the unranked view.
    /// Blank input and exact duplicates are no-ops. Returns whether the
    /// catalog changed.
    pub fn insert_front(&mut self, phrase: &str) -> bool {
        let phrase = phrase.trim();
        if phrase.is_empty() || self.contains(phrase) {
            return false;
        }
        self.phrases.insert(0, phrase.to_string());
        true
    }

    /// Union a pasted multi-line block into the catalog.
    ///
    /// Lines are split on `\n` or `\r\n`, trimmed, and blanks discarded.
    /// Existing entries keep their order; new entries append in first-seen
    /// order; duplicates across input lines collapse. Returns the number of
    /// phrases actually added (zero usable lines is a no-op).
    pub fn bulk_import(&mut self, raw_text: &str) -> usize {
        let mut added = 0;
        for line in raw_text.lines() {
            let line = line.trim();
            if line.is_empty() || self.contains(line) {
                continue;
            }
            self.phrases.push(line.to_string());
            added += 1;
        }
        added
    }

    /// Remove every entry exactly equal to `phrase`. Returns whether any
    /// entry was removed.
    pub fn remove(&mut self, phrase: &str) -> bool {
        let before = self.phrases.len();
        self.phrases.retain(|p| p != phrase);
        self.phrases.len() != before
    }

    /// Catalog := Default Set, order and membership.
    pub fn reset_to_default(&mut self) {
        self.phrases = DEFAULT_PHRASES.clone();
    }

    /// Drop every entry not in the default set. Returns the number removed.
    /// Confirmation is the caller's concern; the filter itself is
    /// unconditional.
    pub fn clear_custom(&mut self) -> usize {
        let before = self.phrases.len();
        self.phrases.retain(|p| DEFAULT_PHRASES.contains(p));
        before - self.phrases.len()
    }

    /// Entries absent from the default set, in catalog order.
    pub fn custom_subset(&self) -> Vec<String> {
        self.phrases
            .iter()
            .filter(|p| !DEFAULT_PHRASES.contains(p))
            .cloned()
            .collect()
    }

    /// The custom subset filtered to entries whose normalized form contains
    /// the normalized query. A blank query returns the whole subset.
    pub fn filter_custom(&self, query: &str) -> Vec<String> {
        let custom = self.custom_subset();
        if query.trim().is_empty() {
            return custom;
        }
        let nq = normalize(query);
        custom
            .into_iter()
            .filter(|p| normalize(p).contains(&nq))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── insert_front ─────────────────────────────────────────────

    #[test]
    fn test_insert_front_prepends() {
        let mut catalog = Catalog::with_defaults();
        assert!(catalog.insert_front("NEW PHRASE"));
        assert_eq!(catalog.phrases()[0], "NEW PHRASE");
        assert_eq!(catalog.len(), DEFAULT_PHRASES.len() + 1);
    }

    #[test]
    fn test_insert_front_duplicate_is_noop() {
        let mut catalog = Catalog::with_defaults();
        catalog.insert_front("NEW PHRASE");
        let len = catalog.len();
        assert!(!catalog.insert_front("NEW PHRASE"));
        assert_eq!(catalog.len(), len);
    }

    #[test]
    fn test_insert_front_trims_and_rejects_blank() {
        let mut catalog = Catalog::with_defaults();
        assert!(!catalog.insert_front("   "));
        assert!(catalog.insert_front("  padded  "));
        assert_eq!(catalog.phrases()[0], "padded");
    }

    #[test]
    fn test_insert_front_is_case_sensitive() {
        let mut catalog = Catalog::from_phrases(vec!["word".into()]);
        assert!(catalog.insert_front("WORD"));
        assert_eq!(catalog.len(), 2);
    }

    // ── bulk_import ──────────────────────────────────────────────

    #[test]
    fn test_bulk_import_unions_and_appends() {
        let mut catalog = Catalog::from_phrases(vec!["existing".into()]);
        let added = catalog.bulk_import("one\ntwo\nexisting\nthree");
        assert_eq!(added, 3);
        assert_eq!(catalog.phrases(), &["existing", "one", "two", "three"]);
    }

    #[test]
    fn test_bulk_import_handles_crlf_and_blanks() {
        let mut catalog = Catalog::from_phrases(vec![]);
        let added = catalog.bulk_import("a\r\n\r\n  b  \n\n");
        assert_eq!(added, 2);
        assert_eq!(catalog.phrases(), &["a", "b"]);
    }

    #[test]
    fn test_bulk_import_case_sensitive_dedup() {
        let mut catalog = Catalog::from_phrases(vec![]);
        catalog.bulk_import("A\na\nA");
        assert_eq!(catalog.phrases(), &["A", "a"]);
    }

    #[test]
    fn test_bulk_import_empty_is_noop() {
        let mut catalog = Catalog::with_defaults();
        let snapshot = catalog.clone();
        assert_eq!(catalog.bulk_import("  \n\r\n \n"), 0);
        assert_eq!(catalog, snapshot);
    }

    // ── remove / reset / custom ──────────────────────────────────

    #[test]
    fn test_remove_exact_match_only() {
        let mut catalog = Catalog::from_phrases(vec!["Word".into(), "word".into()]);
        assert!(catalog.remove("word"));
        assert_eq!(catalog.phrases(), &["Word"]);
        assert!(!catalog.remove("absent"));
    }

    #[test]
    fn test_reset_to_default_restores_order_and_membership() {
        let mut catalog = Catalog::from_phrases(vec!["custom".into()]);
        catalog.reset_to_default();
        assert_eq!(catalog.phrases(), DEFAULT_PHRASES.as_slice());
        assert!(catalog.custom_subset().is_empty());
    }

    #[test]
    fn test_custom_subset_in_catalog_order() {
        let mut catalog = Catalog::with_defaults();
        catalog.insert_front("first custom");
        catalog.bulk_import("last custom");
        assert_eq!(catalog.custom_subset(), &["first custom", "last custom"]);
    }

    #[test]
    fn test_clear_custom_keeps_defaults() {
        let mut catalog = Catalog::with_defaults();
        catalog.insert_front("extra one");
        catalog.insert_front("extra two");
        assert_eq!(catalog.clear_custom(), 2);
        assert_eq!(catalog.phrases(), DEFAULT_PHRASES.as_slice());
    }

    #[test]
    fn test_filter_custom_normalized_substring() {
        let mut catalog = Catalog::with_defaults();
        catalog.bulk_import("Café Table\nplain chair");
        assert_eq!(catalog.filter_custom("cafe"), &["Café Table"]);
        assert_eq!(catalog.filter_custom("  "), &["Café Table", "plain chair"]);
        assert!(catalog.filter_custom("zzz").is_empty());
    }

    #[test]
    fn test_from_phrases_drops_exact_duplicates() {
        let catalog = Catalog::from_phrases(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(catalog.phrases(), &["a", "b"]);
    }

    #[test]
    fn test_no_duplicates_after_any_mutation() {
        let mut catalog = Catalog::with_defaults();
        catalog.insert_front("x");
        catalog.bulk_import("x\ny\nx");
        catalog.remove("y");
        catalog.insert_front("x");
        let mut sorted = catalog.phrases().to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), catalog.len());
    }
}
