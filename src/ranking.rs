//! Prefix/substring suggestion ranking.
//!
//! Two score bands keep every prefix match above every substring match:
//! prefix scores start at 1000 and shrink with entry length (tighter matches
//! first), substring scores start at 500 and shrink with match position
//! (earlier occurrences first). Ties keep catalog order via a stable sort.

use crate::normalize::normalize;

/// Maximum suggestions returned per ranking pass.
pub const DEFAULT_LIMIT: usize = 25;

/// Score base for entries whose normalized form starts with the query.
const PREFIX_BASE: i64 = 1000;
/// Score base for entries that merely contain the query.
const SUBSTRING_BASE: i64 = 500;

/// A scored phrase produced transiently during one ranking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub score: i64,
}

/// Rank `catalog` against `query`, returning at most `limit` phrases.
///
/// An empty (or whitespace-only) query short-circuits to the first `limit`
/// catalog entries in stored order. Matching is literal substring matching on
/// the normalized forms, so regex metacharacters and control characters in
/// the query are inert.
pub fn rank(catalog: &[String], query: &str, limit: usize) -> Vec<String> {
    score(catalog, query, limit)
        .into_iter()
        .map(|c| c.text)
        .collect()
}

/// Rank with the default suggestion limit.
pub fn rank_default(catalog: &[String], query: &str) -> Vec<String> {
    rank(catalog, query, DEFAULT_LIMIT)
}

/// Scoring pass behind [`rank`], exposed for callers that want the scores.
pub fn score(catalog: &[String], query: &str, limit: usize) -> Vec<Candidate> {
    if query.trim().is_empty() {
        return catalog
            .iter()
            .take(limit)
            .map(|text| Candidate { text: text.clone(), score: 0 })
            .collect();
    }

    let nq = normalize(query);
    let mut scored: Vec<Candidate> = catalog
        .iter()
        .filter_map(|text| {
            let nt = normalize(text);
            let score = if nt.starts_with(&nq) {
                PREFIX_BASE - nt.chars().count() as i64
            } else if let Some(pos) = char_index_of(&nt, &nq) {
                SUBSTRING_BASE - pos as i64
            } else {
                return None;
            };
            Some(Candidate { text: text.clone(), score })
        })
        .collect();

    // sort_by_key is stable: equal scores retain catalog order
    scored.sort_by_key(|c| std::cmp::Reverse(c.score));
    scored.truncate(limit);
    scored
}

/// Position of `needle` in `haystack`, counted in chars rather than bytes.
fn char_index_of(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_pos| haystack[..byte_pos].chars().count())
}
