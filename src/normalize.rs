//! Comparison-stable text normalization.
//!
//! Queries and catalog entries are compared in a folded form: lowercase,
//! NFKD-decomposed, with European combining accents removed. Marks outside
//! U+0300..U+036F (e.g. Thai tone marks) are kept, so Thai phrases in the
//! catalog still require their marks to match.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Fold a string to its comparison form: lowercase, NFKD, accents stripped.
///
/// Total and deterministic for any input, including the empty string, and
/// idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfkd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("CARTON BOX"), "carton box");
    }

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("cafe"), "cafe");
        assert_eq!(normalize("crème brûlée"), "creme brulee");
    }

    #[test]
    fn test_idempotent() {
        for s in ["Café", "CARTON BOX NO.30", "", "  spaced  ", "ÀÉÎÕÜ"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_whitespace_preserved() {
        // Normalization folds case, it does not trim
        assert_eq!(normalize("  No.3 "), "  no.3 ");
    }

    #[test]
    fn test_thai_marks_preserved() {
        // Thai tone/vowel marks sit outside U+0300..U+036F and must survive
        let thai = "พิมพ์โลโก้";
        assert_eq!(normalize(thai), normalize(&normalize(thai)));
        assert!(normalize(thai).chars().any(|c| ('\u{0E00}'..='\u{0E7F}').contains(&c)));
    }
}
