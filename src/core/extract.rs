//! Identifier extraction from free-form text
//!
//! Turns pasted text (order lists, datasheets, catalog URLs) into candidate
//! component identifiers. Extraction is a pure function over the input:
//! no I/O, no network.

use crate::domain::ComponentId;
use regex::Regex;

/// Pattern-based identifier extractor
///
/// Applies a fixed set of token pattern families plus a catalog-URL form,
/// uppercases the matches, deduplicates them, and keeps only candidates
/// that satisfy the [`ComponentId`] invariant. Candidates surface in
/// pattern-scan order: URL-derived tokens first, then the token families
/// each in text order.
///
/// # Examples
///
/// ```
/// use partex::core::extract::IdentifierExtractor;
///
/// let extractor = IdentifierExtractor::new();
/// let ids = extractor.extract("1x C12345, 2x lm358 (item.szlcsc.com/56789.html)");
/// let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
/// assert_eq!(ids, vec!["C56789", "C12345", "LM358"]);
/// ```
pub struct IdentifierExtractor {
    /// Token families: letter-prefix form with optional hyphen suffix, and
    /// the short underscore form
    token_patterns: Vec<Regex>,

    /// Catalog product URLs; the captured token may lack the letter prefix
    url_pattern: Regex,
}

impl IdentifierExtractor {
    /// Create a new extractor with the built-in pattern families
    pub fn new() -> Self {
        let token_patterns = vec![
            // letter prefix + 3-8 digit run, with an optional
            // hyphen-delimited alphanumeric suffix taken whole (C12345,
            // LM358, MAX232-ACPE); the optional tail keeps the plain form
            // from emitting the bare prefix of a suffixed token
            Regex::new(r"\b[A-Za-z]+[0-9]{3,8}(?:-[A-Za-z0-9]+)?\b").unwrap(),
            // 1-3 letters + underscore + 3-8 digits (AB_12345)
            Regex::new(r"\b[A-Za-z]{1,3}_[0-9]{3,8}\b").unwrap(),
        ];
        let url_pattern = Regex::new(r"(?i)item\.szlcsc\.com/(C?[0-9]{3,8})").unwrap();

        Self {
            token_patterns,
            url_pattern,
        }
    }

    /// Extract candidate identifiers from free-form text
    ///
    /// Re-running the extractor over its own newline-joined output yields
    /// the same identifiers.
    pub fn extract(&self, text: &str) -> Vec<ComponentId> {
        let mut seen = Vec::new();

        // Catalog URLs first: their tokens may need the letter prefix
        // restored before they look like ordinary identifiers.
        for capture in self.url_pattern.captures_iter(text) {
            if let Some(token) = capture.get(1) {
                let mut candidate = token.as_str().to_uppercase();
                if !candidate.starts_with('C') {
                    candidate.insert(0, 'C');
                }
                push_candidate(&mut seen, &candidate);
            }
        }

        for pattern in &self.token_patterns {
            for matched in pattern.find_iter(text) {
                push_candidate(&mut seen, matched.as_str());
            }
        }

        seen
    }
}

impl Default for IdentifierExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a candidate and appends it unless already present.
fn push_candidate(seen: &mut Vec<ComponentId>, candidate: &str) {
    if let Ok(id) = ComponentId::new(candidate) {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_strs(text: &str) -> Vec<String> {
        IdentifierExtractor::new()
            .extract(text)
            .into_iter()
            .map(ComponentId::into_inner)
            .collect()
    }

    #[test]
    fn test_extracts_plain_catalog_ids() {
        assert_eq!(extract_strs("C12345 C2040"), vec!["C12345", "C2040"]);
    }

    #[test]
    fn test_extracts_hyphen_suffixed_ids_whole() {
        // the hyphen family must win over the plain prefix of the token
        assert_eq!(extract_strs("use MAX232-ACPE here"), vec!["MAX232-ACPE"]);
    }

    #[test]
    fn test_extracts_underscore_form() {
        assert_eq!(extract_strs("ref AB_12345 in BOM"), vec!["AB_12345"]);
    }

    #[test]
    fn test_extracts_from_catalog_urls() {
        assert_eq!(
            extract_strs("https://item.szlcsc.com/12345.html and item.szlcsc.com/C99999"),
            vec!["C12345", "C99999"]
        );
    }

    #[test]
    fn test_case_normalization_and_dedup() {
        assert_eq!(extract_strs("c12345 C12345\nC12345"), vec!["C12345"]);
    }

    #[test]
    fn test_rejects_tokens_violating_invariant() {
        // digit-leading and no-digit tokens never come out
        assert_eq!(extract_strs("555 timers and NE5 hubs"), Vec::<String>::new());
    }

    #[test]
    fn test_too_short_digit_runs_are_not_candidates() {
        // two digits is below the 3-digit family floor
        assert_eq!(extract_strs("ESP32 pin map"), Vec::<String>::new());
    }

    #[test]
    fn test_ignores_surrounding_prose() {
        assert_eq!(
            extract_strs("2x LM358 op-amps plus one C12345 capacitor"),
            vec!["LM358", "C12345"]
        );
    }

    #[test]
    fn test_extract_has_no_matches_in_empty_input() {
        assert!(extract_strs("").is_empty());
        assert!(extract_strs("   \n\t ").is_empty());
    }

    #[test]
    fn test_every_output_satisfies_invariant() {
        let text = "C12345, max232-acpe; AB_12345 item.szlcsc.com/777777.html junk 12x";
        for id in IdentifierExtractor::new().extract(text) {
            assert!(ComponentId::new(id.as_str()).is_ok());
        }
    }

    #[test]
    fn test_extract_is_idempotent_over_own_output() {
        let extractor = IdentifierExtractor::new();
        let text = "c12345 MAX232-ACPE AB_12345 item.szlcsc.com/56789.html lm358";
        let first = extractor.extract(text);
        assert!(!first.is_empty());

        let joined = first
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let second = extractor.extract(&joined);

        assert_eq!(first, second);
    }
}
