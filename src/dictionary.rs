//! `dictionary` — Module to load and index the word list for the boggle solver
//!
//! This module is responsible for reading a dictionary (either from a file, or
//! from an in-memory string) and answering the two lookups the search needs:
//!
//! - [`Dictionary::is_word`] — "is this string a complete dictionary word?",
//!   compared **case-insensitively**.
//! - [`Dictionary::has_prefix`] — "does some dictionary word start with this
//!   string?", compared **case-sensitively**.
//!
//! The asymmetry between the two case policies is deliberate and
//! load-bearing: the search prunes on `has_prefix` before it ever reaches the
//! `is_word` acceptance check, so a dictionary whose case disagrees with the
//! grid can legitimately find nothing. See the quirk tests below — do not
//! "fix" one side to match the other.
//!
//! Because `has_prefix` is case-sensitive, words are stored **verbatim**, not
//! case-folded.
//!
//! The parsing logic:
//! - Each line in the input is one word.
//! - Reading stops at end of input or at the first blank line.
//! - Any line shorter than 2 characters rejects the entire load with
//!   [`LoadError::InvalidInput`] — no partial dictionary is retained.
//!
//! Both lookups are linear scans over the word list. Dictionaries for this
//! puzzle are small, and the prefix prune keeps the number of probes low; a
//! trie would be a behavior-preserving swap if that ever changes, but it
//! would have to keep the two case policies distinct.

use crate::errors::LoadError;

/// A processed, ready-to-use word list.
///
/// The `words` vector holds every dictionary entry exactly as it appeared in
/// the input (original case, original order).
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// List of words, stored verbatim.
    /// Example: `["CAT", "CATS", "AT"]`
    pub words: Vec<String>,
}

impl Dictionary {
    /// Parse a dictionary from an in-memory string, one word per line.
    ///
    /// Stops at end of input or at the first blank line (so a dictionary and
    /// other content can share a stream, blank-line separated).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidInput`] if any line is shorter than 2
    /// characters. The load is rejected wholesale: the error carries no
    /// partially built dictionary.
    pub fn parse_from_str(contents: &str) -> Result<Dictionary, LoadError> {
        let mut words = Vec::new();

        for raw_line in contents.lines() {
            let line = raw_line.trim_end_matches('\r');

            // Blank line terminates the dictionary section.
            if line.is_empty() {
                break;
            }

            if line.chars().count() < 2 {
                return Err(LoadError::InvalidInput { word: line.to_string() });
            }

            // Stored verbatim — `has_prefix` is case-sensitive.
            words.push(line.to_string());
        }

        Ok(Dictionary { words })
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or an
    /// `InvalidInput`-kinded error if the contents fail validation.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Dictionary> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read dictionary from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data)?)
    }

    /// True iff some dictionary word equals `s`, ignoring ASCII case.
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(s))
    }

    /// True iff some dictionary word starts with `s`, compared
    /// case-sensitively. The empty string is a prefix of every word, so this
    /// holds for `""` whenever the dictionary is non-empty.
    #[must_use]
    pub fn has_prefix(&self, s: &str) -> bool {
        self.words.iter().any(|w| s.len() <= w.len() && w.starts_with(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let dict = Dictionary::parse_from_str("CAT\nDOG\nBIRD").unwrap();
        assert_eq!(dict.words, vec!["CAT", "DOG", "BIRD"]);
    }

    #[test]
    fn test_parse_preserves_case_and_order() {
        let dict = Dictionary::parse_from_str("Zebra\nape\nMOUSE").unwrap();
        assert_eq!(dict.words, vec!["Zebra", "ape", "MOUSE"]);
    }

    #[test]
    fn test_parse_stops_at_blank_line() {
        let dict = Dictionary::parse_from_str("CAT\nDOG\n\nIGNORED").unwrap();
        assert_eq!(dict.words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_rejects_short_word_wholesale() {
        let err = Dictionary::parse_from_str("CAT\nDOG\nA\nBIRD").unwrap_err();
        assert!(matches!(err, LoadError::InvalidInput { ref word } if word == "A"));
    }

    #[test]
    fn test_parse_empty_input() {
        let dict = Dictionary::parse_from_str("").unwrap();
        assert!(dict.words.is_empty());
    }

    #[test]
    fn test_is_word_is_case_insensitive() {
        let dict = Dictionary::parse_from_str("CAT\nDog").unwrap();
        assert!(dict.is_word("cat"));
        assert!(dict.is_word("CAT"));
        assert!(dict.is_word("dOG"));
        assert!(!dict.is_word("bird"));
        assert!(!dict.is_word("ca"));
    }

    #[test]
    fn test_has_prefix_is_case_sensitive() {
        let dict = Dictionary::parse_from_str("CAT\nCATS").unwrap();
        assert!(dict.has_prefix("C"));
        assert!(dict.has_prefix("CA"));
        assert!(dict.has_prefix("CATS"));
        // case-sensitive by design — lowercase probes miss uppercase words
        assert!(!dict.has_prefix("c"));
        assert!(!dict.has_prefix("ca"));
        assert!(!dict.has_prefix("CATSS"));
    }

    #[test]
    fn test_empty_string_is_prefix_of_any_word() {
        let dict = Dictionary::parse_from_str("CAT").unwrap();
        assert!(dict.has_prefix(""));

        let empty = Dictionary::parse_from_str("").unwrap();
        assert!(!empty.has_prefix(""));
    }

    /// Known quirk: `is_word` would accept a case-mismatched word that
    /// `has_prefix` refuses to extend toward. Both behaviors are pinned here.
    #[test]
    fn test_case_policy_asymmetry() {
        let dict = Dictionary::parse_from_str("CAT").unwrap();
        assert!(dict.is_word("cat"));
        assert!(!dict.has_prefix("cat"));
    }
}
