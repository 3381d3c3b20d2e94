//! Boundary-padded character n-grams.
//!
//! A word is lowercased, wrapped with one boundary character on each side, and cut into
//! overlapping windows of `n` Unicode scalar values with stride 1:
//!
//! ```text
//! "John" -> "=john=" -> ["=jo", "joh", "ohn", "hn="]
//! ```
//!
//! The padding lets edge n-grams encode word-start / word-end position. A padded word
//! shorter than `n + 1` chars yields itself as its only n-gram, so every input (including
//! the empty string) produces at least one n-gram.

use crate::{Error, Result};

/// Default n-gram length (trigrams).
pub const DEFAULT_NGRAM_LENGTH: usize = 3;

/// Default boundary (padding) character.
pub const DEFAULT_BOUNDARY: char = '=';

/// Default result count for top-k queries.
pub const DEFAULT_K: usize = 5;

/// N-gram extraction parameters.
///
/// The same configuration must be used at build time and query time; `LookupTable` stores
/// its config so this holds automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NgramConfig {
    /// Window width in chars. Larger values are more specific, smaller values more forgiving.
    pub ngram_length: usize,
    /// Sentinel wrapped around each word. Must not occur in lexicon words or queries.
    pub boundary: char,
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self {
            ngram_length: DEFAULT_NGRAM_LENGTH,
            boundary: DEFAULT_BOUNDARY,
        }
    }
}

impl NgramConfig {
    /// Default boundary with a custom n-gram length.
    pub fn with_ngram_length(ngram_length: usize) -> Self {
        Self {
            ngram_length,
            ..Self::default()
        }
    }

    /// Replace the boundary character.
    pub fn boundary(mut self, boundary: char) -> Self {
        self.boundary = boundary;
        self
    }

    /// Check that the configuration can produce well-defined n-grams.
    pub fn validate(&self) -> Result<()> {
        if self.ngram_length == 0 {
            return Err(Error::InvalidNgramLength);
        }
        if self.boundary.is_alphanumeric() || self.boundary.is_whitespace() {
            return Err(Error::InvalidBoundary(self.boundary));
        }
        Ok(())
    }

    /// Reject words that contain the boundary character.
    pub fn check_word(&self, word: &str) -> Result<()> {
        if word.contains(self.boundary) {
            return Err(Error::BoundaryInWord {
                word: word.to_string(),
                boundary: self.boundary,
            });
        }
        Ok(())
    }

    /// Extract the n-grams of `word` under this configuration.
    pub fn extract(&self, word: &str) -> Result<Vec<String>> {
        self.validate()?;
        Ok(self.ngrams(word))
    }

    /// Extraction for an already-validated config.
    pub(crate) fn ngrams(&self, word: &str) -> Vec<String> {
        let lowered = word.to_lowercase();
        let mut padded: Vec<char> = Vec::with_capacity(lowered.len() + 2);
        padded.push(self.boundary);
        padded.extend(lowered.chars());
        padded.push(self.boundary);

        let n = self.ngram_length.max(1);
        if padded.len() < n + 1 {
            return vec![padded.into_iter().collect()];
        }
        padded.windows(n).map(|w| w.iter().collect()).collect()
    }
}

/// Extract the n-grams of `word` using the default boundary.
///
/// Returns `max(1, padded_len - n + 1)` n-grams in left-to-right order, repeats included.
/// Fails only for `n == 0`.
pub fn extract_ngrams(word: &str, n: usize) -> Result<Vec<String>> {
    NgramConfig::with_ngram_length(n).extract(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_slides() {
        assert_eq!(
            extract_ngrams("John", 3).unwrap(),
            vec!["=jo", "joh", "ohn", "hn="]
        );
    }

    #[test]
    fn padded_length_equal_to_n_plus_one_still_slides() {
        assert_eq!(extract_ngrams("ab", 3).unwrap(), vec!["=ab", "ab="]);
    }

    #[test]
    fn short_words_yield_whole_padded_word() {
        assert_eq!(extract_ngrams("a", 3).unwrap(), vec!["=a="]);
        assert_eq!(extract_ngrams("", 3).unwrap(), vec!["=="]);
    }

    #[test]
    fn repeated_ngrams_are_kept() {
        let grams = extract_ngrams("aaaa", 2).unwrap();
        assert_eq!(grams, vec!["=a", "aa", "aa", "aa", "a="]);
    }

    #[test]
    fn unigram_includes_boundaries() {
        assert_eq!(extract_ngrams("ab", 1).unwrap(), vec!["=", "a", "b", "="]);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let grams = extract_ngrams("Ñandú", 3).unwrap();
        assert_eq!(grams, vec!["=ña", "ñan", "and", "ndú", "dú="]);
    }

    #[test]
    fn custom_boundary() {
        let cfg = NgramConfig::default().boundary('#');
        assert_eq!(cfg.extract("ab").unwrap(), vec!["#ab", "ab#"]);
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(extract_ngrams("abc", 0), Err(Error::InvalidNgramLength));
    }

    #[test]
    fn alphanumeric_boundary_is_rejected() {
        let cfg = NgramConfig::default().boundary('x');
        assert_eq!(cfg.validate(), Err(Error::InvalidBoundary('x')));
        let cfg = NgramConfig::default().boundary(' ');
        assert_eq!(cfg.validate(), Err(Error::InvalidBoundary(' ')));
    }

    #[test]
    fn check_word_flags_boundary() {
        let cfg = NgramConfig::default();
        assert!(cfg.check_word("plain").is_ok());
        assert_eq!(
            cfg.check_word("a=b"),
            Err(Error::BoundaryInWord {
                word: "a=b".to_string(),
                boundary: '='
            })
        );
    }
}
