//! Lookup table: build the registry and n-gram index once, then rank by n-gram overlap.
//!
//! The overlap between a query and a candidate is the size of the *multiset* intersection of
//! their n-grams: every (query n-gram occurrence, posting) pair counts once. Shared n-grams
//! serve as a cheap proxy for small edit distance.
//!
//! Ranking is deterministic: overlap desc, then `WordId` asc (first-seen lexicon order).

use crate::index::NgramIndex;
use crate::ngram::NgramConfig;
use crate::registry::{Registry, WordId};
use crate::{Error, Result};

use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, trace};

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Registry id of the candidate.
    pub id: WordId,
    /// The candidate word, as it appeared in the lexicon.
    pub word: String,
    /// Number of shared n-gram occurrences with the query.
    pub overlap: u32,
}

/// Immutable approximate-match index over a lexicon.
///
/// Owns its registry and index exclusively; queries borrow it read-only, so a built table
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct LookupTable {
    config: NgramConfig,
    registry: Registry,
    index: NgramIndex,
}

impl LookupTable {
    /// Build a table with the default configuration (trigrams, `'='` boundary).
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, NgramConfig::default())
    }

    /// Build a table from `words` in order.
    ///
    /// Duplicate words share the id of their first occurrence but still contribute their
    /// n-gram postings again. Fails (without producing a partial table) if the config is
    /// invalid or a word contains the boundary character.
    pub fn with_config<I, S>(words: I, config: NgramConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let start = Instant::now();
        debug!(
            ngram_length = config.ngram_length,
            boundary = %config.boundary,
            "building n-gram lookup table"
        );

        let mut registry = Registry::new();
        let mut index = NgramIndex::new();
        let mut num_words = 0usize;
        for word in words {
            let word = word.as_ref();
            config.check_word(word)?;
            let id = registry.intern(word);
            for gram in config.ngrams(word) {
                index.insert(gram, id);
            }
            num_words += 1;
        }

        info!(
            words = num_words,
            distinct_words = registry.len(),
            ngrams = index.num_ngrams(),
            postings = index.num_postings(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "completed n-gram lookup table"
        );

        Ok(Self {
            config,
            registry,
            index,
        })
    }

    /// Configuration used at build time (and reused for every query).
    pub fn config(&self) -> NgramConfig {
        self.config
    }

    /// The word registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The n-gram index.
    pub fn index(&self) -> &NgramIndex {
        &self.index
    }

    /// Number of distinct lexicon words.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether the lexicon was empty.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Id of a lexicon word (exact, case-sensitive).
    pub fn word2id(&self, word: &str) -> Option<WordId> {
        self.registry.id(word)
    }

    /// Lexicon word for an id.
    pub fn id2word(&self, id: WordId) -> Option<&str> {
        self.registry.word(id)
    }

    /// Rank up to `k` candidates sharing at least one n-gram with `word`.
    ///
    /// Returns an empty vec when nothing overlaps; use [`LookupTable::query_k`] for the
    /// echo-the-query fallback.
    pub fn query_scored(&self, word: &str, k: usize) -> Result<Vec<Match>> {
        if k == 0 {
            return Err(Error::InvalidK);
        }
        self.config.check_word(word)?;

        let grams = self.config.ngrams(word);
        let mut overlap: HashMap<WordId, u32> = HashMap::new();
        for gram in &grams {
            for &id in self.index.postings(gram) {
                *overlap.entry(id).or_insert(0) += 1;
            }
        }
        debug!(
            query = word,
            ngrams = grams.len(),
            candidates = overlap.len(),
            "scored candidates"
        );

        let mut ranked: Vec<(WordId, u32)> = overlap.into_iter().collect();
        // Deterministic: overlap desc, then id asc.
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);

        Ok(ranked
            .into_iter()
            .filter_map(|(id, overlap)| {
                self.registry.word(id).map(|w| Match {
                    id,
                    word: w.to_string(),
                    overlap,
                })
            })
            .collect())
    }

    /// The `k` closest lexicon words to `word`, best first.
    ///
    /// Never empty: if no lexicon word shares an n-gram with `word` (or the lexicon is empty),
    /// the result is `[word]` unchanged, meaning "no informative match".
    pub fn query_k(&self, word: &str, k: usize) -> Result<Vec<String>> {
        let matches = self.query_scored(word, k)?;
        if matches.is_empty() {
            trace!(query = word, "no shared n-grams; echoing query");
            return Ok(vec![word.to_string()]);
        }
        Ok(matches.into_iter().map(|m| m.word).collect())
    }

    /// The single closest lexicon word (`query_k(word, 1)`).
    pub fn query(&self, word: &str) -> Result<String> {
        Ok(self
            .query_k(word, 1)?
            .into_iter()
            .next()
            .unwrap_or_else(|| word.to_string()))
    }
}
