//! N-gram inverted index: `n-gram -> posting list of WordId`.
//!
//! Postings are appended once per n-gram occurrence, so a word that contains the same n-gram
//! twice appears twice in that list and scores higher for queries sharing it. Postings are
//! never deduplicated.

use crate::registry::WordId;
use std::collections::HashMap;

/// Inverted index from n-gram to the ids of words containing it.
#[derive(Debug, Default, Clone)]
pub struct NgramIndex {
    postings: HashMap<String, Vec<WordId>>,
    num_postings: usize,
}

impl NgramIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one posting for `ngram`.
    pub(crate) fn insert(&mut self, ngram: String, id: WordId) {
        self.postings.entry(ngram).or_default().push(id);
        self.num_postings += 1;
    }

    /// Posting list for `ngram` (empty when the n-gram never occurred).
    pub fn postings(&self, ngram: &str) -> &[WordId] {
        self.postings.get(ngram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any lexicon word contains `ngram`.
    pub fn contains(&self, ngram: &str) -> bool {
        self.postings.contains_key(ngram)
    }

    /// Iterate distinct n-grams (arbitrary order).
    pub fn ngrams(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(String::as_str)
    }

    /// Number of distinct n-grams.
    pub fn num_ngrams(&self) -> usize {
        self.postings.len()
    }

    /// Total postings across all lists, repeats included.
    pub fn num_postings(&self) -> usize {
        self.num_postings
    }

    /// Whether the index holds no n-grams.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
