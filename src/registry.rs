//! Word interning: dense `WordId`s for distinct lexicon words.
//!
//! Posting lists store ids rather than strings, so each word is held exactly once.

use std::collections::HashMap;
use std::fmt;

/// Identifier of a distinct lexicon word.
///
/// Assigned in first-seen order starting at 0, so ids are dense (`0..len`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordId(pub u32);

impl WordId {
    /// Position of this id in id order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Bidirectional `word <-> WordId` mapping.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    word_to_id: HashMap<String, WordId>,
    id_to_word: Vec<String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `word`, assigning the next one if it is unseen.
    pub(crate) fn intern(&mut self, word: &str) -> WordId {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }
        let id = WordId(self.id_to_word.len() as u32);
        self.word_to_id.insert(word.to_string(), id);
        self.id_to_word.push(word.to_string());
        id
    }

    /// Id of `word`, if it is in the lexicon.
    pub fn id(&self, word: &str) -> Option<WordId> {
        self.word_to_id.get(word).copied()
    }

    /// Word for `id`, if assigned.
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.id_to_word.get(id.index()).map(String::as_str)
    }

    /// Whether `word` is in the lexicon (exact, case-sensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    /// Whether no word has been registered.
    pub fn is_empty(&self) -> bool {
        self.id_to_word.is_empty()
    }

    /// Iterate `(id, word)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.id_to_word
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i as u32), w.as_str()))
    }
}
