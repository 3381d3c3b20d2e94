//! `lexgram`: approximate lexicon lookup via character n-gram overlap.
//!
//! Given a fixed lexicon, `lexgram` answers "which entries look most like this string?"
//! without computing edit distance against every entry:
//! - `ngram` extracts boundary-padded character n-grams (the similarity feature),
//! - `registry` interns each distinct word behind a dense `WordId`,
//! - `index` maps every n-gram to the posting list of words containing it,
//! - `lookup` builds all of the above once and ranks candidates by n-gram overlap.
//!
//! Scope:
//! - In-memory, build-once, read-only after construction
//! - Deterministic ranking (overlap desc, tie-break by word id asc)
//! - Case-insensitive matching (lowercasing only)
//!
//! Non-goals:
//! - True edit distance, phonetic matching
//! - Incremental updates (add/remove after construction)
//! - Persistence of the index
//!
//! References:
//! - Zobel & Dart (1995): "Finding approximate matches in large lexicons"
//!
//! ```
//! use lexgram::LookupTable;
//!
//! let table = LookupTable::new(["hello", "help", "hell", "world"]).unwrap();
//! assert_eq!(table.query("helo").unwrap(), "hello");
//! ```

pub mod index;
pub mod lookup;
pub mod ngram;
pub mod registry;

pub use error::{Error, Result};
pub use index::NgramIndex;
pub use lookup::{LookupTable, Match};
pub use ngram::{
    extract_ngrams, NgramConfig, DEFAULT_BOUNDARY, DEFAULT_K, DEFAULT_NGRAM_LENGTH,
};
pub use registry::{Registry, WordId};

mod error {
    /// Errors for n-gram lookup.
    #[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        /// N-gram length was zero.
        #[error("invalid n-gram length: must be >= 1")]
        InvalidNgramLength,
        /// Boundary character would collide with ordinary word content.
        #[error("invalid boundary character {0:?}: must not be alphanumeric or whitespace")]
        InvalidBoundary(char),
        /// Requested result count was zero.
        #[error("invalid k: must be >= 1")]
        InvalidK,
        /// A lexicon word or query contains the boundary character.
        #[error("word {word:?} contains the boundary character {boundary:?}")]
        BoundaryInWord {
            /// The offending word, as supplied.
            word: String,
            /// The configured boundary character.
            boundary: char,
        },
    }

    /// Result alias for `lexgram` operations.
    pub type Result<T> = std::result::Result<T, Error>;
}
