//! Error type shared by the word store, the selectors and the request commands

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    /// No candidate word has the requested length.
    #[error("no words found with {0} letters")]
    NoWordsOfSize(usize),

    /// Attempted to append an empty (or whitespace-only) word.
    #[error("word cannot be empty")]
    EmptyWord,

    /// Attempted to append a word with characters outside `a-z`.
    #[error("word must contain only alphabetic characters: {0:?}")]
    NonAlphabetic(String),

    /// Attempted to append a word the store already holds.
    #[error("word already exists in the list: {0:?}")]
    AlreadyExists(String),

    /// Writing an appended word to the backing file failed.
    #[error("failed to persist word to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store was built from an in-memory list and cannot persist appends.
    #[error("word list has no backing file; appended words cannot be persisted")]
    ReadOnly,

    /// The word list source could not be read at startup.
    #[error("failed to load word list from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A word is shorter or longer than the playable range.
    #[error("word must be between {min} and {max} letters, got {len}", min = crate::core::MIN_WORD_LEN, max = crate::core::MAX_WORD_LEN)]
    InvalidLength { len: usize },

    /// A requested puzzle size is outside the playable range.
    #[error("size must be between {min} and {max}, got {0}", min = crate::core::MIN_WORD_LEN, max = crate::core::MAX_WORD_LEN)]
    SizeOutOfRange(usize),

    /// The guess length does not match the puzzle size (or the compared word).
    #[error("the length of the guess ({actual}) does not match the expected length ({expected})")]
    LengthMismatch { expected: usize, actual: usize },

    /// The guess is not in the word list.
    #[error("the guess is not a valid word: {0:?}")]
    UnknownWord(String),
}

impl GameError {
    /// Whether this error means the durable write failed
    #[must_use]
    pub const fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::Persistence { .. } | Self::ReadOnly)
    }
}
