//! Owned word store
//!
//! Holds the canonical word list in load order, answers membership and
//! length queries, and appends validated new words to its backing file.

use super::loader::{load_from_file, normalize_line, words_from_slice};
use super::{DAILY, WORDS};
use crate::core::is_alphabetic;
use crate::error::{GameError, Result};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// An ordered list of lowercase words
///
/// Entries are lowercased once when the store is built and never re-normalized
/// on read. Duplicate entries are kept so index-based selection sees the list
/// exactly as loaded.
///
/// `append` takes `&mut self`; share a store across threads behind a
/// `Mutex` or `RwLock` so only one append is in flight at a time.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<String>,
    index: FxHashSet<String>,
    backing: Option<PathBuf>,
}

impl WordStore {
    /// Build an in-memory store (no backing file)
    ///
    /// Entries go through the same trim/skip/lowercase rules as file loads.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize_line(w.as_ref()))
            .collect();
        Self::with_backing(words, None)
    }

    /// Store over the embedded main word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::with_backing(words_from_slice(WORDS), None)
    }

    /// Store over the embedded daily word list
    #[must_use]
    pub fn embedded_daily() -> Self {
        Self::with_backing(words_from_slice(DAILY), None)
    }

    /// Load a store from a newline-delimited file
    ///
    /// The file becomes the backing source that `append` writes to.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Load` if the file cannot be read. Callers treat
    /// this as a startup failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = load_from_file(path)?;
        Ok(Self::with_backing(words, Some(path.to_path_buf())))
    }

    fn with_backing(words: Vec<String>, backing: Option<PathBuf>) -> Self {
        let index = words.iter().cloned().collect();
        Self {
            words,
            index,
            backing,
        }
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// All words with exactly `size` letters, in load order
    #[must_use]
    pub fn filter_by_size(&self, size: usize) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| w.chars().count() == size)
            .map(String::as_str)
            .collect()
    }

    /// Append a new word and persist it to the backing file
    ///
    /// The word is trimmed and lowercased first. The in-memory list only
    /// changes once the write has reached the file.
    ///
    /// # Errors
    ///
    /// - `EmptyWord` if nothing is left after trimming
    /// - `NonAlphabetic` if any character is outside `a-z`
    /// - `AlreadyExists` if the store already holds the word
    /// - `ReadOnly` if the store has no backing file
    /// - `Persistence` if writing to the backing file fails
    pub fn append(&mut self, word: &str) -> Result<()> {
        let word = word.trim().to_lowercase();

        if let Err(err) = self.validate_new(&word) {
            warn!("Rejected new word {word:?}: {err}");
            return Err(err);
        }

        let Some(path) = self.backing.as_deref() else {
            warn!("Rejected new word {word:?}: store has no backing file");
            return Err(GameError::ReadOnly);
        };

        persist_word(path, &word).map_err(|source| GameError::Persistence {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Added {word:?} to {}", path.display());
        self.index.insert(word.clone());
        self.words.push(word);
        Ok(())
    }

    fn validate_new(&self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(GameError::EmptyWord);
        }
        if !is_alphabetic(word) {
            return Err(GameError::NonAlphabetic(word.to_string()));
        }
        if self.index.contains(word) {
            return Err(GameError::AlreadyExists(word.to_string()));
        }
        Ok(())
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// File that appends are written to, if any
    #[must_use]
    pub fn backing_path(&self) -> Option<&Path> {
        self.backing.as_deref()
    }
}

/// Append `word` as its own line, synced to disk before returning
fn persist_word(path: &Path, word: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().read(true).append(true).open(path)?;

    let mut line = String::with_capacity(word.len() + 2);
    if missing_trailing_newline(&mut file)? {
        line.push('\n');
    }
    line.push_str(word);
    line.push('\n');

    file.write_all(line.as_bytes())?;
    file.sync_data()?;
    debug!("Persisted {word:?} to {}", path.display());
    Ok(())
}

/// Whether a non-empty file ends without a newline
fn missing_trailing_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
