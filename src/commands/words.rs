//! Word list commands
//!
//! Membership checks, direct target picks and additions to the word list.

use crate::error::Result;
use crate::selection::{SelectorType, select_with};
use crate::wordlists::WordStore;
use serde::Serialize;

/// Result of picking a target word directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickResult {
    pub word: String,
    pub size: usize,
    pub seed: i64,
    /// Number of words of that size the pick was made from
    pub candidates: usize,
}

/// Pick a word of `size` letters the way a puzzle would
///
/// # Errors
///
/// Returns `GameError::NoWordsOfSize` if the store has no word of that size.
pub fn pick_word(
    store: &WordStore,
    selector: SelectorType,
    size: usize,
    seed: i64,
) -> Result<PickResult> {
    let word = select_with(&selector, store, size, seed)?;
    Ok(PickResult {
        word,
        size,
        seed,
        candidates: store.filter_by_size(size).len(),
    })
}

/// Whether `word` is in the store (case-insensitive)
#[must_use]
pub fn check_word(store: &WordStore, word: &str) -> bool {
    store.contains(word.trim())
}

/// Add a word to the store and its backing file
///
/// Returns the normalized word that was stored.
///
/// # Errors
///
/// Propagates the validation and persistence errors of `WordStore::append`.
pub fn add_word(store: &mut WordStore, word: &str) -> Result<String> {
    store.append(word)?;
    Ok(word.trim().to_lowercase())
}
