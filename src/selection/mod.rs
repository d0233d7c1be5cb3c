//! Target word selection
//!
//! Filters a word store to the requested length and lets a `Selector`
//! pick one candidate.

mod rng;
mod selector;

pub use rng::{UNSPECIFIED_SEED, draw_index, seeded_rng, time_seed};
pub use selector::{IndexedSelector, SeededSelector, Selector, SelectorType};

use crate::error::{GameError, Result};
use crate::wordlists::WordStore;

/// Pick a word of `size` letters from `store` with the given selector
///
/// # Errors
///
/// Returns `GameError::NoWordsOfSize` if no stored word has that length.
pub fn select_with<S: Selector>(
    selector: &S,
    store: &WordStore,
    size: usize,
    seed: i64,
) -> Result<String> {
    let candidates = store.filter_by_size(size);
    selector
        .choose(&candidates, seed)
        .map(str::to_string)
        .ok_or(GameError::NoWordsOfSize(size))
}

/// Select a random-puzzle target
///
/// A seed in `[0, count)` is a direct index into the words of that length
/// (in load order); any other seed feeds a seeded generator.
///
/// # Errors
///
/// Returns `GameError::NoWordsOfSize` if no stored word has that length.
///
/// # Examples
/// ```
/// use wordle_game::selection::select_word;
/// use wordle_game::wordlists::WordStore;
///
/// let store = WordStore::from_words(["apple", "banana", "grape"]);
/// assert_eq!(select_word(&store, 5, 1).unwrap(), "grape");
/// assert!(select_word(&store, 9, 0).is_err());
/// ```
pub fn select_word(store: &WordStore, size: usize, seed: i64) -> Result<String> {
    select_with(&IndexedSelector, store, size, seed)
}

/// Select a daily-puzzle target
///
/// Always draws from the generator keyed by `seed`; `UNSPECIFIED_SEED`
/// seeds from the clock.
///
/// # Errors
///
/// Returns `GameError::NoWordsOfSize` if no stored word has that length.
pub fn select_daily_word(store: &WordStore, size: usize, seed: i64) -> Result<String> {
    select_with(&SeededSelector, store, size, seed)
}
