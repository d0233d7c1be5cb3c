//! Guess commands
//!
//! Validates a raw guess, picks the target for the puzzle and scores the
//! guess against it. Covers both random puzzles and daily puzzles.

use crate::core::{Feedback, MAX_WORD_LEN, MIN_WORD_LEN, Word, compare};
use crate::error::{GameError, Result};
use crate::selection::{UNSPECIFIED_SEED, select_daily_word, select_word};
use crate::wordlists::WordStore;
use log::debug;
use serde::Serialize;

/// Puzzle size used when the request does not give one
pub const DEFAULT_SIZE: usize = 5;

/// A single guess request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRequest {
    pub guess: String,
    pub size: Option<usize>,
    pub seed: i64,
}

impl GuessRequest {
    #[must_use]
    pub fn new(guess: impl Into<String>) -> Self {
        Self {
            guess: guess.into(),
            size: None,
            seed: UNSPECIFIED_SEED,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub guess: String,
    pub size: usize,
    pub seed: i64,
    pub feedback: Feedback,
    pub solved: bool,
    /// Not rendered unless the caller asks to reveal it
    #[serde(skip)]
    pub target: String,
}

/// Score a guess against a random-puzzle target
///
/// # Errors
///
/// Returns an error if:
/// - The size is outside 3..=15
/// - The guess length differs from the size
/// - The guess is not in `words`
/// - `words` has no word of that size
pub fn play_guess(words: &WordStore, request: &GuessRequest) -> Result<GuessOutcome> {
    let (guess, size) = validate(words, request)?;
    let target = select_word(words, size, request.seed)?;
    Ok(score(guess, size, request.seed, target))
}

/// Score a guess against a daily-puzzle target
///
/// The guess is checked against `words`; the target comes from `daily`.
///
/// # Errors
///
/// Same as [`play_guess`], with `NoWordsOfSize` referring to `daily`.
pub fn play_daily(
    words: &WordStore,
    daily: &WordStore,
    request: &GuessRequest,
) -> Result<GuessOutcome> {
    let (guess, size) = validate(words, request)?;
    let target = select_daily_word(daily, size, request.seed)?;
    Ok(score(guess, size, request.seed, target))
}

fn validate(words: &WordStore, request: &GuessRequest) -> Result<(String, usize)> {
    let size = request.size.unwrap_or(DEFAULT_SIZE);
    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&size) {
        return Err(GameError::SizeOutOfRange(size));
    }

    let guess = Word::new(&request.guess)?;
    if guess.len() != size {
        return Err(GameError::LengthMismatch {
            expected: size,
            actual: guess.len(),
        });
    }

    if !words.contains(guess.text()) {
        return Err(GameError::UnknownWord(guess.into_string()));
    }

    Ok((guess.into_string(), size))
}

fn score(guess: String, size: usize, seed: i64, target: String) -> GuessOutcome {
    let feedback = compare(&guess, &target);
    let solved = feedback.is_solved();
    debug!("Scored {guess:?} (size {size}, seed {seed}): solved={solved}");

    GuessOutcome {
        guess,
        size,
        seed,
        feedback,
        solved,
        target,
    }
}
