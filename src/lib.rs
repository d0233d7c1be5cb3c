//! Wordle Game
//!
//! Backend for a Wordle-style word guessing game: duplicate-aware letter
//! feedback and reproducible, seed-driven target selection.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{FeedbackLabel, compare};
//! use wordle_game::selection::select_word;
//! use wordle_game::wordlists::WordStore;
//!
//! let store = WordStore::from_words(["apple", "grape", "melon"]);
//!
//! // Seeds inside the candidate range are direct indices
//! let target = select_word(&store, 5, 0).unwrap();
//! assert_eq!(target, "apple");
//!
//! let feedback = compare("plane", &target);
//! assert_eq!(feedback.letters()[4].status, FeedbackLabel::Correct);
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Target word selection
pub mod selection;

// Word lists and the word store
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;

pub use error::{GameError, Result};
