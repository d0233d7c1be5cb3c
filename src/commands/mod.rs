//! Command implementations
//!
//! The request layer: validates raw input and drives the word store,
//! selectors and feedback engine.

pub mod compare;
pub mod guess;
pub mod words;

pub use compare::compare_with_word;
pub use guess::{DEFAULT_SIZE, GuessOutcome, GuessRequest, play_daily, play_guess};
pub use words::{PickResult, add_word, check_word, pick_word};
