//! Core domain types for the word game
//!
//! This module contains the letter feedback algorithm and the validated word type.
//! Everything here is pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackLabel, LetterFeedback, compare};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, is_alphabetic};
