//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackLabel, LetterFeedback};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. " A " on green
#[must_use]
pub fn letter_tile(letter: &LetterFeedback) -> ColoredString {
    let text = format!(" {} ", letter.letter.to_uppercase());
    match letter.status {
        FeedbackLabel::Correct => text.black().on_green().bold(),
        FeedbackLabel::Present => text.black().on_yellow().bold(),
        FeedbackLabel::Absent => text.white().on_bright_black(),
    }
}

/// Render a whole guess as a row of colored tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback.iter().map(|f| letter_tile(f).to_string()).collect()
}

/// One "letter: status" line per guessed letter
#[must_use]
pub fn feedback_lines(feedback: &Feedback) -> Vec<String> {
    feedback
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{:>2}. {}  {}", i + 1, f.letter, f.status))
        .collect()
}
