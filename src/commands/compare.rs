//! Direct comparison command
//!
//! Scores a guess against a caller-supplied word, without consulting any
//! word list.

use crate::core::{Feedback, compare};
use crate::error::{GameError, Result};

/// Compare `guess` against `word`
///
/// Both sides are trimmed and lowercased before comparing.
///
/// # Errors
///
/// Returns `GameError::LengthMismatch` if the two differ in length, or
/// `GameError::EmptyWord` if the guess is empty.
pub fn compare_with_word(word: &str, guess: &str) -> Result<Feedback> {
    let word = word.trim().to_lowercase();
    let guess = guess.trim().to_lowercase();

    if guess.is_empty() {
        return Err(GameError::EmptyWord);
    }

    let expected = word.chars().count();
    let actual = guess.chars().count();
    if expected != actual {
        return Err(GameError::LengthMismatch { expected, actual });
    }

    Ok(compare(&guess, &word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackLabel::{Absent, Correct, Present};

    #[test]
    fn compares_case_insensitively() {
        let feedback = compare_with_word("Apple", "PAPER").unwrap();
        assert_eq!(
            feedback.labels(),
            vec![Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(matches!(
            compare_with_word("apple", "apples"),
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn rejects_empty_guess() {
        assert!(matches!(
            compare_with_word("apple", "  "),
            Err(GameError::EmptyWord)
        ));
    }
}
