//! Playable word representation
//!
//! A Word is a lowercase alphabetic string of 3 to 15 letters. The request layer
//! builds one from raw input before touching the word store.

use crate::error::{GameError, Result};
use std::fmt;

/// Shortest playable word
pub const MIN_WORD_LEN: usize = 3;

/// Longest playable word
pub const MAX_WORD_LEN: usize = 15;

/// A validated, lowercased word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased, so two
    /// words are equal iff their lowercased forms are.
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - Length is outside 3..=15 (`InvalidLength`)
    /// - Contains anything other than ASCII letters (`NonAlphabetic`)
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("ab").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().trim().to_lowercase();

        if !is_alphabetic(&text) {
            return Err(GameError::NonAlphabetic(text));
        }

        // ASCII-only past this point, so bytes == letters
        let len = text.len();
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
            return Err(GameError::InvalidLength { len });
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// True when every character is an ASCII letter
///
/// The empty string is vacuously alphabetic; callers check emptiness first.
#[must_use]
pub fn is_alphabetic(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("  CrAnE ").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_length_bounds() {
        assert!(Word::new("cat").is_ok());
        assert!(Word::new("interchangeable").is_ok());
        assert!(matches!(
            Word::new("ab"),
            Err(GameError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            Word::new("responsibilities"),
            Err(GameError::InvalidLength { len: 16 })
        ));
        assert!(matches!(
            Word::new(""),
            Err(GameError::InvalidLength { len: 0 })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(GameError::NonAlphabetic(_))
        ));
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crêpe").is_err());
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn alphabetic_check() {
        assert!(is_alphabetic("kiwi"));
        assert!(is_alphabetic("KiWi"));
        assert!(!is_alphabetic("kiwi123"));
        assert!(!is_alphabetic("ki-wi"));
        assert!(is_alphabetic(""));
    }
}
