//! Letter feedback calculation and representation
//!
//! Each guessed letter is labelled:
//! - `correct` = letter is in the target at this position
//! - `present` = letter is in the target at another, not yet claimed, position
//! - `absent`  = no unclaimed occurrence of the letter remains in the target
//!
//! Works on `char`s, so multi-byte letters count as one position, and accepts
//! guesses and targets of any length (including empty and mismatched).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackLabel {
    Correct,
    Present,
    Absent,
}

impl FeedbackLabel {
    /// Wire name: "correct", "present" or "absent"
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for FeedbackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One guessed letter together with its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFeedback {
    pub letter: char,
    pub status: FeedbackLabel,
}

/// Feedback for a whole guess, one entry per guessed letter
///
/// Serializes as a plain list of `{"letter": .., "status": ..}` records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<LetterFeedback>);

/// Compare `guess` against `target`
///
/// Shorthand for [`Feedback::calculate`].
#[must_use]
pub fn compare(guess: &str, target: &str) -> Feedback {
    Feedback::calculate(guess, target)
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: label exact position matches `correct` and mark those
    ///    target positions consumed
    /// 2. Second pass: for every other guess position, claim the leftmost
    ///    unconsumed target position holding the same letter (`present`),
    ///    or label it `absent` when none is left
    ///
    /// The first pass must finish before the second starts, so a later exact
    /// match is never stolen by an earlier misplaced copy of the same letter.
    ///
    /// Comparison is case-sensitive; lowercase both sides beforehand.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, FeedbackLabel::*};
    ///
    /// let feedback = Feedback::calculate("allee", "apple");
    /// assert_eq!(
    ///     feedback.labels(),
    ///     vec![Correct, Present, Absent, Absent, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, target: &str) -> Self {
        let guess: Vec<char> = guess.chars().collect();
        let target: Vec<char> = target.chars().collect();

        let mut consumed = vec![false; target.len()];
        let mut labels: Vec<Option<FeedbackLabel>> = vec![None; guess.len()];

        // First pass: exact matches. `get` keeps guess positions past the end
        // of the target from matching anything.
        for (i, &letter) in guess.iter().enumerate() {
            if target.get(i) == Some(&letter) {
                labels[i] = Some(FeedbackLabel::Correct);
                consumed[i] = true;
            }
        }

        // Second pass: leftmost unconsumed occurrence, else absent
        for (i, &letter) in guess.iter().enumerate() {
            if labels[i].is_some() {
                continue;
            }

            let claimed = target
                .iter()
                .zip(consumed.iter_mut())
                .find(|(t, used)| **t == letter && !**used);

            labels[i] = Some(match claimed {
                Some((_, used)) => {
                    *used = true;
                    FeedbackLabel::Present
                }
                None => FeedbackLabel::Absent,
            });
        }

        Self(
            guess
                .into_iter()
                .zip(labels)
                .map(|(letter, status)| LetterFeedback {
                    letter,
                    status: status.unwrap_or(FeedbackLabel::Absent),
                })
                .collect(),
        )
    }

    /// Number of guessed letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterFeedback> {
        self.0.iter()
    }

    /// The per-letter records
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Just the labels, in guess order
    #[must_use]
    pub fn labels(&self) -> Vec<FeedbackLabel> {
        self.0.iter().map(|f| f.status).collect()
    }

    /// True when every letter is `correct` (and there is at least one)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|f| f.status == FeedbackLabel::Correct)
    }

    /// Count the letters carrying `label`
    #[must_use]
    pub fn count(&self, label: FeedbackLabel) -> usize {
        self.0.iter().filter(|f| f.status == label).count()
    }

    /// Convert feedback to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.status.to_emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::FeedbackLabel::{Absent, Correct, Present};
    use super::*;

    #[test]
    fn all_letters_correct() {
        let feedback = compare("apple", "apple");
        assert_eq!(feedback.labels(), vec![Correct; 5]);
        assert!(feedback.is_solved());
    }

    #[test]
    fn mixed_present_absent_correct() {
        let feedback = compare("plane", "apple");
        assert_eq!(
            feedback.labels(),
            vec![Present, Present, Present, Absent, Correct]
        );
        assert!(!feedback.is_solved());
    }

    #[test]
    fn all_letters_absent() {
        let feedback = compare("zzzzz", "apple");
        assert_eq!(feedback.labels(), vec![Absent; 5]);
        assert_eq!(feedback.count(Absent), 5);
    }

    #[test]
    fn repeated_guess_letters_single_in_target() {
        // Only one L in APPLE: the first L claims it, the second is absent.
        // Final E is an exact match, so the earlier E finds nothing left.
        let feedback = compare("allee", "apple");
        assert_eq!(
            feedback.labels(),
            vec![Correct, Present, Absent, Absent, Correct]
        );
    }

    #[test]
    fn repeated_target_letters_single_in_guess() {
        let feedback = compare("paper", "apple");
        assert_eq!(
            feedback.labels(),
            vec![Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn exact_match_wins_over_earlier_misplaced_copy() {
        // ROBOT vs FLOOR: second O is exact, first O still finds the other O
        let feedback = compare("robot", "floor");
        assert_eq!(
            feedback.labels(),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn excess_copies_resolve_left_to_right() {
        // Target has a single E; the leftmost guessed E claims it
        let feedback = compare("eerie", "crane");
        assert_eq!(
            feedback.labels(),
            vec![Absent, Absent, Present, Absent, Correct]
        );

        let feedback = compare("speed", "erase");
        assert_eq!(
            feedback.labels(),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn longer_guess_degrades_to_absent() {
        let feedback = compare("apples", "apple");
        assert_eq!(
            feedback.labels(),
            vec![Correct, Correct, Correct, Correct, Correct, Absent]
        );
        assert!(!feedback.is_solved());
    }

    #[test]
    fn shorter_guess_is_labelled_per_position() {
        let feedback = compare("pal", "apple");
        assert_eq!(feedback.labels(), vec![Present, Present, Present]);
    }

    #[test]
    fn overflow_positions_can_still_be_present() {
        // Positions past the target's end never match exactly but may claim
        // an unconsumed letter
        let feedback = compare("catx", "act");
        assert_eq!(feedback.labels(), vec![Present, Present, Correct, Absent]);
    }

    #[test]
    fn empty_inputs() {
        assert!(compare("", "apple").is_empty());
        assert!(!compare("", "").is_solved());

        let feedback = compare("apple", "");
        assert_eq!(feedback.labels(), vec![Absent; 5]);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let feedback = compare("APPLE", "apple");
        assert_eq!(feedback.labels(), vec![Absent; 5]);
    }

    #[test]
    fn multibyte_letters_are_single_positions() {
        let feedback = compare("éclair", "éclair");
        assert_eq!(feedback.len(), 6);
        assert!(feedback.is_solved());

        let feedback = compare("aé", "éa");
        assert_eq!(feedback.labels(), vec![Present, Present]);
    }

    #[test]
    fn letters_are_preserved_in_order() {
        let feedback = compare("plane", "apple");
        let letters: String = feedback.iter().map(|f| f.letter).collect();
        assert_eq!(letters, "plane");
    }

    #[test]
    fn emoji_row() {
        assert_eq!(compare("plane", "apple").to_emoji(), "🟨🟨🟨⬜🟩");
    }

    #[test]
    fn serializes_as_feedback_records() {
        let json = serde_json::to_string(&compare("ab", "ba")).unwrap();
        assert_eq!(
            json,
            r#"[{"letter":"a","status":"present"},{"letter":"b","status":"present"}]"#
        );

        let json = serde_json::to_string(&compare("aa", "ab")).unwrap();
        assert_eq!(
            json,
            r#"[{"letter":"a","status":"correct"},{"letter":"a","status":"absent"}]"#
        );
    }

    #[test]
    fn label_names() {
        assert_eq!(Correct.to_string(), "correct");
        assert_eq!(Present.as_str(), "present");
        assert_eq!(Absent.as_str(), "absent");
    }
}
