//! Display functions for command results

use super::formatters::{feedback_lines, feedback_tiles};
use crate::commands::{GuessOutcome, PickResult};
use crate::core::Feedback;
use colored::Colorize;
use serde::Serialize;

/// Print any result as pretty JSON
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a bare feedback row
pub fn print_feedback(feedback: &Feedback, verbose: bool) {
    println!("\n{}  {}", feedback_tiles(feedback), feedback.to_emoji());

    if verbose {
        for line in feedback_lines(feedback) {
            println!("  {line}");
        }
    }
}

/// Print the result of scoring a guess
pub fn print_guess_outcome(outcome: &GuessOutcome, reveal: bool, verbose: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess: {}  (size {}, seed {})",
        outcome.guess.to_uppercase().bright_yellow().bold(),
        outcome.size,
        outcome.seed
    );
    println!("{}", "─".repeat(40).cyan());

    print_feedback(&outcome.feedback, verbose);

    println!();
    if outcome.solved {
        println!("{}", "✅ Solved!".green().bold());
    } else if reveal {
        println!(
            "Target was {}",
            outcome.target.to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print the result of a direct pick
pub fn print_pick_result(result: &PickResult) {
    println!(
        "{} ({} candidates of size {}, seed {})",
        result.word.bright_yellow().bold(),
        result.candidates,
        result.size,
        result.seed
    );
}

/// Print whether a word is known
pub fn print_check_result(word: &str, known: bool) {
    if known {
        println!("{} {}", "✓".green().bold(), word.to_lowercase());
    } else {
        println!("{} {} is not in the word list", "✗".red().bold(), word.to_lowercase());
    }
}

/// Print confirmation of an added word
pub fn print_added(word: &str, total: usize) {
    println!(
        "{} Added {} ({total} words)",
        "✓".green().bold(),
        word.bright_yellow().bold()
    );
}
