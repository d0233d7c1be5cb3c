//! Wordle Game - CLI
//!
//! Scores guesses against random or daily puzzle targets and manages the word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{
        DEFAULT_SIZE, GuessRequest, add_word, check_word, compare_with_word, pick_word,
        play_daily, play_guess,
    },
    logging::init_logger,
    output::{
        print_added, print_check_result, print_feedback, print_guess_outcome, print_json,
        print_pick_result,
    },
    selection::{SelectorType, UNSPECIFIED_SEED},
    wordlists::WordStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle game backend: letter feedback and seeded word selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file (one word per line). Defaults to the embedded list
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDS")]
    words: Option<PathBuf>,

    /// Daily word list file. Defaults to the embedded daily list
    #[arg(long, global = true, env = "WORDLE_DAILY_WORDS")]
    daily_words: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging and per-letter detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against a random puzzle target
    Guess {
        /// The guessed word
        guess: String,

        /// Puzzle size (3-15)
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,

        /// Seed: an index into the words of that size, or a generator seed
        #[arg(long, default_value_t = UNSPECIFIED_SEED, allow_hyphen_values = true)]
        seed: i64,

        /// Show the target when the guess misses
        #[arg(long)]
        reveal: bool,
    },

    /// Score a guess against the daily puzzle target
    Daily {
        /// The guessed word
        guess: String,

        /// Puzzle size (3-15)
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,

        /// Generator seed (0 picks one from the clock)
        #[arg(long, default_value_t = UNSPECIFIED_SEED, allow_hyphen_values = true)]
        seed: i64,

        /// Show the target when the guess misses
        #[arg(long)]
        reveal: bool,
    },

    /// Score a guess against a given word
    Compare {
        /// The word to guess
        word: String,

        /// The guessed word
        guess: String,
    },

    /// Pick a target word without guessing
    Pick {
        /// Word size (3-15)
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,

        #[arg(long, default_value_t = UNSPECIFIED_SEED, allow_hyphen_values = true)]
        seed: i64,

        /// Pick from the daily list with the daily policy
        #[arg(long)]
        daily: bool,
    },

    /// Check whether a word is in the word list
    Check {
        word: String,
    },

    /// Add a word to the word list file (requires --words)
    Add {
        word: String,
    },
}

/// Load a store from `path`, or the embedded list when none is given
fn load_store(path: Option<&PathBuf>, embedded: fn() -> WordStore) -> Result<WordStore> {
    match path {
        Some(path) => WordStore::load(path)
            .with_context(|| format!("cannot start without word list {}", path.display())),
        None => Ok(embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut words = load_store(cli.words.as_ref(), WordStore::embedded)?;
    log::debug!("Word list ready with {} words", words.len());

    match cli.command {
        Commands::Guess {
            guess,
            size,
            seed,
            reveal,
        } => {
            let request = GuessRequest::new(guess).with_size(size).with_seed(seed);
            let outcome = play_guess(&words, &request)?;
            if cli.json {
                print_json(&outcome)?;
            } else {
                print_guess_outcome(&outcome, reveal, cli.verbose);
            }
        }
        Commands::Daily {
            guess,
            size,
            seed,
            reveal,
        } => {
            let daily = load_store(cli.daily_words.as_ref(), WordStore::embedded_daily)?;
            let request = GuessRequest::new(guess).with_size(size).with_seed(seed);
            let outcome = play_daily(&words, &daily, &request)?;
            if cli.json {
                print_json(&outcome)?;
            } else {
                print_guess_outcome(&outcome, reveal, cli.verbose);
            }
        }
        Commands::Compare { word, guess } => {
            let feedback = compare_with_word(&word, &guess)?;
            if cli.json {
                print_json(&feedback)?;
            } else {
                print_feedback(&feedback, cli.verbose);
            }
        }
        Commands::Pick { size, seed, daily } => {
            let result = if daily {
                let daily_store = load_store(cli.daily_words.as_ref(), WordStore::embedded_daily)?;
                pick_word(&daily_store, SelectorType::from_name("daily"), size, seed)?
            } else {
                pick_word(&words, SelectorType::from_name("indexed"), size, seed)?
            };
            if cli.json {
                print_json(&result)?;
            } else {
                print_pick_result(&result);
            }
        }
        Commands::Check { word } => {
            let known = check_word(&words, &word);
            if cli.json {
                print_json(&serde_json::json!({ "word": word.trim().to_lowercase(), "valid": known }))?;
            } else {
                print_check_result(word.trim(), known);
            }
        }
        Commands::Add { word } => {
            let added = add_word(&mut words, &word)?;
            if cli.json {
                print_json(&serde_json::json!({ "word": added, "total": words.len() }))?;
            } else {
                print_added(&added, words.len());
            }
        }
    }

    Ok(())
}
