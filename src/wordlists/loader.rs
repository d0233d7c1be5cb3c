//! Word list loading utilities
//!
//! Parses newline-delimited word lists: each line is trimmed, blank lines are
//! skipped and entries are lowercased. Order and duplicates are preserved.

use crate::error::{GameError, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Normalize a single raw line, returning `None` for blank lines
#[must_use]
pub fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Parse an in-memory word list
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_words;
///
/// let words = parse_words("Apple\n\n  grape \nAPPLE\n");
/// assert_eq!(words, vec!["apple", "grape", "apple"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize_line).collect()
}

/// Read a word list from any buffered reader
///
/// # Errors
///
/// Returns an I/O error if reading fails or a line is not valid UTF-8.
pub fn read_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `GameError::Load` if the file cannot be opened or read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let load_err = |source| GameError::Load {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(load_err)?;
    let words = read_words(BufReader::new(file)).map_err(load_err)?;

    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize_line(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_trims_skips_and_lowercases() {
        let words = parse_words("  Apple\r\n\n\t\nBANANA  \ngrape\n");
        assert_eq!(words, vec!["apple", "banana", "grape"]);
    }

    #[test]
    fn parse_keeps_duplicates_in_order() {
        let words = parse_words("melon\nberry\nMelon\n");
        assert_eq!(words, vec!["melon", "berry", "melon"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("\n \n\t\n").is_empty());
    }

    #[test]
    fn read_from_reader() {
        let reader = Cursor::new("sunny\ncloudy\n\nRainy");
        let words = read_words(reader).unwrap();
        assert_eq!(words, vec!["sunny", "cloudy", "rainy"]);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        match err {
            GameError::Load { path, .. } => {
                assert!(path.ends_with("words.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn words_from_slice_converts() {
        let input = &["crane", " Slate ", "", "irate"];
        let words = words_from_slice(input);
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }
}
