//! Word lists.
//!
//! The core never reads a dictionary on its own; callers load one here and
//! pass the resulting set in.

use std::fs;
use std::path::Path;

use crate::error::{Result, WordleError};
use crate::word::{CandidateSet, Word};

const BUNDLED: &str = include_str!("../dictionary/words.txt");

/// Parse a word list: one word per line, blank lines and `#` comments skipped.
pub fn parse_word_list(text: &str) -> Result<CandidateSet> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, word)| {
            Word::parse(word).map_err(|e| WordleError::WordList {
                line,
                source: Box::new(e),
            })
        })
        .collect()
}

pub fn load_word_list(path: impl AsRef<Path>) -> Result<CandidateSet> {
    let text = fs::read_to_string(path)?;
    parse_word_list(&text)
}

/// The small word list shipped with the crate.
pub fn bundled_words() -> CandidateSet {
    // Checked by `bundled_list_is_valid` below.
    parse_word_list(BUNDLED).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_list_is_valid() {
        let words = parse_word_list(BUNDLED).unwrap();
        assert!(words.len() > 400);
        assert!(words.contains(&Word::parse("crane").unwrap()));
    }

    #[test]
    fn skips_comments_and_dedups() {
        let words = parse_word_list("# header\ncrane\n\n  CRANE \nslate\n").unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn reports_offending_line() {
        match parse_word_list("crane\nslate\ncranes\n") {
            Err(WordleError::WordList { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {other:?}"),
        }
    }
}
