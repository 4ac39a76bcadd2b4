//! Fixed-length words and letter sets.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordleError};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// A five letter word over `a..=z`, stored as ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(pub(crate) [u8; WORD_LENGTH]);

/// Words still possibly the answer. Ordered so every pass over it is deterministic.
pub type CandidateSet = BTreeSet<Word>;

impl Word {
    /// Parse a word, ignoring surrounding whitespace and case.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let bytes: [u8; WORD_LENGTH] = trimmed
            .as_bytes()
            .try_into()
            .map_err(|_| WordleError::InvalidWord(trimmed.to_string()))?;

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, b) in letters.iter_mut().zip(bytes) {
            let lower = b.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(WordleError::InvalidWord(trimmed.to_string()));
            }
            *slot = lower;
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letter(&self, position: usize) -> u8 {
        self.0[position]
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Number of times `letter` occurs in the word.
    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&b| b == letter).count()
    }

    pub fn as_str(&self) -> &str {
        // Only ever constructed from ASCII lowercase.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Index of a lowercase letter in the alphabet.
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// A set of letters `a..=z`, one bit per letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    const FULL_MASK: u32 = (1 << ALPHABET_SIZE) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every letter of the alphabet.
    pub const fn full() -> Self {
        Self(Self::FULL_MASK)
    }

    /// The set holding just `letter`, or an empty set for a non-letter byte.
    pub fn single(letter: u8) -> Self {
        let mut set = Self::empty();
        set.insert(letter);
        set
    }

    pub fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << letter_index(letter)) != 0
    }

    /// Bytes outside `a..=z` are ignored.
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= 1 << letter_index(letter);
        }
    }

    /// Bytes outside `a..=z` are ignored.
    pub fn remove(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 &= !(1 << letter_index(letter));
        }
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(char::from)).finish()
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
