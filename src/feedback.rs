//! Feedback categories, patterns and the guess history built from them.
//!
//! A guess produces one [`Feedback`] per letter (green/yellow/gray). The five
//! values together form a [`FeedbackPattern`], and each slot is recorded in the
//! [`GameHistory`] as a [`GuessObservation`].

use crate::error::{Result, WordleError};
use crate::word::{letter_index, Word};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Letter not in word, or every occurrence already accounted for (gray)
    Absent,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Correct letter in correct position (green)
    Correct,
}

impl Feedback {
    /// Base-3 digit used by [`FeedbackPattern`].
    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }

    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242).
/// Each position can be 0 (absent), 1 (present), or 2 (correct).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning)
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            pattern += fb.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Every pattern a guess could produce, in ascending code order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::NUM_PATTERNS as u8).map(Self)
    }

    /// Calculate the feedback pattern for a guess against a target word.
    ///
    /// Standard Wordle rules: exact matches are green first, then each
    /// remaining guess letter, left to right, is yellow while the target still
    /// has an unmatched occurrence of it, and gray otherwise.
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let target = target.letters();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut target_remaining = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                feedback[i] = Feedback::Correct;
            } else {
                target_remaining[letter_index(target[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let idx = letter_index(guess[i]);
                if target_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    target_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Whether `word` could be the answer when `guess` shows this pattern.
    ///
    /// For a guess with five distinct letters this is the positional rule
    /// set: gray means the letter is nowhere in the word, yellow means it is
    /// in the word but not here, green means it is here. Repeated guess
    /// letters are resolved by occurrence counting, so each word is admitted
    /// by exactly one pattern.
    pub fn admits(self, guess: &Word, word: &Word) -> bool {
        Self::calculate(guess, word) == self
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || WordleError::InvalidPattern(s.to_string());
        let feedbacks = s
            .trim()
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;
        let arr: [Feedback; WORD_LENGTH] = feedbacks.try_into().map_err(|_| invalid())?;
        Ok(Self::new(arr))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// One letter slot of one submitted guess and the feedback it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessObservation {
    pub letter: u8,
    pub position: usize,
    pub category: Feedback,
}

impl GuessObservation {
    pub fn new(letter: u8, position: usize, category: Feedback) -> Self {
        Self {
            letter,
            position,
            category,
        }
    }
}

/// Observations in the order the guesses were made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameHistory {
    observations: Vec<GuessObservation>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, observation: GuessObservation) {
        self.observations.push(observation);
    }

    /// Record a whole guess as five observations, one per position.
    ///
    /// A gray copy of a letter whose other copy in the same guess is green or
    /// yellow only says the letter is not at that position, so it is recorded
    /// as `Present` there.
    pub fn push_guess(&mut self, guess: &Word, pattern: FeedbackPattern) {
        let feedbacks = pattern.to_feedbacks();
        let letters = guess.letters();
        for (position, (&letter, category)) in letters.iter().zip(feedbacks).enumerate() {
            let accounted = letters
                .iter()
                .zip(feedbacks)
                .any(|(&other, fb)| other == letter && fb != Feedback::Absent);
            let category = match category {
                Feedback::Absent if accounted => Feedback::Present,
                category => category,
            };
            self.push(GuessObservation::new(letter, position, category));
        }
    }

    pub fn observations(&self) -> &[GuessObservation] {
        &self.observations
    }

    /// Number of complete guesses recorded.
    pub fn guesses(&self) -> usize {
        self.observations.len() / WORD_LENGTH
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn clear(&mut self) {
        self.observations.clear();
    }
}

impl FromIterator<GuessObservation> for GameHistory {
    fn from_iter<I: IntoIterator<Item = GuessObservation>>(iter: I) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

impl Extend<GuessObservation> for GameHistory {
    fn extend<I: IntoIterator<Item = GuessObservation>>(&mut self, iter: I) {
        self.observations.extend(iter);
    }
}
