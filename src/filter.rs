//! Candidate filtering from accumulated feedback.
//!
//! The history is reduced to one permitted-letter set per position, and a word
//! survives when every one of its letters is permitted at its position.

use crate::feedback::{Feedback, GameHistory, GuessObservation};
use crate::word::{CandidateSet, LetterSet, Word};
use crate::WORD_LENGTH;

/// Letters still permitted at each position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionLetterDomain {
    letters: [LetterSet; WORD_LENGTH],
    locked: [bool; WORD_LENGTH],
}

impl Default for PositionLetterDomain {
    fn default() -> Self {
        Self {
            letters: [LetterSet::full(); WORD_LENGTH],
            locked: [false; WORD_LENGTH],
        }
    }
}

impl PositionLetterDomain {
    /// Start from the full alphabet everywhere and apply every observation.
    pub fn from_history(history: &GameHistory) -> Self {
        let mut domain = Self::default();
        for observation in history.observations() {
            domain.apply(observation);
        }
        domain
    }

    /// Narrow the domain with one observation.
    ///
    /// A green locks its position to that letter; a yellow removes the letter
    /// from its own position only; a gray removes the letter from every
    /// position that is not locked.
    pub fn apply(&mut self, observation: &GuessObservation) {
        let GuessObservation {
            letter,
            position,
            category,
        } = *observation;
        if position >= WORD_LENGTH || !letter.is_ascii_lowercase() {
            return;
        }

        match category {
            Feedback::Correct => {
                self.letters[position] = LetterSet::single(letter);
                self.locked[position] = true;
            }
            Feedback::Present => self.letters[position].remove(letter),
            Feedback::Absent => {
                for (letters, &locked) in self.letters.iter_mut().zip(&self.locked) {
                    if !locked {
                        letters.remove(letter);
                    }
                }
            }
        }
    }

    pub fn letters(&self, position: usize) -> LetterSet {
        self.letters[position]
    }

    pub fn is_locked(&self, position: usize) -> bool {
        self.locked[position]
    }

    /// Whether every letter of `word` is permitted at its position.
    pub fn permits(&self, word: &Word) -> bool {
        word.letters()
            .iter()
            .zip(&self.letters)
            .all(|(&letter, allowed)| allowed.contains(letter))
    }
}

/// Keep only the candidates consistent with the whole history.
///
/// The input set is only read; the survivors are collected into a new set.
pub fn filter_candidates(history: &GameHistory, candidates: &CandidateSet) -> CandidateSet {
    if history.is_empty() {
        return candidates.clone();
    }
    let domain = PositionLetterDomain::from_history(history);
    candidates
        .iter()
        .filter(|word| domain.permits(word))
        .copied()
        .collect()
}
