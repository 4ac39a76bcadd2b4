//! Game session built on the filter and the scorer.
//!
//! The solver keeps the guess dictionary and answer list it was given, the
//! feedback received so far, and the candidates that feedback leaves. Each
//! recommendation is a single-guess maximum-entropy choice.

use crate::entropy::{rank_guesses, GuessAnalysis};
use crate::error::Result;
use crate::feedback::{Feedback, FeedbackPattern, GameHistory};
use crate::filter::filter_candidates;
use crate::word::{letter_index, CandidateSet, Word};
use crate::{ALPHABET_SIZE, MAX_GUESSES};

/// Best feedback seen for each letter across all guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Unknown,
    Seen(Feedback),
}

/// The main Wordle solver
#[derive(Debug, Clone)]
pub struct WordleSolver {
    guesses: CandidateSet,
    answers: CandidateSet,
    candidates: CandidateSet,
    history: GameHistory,
    guessed: Vec<Word>,
    letters: [LetterStatus; ALPHABET_SIZE],
}

impl WordleSolver {
    /// `guesses` is every word allowed as a guess, `answers` every word that
    /// may be the hidden answer. Answers are always allowed as guesses.
    pub fn new(guesses: CandidateSet, answers: CandidateSet) -> Self {
        let mut guesses = guesses;
        guesses.extend(answers.iter().copied());
        Self {
            guesses,
            candidates: answers.clone(),
            answers,
            history: GameHistory::new(),
            guessed: Vec::new(),
            letters: [LetterStatus::Unknown; ALPHABET_SIZE],
        }
    }

    /// Use one list for both guesses and answers.
    pub fn from_words(words: CandidateSet) -> Self {
        Self::new(CandidateSet::new(), words)
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn all_guesses(&self) -> &CandidateSet {
        &self.guesses
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn letter_status(&self, letter: u8) -> LetterStatus {
        if !letter.is_ascii_lowercase() {
            return LetterStatus::Unknown;
        }
        self.letters[letter_index(letter)]
    }

    pub fn reset(&mut self) {
        self.candidates = self.answers.clone();
        self.history.clear();
        self.guessed.clear();
        self.letters = [LetterStatus::Unknown; ALPHABET_SIZE];
    }

    /// Record a guess and its feedback, then re-filter from the full answer list.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) {
        self.history.push_guess(guess, pattern);
        self.guessed.push(*guess);
        for (&letter, feedback) in guess.letters().iter().zip(pattern.to_feedbacks()) {
            let slot = &mut self.letters[letter_index(letter)];
            *slot = match *slot {
                LetterStatus::Seen(best) if best >= feedback => LetterStatus::Seen(best),
                _ => LetterStatus::Seen(feedback),
            };
        }
        self.candidates = filter_candidates(&self.history, &self.answers);
    }

    pub fn best_guess(&self) -> Result<Option<GuessAnalysis>> {
        Ok(self.best_guesses(1)?.into_iter().next())
    }

    /// The `n` highest-entropy guesses not yet played. Empty once no
    /// candidates remain.
    pub fn best_guesses(&self, n: usize) -> Result<Vec<GuessAnalysis>> {
        match (self.candidates.len(), self.candidates.first()) {
            (0, _) => Ok(vec![]),
            (1, Some(&word)) => Ok(vec![GuessAnalysis {
                word,
                entropy: 0.0,
                expected_remaining: 1.0,
                is_candidate: true,
            }]),
            _ => {
                let unplayed = self.guesses.iter().filter(|w| !self.guessed.contains(w));
                rank_guesses(unplayed, &self.candidates, n)
            }
        }
    }

    /// Solve a Wordle puzzle automatically, given a function that provides feedback
    /// Returns the sequence of guesses made
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Result<Vec<(Word, FeedbackPattern)>>
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        let mut guesses = Vec::new();

        for _ in 0..MAX_GUESSES {
            let best = match self.best_guess()? {
                Some(g) => g,
                None => break,
            };

            let pattern = get_feedback(&best.word);
            guesses.push((best.word, pattern));

            if pattern.is_win() {
                break;
            }

            self.apply_feedback(&best.word, pattern);
        }

        Ok(guesses)
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word) -> Result<Vec<(Word, FeedbackPattern)>> {
        self.solve_with_feedback(|guess| FeedbackPattern::calculate(guess, target))
    }
}
