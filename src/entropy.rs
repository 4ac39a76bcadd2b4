//! Entropy-based guess scoring.
//!
//! A guess splits the candidates by the feedback pattern each of them would
//! produce. The Shannon entropy of that split is the expected information, in
//! bits, that making the guess will reveal.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::error::{Result, WordleError};
use crate::feedback::FeedbackPattern;
use crate::word::{CandidateSet, Word};

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    /// Expected number of candidates left after the guess.
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// How many candidates each of the 243 patterns admits for `guess`.
///
/// Every pattern is counted independently, so the patterns are spread over
/// the rayon pool and gathered back in pattern order.
pub fn pattern_counts(guess: &Word, candidates: &CandidateSet) -> [u32; FeedbackPattern::NUM_PATTERNS] {
    let counts: Vec<u32> = (0..FeedbackPattern::NUM_PATTERNS as u8)
        .into_par_iter()
        .map(FeedbackPattern)
        .map(|pattern| {
            candidates
                .iter()
                .filter(|word| pattern.admits(guess, word))
                .count() as u32
        })
        .collect();

    let mut out = [0u32; FeedbackPattern::NUM_PATTERNS];
    out.copy_from_slice(&counts);
    out
}

/// Expected information, in bits, of guessing `guess` against `candidates`.
///
/// The result lies in `[0, log2(n)]`. An empty candidate set has no defined
/// entropy and is rejected.
pub fn score_guess(guess: &Word, candidates: &CandidateSet) -> Result<f64> {
    if candidates.is_empty() {
        return Err(WordleError::InvalidState("cannot score a guess against an empty candidate set"));
    }
    let counts = pattern_counts(guess, candidates);
    Ok(entropy(&counts, candidates.len()))
}

/// Sum of `p * log2(1/p)` over the non-empty patterns. Summed in pattern order
/// so the value is reproducible bit for bit.
fn entropy(counts: &[u32], n: usize) -> f64 {
    let n = n as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            p * (1.0 / p).log2()
        })
        .sum()
}

fn expected_remaining(counts: &[u32], n: usize) -> f64 {
    let squares: f64 = counts.iter().map(|&count| (count as f64).powi(2)).sum();
    squares / n as f64
}

/// Score every guess and return the best `n`, highest entropy first.
///
/// Ties prefer a word that could itself be the answer, then alphabetical order.
pub fn rank_guesses<'a, I>(guesses: I, candidates: &CandidateSet, n: usize) -> Result<Vec<GuessAnalysis>>
where
    I: IntoIterator<Item = &'a Word>,
{
    if candidates.is_empty() {
        return Err(WordleError::InvalidState("no candidates remain"));
    }
    let guesses: Vec<&Word> = guesses.into_iter().collect();

    let mut analyses: Vec<GuessAnalysis> = guesses
        .par_iter()
        .map(|&word| {
            let counts = pattern_counts(word, candidates);
            GuessAnalysis {
                word: *word,
                entropy: entropy(&counts, candidates.len()),
                expected_remaining: expected_remaining(&counts, candidates.len()),
                is_candidate: candidates.contains(word),
            }
        })
        .collect();

    analyses.sort_by(compare_analyses);
    analyses.dedup_by(|a, b| a.word == b.word);
    analyses.truncate(n);
    Ok(analyses)
}

fn compare_analyses(a: &GuessAnalysis, b: &GuessAnalysis) -> Ordering {
    b.entropy
        .total_cmp(&a.entropy)
        .then_with(|| b.is_candidate.cmp(&a.is_candidate))
        .then_with(|| a.word.cmp(&b.word))
}
