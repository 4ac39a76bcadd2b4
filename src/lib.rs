//! # Wordle Entropy
//!
//! Decision support for Wordle: narrow a candidate list using the feedback
//! received so far, then score guesses by their expected information gain.
//!
//! The two core operations are [`filter_candidates`] and [`score_guess`].
//! [`WordleSolver`] wraps them into a game session for callers that want one.

pub mod config;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod solver;
pub mod word;

pub use config::Config;
pub use dictionary::{bundled_words, load_word_list, parse_word_list};
pub use entropy::{pattern_counts, rank_guesses, score_guess, GuessAnalysis};
pub use error::{Result, WordleError};
pub use feedback::{Feedback, FeedbackPattern, GameHistory, GuessObservation};
pub use filter::{filter_candidates, PositionLetterDomain};
pub use solver::{LetterStatus, WordleSolver};
pub use word::{CandidateSet, LetterSet, Word};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Size of the lowercase Latin alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Guesses allowed in one game.
pub const MAX_GUESSES: usize = 6;
