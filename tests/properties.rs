//! Property-based tests for filtering and scoring.

use proptest::prelude::*;

use wordle_entropy::{
    filter_candidates, pattern_counts, score_guess, CandidateSet, Feedback, FeedbackPattern,
    GameHistory, GuessObservation, LetterSet, PositionLetterDomain, Word,
};

const LETTERS: &[u8] = b"aceilnorst";

fn to_word(bytes: &[u8]) -> Word {
    Word::parse(std::str::from_utf8(bytes).unwrap()).unwrap()
}

/// Strategy: a word over a small alphabet so candidates collide often.
fn word_strategy() -> impl Strategy<Value = Word> {
    prop::array::uniform5(prop::sample::select(LETTERS.to_vec())).prop_map(|b| to_word(&b))
}

fn candidates_strategy() -> impl Strategy<Value = CandidateSet> {
    prop::collection::btree_set(word_strategy(), 1..40)
}

fn category_strategy() -> impl Strategy<Value = Feedback> {
    prop_oneof![
        Just(Feedback::Absent),
        Just(Feedback::Present),
        Just(Feedback::Correct),
    ]
}

fn observation_strategy() -> impl Strategy<Value = GuessObservation> {
    (prop::sample::select(LETTERS.to_vec()), 0..5usize, category_strategy())
        .prop_map(|(letter, position, category)| GuessObservation::new(letter, position, category))
}

fn history_strategy() -> impl Strategy<Value = GameHistory> {
    prop::collection::vec(observation_strategy(), 0..20).prop_map(|obs| obs.into_iter().collect())
}

proptest! {
    // 1. Filtering twice changes nothing
    #[test]
    fn filter_idempotent(history in history_strategy(), words in candidates_strategy()) {
        let once = filter_candidates(&history, &words);
        let twice = filter_candidates(&history, &once);
        prop_assert_eq!(once, twice);
    }

    // 2. Filtering never adds words
    #[test]
    fn filter_shrinks(history in history_strategy(), words in candidates_strategy()) {
        let filtered = filter_candidates(&history, &words);
        prop_assert!(filtered.is_subset(&words));
    }

    // 3. Grays of the locked letter never reopen or clear a locked slot
    #[test]
    fn locked_position_immune(
        history in history_strategy(),
        letter in prop::sample::select(LETTERS.to_vec()),
        position in 0..5usize,
        later in prop::collection::vec(0..5usize, 0..5),
    ) {
        let mut history = history;
        history.push(GuessObservation::new(letter, position, Feedback::Correct));
        for p in later.into_iter().filter(|&p| p != position) {
            history.push(GuessObservation::new(letter, p, Feedback::Absent));
        }
        let domain = PositionLetterDomain::from_history(&history);
        prop_assert!(domain.is_locked(position));
        prop_assert_eq!(domain.letters(position), LetterSet::single(letter));
    }

    // 4. 0 <= entropy <= log2(n), with equality only for a perfect split
    #[test]
    fn entropy_bounded(guess in word_strategy(), words in candidates_strategy()) {
        let score = score_guess(&guess, &words).unwrap();
        let max = (words.len() as f64).log2();
        prop_assert!(score >= 0.0, "score={score}");
        prop_assert!(score <= max + 1e-9, "score={score} max={max}");

        let counts = pattern_counts(&guess, &words);
        if counts.iter().all(|&c| c <= 1) {
            prop_assert!((score - max).abs() < 1e-9);
        } else {
            prop_assert!(score < max - 1e-9);
        }
    }

    // 5. Pattern probabilities sum to one
    #[test]
    fn probability_mass_conserved(guess in word_strategy(), words in candidates_strategy()) {
        let n = words.len() as f64;
        let total: f64 = pattern_counts(&guess, &words)
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| c as f64 / n)
            .sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "total={total}");
    }

    // 6. A single candidate carries no information
    #[test]
    fn singleton_scores_zero(guess in word_strategy(), answer in word_strategy()) {
        let words: CandidateSet = [answer].into_iter().collect();
        prop_assert_eq!(score_guess(&guess, &words).unwrap(), 0.0);
    }

    // 7. True feedback never filters out the answer, repeated letters included
    #[test]
    fn answer_survives_true_feedback(
        guesses in prop::collection::vec(word_strategy(), 1..4),
        words in candidates_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = **pick.get(&words.iter().collect::<Vec<_>>());
        let mut history = GameHistory::new();
        for guess in &guesses {
            history.push_guess(guess, FeedbackPattern::calculate(guess, &target));
        }
        prop_assert!(filter_candidates(&history, &words).contains(&target));
    }
}
