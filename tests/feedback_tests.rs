use wordle_entropy::{Feedback, FeedbackPattern, GameHistory, GuessObservation, Word, WordleError};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn calc(guess: &str, target: &str) -> [Feedback; 5] {
    FeedbackPattern::calculate(&w(guess), &w(target)).to_feedbacks()
}

#[test]
fn test_all_correct() {
    let pattern = FeedbackPattern::calculate(&w("crane"), &w("crane"));
    assert!(pattern.is_win());
    assert_eq!(pattern, FeedbackPattern::ALL_CORRECT);
}

#[test]
fn test_all_absent() {
    let pattern = FeedbackPattern::calculate(&w("quick"), &w("dream"));
    let expected = FeedbackPattern::new([Feedback::Absent; 5]);
    assert_eq!(pattern, expected);
}

#[test]
fn test_mixed_feedback() {
    use Feedback::*;
    assert_eq!(calc("crane", "charm"), [Correct, Present, Correct, Absent, Absent]);
}

#[test]
fn test_duplicate_letters_in_guess() {
    use Feedback::*;
    assert_eq!(calc("speed", "creep"), [Absent, Present, Correct, Correct, Absent]);
}

#[test]
fn test_duplicate_letters_in_target() {
    use Feedback::*;
    assert_eq!(calc("arose", "creep"), [Absent, Correct, Absent, Absent, Present]);
}

#[test]
fn test_duplicate_guess_limited_target() {
    use Feedback::*;
    assert_eq!(calc("geese", "creep"), [Absent, Present, Correct, Absent, Absent]);
}

#[test]
fn test_sheet_against_crepe() {
    use Feedback::*;
    assert_eq!(calc("sheet", "crepe"), [Absent, Absent, Correct, Present, Absent]);
}

#[test]
fn test_specific_wordle_cases() {
    use Feedback::*;
    assert_eq!(calc("sores", "those"), [Present, Present, Absent, Present, Absent]);
}

#[test]
fn test_all_patterns_are_distinct_and_ordered() {
    let patterns: Vec<_> = FeedbackPattern::all().collect();
    assert_eq!(patterns.len(), FeedbackPattern::NUM_PATTERNS);
    assert_eq!(patterns.first(), Some(&FeedbackPattern(0)));
    assert_eq!(patterns.last(), Some(&FeedbackPattern::ALL_CORRECT));
    assert!(patterns.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_pattern_parse() {
    use Feedback::*;
    let pattern = FeedbackPattern::parse("gybbb").unwrap();
    assert_eq!(pattern.to_feedbacks(), [Correct, Present, Absent, Absent, Absent]);

    let pattern2 = FeedbackPattern::parse("21000").unwrap();
    assert_eq!(pattern, pattern2);
}

#[test]
fn test_pattern_parse_invalid() {
    for bad in ["gybbb1", "gybb", "gybzb", ""] {
        assert!(
            matches!(FeedbackPattern::parse(bad), Err(WordleError::InvalidPattern(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new([
        Feedback::Correct,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Correct,
    ]);
    assert_eq!(pattern.to_emoji_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(pattern.to_string(), pattern.to_emoji_string());
}

#[test]
fn test_admits_matches_distinct_letter_rules() {
    let guess = w("crane");
    let pattern = FeedbackPattern::parse("bgybg").unwrap();
    // r here, a elsewhere, c/n nowhere, e here.
    assert!(pattern.admits(&guess, &w("arise")));
    assert!(!pattern.admits(&guess, &w("crate")));
    assert!(!pattern.admits(&guess, &w("trace")));
}

#[test]
fn test_push_guess_records_each_slot() {
    let mut history = GameHistory::new();
    assert!(history.is_empty());

    history.push_guess(&w("crane"), FeedbackPattern::parse("gybbb").unwrap());

    assert_eq!(history.guesses(), 1);
    assert_eq!(history.observations().len(), 5);
    assert_eq!(history.observations()[0], GuessObservation::new(b'c', 0, Feedback::Correct));
    assert_eq!(history.observations()[1], GuessObservation::new(b'r', 1, Feedback::Present));
    assert_eq!(history.observations()[4], GuessObservation::new(b'e', 4, Feedback::Absent));
}

#[test]
fn test_push_guess_gray_copy_of_shown_letter() {
    let mut history = GameHistory::new();
    history.push_guess(&w("geese"), FeedbackPattern::calculate(&w("geese"), &w("creep")));

    assert_eq!(
        history.observations(),
        &[
            GuessObservation::new(b'g', 0, Feedback::Absent),
            GuessObservation::new(b'e', 1, Feedback::Present),
            GuessObservation::new(b'e', 2, Feedback::Correct),
            GuessObservation::new(b's', 3, Feedback::Absent),
            // Gray only because creep has two e's; still bars slot 4.
            GuessObservation::new(b'e', 4, Feedback::Present),
        ]
    );
}
