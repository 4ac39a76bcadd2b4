//! Wordle Entropy CLI
//!
//! Command-line front end for candidate filtering and entropy scoring.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use wordle_entropy::{
    bundled_words, filter_candidates, load_word_list, rank_guesses, score_guess, CandidateSet,
    Config, Feedback, FeedbackPattern, GameHistory, GuessAnalysis, LetterStatus, Word,
    WordleSolver,
};

const HELP_TEXT: &str = "\
Commands:
  suggest | s             best next guess
  top [n] | t [n]         n best guesses (default 5)
  feedback <word> <fb>    record a guess, e.g. `feedback crane gybbb`
  remaining | r           list remaining candidates
  letters | l             letter status board
  reset                   start a new game
  help | h | ?            this text
  quit | q                exit

Feedback uses g=green, y=yellow, b=gray (or 2/1/0).";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Answer word list, one word per line. Defaults to the bundled list.
    #[clap(long, global = true, value_parser)]
    words: Option<PathBuf>,

    /// Additional guess-only word list.
    #[clap(long, global = true, value_parser)]
    guesses: Option<PathBuf>,

    /// How many ranked guesses to print.
    #[clap(short, long, global = true, default_value_t = 5)]
    top: usize,

    /// Worker threads for scoring. Overrides WORDLE_THREADS / RAYON_NUM_THREADS.
    #[clap(long, global = true)]
    threads: Option<usize>,

    /// Print progress to stderr.
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank guesses against the remaining candidates.
    Suggest {
        /// Feedback received so far, as word:pattern (e.g. crane:gybbb).
        #[clap(short = 'g', long = "guess")]
        history: Vec<String>,
    },
    /// Print the entropy of specific guesses.
    Score {
        #[clap(value_name = "WORD", required = true)]
        scored: Vec<String>,
        /// Feedback received so far, as word:pattern.
        #[clap(short = 'g', long = "guess")]
        history: Vec<String>,
    },
    /// List candidates consistent with the feedback.
    Filter {
        /// Feedback received so far, as word:pattern.
        #[clap(short = 'g', long = "guess", required = true)]
        history: Vec<String>,
    },
    /// Play a simulated game against a known answer.
    Solve { target: String },
    /// Interactive session (the default).
    Interactive,
}

impl Args {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            words: self.words.clone(),
            guesses: self.guesses.clone(),
            top: self.top,
            threads: self.threads.or(defaults.threads),
            verbose: self.verbose,
        }
    }
}

struct WordLists {
    answers: CandidateSet,
    guesses: CandidateSet,
}

fn load_words(config: &Config) -> Result<WordLists> {
    let start = Instant::now();
    let answers = match &config.words {
        Some(path) => load_word_list(path)
            .with_context(|| format!("failed to load word list {}", path.display()))?,
        None => bundled_words(),
    };
    let mut guesses = match &config.guesses {
        Some(path) => load_word_list(path)
            .with_context(|| format!("failed to load guess list {}", path.display()))?,
        None => CandidateSet::new(),
    };
    guesses.extend(answers.iter().copied());
    if config.verbose {
        eprintln!(
            "Loaded {} answers, {} guesses in {:.2?}",
            answers.len(),
            guesses.len(),
            start.elapsed()
        );
    }
    Ok(WordLists { answers, guesses })
}

fn parse_word(s: &str) -> Result<Word> {
    Ok(Word::parse(s)?)
}

/// Parse `crane:gybbb` into a guess and its feedback.
fn parse_observed(s: &str) -> Result<(Word, FeedbackPattern)> {
    let (word, pattern) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("expected word:pattern, got {s:?}"))?;
    Ok((parse_word(word)?, FeedbackPattern::parse(pattern)?))
}

fn parse_history(entries: &[String]) -> Result<GameHistory> {
    let mut history = GameHistory::new();
    for entry in entries {
        let (word, pattern) = parse_observed(entry)?;
        history.push_guess(&word, pattern);
    }
    Ok(history)
}

fn print_analyses(analyses: &[GuessAnalysis]) {
    println!("{:>4} {:>8} {:>8} {:>12} Possible?", "#", "Word", "Entropy", "Exp. Remain");
    println!("{}", "-".repeat(50));
    for (i, analysis) in analyses.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
            i + 1,
            analysis.word.as_str().to_uppercase(),
            analysis.entropy,
            analysis.expected_remaining,
            if analysis.is_candidate { "✓" } else { "" }
        );
    }
}

fn print_words<'a>(words: impl IntoIterator<Item = &'a Word>) {
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word.as_str().to_uppercase());
    }
    println!();
}

fn letter_board(solver: &WordleSolver) -> String {
    (b'a'..=b'z')
        .map(|letter| {
            let c = (letter as char).to_ascii_uppercase();
            match solver.letter_status(letter) {
                LetterStatus::Unknown => format!("{c} "),
                LetterStatus::Seen(Feedback::Absent) => "· ".to_string(),
                LetterStatus::Seen(fb) => format!("{c}{}", fb.to_char()),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Contradictory feedback can re-admit words, so the count may grow.
fn count_change(prev: usize, new: usize) -> String {
    if new > prev {
        format!("Re-admitted {} words ({} → {})", new - prev, prev, new)
    } else {
        format!("Eliminated {} words ({} → {})", prev - new, prev, new)
    }
}

fn run_suggest(config: &Config, history: &[String]) -> Result<()> {
    let lists = load_words(config)?;
    let history = parse_history(history)?;
    let candidates = filter_candidates(&history, &lists.answers);
    println!("Remaining possibilities: {}", candidates.len());
    if candidates.is_empty() {
        return Err(anyhow!("no words match this feedback"));
    }

    let start = Instant::now();
    let top = rank_guesses(&lists.guesses, &candidates, config.top)?;
    if config.verbose {
        eprintln!("Scored {} guesses in {:.2?}", lists.guesses.len(), start.elapsed());
    }
    println!();
    print_analyses(&top);
    Ok(())
}

fn run_score(config: &Config, guesses: &[String], history: &[String]) -> Result<()> {
    let lists = load_words(config)?;
    let history = parse_history(history)?;
    let candidates = filter_candidates(&history, &lists.answers);
    for guess in guesses {
        let word = parse_word(guess)?;
        let entropy = score_guess(&word, &candidates)
            .with_context(|| format!("cannot score {word}"))?;
        println!("{} {:.3} bits", word.as_str().to_uppercase(), entropy);
    }
    Ok(())
}

fn run_filter(config: &Config, history: &[String]) -> Result<()> {
    let lists = load_words(config)?;
    let history = parse_history(history)?;
    let candidates = filter_candidates(&history, &lists.answers);
    println!("Remaining possibilities: {}", candidates.len());
    print_words(&candidates);
    Ok(())
}

fn run_solve(config: &Config, target: &str) -> Result<()> {
    let lists = load_words(config)?;
    let target = parse_word(target)?;
    let mut solver = WordleSolver::new(lists.guesses, lists.answers);

    println!("Solving for: {}", target.as_str().to_uppercase());
    println!();

    let guesses = solver.solve_for_target(&target)?;
    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess.as_str().to_uppercase(), pattern);
    }

    println!();
    match guesses.last() {
        Some((_, pattern)) if pattern.is_win() => println!("Solved in {} guesses.", guesses.len()),
        _ => println!("Failed to solve within {} guesses.", wordle_entropy::MAX_GUESSES),
    }
    Ok(())
}

fn run_interactive(config: &Config) -> Result<()> {
    let lists = load_words(config)?;
    println!("Loaded {} words.", lists.answers.len());
    println!();

    let mut solver = WordleSolver::new(lists.guesses, lists.answers);
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", HELP_TEXT);
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" | "best" => match solver.best_guess()? {
                Some(analysis) => {
                    println!();
                    println!("Best guess: {} ", analysis.word.as_str().to_uppercase());
                    println!("  Entropy: {:.3} bits", analysis.entropy);
                    println!("  Expected remaining: {:.1} words", analysis.expected_remaining);
                    if analysis.is_candidate {
                        println!("  ✓ This word is a possible answer");
                    } else {
                        println!("  ✗ This word is NOT a possible answer");
                    }
                    println!();
                    println!("Remaining possibilities: {}", solver.remaining_count());
                    println!();
                }
                None => {
                    println!("No possible words remaining. Use 'reset' to start over.");
                }
            },
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(config.top);
                let top = solver.best_guesses(n)?;

                if top.is_empty() {
                    println!("No possible words remaining.");
                } else {
                    println!();
                    println!("Top {} guesses:", top.len());
                    print_analyses(&top);
                    println!();
                }
            }
            "feedback" | "f" | "fb" => {
                if parts.len() < 3 {
                    println!("Usage: feedback <word> <pattern>");
                    println!("Example: feedback crane gybbb");
                    continue;
                }

                let word = match Word::parse(parts[1]) {
                    Ok(word) => word,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                let pattern = match FeedbackPattern::parse(parts[2]) {
                    Ok(pattern) => pattern,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                let prev_count = solver.remaining_count();
                solver.apply_feedback(&word, pattern);
                let new_count = solver.remaining_count();

                println!();
                println!("Guess: {}", word.as_str().to_uppercase());
                println!("Feedback: {}", pattern);
                println!("{}", count_change(prev_count, new_count));

                if pattern.is_win() {
                    println!();
                    println!("🎉 Congratulations! You solved it!");
                } else if new_count == 0 {
                    println!();
                    println!("⚠️  No words match this feedback pattern!");
                    println!("This might indicate an error. Use 'reset' to start over.");
                } else if new_count <= 10 {
                    println!();
                    print!("Remaining words:");
                    print_words(solver.candidates());
                }
                println!();
            }
            "remaining" | "r" | "left" => {
                let remaining = solver.candidates();
                println!();
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 20 {
                    print_words(remaining);
                }
                println!();
            }
            "letters" | "l" => {
                println!("{}", letter_board(&solver));
            }
            "reset" => {
                solver.reset();
                println!("Reset to initial state. {} words available.", solver.remaining_count());
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.config();
    config.init_thread_pool();

    match &args.command {
        Some(Command::Suggest { history }) => run_suggest(&config, history),
        Some(Command::Score { scored, history }) => run_score(&config, scored, history),
        Some(Command::Filter { history }) => run_filter(&config, history),
        Some(Command::Solve { target }) => run_solve(&config, target),
        Some(Command::Interactive) | None => run_interactive(&config),
    }
}
