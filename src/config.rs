//! Runtime settings shared by the command line entry points.
//!
//! Thread count comes from `WORDLE_THREADS`, falling back to
//! `RAYON_NUM_THREADS`, then to rayon's own default.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Word list to load. `None` uses the bundled list.
    pub words: Option<PathBuf>,
    /// Extra guess-only words, added to `words` for guessing.
    pub guesses: Option<PathBuf>,
    /// Number of guesses to list when ranking.
    pub top: usize,
    pub threads: Option<usize>,
    /// Print progress to stderr.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: None,
            guesses: None,
            top: 5,
            threads: threads_from_env(),
            verbose: false,
        }
    }
}

impl Config {
    /// Build the global rayon pool. Tolerates a pool that is already built.
    /// Returns the thread count in use.
    pub fn init_thread_pool(&self) -> usize {
        if let Some(num_threads) = self.threads {
            let built = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global();
            if built.is_err() && self.verbose {
                eprintln!("Rayon pool already initialized");
            }
        }
        let threads = rayon::current_num_threads();
        if self.verbose {
            eprintln!("Rayon threads: {}", threads);
        }
        threads
    }
}

fn threads_from_env() -> Option<usize> {
    std::env::var("WORDLE_THREADS")
        .or_else(|_| std::env::var("RAYON_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clones_and_debugs() {
        let config = Config {
            words: Some(PathBuf::from("answers.txt")),
            threads: Some(2),
            ..Config::default()
        };
        let copy = config.clone();
        assert_eq!(copy.words, config.words);
        assert_eq!(copy.top, 5);
        assert!(format!("{:?}", copy).contains("answers.txt"));
    }
}
