use thiserror::Error;

/// Errors produced by the filtering and scoring core.
#[derive(Error, Debug)]
pub enum WordleError {
    #[error("invalid word {0:?}: expected five lowercase letters a-z")]
    InvalidWord(String),
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("invalid feedback pattern {0:?}: use g/y/b (or 2/1/0) for each of the five letters")]
    InvalidPattern(String),
    #[error("word list line {line}: {source}")]
    WordList {
        line: usize,
        #[source]
        source: Box<WordleError>,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordleError>;
