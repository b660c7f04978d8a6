use thiserror::{self, Error};

pub mod rank;
pub mod tokenize;

#[derive(Debug, Error)]
pub enum WordFreqsError {
    /// Derived IO error, e.g. the input file is missing or unreadable
    #[error("could not read input: {0}")]
    IoError(#[from] std::io::Error),

    /// No input path was given on the command line
    #[error("usage: wordfreqs <file>")]
    MissingInputPath,
}
