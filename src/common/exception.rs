use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Bucket count must be positive, got {0}")]
    InvalidBucketCount(usize),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Unknown command '{0}', type 'help' for commands")]
    UnknownCommand(String),
    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
}
