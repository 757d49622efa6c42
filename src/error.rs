//! CLI Error Types

use derive_more::{Display, Error};

/// A CLI error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for CLI commands.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("could not read {_0}")]
    Read(#[error(not(source))] String),
    #[display("invalid input: {_0}")]
    InvalidInput(#[error(not(source))] String),
    #[display("could not load configuration")]
    Config,
    #[display("nothing importable found in {_0}")]
    NothingImportable(#[error(not(source))] String),
    #[display("could not write output")]
    Output,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Read(_) | Self::Output)
    }
}
