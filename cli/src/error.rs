#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use clientgen_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure inside the generator.
    #[display("{}", _0)]
    App(AppError),

    /// A `--snippet` file does not exist.
    #[from(ignore)]
    #[display("Snippet '{}' not found", _0)]
    SnippetNotFound(String),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// `General(String)` holds a plain `String`, so `source()` cannot be derived.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CliError::SnippetNotFound("extra.java".into()).to_string(),
            "Snippet 'extra.java' not found"
        );
        let app: CliError = AppError::Parse("bad".into()).into();
        assert_eq!(app.to_string(), "Parse Error: bad");
    }
}
