#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace, plus the
//! `ResolutionError` raised when a schema reference cannot be interpreted.

use derive_more::{Display, From};

/// A schema reference that does not have the `#/components/<kind>/<name>` shape.
///
/// Raised by the type resolver. It aborts the whole run: nothing is rendered
/// once a single reference is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Malformed schema reference '{pointer}': expected '#/components/<kind>/<name>'")]
pub struct ResolutionError {
    /// The offending pointer, verbatim.
    pub pointer: String,
}

impl ResolutionError {
    /// Creates a resolution error for the given pointer.
    pub fn new(pointer: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
        }
    }
}

impl std::error::Error for ResolutionError {}

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (reading documents, writing artifacts).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The API description could not be read into the model.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// A schema reference could not be resolved.
    #[display("Resolution Error: {_0}")]
    Resolution(ResolutionError),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
