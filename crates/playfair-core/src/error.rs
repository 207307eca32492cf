//! Error types for Playfair operations.

use std::fmt;
use thiserror::Error;

/// Result type alias for Playfair operations.
pub type Result<T> = std::result::Result<T, PlayfairError>;

/// Errors that can occur while building a key matrix or transforming text.
#[derive(Error, Clone, PartialEq, Eq)]
pub enum PlayfairError {
    /// The letter is not one of the 25 letters of the key matrix.
    /// For example the omitted `J`, digits, punctuation or whitespace.
    #[error("letter '{0}' is not part of the key matrix")]
    NotInAlphabet(char),

    /// A digraph with two identical letters reached the transform engine.
    #[error("digraph repeats the letter '{0}'")]
    RepeatedLetter(char),

    /// A key matrix cell is not an uppercase ASCII letter.
    #[error("key matrix cell '{0}' is not an uppercase letter A-Z")]
    InvalidMatrixLetter(char),

    /// A key matrix contains a letter more than once.
    #[error("key matrix contains the letter '{0}' more than once")]
    DuplicateMatrixLetter(char),
}

impl fmt::Debug for PlayfairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // main() returns this error, so Debug shows the readable message
        write!(f, "{self}")
    }
}
