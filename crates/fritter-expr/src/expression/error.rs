//! Error types for the filter tokenizer and parser.

use thiserror::Error;

/// A specialized Result type for tokenizing and parsing.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Errors that can occur while tokenizing or parsing a filter expression.
///
/// Every variant localizes the problem, either by character position in the
/// input or by index into the token sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// The filter expression is empty.
    #[error("filter expression is empty")]
    EmptyExpression,

    /// A character outside the expression alphabet was found.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// A token other than the expected one was found.
    #[error("expected {expected} at token {index}, found '{found}'")]
    UnexpectedToken {
        /// Index of the offending token.
        index: usize,
        /// Description of what the grammar required.
        expected: &'static str,
        /// Text of the token that was found.
        found: String,
    },

    /// The token sequence ended before a production completed.
    #[error("unexpected end of expression at token {index}")]
    UnexpectedEnd {
        /// Index one past the last token.
        index: usize,
    },

    /// Operators are nested deeper than the parser accepts.
    #[error("expression nested too deeply at token {index}")]
    TooDeep {
        /// Index of the operator that exceeded the limit.
        index: usize,
    },

    /// A complete expression was parsed but tokens remain.
    #[error("unexpected trailing input at token {index}")]
    TrailingTokens {
        /// Index of the first unconsumed token.
        index: usize,
    },
}

impl SyntaxError {
    /// Creates an unexpected token error.
    pub fn unexpected_token(index: usize, expected: &'static str, found: impl Into<String>) -> Self {
        SyntaxError::UnexpectedToken {
            index,
            expected,
            found: found.into(),
        }
    }

    /// Returns the token index the error refers to.
    ///
    /// Character-level errors have no token index; use the `position` field
    /// of `InvalidCharacter` instead.
    pub fn token_index(&self) -> Option<usize> {
        match self {
            SyntaxError::EmptyExpression => Some(0),
            SyntaxError::InvalidCharacter { .. } => None,
            SyntaxError::UnexpectedToken { index, .. }
            | SyntaxError::UnexpectedEnd { index }
            | SyntaxError::TooDeep { index }
            | SyntaxError::TrailingTokens { index } => Some(*index),
        }
    }
}
