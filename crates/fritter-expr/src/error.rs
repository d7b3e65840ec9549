//! Error type for filter operations that span parsing and resolution.

use fritter_store_rs::StoreError;
use thiserror::Error;

use crate::expression::SyntaxError;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors from validating, compiling or resolving a filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The filter text is not a valid expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A store lookup failed during resolution.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A filter name is empty or contains non-word characters.
    #[error("filter name '{name}' must be a nonempty alphanumeric string")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

impl FilterError {
    /// Creates an invalid name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        FilterError::InvalidName { name: name.into() }
    }
}
