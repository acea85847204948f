//! Validation error types.

use resdex_index::IndexError;
use thiserror::Error;

/// Result type for validation setup.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Errors that can occur while setting up or running validation.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("Invalid property name pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error(transparent)]
    Index(#[from] IndexError),
}
