//! API Error Types
//!
//! Stage-level fetch failures. The display string is the user-visible
//! message; the payload carries the underlying cause for console logging.

use thiserror::Error;

/// Errors from the two fetch stages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The country catalog request failed or returned a bad payload
    #[error("Error fetching countries. Please try again later.")]
    Countries(String),

    /// The aggregate totals or historical timeline request failed
    #[error("Error fetching historical data. Please try again later.")]
    Historical(String),
}

impl FetchError {
    pub fn countries(detail: impl Into<String>) -> Self {
        FetchError::Countries(detail.into())
    }

    pub fn historical(detail: impl Into<String>) -> Self {
        FetchError::Historical(detail.into())
    }

    /// Underlying cause, for logging
    pub fn detail(&self) -> &str {
        match self {
            FetchError::Countries(detail) | FetchError::Historical(detail) => detail,
        }
    }
}
