//! Error types for Erdős–Straus searches

use thiserror::Error;

use crate::Solution;

/// Error returned when a search cannot run at all.
///
/// Exhausting a search window is not an error: strategies report that as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The input is outside the domain of the equation (n must be positive).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configured bound cannot be used by the strategy.
    #[error("Invalid bound `{name}`: {reason}")]
    InvalidBound { name: &'static str, reason: String },

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SearchError {
    /// Error for a zero `n`, which has no `4/n`.
    pub fn zero_n() -> Self {
        SearchError::InvalidInput("n must be a positive integer".to_string())
    }
}

/// Outcome of a single strategy invocation.
///
/// `Ok(Some(_))` is a candidate solution (still to be validated by callers
/// that do not trust the strategy), `Ok(None)` means nothing was found within
/// the configured bounds.
pub type SearchResult = std::result::Result<Option<Solution>, SearchError>;
