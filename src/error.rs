//! Error types for the Mastermind engine.

use thiserror::Error;

/// Errors returned by code construction, response construction and the
/// guess/validate operations.
///
/// All variants are local and recoverable: nothing in the engine retries
/// internally, the immediate caller decides what to do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MastermindError {
    /// Wrong length or out-of-range color index.
    #[error("invalid code: {0}")]
    InvalidCode(String),

    /// Peg counts out of range or summing beyond the code length.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// An operation was called in a state that does not allow it.
    #[error("invalid call order: {0}")]
    InvalidCallOrder(String),

    /// The accumulated responses contradict each other; no code can satisfy them.
    #[error("inconsistent hints: {0}")]
    InvalidHints(String),

    /// Configuration outside the supported bounds.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MastermindError {
    /// Whether the error was caused by user-supplied input rather than by
    /// a driver calling the engine out of order.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCode(_) | Self::InvalidResponse(_) | Self::InvalidHints(_)
        )
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, MastermindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_code() {
        let err = MastermindError::InvalidCode("expected 4 colors, got 3".into());
        assert_eq!(err.to_string(), "invalid code: expected 4 colors, got 3");
    }

    #[test]
    fn display_invalid_hints() {
        let err = MastermindError::InvalidHints("no candidates remain".into());
        assert_eq!(err.to_string(), "inconsistent hints: no candidates remain");
    }

    #[test]
    fn user_errors_are_classified() {
        assert!(MastermindError::InvalidCode(String::new()).is_user_error());
        assert!(MastermindError::InvalidResponse(String::new()).is_user_error());
        assert!(MastermindError::InvalidHints(String::new()).is_user_error());
        assert!(!MastermindError::InvalidCallOrder(String::new()).is_user_error());
        assert!(!MastermindError::InvalidConfig(String::new()).is_user_error());
    }
}
