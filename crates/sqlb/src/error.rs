//! Error types for sqlb
//!
//! Rendering never fails: a malformed node degrades to the smallest sensible
//! fragment. These errors are only produced by the explicit `validate()`
//! methods, which callers (and tests) use to flag trees that would render
//! into surprising SQL.

use thiserror::Error;

/// Result type alias for sqlb validation
pub type SqlbResult<T> = Result<T, SqlbError>;

/// Validation errors for statement and condition trees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlbError {
    /// A NOT group must wrap exactly one member
    #[error("NOT group must have exactly one member, found {members}")]
    InvalidNot { members: usize },

    /// SELECT without any result expression
    #[error("SELECT requires at least one expression")]
    EmptySelect,

    /// A statement or join has no target table
    #[error("Missing table: {0}")]
    MissingTable(&'static str),

    /// A table or column was registered with an empty name
    #[error("Empty name: {0}")]
    EmptyName(&'static str),

    /// Other validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SqlbError {
    /// Create a generic validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an invalid NOT group error
    pub fn is_invalid_not(&self) -> bool {
        matches!(self, Self::InvalidNot { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SqlbError::InvalidNot { members: 2 }.to_string(),
            "NOT group must have exactly one member, found 2"
        );
        assert_eq!(
            SqlbError::MissingTable("join").to_string(),
            "Missing table: join"
        );
        assert_eq!(
            SqlbError::validation("bad").to_string(),
            "Validation error: bad"
        );
    }

    #[test]
    fn invalid_not_predicate() {
        assert!(SqlbError::InvalidNot { members: 0 }.is_invalid_not());
        assert!(!SqlbError::EmptySelect.is_invalid_not());
    }
}
