//! Error types for sqlexpr

use thiserror::Error;

/// Result type alias for statement building operations
pub type ExprResult<T> = Result<T, ExprError>;

/// Error types for statement building
///
/// Both variants are configuration errors: the builder state cannot render a
/// valid statement, and the caller is expected to fix the configuration and
/// render again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExprError {
    /// Offset was configured without a limit
    #[error("Invalid limit/offset: OFFSET requires a LIMIT")]
    InvalidLimitOffset,

    /// UPDATE was requested with no assignment columns
    #[error("Missing assignment target: SET clause cannot be empty")]
    MissingAssignmentTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ExprError::InvalidLimitOffset.to_string(),
            "Invalid limit/offset: OFFSET requires a LIMIT"
        );
        assert_eq!(
            ExprError::MissingAssignmentTarget.to_string(),
            "Missing assignment target: SET clause cannot be empty"
        );
    }
}
