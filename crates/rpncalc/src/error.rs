//! Error types for token evaluation

use thiserror::Error;

use crate::operator::Operator;

/// A rejected token.
///
/// Every variant is recoverable: the evaluator's stack is left exactly as it
/// was before the failing call. Division by zero is not represented here; it
/// is reported through [`Outcome::DivisionByZero`](crate::Outcome).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator was applied to a stack holding too few values
    #[error("Not enough operands for '{operator}' (need {needed}, have {available})")]
    InsufficientOperands {
        /// The operator that was rejected
        operator: Operator,
        /// Number of values the operator consumes
        needed: usize,
        /// Number of values on the stack at the time of the call
        available: usize,
    },

    /// The token is neither an operator nor a number
    #[error("Invalid token: '{token}'")]
    InvalidToken {
        /// The offending token, verbatim
        token: String,
    },
}

impl EvalError {
    /// Build an [`EvalError::InvalidToken`] from any string-like token.
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
        }
    }
}

/// Result type alias for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_operands_message() {
        let err = EvalError::InsufficientOperands {
            operator: Operator::Sub,
            needed: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Not enough operands for '-' (need 2, have 1)"
        );
    }

    #[test]
    fn test_invalid_token_message() {
        assert_eq!(
            EvalError::invalid_token("abc").to_string(),
            "Invalid token: 'abc'"
        );
    }
}
