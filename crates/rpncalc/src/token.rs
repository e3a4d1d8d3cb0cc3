//! Token classification

use crate::error::{EvalError, Result};
use crate::operator::Operator;

/// A single classified input token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An operator symbol
    Operator(Operator),
}

impl Token {
    /// Classify a raw token.
    ///
    /// Operator symbols win over numeric parsing. Anything else must parse
    /// as an `f64` (`inf` and `nan` included) or the token is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some(op) = Operator::from_symbol(raw) {
            return Ok(Token::Operator(op));
        }

        raw.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvalError::invalid_token(raw))
    }
}

/// Split a line into raw tokens on any whitespace.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}
