//! Token-at-a-time RPN evaluator
//!
//! The evaluator owns one [`OperandStack`] and consults the static operator
//! table for dispatch. Each call to [`Evaluator::execute`] either applies
//! fully or leaves the stack exactly as it found it.

use tracing::{debug, warn};

use crate::error::{EvalError, Result};
use crate::operator::Operator;
use crate::stack::OperandStack;
use crate::token::Token;

/// What a successful [`Evaluator::execute`] call did.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub enum Outcome {
    /// A number was pushed
    Pushed(f64),

    /// An operator consumed two values and pushed its result
    Applied {
        /// The operator applied
        operator: Operator,
        /// The value now on top of the stack
        value: f64,
    },

    /// Division by zero was requested; both operands were restored in their
    /// original order and nothing was pushed
    DivisionByZero {
        /// The left-hand operand (second from top)
        dividend: f64,
        /// The right-hand operand (top), always zero
        divisor: f64,
    },
}

impl Outcome {
    /// Whether a division was refused because the divisor was zero.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Outcome::DivisionByZero { .. })
    }
}

/// RPN evaluator.
///
/// # Example
///
/// ```
/// use rpncalc::Evaluator;
///
/// let mut calc = Evaluator::new();
/// for token in ["5", "9", "1", "-", "/"] {
///     let _ = calc.execute(token).unwrap();
/// }
/// assert_eq!(calc.result(), Some(0.625));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    stack: OperandStack,
}

impl Evaluator {
    /// Create an evaluator with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one token against the stack.
    pub fn execute(&mut self, token: &str) -> Result<Outcome> {
        match Token::parse(token) {
            Ok(Token::Number(value)) => {
                self.stack.push(value);
                debug!(value, depth = self.stack.len(), "pushed operand");
                Ok(Outcome::Pushed(value))
            }
            Ok(Token::Operator(operator)) => self.apply(operator),
            Err(err) => {
                debug!(token, "rejected token");
                Err(err)
            }
        }
    }

    /// Apply a binary operator to the two topmost values.
    pub fn apply(&mut self, operator: Operator) -> Result<Outcome> {
        let available = self.stack.len();
        let (a, b) = self
            .stack
            .pop_pair()
            .ok_or(EvalError::InsufficientOperands {
                operator,
                needed: Operator::ARITY,
                available,
            })?;

        match operator.apply(a, b) {
            Some(value) => {
                self.stack.push(value);
                debug!(%operator, a, b, value, "applied operator");
                Ok(Outcome::Applied { operator, value })
            }
            None => {
                self.stack.push(a);
                self.stack.push(b);
                warn!(dividend = a, divisor = b, "division by zero, stack restored");
                Ok(Outcome::DivisionByZero {
                    dividend: a,
                    divisor: b,
                })
            }
        }
    }

    /// The top of the stack, without removing it.
    pub fn result(&self) -> Option<f64> {
        self.stack.peek()
    }

    /// An independent copy of the stack, bottom-to-top.
    pub fn snapshot(&self) -> Vec<f64> {
        self.stack.to_vec()
    }

    /// Discard every value on the stack.
    pub fn reset(&mut self) {
        debug!(discarded = self.stack.len(), "reset evaluator");
        self.stack.clear();
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Borrow the underlying stack.
    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }
}
