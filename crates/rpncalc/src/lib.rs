//! # rpncalc
//!
//! A Reverse Polish Notation evaluation engine.
//!
//! Tokens are fed one at a time to an [`Evaluator`], which keeps an explicit
//! operand stack between calls. Numbers are pushed; the operators `+`, `-`,
//! `*` and `/` pop two values and push one, always computing
//! `(second from top) OP (top)`.
//!
//! ## Failure model
//!
//! - Rejected tokens return an [`EvalError`] and leave the stack untouched.
//! - Dividing by zero is not an error: the operands are restored and
//!   [`Outcome::DivisionByZero`] is returned instead.
//!
//! The crate performs no I/O. Diagnostics are emitted through `tracing`;
//! installing a subscriber is left to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod evaluator;
pub mod operator;
pub mod stack;
pub mod token;

// Re-export main types
pub use error::{EvalError, Result};
pub use evaluator::{Evaluator, Outcome};
pub use operator::{BinaryFn, Operator, OperatorEntry, OPERATORS};
pub use stack::OperandStack;
pub use token::{tokenize, Token};

/// rpncalc version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
