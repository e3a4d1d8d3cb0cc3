//! Line-at-a-time evaluation on top of [`rpncalc::Evaluator`]

use std::fmt;
use std::io::Write;

use rpncalc::{tokenize, EvalError, Evaluator, Outcome};
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::config::{BatchPolicy, ShellConfig};

/// Something worth telling the user about a single token.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The evaluator rejected the token
    Rejected(EvalError),
    /// A division by zero was refused and the stack restored
    DivisionByZero {
        /// Left-hand operand
        dividend: f64,
        /// Right-hand operand
        divisor: f64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Rejected(EvalError::InsufficientOperands {
                needed, available, ..
            }) => write!(
                f,
                "Error: Not enough operands for operation (need {needed}, have {available})."
            ),
            Diagnostic::Rejected(EvalError::InvalidToken { token }) => {
                write!(f, "Invalid input: '{token}'")
            }
            Diagnostic::DivisionByZero { dividend, divisor } => write!(
                f,
                "Error: Cannot divide {dividend} by {divisor}. Reverting stack."
            ),
        }
    }
}

/// Everything that happened while evaluating one line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineReport {
    /// Per-token diagnostics, in token order
    pub diagnostics: Vec<Diagnostic>,

    /// Tokens left unevaluated under [`BatchPolicy::Abort`]
    pub skipped: Vec<String>,

    /// Top of the stack once the line is done
    pub result: Option<f64>,
}

impl LineReport {
    /// Whether every token was accepted.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.skipped.is_empty()
    }
}

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop the shell
    Quit,
}

/// A calculator session: one evaluator plus the policy for driving it.
#[derive(Debug, Default)]
pub struct Session {
    calc: Evaluator,
    config: ShellConfig,
}

impl Session {
    /// Create a session with a fresh evaluator.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            calc: Evaluator::new(),
            config,
        }
    }

    /// The session's configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The underlying evaluator.
    pub fn evaluator(&self) -> &Evaluator {
        &self.calc
    }

    /// Evaluate every token on a line, honouring the batch policy.
    pub fn eval_line(&mut self, line: &str) -> LineReport {
        let mut report = LineReport::default();
        let mut tokens = tokenize(line);

        while let Some(token) = tokens.next() {
            match self.calc.execute(token) {
                Ok(Outcome::DivisionByZero { dividend, divisor }) => {
                    report
                        .diagnostics
                        .push(Diagnostic::DivisionByZero { dividend, divisor });
                }
                Ok(_) => {}
                Err(err) => {
                    report.diagnostics.push(Diagnostic::Rejected(err));
                    if self.config.policy == BatchPolicy::Abort {
                        report.skipped = tokens.map(str::to_string).collect();
                        debug!(skipped = report.skipped.len(), "aborted line");
                        break;
                    }
                }
            }
        }

        report.result = self.calc.result();
        report
    }

    /// Handle one line of input, writing everything the user should see.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> std::io::Result<Flow> {
        match Command::parse(line) {
            Command::Quit => {
                writeln!(out, "Exiting calculator.")?;
                return Ok(Flow::Quit);
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Stack => writeln!(out, "Stack: {}", format_stack(&self.calc.snapshot()))?,
            Command::Clear => {
                self.calc.reset();
                info!("stack cleared");
                writeln!(out, "Stack cleared.")?;
            }
            Command::Blank => {}
            Command::Tokens(tokens) => {
                let report = self.eval_line(tokens);
                if !report.is_clean() {
                    debug!(diagnostics = report.diagnostics.len(), "line had problems");
                }
                write_report(&report, out)?;
            }
        }
        Ok(Flow::Continue)
    }
}

/// Print a line report the way the shell shows it.
pub fn write_report(report: &LineReport, out: &mut impl Write) -> std::io::Result<()> {
    for diagnostic in &report.diagnostics {
        writeln!(out, "{diagnostic}")?;
    }
    if !report.skipped.is_empty() {
        writeln!(out, "Skipped: {}", report.skipped.join(" "))?;
    }
    match report.result {
        Some(value) => writeln!(out, "Result: {value}"),
        None => writeln!(out, "Stack is empty."),
    }
}

/// Render stack values bottom-to-top as `[a, b, c]`.
pub fn format_stack(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
