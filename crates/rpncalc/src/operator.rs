//! Operator table and binary arithmetic

use std::fmt;
use std::str::FromStr;

/// Signature shared by every binary action: `f(second_from_top, top)`.
pub type BinaryFn = fn(f64, f64) -> Option<f64>;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct OperatorEntry {
    /// Symbol as it appears in the token stream
    pub symbol: &'static str,
    /// The operator the symbol denotes
    pub operator: Operator,
    /// The action applied to the two topmost operands
    pub action: BinaryFn,
}

// ═══════════════════════════════════════════════════════════════════════
// Dispatch Table
// ═══════════════════════════════════════════════════════════════════════

/// Symbol-to-action table. Adding an operator means adding a variant and a row.
pub static OPERATORS: [OperatorEntry; 4] = [
    OperatorEntry {
        symbol: "+",
        operator: Operator::Add,
        action: eval_add,
    },
    OperatorEntry {
        symbol: "-",
        operator: Operator::Sub,
        action: eval_sub,
    },
    OperatorEntry {
        symbol: "*",
        operator: Operator::Mul,
        action: eval_mul,
    },
    OperatorEntry {
        symbol: "/",
        operator: Operator::Div,
        action: eval_div,
    },
];

impl Operator {
    /// Number of stack values every operator consumes.
    pub const ARITY: usize = 2;

    /// Look up an operator by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.operator)
    }

    /// The table row for this operator.
    pub fn entry(self) -> &'static OperatorEntry {
        // Every variant has exactly one row.
        &OPERATORS[self as usize]
    }

    /// The symbol for this operator.
    pub fn symbol(self) -> &'static str {
        self.entry().symbol
    }

    /// Apply the operator as `a OP b`, where `a` was pushed before `b`.
    ///
    /// Returns `None` when the result is undefined, which for the current
    /// table means dividing by zero.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        (self.entry().action)(a, b)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════

fn eval_add(a: f64, b: f64) -> Option<f64> {
    Some(a + b)
}

fn eval_sub(a: f64, b: f64) -> Option<f64> {
    Some(a - b)
}

fn eval_mul(a: f64, b: f64) -> Option<f64> {
    Some(a * b)
}

fn eval_div(a: f64, b: f64) -> Option<f64> {
    // -0.0 == 0.0, so both signed zeros are caught
    if b == 0.0 {
        return None;
    }
    Some(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_discriminants() {
        for (i, entry) in OPERATORS.iter().enumerate() {
            assert_eq!(entry.operator as usize, i);
        }
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Sub));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Mul));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Div));
        assert_eq!(Operator::from_symbol("^"), None);
        assert_eq!(Operator::from_symbol("++"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Operator::Div.to_string(), "/");
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
    }

    #[test]
    fn test_operand_order() {
        assert_eq!(Operator::Sub.apply(10.0, 4.0), Some(6.0));
        assert_eq!(Operator::Div.apply(10.0, 4.0), Some(2.5));
    }

    #[test]
    fn test_div_by_zero_is_undefined() {
        assert_eq!(Operator::Div.apply(1.0, 0.0), None);
        assert_eq!(Operator::Div.apply(1.0, -0.0), None);
        assert_eq!(Operator::Div.apply(0.0, 0.0), None);
    }
}
