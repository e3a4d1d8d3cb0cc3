use pretty_assertions::assert_eq;
use rpncalc::*;

// Helper to feed tokens that are all expected to succeed
fn run(tokens: &[&str]) -> Evaluator {
    let mut calc = Evaluator::new();
    for token in tokens {
        let _ = calc
            .execute(token)
            .unwrap_or_else(|e| panic!("token {token:?} failed: {e}"));
    }
    calc
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_addition() {
    assert_eq!(run(&["3", "4", "+"]).result(), Some(7.0));
}

#[test]
fn test_subtraction() {
    assert_eq!(run(&["10", "4", "-"]).result(), Some(6.0));
}

#[test]
fn test_multiplication() {
    assert_eq!(run(&["2", "5", "*"]).result(), Some(10.0));
}

#[test]
fn test_division() {
    assert_eq!(run(&["10", "2", "/"]).result(), Some(5.0));
}

#[test]
fn test_non_commutative_operand_order() {
    assert_eq!(run(&["4", "10", "-"]).result(), Some(-6.0));
    assert_eq!(run(&["2", "8", "/"]).result(), Some(0.25));
}

#[test]
fn test_multiple_operations() {
    let calc = run(&["5", "9", "1", "-", "/"]);
    assert_eq!(calc.result(), Some(0.625));
    assert_eq!(calc.snapshot(), vec![0.625]);
}

#[test]
fn test_binary_operator_shrinks_stack_by_one() {
    let mut calc = run(&["1", "2", "3"]);
    let _ = calc.execute("*").unwrap();
    assert_eq!(calc.snapshot(), vec![1.0, 6.0]);
}

#[test]
fn test_negative_and_exponent_literals() {
    assert_eq!(run(&["-3", "1.5e1", "+"]).result(), Some(12.0));
}

// ═══════════════════════════════════════════════════════════════════════
// Division By Zero
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_division_by_zero_leaves_stack_unchanged() {
    let mut calc = run(&["10", "0"]);
    let outcome = calc.execute("/").unwrap();
    assert_eq!(
        outcome,
        Outcome::DivisionByZero {
            dividend: 10.0,
            divisor: 0.0
        }
    );
    assert_eq!(calc.snapshot(), vec![10.0, 0.0]);
    assert_eq!(calc.result(), Some(0.0));
}

#[test]
fn test_division_by_negative_zero() {
    let mut calc = run(&["3", "-0"]);
    assert!(calc.execute("/").unwrap().is_division_by_zero());
    assert_eq!(calc.len(), 2);
}

#[test]
fn test_evaluation_continues_after_division_by_zero() {
    let mut calc = run(&["7", "0"]);
    assert!(calc.execute("/").unwrap().is_division_by_zero());
    let _ = calc.execute("+").unwrap();
    assert_eq!(calc.snapshot(), vec![7.0]);
}

// ═══════════════════════════════════════════════════════════════════════
// Rejected Tokens
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_insufficient_operands_on_empty_stack() {
    let mut calc = Evaluator::new();
    for symbol in ["+", "-", "*", "/"] {
        let err = calc.execute(symbol).unwrap_err();
        assert!(
            matches!(err, EvalError::InsufficientOperands { available: 0, .. }),
            "{symbol}: {err:?}"
        );
        assert!(calc.snapshot().is_empty());
    }
}

#[test]
fn test_insufficient_operands_on_single_value() {
    let mut calc = run(&["42"]);
    for symbol in ["+", "-", "*", "/"] {
        assert!(matches!(
            calc.execute(symbol),
            Err(EvalError::InsufficientOperands { available: 1, .. })
        ));
        assert_eq!(calc.snapshot(), vec![42.0]);
    }
}

#[test]
fn test_invalid_number() {
    let mut calc = run(&["5"]);
    assert_eq!(
        calc.execute("abc").unwrap_err(),
        EvalError::InvalidToken {
            token: "abc".to_string()
        }
    );
    assert_eq!(calc.snapshot(), vec![5.0]);
}

#[test]
fn test_invalid_operator() {
    let mut calc = run(&["5", "3"]);
    assert!(matches!(
        calc.execute("^"),
        Err(EvalError::InvalidToken { .. })
    ));
    assert_eq!(calc.snapshot(), vec![5.0, 3.0]);
}

#[test]
fn test_errors_do_not_poison_evaluator() {
    let mut calc = Evaluator::new();
    assert!(calc.execute("+").is_err());
    assert!(calc.execute("x").is_err());
    let _ = calc.execute("2").unwrap();
    let _ = calc.execute("3").unwrap();
    let _ = calc.execute("*").unwrap();
    assert_eq!(calc.result(), Some(6.0));
}

// ═══════════════════════════════════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_stack() {
    let calc = Evaluator::new();
    assert_eq!(calc.result(), None);
    assert!(calc.snapshot().is_empty());
    assert!(calc.is_empty());
}

#[test]
fn test_result_does_not_pop() {
    let calc = run(&["1", "2"]);
    assert_eq!(calc.result(), Some(2.0));
    assert_eq!(calc.result(), Some(2.0));
    assert_eq!(calc.len(), 2);
}

#[test]
fn test_snapshot_is_independent() {
    let mut calc = run(&["1", "2"]);
    let mut snap = calc.snapshot();
    snap.clear();
    snap.push(99.0);

    assert_eq!(calc.snapshot(), vec![1.0, 2.0]);
    let _ = calc.execute("+").unwrap();
    assert_eq!(calc.result(), Some(3.0));
}

#[test]
fn test_instances_are_isolated() {
    let mut a = Evaluator::new();
    let b = Evaluator::new();
    let _ = a.execute("1").unwrap();
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
}

#[test]
fn test_tokenize_then_execute() {
    let mut calc = Evaluator::new();
    for token in tokenize(" 3   4 +\t2 * ") {
        let _ = calc.execute(token).unwrap();
    }
    assert_eq!(calc.result(), Some(14.0));
}
