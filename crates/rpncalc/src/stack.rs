//! Operand stack

/// Last-in-first-out sequence of operands.
///
/// Values are stored bottom-to-top in a flat vector; pushes and pops only
/// ever touch the tail.
///
/// # Example
///
/// ```
/// use rpncalc::OperandStack;
///
/// let mut stack = OperandStack::new();
/// stack.push(1.0);
/// stack.push(2.0);
///
/// assert_eq!(stack.peek(), Some(2.0));
/// assert_eq!(stack.pop_pair(), Some((1.0, 2.0)));
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value onto the top.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pop the top two values as `(second_from_top, top)`.
    ///
    /// Returns `None` and leaves the stack untouched when fewer than two
    /// values are present.
    pub fn pop_pair(&mut self) -> Option<(f64, f64)> {
        if self.values.len() < 2 {
            return None;
        }
        let b = self.values.pop()?;
        let a = self.values.pop()?;
        Some((a, b))
    }

    /// The top value, if any.
    pub fn peek(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Borrow the values bottom-to-top.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copy the values out, bottom-to-top.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }
}
