//! Binary operators and unary functions.

use std::fmt;

/// A binary operator waiting for its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Completes the pending operation. Applied as a pending operator it
    /// yields its second operand unchanged.
    Equals,
}

impl BinaryOp {
    /// Apply the operator to two operands.
    ///
    /// Returns `None` for an invalid result: division by zero, or any
    /// combination that produces NaN (such as `Infinity - Infinity`).
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide if rhs == 0.0 => return None,
            Self::Divide => lhs / rhs,
            Self::Equals => rhs,
        };

        if result.is_nan() { None } else { Some(result) }
    }

    /// The key label for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equals => "=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A function applied immediately to the displayed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryFn {
    Sqrt,
    Square,
}

impl UnaryFn {
    /// Apply the function. The square root of a negative number is `None`.
    pub fn apply(self, value: f64) -> Option<f64> {
        match self {
            Self::Sqrt if value < 0.0 => None,
            Self::Sqrt => Some(value.sqrt()),
            Self::Square => Some(value * value),
        }
    }

    /// The key label for this function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
