//! Typed input events accepted by the calculator.

use super::operation::{BinaryOp, UnaryFn};
use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from a character. Returns `None` unless it is `0`-`9`.
    pub fn new(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One button press, already classified by the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Digit(Digit),
    Decimal,
    Operator(BinaryOp),
    Function(UnaryFn),
    Clear,
}

impl From<Digit> for InputEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<BinaryOp> for InputEvent {
    fn from(op: BinaryOp) -> Self {
        Self::Operator(op)
    }
}

impl From<UnaryFn> for InputEvent {
    fn from(func: UnaryFn) -> Self {
        Self::Function(func)
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{}", digit),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => write!(f, "{}", op),
            Self::Function(func) => write!(f, "{}", func),
            Self::Clear => f.write_str("clear"),
        }
    }
}
