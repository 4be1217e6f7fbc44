//! Key label classification.
//!
//! Turns the text on a button (or a typed line of buttons) into calculator
//! input events.

use crate::calculator::{BinaryOp, Digit, InputEvent, UnaryFn};
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Splits a word into key labels.
    /// Each digit, decimal separator and operator symbol is its own key;
    /// any other run of characters (`sqrt`, `x²`, `AC`) is one key.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"[0-9]|[.,]|[+\-−*×/÷=]|[^\s0-9.,+\-−*×/÷=]+"
    ).unwrap();
}

/// Split a word into key labels.
pub fn split_keys(word: &str) -> impl Iterator<Item = &str> {
    KEY_TOKEN.find_iter(word).map(|m| m.as_str())
}

/// Classify a single built-in key label.
///
/// Word labels are matched case-insensitively.
pub fn classify_key(label: &str) -> Result<InputEvent> {
    let mut chars = label.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && let Some(digit) = Digit::new(c)
    {
        return Ok(InputEvent::Digit(digit));
    }

    let event: InputEvent = match label.to_lowercase().as_str() {
        "." | "," => InputEvent::Decimal,
        "+" => BinaryOp::Add.into(),
        "-" | "−" => BinaryOp::Subtract.into(),
        "*" | "x" | "×" => BinaryOp::Multiply.into(),
        "/" | "÷" => BinaryOp::Divide.into(),
        "=" => BinaryOp::Equals.into(),
        "sqrt" | "√" => UnaryFn::Sqrt.into(),
        "sq" | "square" | "x²" => UnaryFn::Square.into(),
        "c" | "ac" | "clear" => InputEvent::Clear,
        _ => return Err(Error::UnknownKey(label.to_string())),
    };

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(word: &str) -> Vec<&str> {
        split_keys(word).collect()
    }

    #[test]
    fn test_digits_split_individually() {
        assert_eq!(keys("120"), vec!["1", "2", "0"]);
        assert_eq!(keys("3.14"), vec!["3", ".", "1", "4"]);
    }

    #[test]
    fn test_operators_split_from_numbers() {
        assert_eq!(keys("12+3="), vec!["1", "2", "+", "3", "="]);
        assert_eq!(keys("8÷2"), vec!["8", "÷", "2"]);
        assert_eq!(keys("5-1"), vec!["5", "-", "1"]);
    }

    #[test]
    fn test_words_stay_whole() {
        assert_eq!(keys("16sqrt"), vec!["1", "6", "sqrt"]);
        assert_eq!(keys("3x²"), vec!["3", "x²"]);
        assert_eq!(keys("AC"), vec!["AC"]);
    }

    #[test]
    fn test_classify_digits_and_decimal() {
        assert_eq!(
            classify_key("7").unwrap(),
            InputEvent::Digit(Digit::new('7').unwrap())
        );
        assert_eq!(classify_key(".").unwrap(), InputEvent::Decimal);
        assert_eq!(classify_key(",").unwrap(), InputEvent::Decimal);
    }

    #[test]
    fn test_classify_operators() {
        assert_eq!(classify_key("+").unwrap(), InputEvent::Operator(BinaryOp::Add));
        assert_eq!(classify_key("−").unwrap(), InputEvent::Operator(BinaryOp::Subtract));
        assert_eq!(classify_key("X").unwrap(), InputEvent::Operator(BinaryOp::Multiply));
        assert_eq!(classify_key("÷").unwrap(), InputEvent::Operator(BinaryOp::Divide));
        assert_eq!(classify_key("=").unwrap(), InputEvent::Operator(BinaryOp::Equals));
    }

    #[test]
    fn test_classify_functions_and_clear() {
        assert_eq!(classify_key("SQRT").unwrap(), InputEvent::Function(UnaryFn::Sqrt));
        assert_eq!(classify_key("x²").unwrap(), InputEvent::Function(UnaryFn::Square));
        assert_eq!(classify_key("AC").unwrap(), InputEvent::Clear);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(matches!(classify_key("%"), Err(Error::UnknownKey(k)) if k == "%"));
        assert!(classify_key("12").is_err());
        assert!(classify_key("").is_err());
    }
}
