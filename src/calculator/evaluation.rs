//! Two-operand evaluation.
//!
//! Operands and results travel as display text. Nothing here fails: an
//! operand that does not parse is handed back as the result, and division
//! by zero produces the `"Error"` sentinel.

use lazy_static::lazy_static;
use regex::Regex;

use super::format::format_double;
use super::key::Operator;

lazy_static! {
    /// Numerals a JVM double parser accepts, limited to what the display can hold:
    /// optional sign, decimal digits with an optional point and exponent, or the
    /// exact spellings `NaN` and `Infinity`.
    static ref NUMERAL: Regex = Regex::new(
        r"^[+-]?(NaN|Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?)$"
    ).unwrap();
}

/// Display text shown after dividing by zero.
pub const ERROR_TEXT: &str = "Error";

/// Evaluate `operand1 <operator> operand2` and return the display text.
///
/// `operator` is a keypad symbol (`+`, `−`, `×`, `÷`). Any other symbol
/// yields `operand1` unchanged.
pub fn calculate_result(operand1: &str, operand2: &str, operator: &str) -> String {
    let Some(lhs) = parse_operand(operand1) else {
        return operand1.to_string();
    };
    let Some(rhs) = parse_operand(operand2) else {
        return operand2.to_string();
    };
    let Some(op) = Operator::from_symbol(operator) else {
        return operand1.to_string();
    };

    match op.apply(lhs, rhs) {
        Some(value) => format_double(value),
        None => ERROR_TEXT.to_string(),
    }
}

fn parse_operand(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !NUMERAL.is_match(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}
