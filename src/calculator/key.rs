//! Keypad alphabet.
//!
//! Every button on the keypad produces one of a fixed set of labels.
//! [`Key`] is the typed form of those labels.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Button labels in keypad order, top row first.
pub const KEYPAD_ROWS: [[&str; 4]; 5] = [
    ["Off", "C", "M", "←"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "÷"],
    ["1", "2", "3", "+"],
    [".", "0", "=", "−"],
];

/// A label that is not part of the keypad alphabet.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key label: {0:?}")]
    Unknown(String),
}

/// One of the four binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The keypad symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look up an operator by its keypad symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator to two values.
    ///
    /// Returns `None` when dividing by zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Toggles the power state ("Off").
    Power,
    /// Clears operands and display ("C").
    Clear,
    /// Drops the last display character ("←").
    Backspace,
    /// One of the binary operators.
    Operator(Operator),
    /// Evaluates the pending operation ("=").
    Equals,
    /// A decimal digit in `0..=9`. Build with [`Key::digit`].
    Digit(u8),
    /// The decimal point (".").
    Point,
    /// Memory placeholder ("M"). Entered like a digit.
    Memory,
}

impl Key {
    /// The digit key for `value`, if it is a single decimal digit.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// The canonical label for this key.
    ///
    /// # Panics
    ///
    /// Panics on a `Digit` outside `0..=9`.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Power => "Off",
            Self::Clear => "C",
            Self::Backspace => "←",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Digit(d) => DIGITS[usize::from(d)],
            Self::Point => ".",
            Self::Memory => "M",
        }
    }

    /// Whether the key is drawn in the accent color.
    pub fn is_accent(self) -> bool {
        matches!(
            self,
            Self::Operator(_) | Self::Equals | Self::Clear | Self::Power | Self::Memory
        )
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "Off" => Self::Power,
            "C" => Self::Clear,
            "←" => Self::Backspace,
            "=" => Self::Equals,
            "." => Self::Point,
            "M" => Self::Memory,
            _ => {
                if let Some(op) = Operator::from_symbol(label) {
                    Self::Operator(op)
                } else if let [b] = label.as_bytes()
                    && let Some(key) = b.checked_sub(b'0').and_then(Self::digit)
                {
                    key
                } else {
                    return Err(KeyError::Unknown(label.to_string()));
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
