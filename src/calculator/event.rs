//! Input events accepted by the engine.

use super::operator::BinaryOp;
use std::fmt;

/// A single key press on the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// A digit key, `0..=9`.
    Digit(u8),
    Point,
    Backspace,
    Clear,
    BinaryOp(BinaryOp),
    Root,
    Ln,
    Equals,
}

impl Event {
    /// Build a digit event from a character, if it is an ASCII digit.
    pub fn digit(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self::Digit(d as u8))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::Point => f.write_str("."),
            Self::Backspace => f.write_str("backspace"),
            Self::Clear => f.write_str("clear"),
            Self::BinaryOp(op) => write!(f, "{}", op),
            Self::Root => f.write_str("sqrt"),
            Self::Ln => f.write_str("ln"),
            Self::Equals => f.write_str("="),
        }
    }
}
