//! The entry buffer: the text currently shown on the calculator display.
//!
//! The buffer doubles as the parse source for every commit, so all the
//! "is this a number" checks live here behind [`DisplayBuffer::value`].

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Signed decimal literal: `-12`, `3.5`, `7.` are accepted.
    /// `inf`, `NaN`, exponent forms and a bare `-` are not.
    static ref NUMBER: Regex = Regex::new(r"^-?\d+(\.\d*)?$").unwrap();

    /// A buffer holding nothing but zeros gets replaced by the next digit.
    static ref ALL_ZEROS: Regex = Regex::new(r"^0*$").unwrap();
}

/// Text of the number being shown or typed.
///
/// Never empty and never holds more than one `.` when built through
/// digit/point input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self {
            text: "0".to_string(),
        }
    }
}

impl DisplayBuffer {
    /// Create a buffer showing `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The display text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Append a digit to the number being typed.
    pub fn push_digit(&mut self, digit: char) {
        if ALL_ZEROS.is_match(&self.text) {
            self.text.clear();
        }
        self.text.push(digit);
    }

    /// Append a decimal point unless one is already present.
    pub fn push_point(&mut self) {
        if !self.text.contains('.') {
            self.text.push('.');
        }
    }

    /// Start a new number with `digit`.
    pub fn start_digit(&mut self, digit: char) {
        self.text.clear();
        self.text.push(digit);
    }

    /// Start a new number with `0.`.
    pub fn start_point(&mut self) {
        self.text.clear();
        self.text.push_str("0.");
    }

    /// Drop the last character, falling back to `0` when nothing is left.
    pub fn backspace(&mut self) {
        self.text.pop();
        if self.text.is_empty() {
            self.text.push('0');
        }
    }

    /// Reset to `0`.
    pub fn clear(&mut self) {
        self.text.clear();
        self.text.push('0');
    }

    /// Replace the text with an already formatted result.
    pub fn replace(&mut self, text: String) {
        self.text = if text.is_empty() { "0".to_string() } else { text };
    }

    /// Check whether the buffer is a signed decimal literal.
    pub fn is_number(&self) -> bool {
        is_number(&self.text)
    }

    /// Numeric value of the buffer, or `None` when it fails the guard.
    pub fn value(&self) -> Option<f64> {
        if !self.is_number() {
            return None;
        }
        self.text.parse().ok()
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Check whether `text` is a signed decimal literal the engine can commit.
pub fn is_number(text: &str) -> bool {
    NUMBER.is_match(text)
}
