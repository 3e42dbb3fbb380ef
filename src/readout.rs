//! What the front-end shows after each key press.

use crate::calculator::{BinaryOp, Engine, PendingOp};
use std::fmt;

/// A rendered view of the engine's display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    /// The display text.
    pub display: String,
    /// The binary operator waiting for its right operand, if any.
    pub pending: Option<BinaryOp>,
    /// The display shows the result of equals or a unary operator.
    pub is_result: bool,
    /// The display holds a non-finite value (`inf`, `-inf` or `NaN`).
    pub is_error: bool,
}

impl Readout {
    /// Capture the current state of an engine.
    pub fn from_engine(engine: &Engine) -> Self {
        let display = engine.display().to_string();
        Self {
            is_error: display.parse::<f64>().is_ok_and(|v| !v.is_finite()),
            pending: engine.pending().binary(),
            is_result: matches!(engine.pending(), PendingOp::Equals | PendingOp::Unary(_)),
            display,
        }
    }

    /// Get the text to copy to clipboard.
    pub fn text_for_clipboard(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pending {
            Some(op) => write!(f, "{} {}", self.display, op),
            None if self.is_result => write!(f, "= {}", self.display),
            None => f.write_str(&self.display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Event;

    fn readout_after(events: &[Event]) -> Readout {
        let mut engine = Engine::new();
        for &event in events {
            engine.apply(event);
        }
        Readout::from_engine(&engine)
    }

    #[test]
    fn test_pending_operator_shown() {
        let readout = readout_after(&[Event::Digit(5), Event::BinaryOp(BinaryOp::Mul)]);
        assert_eq!(readout.pending, Some(BinaryOp::Mul));
        assert!(!readout.is_error);
        assert_eq!(readout.to_string(), "5 *");
    }

    #[test]
    fn test_result_shown() {
        let readout = readout_after(&[Event::Digit(9), Event::Root]);
        assert_eq!(readout.pending, None);
        assert!(readout.is_result);
        assert_eq!(readout.to_string(), "= 3");
        assert_eq!(readout.text_for_clipboard(), "3");
    }

    #[test]
    fn test_plain_display_without_commit() {
        assert_eq!(readout_after(&[]).to_string(), "0");
        assert_eq!(readout_after(&[Event::Digit(4), Event::Digit(2)]).to_string(), "42");

        let cleared = readout_after(&[Event::Digit(6), Event::Equals, Event::Clear]);
        assert!(!cleared.is_result);
        assert_eq!(cleared.to_string(), "0");
    }

    #[test]
    fn test_non_finite_is_error() {
        // sqrt(2 - 3)
        let readout = readout_after(&[
            Event::Digit(2),
            Event::BinaryOp(BinaryOp::Sub),
            Event::Digit(3),
            Event::Equals,
            Event::Root,
        ]);
        assert_eq!(readout.display, "NaN");
        assert!(readout.is_error);

        let readout = readout_after(&[
            Event::Digit(1),
            Event::BinaryOp(BinaryOp::Div),
            Event::Digit(0),
            Event::Equals,
        ]);
        assert_eq!(readout.display, "inf");
        assert!(readout.is_error);
    }

    #[test]
    fn test_editing_state_is_not_error() {
        // 2 - 5 = -3, backspace leaves "-".
        let readout = readout_after(&[
            Event::Digit(2),
            Event::BinaryOp(BinaryOp::Sub),
            Event::Digit(5),
            Event::Equals,
            Event::Backspace,
        ]);
        assert_eq!(readout.display, "-");
        assert!(!readout.is_error);
    }
}
