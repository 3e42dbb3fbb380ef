//! The calculator engine.
//!
//! Consumes key events one at a time and keeps just enough state to render
//! the display after each of them: the entry buffer, the accumulator, the
//! pending operator and the entry state. No expression tree is built.

use super::buffer::DisplayBuffer;
use super::event::Event;
use super::format::format_value;
use super::operator::{BinaryOp, PendingOp, UnaryOp, binary_apply};

/// How the next key interacts with the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryState {
    /// A number is being typed. Digits append, operators commit.
    #[default]
    Typing,
    /// A result from equals or a unary operator is shown. Digits start a
    /// new number, operators commit again.
    ResultShown,
    /// A binary operator was chosen. Digits start the next operand, another
    /// binary operator only replaces the pending one.
    AwaitingOperand,
}

impl EntryState {
    /// Whether the next operator event commits a calculation first.
    pub fn commit_pending(self) -> bool {
        !matches!(self, Self::AwaitingOperand)
    }

    /// Whether the next digit appends to the display instead of replacing it.
    pub fn fresh_entry(self) -> bool {
        matches!(self, Self::Typing)
    }
}

/// A single calculator session.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    buffer: DisplayBuffer,
    accumulator: f64,
    pending: PendingOp,
    state: EntryState,
}

impl Engine {
    /// Create a session showing `0` with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the display text.
    pub fn apply(&mut self, event: Event) -> &str {
        match event {
            Event::Digit(d) => self.on_digit(d),
            Event::Point => self.on_point(),
            Event::Backspace => self.buffer.backspace(),
            Event::Clear => self.on_clear(),
            Event::BinaryOp(op) => self.on_binary(op),
            Event::Root => self.on_unary(UnaryOp::Root),
            Event::Ln => self.on_unary(UnaryOp::Ln),
            Event::Equals => self.on_equals(),
        }

        tracing::trace!(
            %event,
            display = self.buffer.as_str(),
            accumulator = self.accumulator,
            pending = ?self.pending,
            state = ?self.state,
            "applied event"
        );

        self.buffer.as_str()
    }

    /// The display text.
    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    /// The last committed result.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// The operator waiting to be applied, or the marker of the last commit.
    pub fn pending(&self) -> PendingOp {
        self.pending
    }

    /// How the next key interacts with the display.
    pub fn state(&self) -> EntryState {
        self.state
    }

    /// See [`EntryState::commit_pending`].
    pub fn commit_pending(&self) -> bool {
        self.state.commit_pending()
    }

    /// See [`EntryState::fresh_entry`].
    pub fn fresh_entry(&self) -> bool {
        self.state.fresh_entry()
    }

    /// Whether `event` would compute a new result if applied now.
    ///
    /// Operators and equals commit only on a numeric display with a commit
    /// pending. Digits and editing keys never commit.
    pub fn commits(&self, event: Event) -> bool {
        match event {
            Event::BinaryOp(_) | Event::Root | Event::Ln | Event::Equals => {
                self.state.commit_pending() && self.buffer.is_number()
            }
            Event::Digit(_) | Event::Point | Event::Backspace | Event::Clear => false,
        }
    }

    fn on_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            tracing::debug!(digit, "ignoring out of range digit");
            return;
        };

        if self.state.fresh_entry() {
            self.buffer.push_digit(c);
        } else {
            self.buffer.start_digit(c);
        }
        self.state = EntryState::Typing;
    }

    fn on_point(&mut self) {
        if self.state.fresh_entry() {
            self.buffer.push_point();
        } else {
            self.buffer.start_point();
        }
        self.state = EntryState::Typing;
    }

    // Entry state survives a clear, so a clear right after an operator still
    // lets the next operator only swap the pending one.
    fn on_clear(&mut self) {
        self.buffer.clear();
        self.accumulator = 0.0;
        self.pending = PendingOp::None;
    }

    fn on_binary(&mut self, op: BinaryOp) {
        let Some(operand) = self.operand() else {
            return;
        };

        if self.state.commit_pending() {
            self.commit(binary_apply(self.accumulator, operand, self.pending));
        }
        self.pending = PendingOp::Binary(op);
        self.state = EntryState::AwaitingOperand;
    }

    fn on_unary(&mut self, op: UnaryOp) {
        let Some(operand) = self.operand() else {
            return;
        };
        if !self.state.commit_pending() {
            return;
        }

        self.commit(op.apply(operand));
        self.pending = PendingOp::Unary(op);
        self.state = EntryState::ResultShown;
    }

    fn on_equals(&mut self) {
        let Some(operand) = self.operand() else {
            return;
        };
        if !self.state.commit_pending() {
            return;
        }

        self.commit(binary_apply(self.accumulator, operand, self.pending));
        self.pending = PendingOp::Equals;
        self.state = EntryState::ResultShown;
    }

    /// The displayed value, or `None` when the display is not a number.
    fn operand(&self) -> Option<f64> {
        let value = self.buffer.value();
        if value.is_none() {
            tracing::trace!(display = self.buffer.as_str(), "display is not a number");
        }
        value
    }

    fn commit(&mut self, value: f64) {
        self.accumulator = value;
        self.buffer.replace(format_value(value));
    }
}
