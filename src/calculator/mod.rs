//! Calculator core.
//!
//! This module provides:
//! - The entry buffer and its number guard
//! - Binary and unary operators with the commit rule
//! - Display formatting of computed values
//! - The engine that ties them together, one event at a time
//! - Copying the display to the clipboard

mod buffer;
mod clipboard;
mod engine;
mod event;
mod format;
mod operator;

pub use buffer::{DisplayBuffer, is_number};
pub use clipboard::{ClipboardError, ClipboardWriter, copy_and_wait};
pub use engine::{Engine, EntryState};
pub use event::Event;
pub use format::format_value;
pub use operator::{BinaryOp, PendingOp, UnaryOp, binary_apply};
