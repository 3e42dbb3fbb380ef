//! Keypad calculator engine.
//!
//! Key presses go in, a display string comes out. See [`calculator::Engine`]
//! for the core and [`session::Session`] for the mode-aware front-end.

pub mod calculator;
pub mod config;
pub mod input;
pub mod logging;
pub mod mode;
pub mod readout;
pub mod session;

pub use calculator::{Engine, Event};
pub use mode::OperatorMode;
pub use readout::Readout;
pub use session::{Session, SessionError, Step};
