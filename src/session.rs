//! A calculator session as seen by the front-end.
//!
//! Wraps one [`Engine`] together with the selected operator mode. Events the
//! mode does not allow are refused here and never reach the engine.

use crate::calculator::{Engine, Event};
use crate::input::{InputError, parse_keys};
use crate::mode::OperatorMode;
use crate::readout::Readout;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("'{event}' is not available in {mode} mode")]
    Unavailable { event: Event, mode: OperatorMode },
}

/// One applied key and what it left on the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub event: Event,
    pub readout: Readout,
    /// The key computed a new result.
    pub committed: bool,
}

impl Step {
    /// An equals press that produced a result.
    pub fn is_committed_equals(&self) -> bool {
        self.committed && self.event == Event::Equals
    }
}

/// Display texts to copy for a run of steps: one per committed equals.
pub fn clipboard_texts(steps: &[Step]) -> Vec<&str> {
    steps
        .iter()
        .filter(|step| step.is_committed_equals())
        .map(|step| step.readout.text_for_clipboard())
        .collect()
}

#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    mode: OperatorMode,
}

impl Session {
    /// Start a fresh engine with the given operator set.
    pub fn new(mode: OperatorMode) -> Self {
        Self {
            engine: Engine::new(),
            mode,
        }
    }

    /// The operator set currently offered.
    pub fn mode(&self) -> OperatorMode {
        self.mode
    }

    /// Switch operator mode. Engine state is left as is.
    pub fn set_mode(&mut self, mode: OperatorMode) {
        if mode != self.mode {
            tracing::info!(from = %self.mode, to = %mode, "switching operator mode");
        }
        self.mode = mode;
    }

    /// Read-only access to the underlying engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current readout without applying anything.
    pub fn readout(&self) -> Readout {
        Readout::from_engine(&self.engine)
    }

    /// Apply a single event.
    pub fn apply(&mut self, event: Event) -> Result<Readout, SessionError> {
        self.check(event)?;
        self.engine.apply(event);
        Ok(self.readout())
    }

    /// Parse and apply a line of keys, returning one step per event.
    ///
    /// The line is checked in full first, so a bad key or an unavailable
    /// operator leaves the engine untouched.
    pub fn apply_line(&mut self, line: &str) -> Result<Vec<Step>, SessionError> {
        let events = parse_keys(line)?;
        for &event in &events {
            self.check(event)?;
        }

        Ok(events
            .into_iter()
            .map(|event| {
                let committed = self.engine.commits(event);
                self.engine.apply(event);
                Step {
                    event,
                    readout: self.readout(),
                    committed,
                }
            })
            .collect())
    }

    fn check(&self, event: Event) -> Result<(), SessionError> {
        if self.mode.allows(event) {
            Ok(())
        } else {
            tracing::warn!(%event, mode = %self.mode, "refusing operator");
            Err(SessionError::Unavailable {
                event,
                mode: self.mode,
            })
        }
    }
}
