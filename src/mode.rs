//! Operator set gating.
//!
//! The engine accepts every operator. Which ones the front-end lets through
//! depends on the selected mode.

use crate::calculator::{BinaryOp, Event};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OperatorMode {
    /// Basic arithmetic only.
    Reduced,
    /// Adds square root, natural log and powers.
    #[default]
    Extended,
}

impl OperatorMode {
    /// Check whether `event` may be sent to the engine in this mode.
    pub fn allows(self, event: Event) -> bool {
        match self {
            Self::Extended => true,
            Self::Reduced => !matches!(
                event,
                Event::Root | Event::Ln | Event::BinaryOp(BinaryOp::Pow)
            ),
        }
    }
}

impl fmt::Display for OperatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reduced => f.write_str("reduced"),
            Self::Extended => f.write_str("extended"),
        }
    }
}
