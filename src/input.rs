//! Key parsing for typed input.
//!
//! Turns a line like `7.5 / 2 =` or `16 sqrt sqrt` into engine events.
//! Tokens are separated by whitespace; each token is either a named key or a
//! run of single-character keys.

use crate::calculator::{BinaryOp, Event};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Named keys, matched case-insensitively against whole tokens.
const NAMED_KEYS: &[(&str, Event)] = &[
    ("sqrt", Event::Root),
    ("root", Event::Root),
    ("ln", Event::Ln),
    ("pow", Event::BinaryOp(BinaryOp::Pow)),
    ("mod", Event::BinaryOp(BinaryOp::Mod)),
    ("bs", Event::Backspace),
    ("backspace", Event::Backspace),
    ("c", Event::Clear),
    ("clear", Event::Clear),
    ("ac", Event::Clear),
];

/// Parse a line of keys into events.
///
/// Nothing is returned unless every token parses.
pub fn parse_keys(line: &str) -> Result<Vec<Event>, InputError> {
    let mut events = Vec::new();

    for token in line.split_whitespace() {
        if let Some(event) = named_key(token) {
            events.push(event);
            continue;
        }

        for c in token.chars() {
            let event = char_key(c).ok_or_else(|| InputError::UnknownKey(c.to_string()))?;
            events.push(event);
        }
    }

    Ok(events)
}

fn named_key(token: &str) -> Option<Event> {
    let lower = token.to_lowercase();
    NAMED_KEYS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|&(_, event)| event)
}

fn char_key(c: char) -> Option<Event> {
    if let Some(event) = Event::digit(c) {
        return Some(event);
    }

    let event = match c {
        '.' => Event::Point,
        '+' => Event::BinaryOp(BinaryOp::Add),
        '-' => Event::BinaryOp(BinaryOp::Sub),
        '*' | 'x' => Event::BinaryOp(BinaryOp::Mul),
        '/' => Event::BinaryOp(BinaryOp::Div),
        '%' => Event::BinaryOp(BinaryOp::Mod),
        '^' => Event::BinaryOp(BinaryOp::Pow),
        '=' => Event::Equals,
        '<' => Event::Backspace,
        '√' => Event::Root,
        _ => return None,
    };
    Some(event)
}
