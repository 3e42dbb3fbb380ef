//! End-to-end key sequences against the engine and session.

use zcalc::calculator::{BinaryOp, Engine, Event};
use zcalc::{OperatorMode, Session};

fn display_after(events: &[Event]) -> String {
    let mut engine = Engine::new();
    let mut display = engine.display().to_string();
    for &event in events {
        display = engine.apply(event).to_string();
    }
    display
}

#[test]
fn test_addition() {
    let events = [
        Event::Digit(5),
        Event::BinaryOp(BinaryOp::Add),
        Event::Digit(3),
        Event::Equals,
    ];
    assert_eq!(display_after(&events), "8");
}

#[test]
fn test_power() {
    let events = [
        Event::Digit(2),
        Event::BinaryOp(BinaryOp::Pow),
        Event::Digit(3),
        Event::Equals,
    ];
    assert_eq!(display_after(&events), "8");
}

#[test]
fn test_fractional_division() {
    let events = [
        Event::Digit(7),
        Event::Point,
        Event::Digit(5),
        Event::BinaryOp(BinaryOp::Div),
        Event::Digit(2),
        Event::Equals,
    ];
    assert_eq!(display_after(&events), "3.75");
}

#[test]
fn test_square_root_of_nine() {
    assert_eq!(display_after(&[Event::Digit(9), Event::Root]), "3");
}

#[test]
fn test_operator_change_of_mind() {
    let events = [
        Event::Digit(5),
        Event::BinaryOp(BinaryOp::Add),
        Event::BinaryOp(BinaryOp::Sub),
        Event::Digit(2),
        Event::Equals,
    ];
    assert_eq!(display_after(&events), "3");
}

#[test]
fn test_modulo() {
    let mut session = Session::default();
    session.apply_line("17 % 5 =").unwrap();
    assert_eq!(session.readout().display, "2");
}

#[test]
fn test_root_chain_from_keys() {
    let mut session = Session::default();
    session.apply_line("16 sqrt sqrt").unwrap();
    assert_eq!(session.readout().display, "2");
    assert!(session.engine().commit_pending());
}

#[test]
fn test_digit_and_point_sequences_stay_well_formed() {
    let keys = ["0", "1", "2", ".", "3", ".", "0", ".", "9"];
    let mut engine = Engine::new();

    // Every prefix of every ordering of a few keys, starting from clear.
    for start in 0..keys.len() {
        engine.apply(Event::Clear);
        for key in keys.iter().cycle().skip(start).take(keys.len() * 2) {
            let event = match *key {
                "." => Event::Point,
                d => Event::Digit(d.parse().unwrap()),
            };
            let display = engine.apply(event);
            assert!(!display.is_empty());
            assert!(display.matches('.').count() <= 1, "display {display}");
        }
    }
}

#[test]
fn test_clear_after_result() {
    let mut session = Session::default();
    session.apply_line("6 * 7 = c").unwrap();
    let engine = session.engine();
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.accumulator(), 0.0);
    assert_eq!(engine.pending(), zcalc::calculator::PendingOp::None);
}

#[test]
fn test_reduced_mode_basic_arithmetic() {
    let mut session = Session::new(OperatorMode::Reduced);
    session.apply_line("1.5 x 4 - 1 =").unwrap();
    assert_eq!(session.readout().display, "5");
    assert!(session.apply_line("ln").is_err());
}

#[test]
fn test_ln_result_is_fractional() {
    let mut session = Session::default();
    session.apply_line("2 ln").unwrap();
    assert_eq!(session.readout().display, format!("{:?}", 2f64.ln()));
}
