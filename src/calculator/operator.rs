//! Operators and the arithmetic behind them.

use std::fmt;

/// Operators that combine the accumulator with the typed operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    /// Apply the operator. Division by zero follows IEEE-754.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            // Remainder takes the sign of the dividend.
            Self::Mod => lhs % rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }

    /// Key symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operators that compute immediately from the displayed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Root,
    Ln,
}

impl UnaryOp {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Root => value.sqrt(),
            Self::Ln => value.ln(),
        }
    }
}

/// The operator awaiting application.
///
/// `Unary` and `Equals` are markers recorded after a commit; they are never
/// applied as binary operators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PendingOp {
    #[default]
    None,
    Binary(BinaryOp),
    Unary(UnaryOp),
    Equals,
}

impl PendingOp {
    /// The binary operator, if one is pending.
    pub fn binary(self) -> Option<BinaryOp> {
        match self {
            Self::Binary(op) => Some(op),
            _ => None,
        }
    }
}

/// Combine `lhs` and `rhs` with the pending operator.
///
/// Marker values pass `rhs` through unchanged. This is what makes
/// "type a number, press equals" show that number and what keeps repeated
/// equals presses from changing the display.
pub fn binary_apply(lhs: f64, rhs: f64, pending: PendingOp) -> f64 {
    match pending {
        PendingOp::Binary(op) => op.apply(lhs, rhs),
        PendingOp::None | PendingOp::Unary(_) | PendingOp::Equals => rhs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_ops() {
        assert_eq!(binary_apply(5.0, 3.0, PendingOp::Binary(BinaryOp::Add)), 8.0);
        assert_eq!(binary_apply(5.0, 3.0, PendingOp::Binary(BinaryOp::Sub)), 2.0);
        assert_eq!(binary_apply(5.0, 3.0, PendingOp::Binary(BinaryOp::Mul)), 15.0);
        assert_eq!(binary_apply(7.5, 2.0, PendingOp::Binary(BinaryOp::Div)), 3.75);
        assert_eq!(binary_apply(2.0, 3.0, PendingOp::Binary(BinaryOp::Pow)), 8.0);
    }

    #[test]
    fn test_mod_follows_dividend_sign() {
        assert_eq!(BinaryOp::Mod.apply(7.0, 3.0), 1.0);
        assert_eq!(BinaryOp::Mod.apply(-7.0, 3.0), -1.0);
        assert_eq!(BinaryOp::Mod.apply(7.0, -3.0), 1.0);
        assert_eq!(BinaryOp::Mod.apply(5.5, 2.0), 1.5);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(BinaryOp::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_markers_pass_through() {
        for pending in [
            PendingOp::None,
            PendingOp::Unary(UnaryOp::Root),
            PendingOp::Unary(UnaryOp::Ln),
            PendingOp::Equals,
        ] {
            assert_eq!(binary_apply(42.0, 7.0, pending), 7.0);
        }
    }

    #[test]
    fn test_unary_ops() {
        assert_eq!(UnaryOp::Root.apply(16.0), 4.0);
        assert_eq!(UnaryOp::Ln.apply(1.0), 0.0);
        assert!(UnaryOp::Root.apply(-1.0).is_nan());
        assert_eq!(UnaryOp::Ln.apply(0.0), f64::NEG_INFINITY);
    }
}
