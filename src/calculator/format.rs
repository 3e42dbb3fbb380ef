//! Display formatting for computed values.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Default float text of a whole number, e.g. `3.0` or `-120.0`.
    static ref WHOLE_NUMBER: Regex = Regex::new(r"^-?\d+\.0*$").unwrap();
}

/// Render a value for the display.
///
/// Whole numbers drop their fractional part (`3.0` becomes `3`). Anything
/// else keeps the shortest round-trip text, which switches to exponent form
/// for very large or very small magnitudes and reads `inf`/`NaN` for
/// non-finite values.
pub fn format_value(value: f64) -> String {
    let text = format!("{:?}", value);

    if WHOLE_NUMBER.is_match(&text) {
        // Debug text is only plain for magnitudes below 1e16, so this fits.
        (value.trunc() as i64).to_string()
    } else {
        text
    }
}
