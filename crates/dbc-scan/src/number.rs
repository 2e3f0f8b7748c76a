//! Locale-independent string to `f64` conversion.

use tracing::trace;

use crate::text::trim;

/// Parses `value` as a floating-point literal or returns `default_value`.
///
/// The token is trimmed first (see [`trim`]), then the *whole* token must
/// match the literal grammar: optional sign, digits with an optional `.`
/// fraction, optional exponent (`e`/`E`, optional sign, digits). `inf`,
/// `infinity` and `nan` are accepted in any case. The decimal separator is
/// always `.` regardless of locale.
///
/// Anything else, including a valid literal followed by trailing garbage,
/// yields `default_value` unchanged. The conversion never fails.
///
/// ```
/// use dbc_scan::number::convert_to_double;
///
/// assert_eq!(convert_to_double("3.14", 0.0), 3.14);
/// assert_eq!(convert_to_double(" -1.5e3 ", 0.0), -1500.0);
/// assert_eq!(convert_to_double("3.14xyz", 0.0), 0.0);
/// assert_eq!(convert_to_double("1,5", -1.0), -1.0);
/// ```
#[must_use]
pub fn convert_to_double(value: &str, default_value: f64) -> f64 {
    let token = trim(value);
    match token.parse::<f64>() {
        Ok(parsed) => parsed,
        Err(err) => {
            trace!(token, %err, default_value, "falling back to default");
            default_value
        }
    }
}
