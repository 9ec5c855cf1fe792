//! Display formatting for results.

use thiserror::Error;

/// Default number of fractional digits kept in a displayed result.
pub const DEFAULT_PRECISION: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FormatError {
    #[error("{value} is not a finite number")]
    NonFinite { value: f64 },
}

/// Render `value` for the display.
///
/// Integers are written without a decimal point. Anything else is rounded to
/// `precision` fractional digits with trailing zeros removed. Output never
/// uses exponent notation and never shows `-0`.
pub fn format_number(value: f64, precision: usize) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite { value });
    }

    let rounded = if value.fract() == 0.0 {
        value
    } else {
        round_to(value, precision)
    };

    if rounded == 0.0 {
        return Ok("0".to_string());
    }
    Ok(format!("{rounded}"))
}

/// Round to `precision` fractional digits, ties away from zero, so that
/// `0.1 + 0.2` comes back as exactly `0.3` and `1/512` as `0.00195313`.
fn round_to(value: f64, precision: usize) -> f64 {
    let Ok(exp) = i32::try_from(precision) else {
        return value;
    };
    let factor = 10f64.powi(exp);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
