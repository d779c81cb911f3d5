//! Temperature conversion functions
//!
//! Converts between scales through Celsius, checks readings against absolute
//! zero, and turns raw text input into a displayable result.

use serde::Serialize;

use super::units::{TemperatureError, TemperatureResult, Unit};

/// Note attached to a conversion whose source and target scales match
pub const SAME_UNIT_NOTE: &str = "Same unit - no conversion needed";

/// Convert a reading between two scales
///
/// Goes source -> Celsius -> target. When both scales match the value is
/// returned untouched so it cannot drift.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    to.from_celsius(from.to_celsius(value))
}

/// Convert using unit names, failing on names outside the supported scales
pub fn convert_named(value: f64, from: &str, to: &str) -> TemperatureResult<f64> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    Ok(convert(value, from, to))
}

/// Whether a reading is physically possible on the given scale
///
/// A value exactly at absolute zero is valid.
pub fn is_above_absolute_zero(value: f64, unit: Unit) -> bool {
    value >= unit.absolute_zero()
}

/// Round half away from zero to the given number of decimal places
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Format a reading for display, e.g. `32°F` or `273.15K`
pub fn format_temperature(value: f64, unit: Unit) -> String {
    let rounded = round_to_decimals(value, 2);
    // Avoid printing "-0°C"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}{}", rounded, unit.symbol())
}

/// Parse raw input text into a reading on the `from` scale
///
/// Checks run in order: empty, not a finite number, below absolute zero.
pub fn parse_temperature_input(input: &str, from: Unit) -> TemperatureResult<f64> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(TemperatureError::EmptyInput);
    }

    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Err(TemperatureError::InvalidNumber(trimmed.to_string())),
    };

    if !is_above_absolute_zero(value, from) {
        return Err(TemperatureError::BelowAbsoluteZero { value, unit: from });
    }

    Ok(value)
}

/// Result of converting one reading, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub input: f64,
    pub from: Unit,
    pub to: Unit,
    pub value: f64,
    pub rounded: f64,
    pub display: String,
    pub same_unit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Conversion {
    /// Convert an already validated reading
    pub fn new(input: f64, from: Unit, to: Unit) -> Self {
        let same_unit = from == to;
        let value = convert(input, from, to);
        Self {
            input,
            from,
            to,
            value,
            rounded: round_to_decimals(value, 2),
            display: format_temperature(value, to),
            same_unit,
            note: same_unit.then(|| SAME_UNIT_NOTE.to_string()),
        }
    }
}

/// Check raw input text and convert it
pub fn convert_input(input: &str, from: Unit, to: Unit) -> TemperatureResult<Conversion> {
    let value = parse_temperature_input(input, from)?;
    let conversion = Conversion::new(value, from, to);
    tracing::debug!(
        "Converted {} {} -> {}",
        value,
        from,
        conversion.display
    );
    Ok(conversion)
}
