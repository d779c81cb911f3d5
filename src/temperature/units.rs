//! Temperature units and conversion constants
//!
//! Provides the closed set of supported units with their absolute-zero
//! thresholds and display symbols.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Temperature error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemperatureError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Please enter a temperature value")]
    EmptyInput,

    #[error("Please enter a valid number")]
    InvalidNumber(String),

    #[error("Temperature cannot be below absolute zero!")]
    BelowAbsoluteZero { value: f64, unit: Unit },
}

/// Result type for temperature operations
pub type TemperatureResult<T> = Result<T, TemperatureError>;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;
/// Fahrenheit reading of 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Absolute zero in Celsius
pub const ABSOLUTE_ZERO_C: f64 = -273.15;
/// Absolute zero in Fahrenheit
pub const ABSOLUTE_ZERO_F: f64 = -459.67;
/// Absolute zero in Kelvin
pub const ABSOLUTE_ZERO_K: f64 = 0.0;

/// A temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    /// Lowest valid reading on this scale
    pub fn absolute_zero(&self) -> f64 {
        match self {
            Unit::Celsius => ABSOLUTE_ZERO_C,
            Unit::Fahrenheit => ABSOLUTE_ZERO_F,
            Unit::Kelvin => ABSOLUTE_ZERO_K,
        }
    }

    /// Display symbol appended to formatted values
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
        }
    }

    /// Convert a reading on this scale to Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            Unit::Celsius => value,
            Unit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            Unit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Convert a Celsius reading to this scale
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            Unit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = TemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "celsius" | "c" | "°c" | "degc" => Ok(Unit::Celsius),
            "fahrenheit" | "f" | "°f" | "degf" => Ok(Unit::Fahrenheit),
            "kelvin" | "k" => Ok(Unit::Kelvin),
            _ => Err(TemperatureError::InvalidUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_names() {
        assert_eq!("celsius".parse::<Unit>(), Ok(Unit::Celsius));
        assert_eq!(" Fahrenheit ".parse::<Unit>(), Ok(Unit::Fahrenheit));
        assert_eq!("K".parse::<Unit>(), Ok(Unit::Kelvin));
        assert_eq!("°C".parse::<Unit>(), Ok(Unit::Celsius));
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert_eq!(
            "rankine".parse::<Unit>(),
            Err(TemperatureError::InvalidUnit("rankine".to_string()))
        );
    }

    #[test]
    fn test_absolute_zero_thresholds() {
        assert_eq!(Unit::Celsius.absolute_zero(), -273.15);
        assert_eq!(Unit::Fahrenheit.absolute_zero(), -459.67);
        assert_eq!(Unit::Kelvin.absolute_zero(), 0.0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Unit::Celsius.symbol(), "°C");
        assert_eq!(Unit::Fahrenheit.symbol(), "°F");
        assert_eq!(Unit::Kelvin.symbol(), "K");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Kelvin).unwrap(), "\"kelvin\"");
        let unit: Unit = serde_json::from_str("\"fahrenheit\"").unwrap();
        assert_eq!(unit, Unit::Fahrenheit);
    }

    #[test]
    fn test_thresholds_agree_across_scales() {
        for unit in Unit::ALL {
            let celsius = unit.to_celsius(unit.absolute_zero());
            assert!((celsius - ABSOLUTE_ZERO_C).abs() < 1e-9, "{}", unit);
        }
    }
}
