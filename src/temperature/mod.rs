//! Temperature conversion module
//!
//! Handles conversion between Celsius, Fahrenheit and Kelvin, absolute-zero
//! checks and display formatting.

pub mod converter;
pub mod reference;
pub mod units;

pub use converter::{
    convert, convert_input, convert_named, format_temperature, is_above_absolute_zero,
    parse_temperature_input, round_to_decimals, Conversion, SAME_UNIT_NOTE,
};
pub use reference::{find_reference_point, reference_points, ReferencePoint, TemperatureBand};
pub use units::{TemperatureError, TemperatureResult, Unit};
