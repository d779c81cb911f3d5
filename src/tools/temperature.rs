//! Temperature MCP Tools
//!
//! Tools for converting readings and checking them against absolute zero.

use serde::Serialize;

use crate::temperature::{
    convert_input, find_reference_point, format_temperature, is_above_absolute_zero,
    reference_points, Conversion, ReferencePoint,
    TemperatureBand, TemperatureResult, Unit,
};

/// Response for convert_temperature
#[derive(Debug, Serialize)]
pub struct ConvertTemperatureResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<Conversion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<TemperatureBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response for check_absolute_zero
#[derive(Debug, Serialize)]
pub struct AbsoluteZeroResponse {
    pub ok: bool,
    pub value: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_zero: Option<f64>,
    pub above_absolute_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One reference point, optionally formatted on a chosen scale
#[derive(Debug, Serialize)]
pub struct ReferencePointSummary {
    pub key: &'static str,
    pub label: &'static str,
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Response for reference_temperatures
#[derive(Debug, Serialize)]
pub struct ReferenceTemperaturesResponse {
    pub ok: bool,
    pub points: Vec<ReferencePointSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn parse_units(from: &str, to: &str) -> TemperatureResult<(Unit, Unit)> {
    Ok((from.parse()?, to.parse()?))
}

/// Convert a raw text reading between two named scales
pub fn convert_temperature(value: &str, from: &str, to: &str) -> ConvertTemperatureResponse {
    let result = parse_units(from, to).and_then(|(from, to)| convert_input(value, from, to));

    match result {
        Ok(conversion) => {
            let band = TemperatureBand::classify_in(conversion.value, conversion.to);
            ConvertTemperatureResponse {
                ok: true,
                conversion: Some(conversion),
                band: Some(band),
                color: Some(band.color()),
                error: None,
            }
        }
        Err(e) => ConvertTemperatureResponse {
            ok: false,
            conversion: None,
            band: None,
            color: None,
            error: Some(e.to_string()),
        },
    }
}

/// Check whether a reading is physically possible on a named scale
pub fn check_absolute_zero(value: f64, unit: &str) -> AbsoluteZeroResponse {
    match unit.parse::<Unit>() {
        Ok(parsed) => AbsoluteZeroResponse {
            ok: true,
            value,
            unit: parsed.as_str().to_string(),
            absolute_zero: Some(parsed.absolute_zero()),
            above_absolute_zero: is_above_absolute_zero(value, parsed),
            error: None,
        },
        Err(e) => AbsoluteZeroResponse {
            ok: false,
            value,
            unit: unit.to_string(),
            absolute_zero: None,
            above_absolute_zero: false,
            error: Some(e.to_string()),
        },
    }
}

fn reference_error(error: String) -> ReferenceTemperaturesResponse {
    ReferenceTemperaturesResponse {
        ok: false,
        points: Vec::new(),
        error: Some(error),
    }
}

/// List the reference temperatures, formatted on `unit` when given
///
/// `key` narrows the list to a single point.
pub fn reference_temperatures(unit: Option<&str>, key: Option<&str>) -> ReferenceTemperaturesResponse {
    let unit = match unit.map(str::parse::<Unit>).transpose() {
        Ok(u) => u,
        Err(e) => return reference_error(e.to_string()),
    };

    let selected: Vec<ReferencePoint> = match key {
        Some(key) => match find_reference_point(key) {
            Some(point) => vec![point],
            None => return reference_error(format!("Unknown reference point: {}", key)),
        },
        None => reference_points().to_vec(),
    };

    let points = selected
        .into_iter()
        .map(|p| ReferencePointSummary {
            key: p.key,
            label: p.label,
            celsius: p.celsius,
            fahrenheit: p.fahrenheit,
            kelvin: p.kelvin,
            display: unit.map(|u| format_temperature(p.value_in(u), u)),
        })
        .collect();

    ReferenceTemperaturesResponse {
        ok: true,
        points,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_temperature_ok() {
        let response = convert_temperature("100", "celsius", "fahrenheit");
        assert!(response.ok);
        let conversion = response.conversion.unwrap();
        assert_eq!(conversion.display, "212°F");
        assert_eq!(response.band, Some(TemperatureBand::Hot));
        assert_eq!(response.color, Some("#e74c3c"));
    }

    #[test]
    fn test_convert_temperature_invalid_unit() {
        let response = convert_temperature("100", "celsius", "rankine");
        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("Invalid unit: rankine"));
    }

    #[test]
    fn test_convert_temperature_below_zero() {
        let response = convert_temperature("-5", "kelvin", "celsius");
        assert!(!response.ok);
        assert_eq!(
            response.error.as_deref(),
            Some("Temperature cannot be below absolute zero!")
        );
    }

    #[test]
    fn test_convert_temperature_json_shape() {
        let json = serde_json::to_value(convert_temperature("0", "c", "c")).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["conversion"]["same_unit"], true);
        assert_eq!(json["conversion"]["note"], "Same unit - no conversion needed");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_check_absolute_zero() {
        let response = check_absolute_zero(-459.67, "fahrenheit");
        assert!(response.ok);
        assert!(response.above_absolute_zero);
        assert_eq!(response.absolute_zero, Some(-459.67));

        let response = check_absolute_zero(-273.16, "C");
        assert!(!response.above_absolute_zero);
        assert_eq!(response.unit, "celsius");

        let response = check_absolute_zero(1.0, "furlong");
        assert!(!response.ok);
        assert!(response.error.is_some());
    }

    #[test]
    fn test_reference_temperatures() {
        let response = reference_temperatures(Some("fahrenheit"), None);
        assert!(response.ok);
        assert_eq!(response.points.len(), 3);
        assert_eq!(response.points[1].display.as_deref(), Some("212°F"));

        let response = reference_temperatures(None, None);
        assert!(response.points.iter().all(|p| p.display.is_none()));

        assert!(!reference_temperatures(Some("nope"), None).ok);
    }

    #[test]
    fn test_reference_temperatures_by_key() {
        let response = reference_temperatures(Some("kelvin"), Some("Body_Temp"));
        assert!(response.ok);
        assert_eq!(response.points.len(), 1);
        assert_eq!(response.points[0].key, "body_temp");
        assert_eq!(response.points[0].display.as_deref(), Some("310.15K"));

        let response = reference_temperatures(None, Some("lava"));
        assert!(!response.ok);
        assert!(response.points.is_empty());
        assert_eq!(response.error.as_deref(), Some("Unknown reference point: lava"));
    }
}
