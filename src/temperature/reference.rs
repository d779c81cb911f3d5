//! Reference temperatures and display bands

use serde::Serialize;

use super::converter::convert;
use super::units::Unit;

/// A well-known temperature expressed on every scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePoint {
    pub key: &'static str,
    pub label: &'static str,
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl ReferencePoint {
    /// Reading of this point on the given scale
    pub fn value_in(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Celsius => self.celsius,
            Unit::Fahrenheit => self.fahrenheit,
            Unit::Kelvin => self.kelvin,
        }
    }
}

pub const WATER_FREEZE: ReferencePoint = ReferencePoint {
    key: "water_freeze",
    label: "Water Freezing Point",
    celsius: 0.0,
    fahrenheit: 32.0,
    kelvin: 273.15,
};

pub const WATER_BOIL: ReferencePoint = ReferencePoint {
    key: "water_boil",
    label: "Water Boiling Point",
    celsius: 100.0,
    fahrenheit: 212.0,
    kelvin: 373.15,
};

pub const BODY_TEMP: ReferencePoint = ReferencePoint {
    key: "body_temp",
    label: "Body Temperature",
    celsius: 37.0,
    fahrenheit: 98.6,
    kelvin: 310.15,
};

pub fn reference_points() -> [ReferencePoint; 3] {
    [WATER_FREEZE, WATER_BOIL, BODY_TEMP]
}

/// Look up a reference point by key (`water_freeze`, `water_boil`, `body_temp`)
pub fn find_reference_point(key: &str) -> Option<ReferencePoint> {
    let lower = key.to_lowercase();
    reference_points()
        .into_iter()
        .find(|p| p.key == lower.trim())
}

/// Coarse band used to colour a displayed reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Freezing,
    Cool,
    Warm,
    Hot,
}

impl TemperatureBand {
    /// Classify a Celsius reading
    pub fn classify(celsius: f64) -> Self {
        if celsius < 0.0 {
            TemperatureBand::Freezing
        } else if celsius < 20.0 {
            TemperatureBand::Cool
        } else if celsius < 30.0 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }

    /// Classify a reading on any scale
    pub fn classify_in(value: f64, unit: Unit) -> Self {
        Self::classify(convert(value, unit, Unit::Celsius))
    }

    pub fn color(&self) -> &'static str {
        match self {
            TemperatureBand::Freezing => "#3498db",
            TemperatureBand::Cool => "#2ecc71",
            TemperatureBand::Warm => "#f39c12",
            TemperatureBand::Hot => "#e74c3c",
        }
    }
}
