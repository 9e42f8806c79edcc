//! Unit representation with base-unit conversion factors
//!
//! Factors express how many base units (meters / grams / liters) one unit
//! equals. Temperature carries no factor; it converts through a Celsius
//! pivot in the engine instead.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Category;

/// A concrete unit drawn from one of the four categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    // Length
    #[serde(rename = "meters")]
    Meters,
    #[serde(rename = "kilometers")]
    Kilometers,
    #[serde(rename = "miles")]
    Miles,
    #[serde(rename = "inches")]
    Inches,
    #[serde(rename = "feet")]
    Feet,

    // Weight
    #[serde(rename = "grams")]
    Grams,
    #[serde(rename = "kilograms")]
    Kilograms,
    #[serde(rename = "pounds")]
    Pounds,
    #[serde(rename = "ounces")]
    Ounces,

    // Temperature
    #[serde(rename = "Celsius")]
    Celsius,
    #[serde(rename = "Fahrenheit")]
    Fahrenheit,
    #[serde(rename = "Kelvin")]
    Kelvin,

    // Volume
    #[serde(rename = "liters")]
    Liters,
    #[serde(rename = "milliliters")]
    Milliliters,
    #[serde(rename = "gallons")]
    Gallons,
    #[serde(rename = "cups")]
    Cups,
}

impl Unit {
    /// Display label, matching the selector lists exactly
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Miles => "miles",
            Unit::Inches => "inches",
            Unit::Feet => "feet",
            Unit::Grams => "grams",
            Unit::Kilograms => "kilograms",
            Unit::Pounds => "pounds",
            Unit::Ounces => "ounces",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
            Unit::Liters => "liters",
            Unit::Milliliters => "milliliters",
            Unit::Gallons => "gallons",
            Unit::Cups => "cups",
        }
    }

    /// The category this unit belongs to
    pub fn category(&self) -> Category {
        match self {
            Unit::Meters | Unit::Kilometers | Unit::Miles | Unit::Inches | Unit::Feet => {
                Category::Length
            }
            Unit::Grams | Unit::Kilograms | Unit::Pounds | Unit::Ounces => Category::Weight,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Liters | Unit::Milliliters | Unit::Gallons | Unit::Cups => Category::Volume,
        }
    }

    /// Factor to the category's base unit (meters / grams / liters).
    /// `None` for temperature units, which are not proportional.
    pub fn base_factor(&self) -> Option<f64> {
        let factor = match self {
            Unit::Meters => 1.0,
            Unit::Kilometers => 1000.0,
            Unit::Miles => 1609.34,
            Unit::Inches => 0.0254,
            Unit::Feet => 0.3048,

            Unit::Grams => 1.0,
            Unit::Kilograms => 1000.0,
            Unit::Pounds => 453.592,
            Unit::Ounces => 28.3495,

            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => return None,

            Unit::Liters => 1.0,
            Unit::Milliliters => 0.001,
            Unit::Gallons => 3.78541,
            // Known approximation: the US legal cup is 0.2366 L.
            // 0.24 is kept for parity with the published tables.
            Unit::Cups => 0.24,
        };
        Some(factor)
    }

    /// Check if this is the category's base unit
    pub fn is_base(&self) -> bool {
        self.base_factor() == Some(1.0)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_units() {
        assert!(Unit::Meters.is_base());
        assert!(Unit::Grams.is_base());
        assert!(Unit::Liters.is_base());
        assert!(!Unit::Kilometers.is_base());
        assert!(!Unit::Celsius.is_base());
    }

    #[test]
    fn test_linear_factors_positive() {
        for cat in Category::ALL {
            for unit in cat.units() {
                match cat {
                    Category::Temperature => assert!(unit.base_factor().is_none()),
                    _ => {
                        let f = unit.base_factor().unwrap();
                        assert!(f > 0.0, "{} factor must be positive", unit);
                    }
                }
            }
        }
    }

    #[test]
    fn test_known_factors() {
        assert_eq!(Unit::Miles.base_factor(), Some(1609.34));
        assert_eq!(Unit::Kilograms.base_factor(), Some(1000.0));
        assert_eq!(Unit::Gallons.base_factor(), Some(3.78541));
        assert_eq!(Unit::Cups.base_factor(), Some(0.24));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Unit::Meters.to_string(), "meters");
        assert_eq!(Unit::Celsius.to_string(), "Celsius");
    }
}
