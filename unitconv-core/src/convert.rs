//! The conversion engine
//!
//! Linear categories normalize through the base unit:
//! `value * factor(from) / factor(to)`. That needs 2xN stored constants
//! instead of N^2 pairwise formulas and makes A->B->A round-trip up to
//! floating-point rounding. Temperature routes through a Celsius pivot.

use crate::{Category, ConvertError, Unit};

/// Convert `value` from `from` to `to` within `category`.
///
/// Both units must belong to `category`; `value` is expected to be a
/// finite float (callers parse and validate input first). Converting a
/// unit to itself returns `value` untouched.
pub fn convert(category: Category, value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    check_member(category, from)?;
    check_member(category, to)?;

    if from == to {
        return Ok(value);
    }

    let result = match category {
        Category::Temperature => from_celsius(to_celsius(value, from), to),
        _ => linear(value, from, to),
    };
    Ok(result)
}

fn check_member(category: Category, unit: Unit) -> Result<(), ConvertError> {
    if unit.category() != category {
        return Err(ConvertError::UnsupportedUnit { unit, category });
    }
    Ok(())
}

/// Base-unit normalization for Length, Weight and Volume.
///
/// Units reaching this point are linear-category members, so the factor
/// lookups cannot miss.
fn linear(value: f64, from: Unit, to: Unit) -> f64 {
    let from_factor = from.base_factor().unwrap_or(1.0);
    let to_factor = to.base_factor().unwrap_or(1.0);
    value * from_factor / to_factor
}

fn to_celsius(value: f64, from: Unit) -> f64 {
    match from {
        Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Unit::Kelvin => value - 273.15,
        _ => value,
    }
}

fn from_celsius(celsius: f64, to: Unit) -> f64 {
    match to {
        Unit::Fahrenheit => (celsius * 9.0 / 5.0) + 32.0,
        Unit::Kelvin => celsius + 273.15,
        _ => celsius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= 1e-9 * scale,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_identity_is_exact() {
        for cat in Category::ALL {
            for &unit in cat.units() {
                for v in [0.0, 1.0, -40.0, 0.1, 12345.6789] {
                    assert_eq!(convert(cat, v, unit, unit).unwrap(), v);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        let v = 7.25;
        for cat in Category::ALL {
            for &a in cat.units() {
                for &b in cat.units() {
                    let there = convert(cat, v, a, b).unwrap();
                    let back = convert(cat, there, b, a).unwrap();
                    assert_close(back, v);
                }
            }
        }
    }

    #[test]
    fn test_length_fixed_points() {
        assert_close(
            convert(Category::Length, 1.0, Unit::Miles, Unit::Meters).unwrap(),
            1609.34,
        );
        assert_close(
            convert(Category::Length, 1.0, Unit::Feet, Unit::Inches).unwrap(),
            12.0,
        );
    }

    #[test]
    fn test_weight_fixed_points() {
        assert_eq!(
            convert(Category::Weight, 1.0, Unit::Kilograms, Unit::Grams).unwrap(),
            1000.0,
        );
        assert_close(
            convert(Category::Weight, 1.0, Unit::Pounds, Unit::Grams).unwrap(),
            453.592,
        );
    }

    #[test]
    fn test_volume_fixed_points() {
        assert_close(
            convert(Category::Volume, 1.0, Unit::Gallons, Unit::Liters).unwrap(),
            3.78541,
        );
        assert_close(
            convert(Category::Volume, 1.0, Unit::Liters, Unit::Milliliters).unwrap(),
            1000.0,
        );
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(
            convert(Category::Temperature, 0.0, Unit::Celsius, Unit::Fahrenheit).unwrap(),
            32.0,
        );
        assert_close(
            convert(Category::Temperature, 212.0, Unit::Fahrenheit, Unit::Celsius).unwrap(),
            100.0,
        );
        assert_eq!(
            convert(Category::Temperature, 0.0, Unit::Celsius, Unit::Kelvin).unwrap(),
            273.15,
        );
        // F <-> K composes through the Celsius pivot
        assert_close(
            convert(Category::Temperature, 32.0, Unit::Fahrenheit, Unit::Kelvin).unwrap(),
            273.15,
        );
    }

    #[test]
    fn test_out_of_category_unit_is_rejected() {
        let err = convert(Category::Weight, 1.0, Unit::Miles, Unit::Grams).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnsupportedUnit {
                unit: Unit::Miles,
                category: Category::Weight,
            }
        );

        let err = convert(Category::Length, 1.0, Unit::Meters, Unit::Kelvin).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnsupportedUnit {
                unit: Unit::Kelvin,
                category: Category::Length,
            }
        );
    }

    #[test]
    fn test_negative_temperatures() {
        assert_close(
            convert(Category::Temperature, -40.0, Unit::Celsius, Unit::Fahrenheit).unwrap(),
            -40.0,
        );
    }
}
