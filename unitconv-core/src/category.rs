//! Unit categories - closed set, exhaustively matched

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::Unit;

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
}

impl Category {
    /// All categories, in the order they are presented to the user
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
    ];

    /// Display name of the category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
        }
    }

    /// The category's units, in declared presentation order
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Length => &[
                Unit::Meters,
                Unit::Kilometers,
                Unit::Miles,
                Unit::Inches,
                Unit::Feet,
            ],
            Category::Weight => &[
                Unit::Grams,
                Unit::Kilograms,
                Unit::Pounds,
                Unit::Ounces,
            ],
            Category::Temperature => &[
                Unit::Celsius,
                Unit::Fahrenheit,
                Unit::Kelvin,
            ],
            Category::Volume => &[
                Unit::Liters,
                Unit::Milliliters,
                Unit::Gallons,
                Unit::Cups,
            ],
        }
    }

    /// Check whether a unit belongs to this category
    pub fn contains(&self, unit: Unit) -> bool {
        unit.category() == *self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = crate::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" => Ok(Category::Weight),
            "temperature" => Ok(Category::Temperature),
            "volume" => Ok(Category::Volume),
            _ => Err(crate::ConvertError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Length", "Weight", "Temperature", "Volume"]);

        let labels: Vec<&str> = Category::Length.units().iter().map(|u| u.label()).collect();
        assert_eq!(labels, ["meters", "kilometers", "miles", "inches", "feet"]);

        let labels: Vec<&str> = Category::Temperature.units().iter().map(|u| u.label()).collect();
        assert_eq!(labels, ["Celsius", "Fahrenheit", "Kelvin"]);
    }

    #[test]
    fn test_membership() {
        assert!(Category::Length.contains(Unit::Miles));
        assert!(!Category::Weight.contains(Unit::Miles));
        assert!(Category::Volume.contains(Unit::Cups));
    }

    #[test]
    fn test_no_duplicate_units() {
        for cat in Category::ALL {
            let units = cat.units();
            for (i, a) in units.iter().enumerate() {
                assert_eq!(a.category(), cat);
                for b in &units[i + 1..] {
                    assert_ne!(a, b, "duplicate unit in {}", cat);
                }
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("temperature".parse::<Category>().unwrap(), Category::Temperature);
        assert!("Area".parse::<Category>().is_err());
    }
}
