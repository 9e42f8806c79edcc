//! Unitconv Core - Unit Conversion Engine
//!
//! Pure conversion functions over static factor tables.
//! Linear categories normalize through a base unit; temperature
//! converts through a Celsius pivot.
//!
//! Categories:
//! - Length (meters, kilometers, miles, inches, feet)
//! - Weight (grams, kilograms, pounds, ounces)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//! - Volume (liters, milliliters, gallons, cups)

mod category;
mod unit;
mod registry;
mod convert;
mod error;

pub use category::Category;
pub use unit::Unit;
pub use registry::{UnitRegistry, UNITS};
pub use convert::convert;
pub use error::ConvertError;
