//! Unitconv - Conversion Boundary Layer
//!
//! Everything a presentation surface needs between raw user text and the
//! conversion engine: numeric input parsing with an empty/invalid
//! distinction, fixed 4-decimal rendering, and `ConverterForm`, a
//! view-model that drives the selector lists, output field and one-line
//! message the way the converter window behaves.

mod input;
mod format;
mod form;

pub use input::{parse_value, InputError};
pub use format::format_value;
pub use form::ConverterForm;

pub use unitconv_core::{convert, Category, ConvertError, Unit, UNITS};
