//! Typed conversion errors
//!
//! The engine never returns a silently wrong number: a unit outside the
//! active category comes back as `UnsupportedUnit`, and label lookups that
//! miss come back as `UnknownUnit` / `UnknownCategory`.

use thiserror::Error;
use crate::{Category, Unit};

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Unit is valid but does not belong to the requested category
    #[error("unit '{unit}' is not a {category} unit")]
    UnsupportedUnit { unit: Unit, category: Category },

    /// Label does not name any known unit
    #[error("unknown unit: '{0}'")]
    UnknownUnit(String),

    /// Label does not name any known category
    #[error("unknown category: '{0}'")]
    UnknownCategory(String),
}
