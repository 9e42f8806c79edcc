//! Label registry - resolves unit labels to units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, ConvertError, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units, keyed by display label
pub struct UnitRegistry {
    by_label: HashMap<&'static str, Unit>,
    by_lower: HashMap<String, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut by_label = HashMap::new();
        let mut by_lower = HashMap::new();
        for category in Category::ALL {
            for &unit in category.units() {
                by_label.insert(unit.label(), unit);
                by_lower.insert(unit.label().to_ascii_lowercase(), unit);
            }
        }
        UnitRegistry { by_label, by_lower }
    }

    /// Get a unit by label; exact match first, then case-insensitive
    pub fn get(&self, label: &str) -> Option<Unit> {
        if let Some(&unit) = self.by_label.get(label) {
            return Some(unit);
        }
        self.by_lower.get(&label.to_ascii_lowercase()).copied()
    }

    /// Resolve a label within a category, rejecting out-of-category units
    pub fn resolve(&self, category: Category, label: &str) -> Result<Unit, ConvertError> {
        let unit = self
            .get(label)
            .ok_or_else(|| ConvertError::UnknownUnit(label.to_string()))?;
        if unit.category() != category {
            return Err(ConvertError::UnsupportedUnit { unit, category });
        }
        Ok(unit)
    }

    /// Labels of a category's units, in declared order
    pub fn labels(&self, category: Category) -> Vec<&'static str> {
        category.units().iter().map(|u| u.label()).collect()
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
