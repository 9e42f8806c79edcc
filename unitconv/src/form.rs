//! Converter form state
//!
//! View-model for a converter window: input text, active category,
//! source/target selectors, rendered output and a one-line message.
//! Every mutation reconverts immediately, so the output field always
//! reflects the current selections.

use unitconv_core::{convert, Category, ConvertError, Unit};
use crate::{format_value, parse_value};

/// State behind the converter window
#[derive(Debug, Clone)]
pub struct ConverterForm {
    input: String,
    category: Category,
    source: Unit,
    target: Unit,
    output: String,
    message: String,
}

impl ConverterForm {
    /// Fresh form: Length selected, both selectors on the first unit
    pub fn new() -> Self {
        let category = Category::Length;
        let first = category.units()[0];
        ConverterForm {
            input: String::new(),
            category,
            source: first,
            target: first,
            output: String::new(),
            message: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn source_unit(&self) -> Unit {
        self.source
    }

    pub fn target_unit(&self) -> Unit {
        self.target
    }

    /// Rendered result text; empty when there is nothing valid to show
    pub fn output(&self) -> &str {
        &self.output
    }

    /// One-line user message; empty when the last input was valid
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Units offered by both selectors, in declared order
    pub fn units(&self) -> &'static [Unit] {
        self.category.units()
    }

    /// Replace the input text and reconvert
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.refresh();
    }

    /// Switch category: both selectors reset to the category's first
    /// unit and the conversion reruns against the new unit set
    pub fn set_category(&mut self, category: Category) {
        let first = category.units()[0];
        self.category = category;
        self.source = first;
        self.target = first;
        self.refresh();
    }

    /// Select the source unit; must belong to the active category
    pub fn set_source_unit(&mut self, unit: Unit) -> Result<(), ConvertError> {
        self.check_selectable(unit)?;
        self.source = unit;
        self.refresh();
        Ok(())
    }

    /// Select the target unit; must belong to the active category
    pub fn set_target_unit(&mut self, unit: Unit) -> Result<(), ConvertError> {
        self.check_selectable(unit)?;
        self.target = unit;
        self.refresh();
        Ok(())
    }

    fn check_selectable(&self, unit: Unit) -> Result<(), ConvertError> {
        if unit.category() != self.category {
            return Err(ConvertError::UnsupportedUnit {
                unit,
                category: self.category,
            });
        }
        Ok(())
    }

    /// Rerun the conversion against the current state. The message is
    /// cleared first so a valid input wipes any earlier error.
    fn refresh(&mut self) {
        self.message.clear();
        self.output.clear();

        let value = match parse_value(&self.input) {
            Ok(Some(v)) => v,
            Ok(None) => return,
            Err(e) => {
                self.message = e.to_string();
                return;
            }
        };

        match convert(self.category, value, self.source, self.target) {
            Ok(result) => self.output = format_value(result),
            // Unreachable through the selector checks, but never shown
            // as a wrong number if it does happen.
            Err(e) => self.message = e.to_string(),
        }
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}
