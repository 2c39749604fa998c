//! Converter form model
//!
//! Holds the state behind a single-screen converter: the amount text the
//! user typed, the "From" and "To" units, and the result computed from
//! them on every render. Widgets and layout belong to the host UI.

use serde::Serialize;
use tracing::{debug, warn};
use conversor_core::{parse_amount_localized, ConversorError};
use conversor_units::{
    convert, dimension_label, list_units, long_label, short_label, ConversionError, Dimension,
    Unit,
};
use crate::display::{format_number, DisplayOptions};

/// One entry of a unit picker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerOption {
    pub unit: Unit,
    pub short_label: &'static str,
    pub long_label: String,
}

/// Snapshot of everything a host UI needs to draw the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub title: String,
    pub input: String,
    pub source: &'static str,
    pub destination: &'static str,
    /// Formatted result, empty when there is nothing to show
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ConversorError>,
}

impl FormView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConverterForm {
    dimension: Dimension,
    title: String,
    input: String,
    source: Unit,
    destination: Unit,
    display: DisplayOptions,
}

impl ConverterForm {
    /// Form for `dimension`: base unit to the next unit in display order
    pub fn new(dimension: Dimension) -> Self {
        let units = list_units(dimension);
        let source = dimension.base_unit();
        let destination = units
            .iter()
            .position(|u| *u == source)
            .map(|i| units[(i + 1) % units.len()])
            .unwrap_or(source);

        Self {
            dimension,
            title: dimension_label(dimension),
            input: "0".to_string(),
            source,
            destination,
            display: DisplayOptions::default(),
        }
    }

    /// The classic length converter: meters to kilometers
    pub fn length() -> Self {
        Self::new(Dimension::Length)
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn source(&self) -> Unit {
        self.source
    }

    pub fn destination(&self) -> Unit {
        self.destination
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Units offered by both pickers, in display order
    pub fn units(&self) -> &'static [Unit] {
        list_units(self.dimension)
    }

    pub fn picker_options(&self) -> Vec<PickerOption> {
        self.units()
            .iter()
            .map(|&unit| PickerOption {
                unit,
                short_label: short_label(unit),
                long_label: long_label(unit),
            })
            .collect()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        debug!(input = %self.input, "amount edited");
        if let Err(e) = self.amount() {
            warn!(input = %self.input, error = %e, "amount rejected");
        }
    }

    /// Select the "From" unit; units of another dimension are rejected
    pub fn set_source(&mut self, unit: Unit) -> Result<(), ConversionError> {
        self.check_dimension(unit)?;
        self.source = unit;
        debug!(source = %unit, "source unit selected");
        Ok(())
    }

    /// Select the "To" unit; units of another dimension are rejected
    pub fn set_destination(&mut self, unit: Unit) -> Result<(), ConversionError> {
        self.check_dimension(unit)?;
        self.destination = unit;
        debug!(destination = %unit, "destination unit selected");
        Ok(())
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.source, &mut self.destination);
        debug!(source = %self.source, destination = %self.destination, "units swapped");
    }

    /// Parsed amount; `None` while the field is blank
    pub fn amount(&self) -> Result<Option<f64>, ConversionError> {
        if self.input.trim().is_empty() {
            return Ok(None);
        }
        let amount = parse_amount_localized(
            &self.input,
            self.display.decimal_separator,
            self.display.grouping_separator,
        )?;
        Ok(Some(amount))
    }

    /// Converted amount; `None` while the field is blank
    pub fn result(&self) -> Result<Option<f64>, ConversionError> {
        match self.amount()? {
            Some(amount) => Ok(Some(convert(amount, self.source, self.destination)?)),
            None => Ok(None),
        }
    }

    pub fn render(&self) -> FormView {
        let (result, error) = match self.result() {
            Ok(Some(value)) => (format_number(value, &self.display), None),
            Ok(None) => (String::new(), None),
            Err(e) => {
                debug!(input = %self.input, error = %e, "rendering error");
                (String::new(), Some(ConversorError::from(e)))
            }
        };

        FormView {
            title: self.title.clone(),
            input: self.input.clone(),
            source: short_label(self.source),
            destination: short_label(self.destination),
            result,
            error,
        }
    }

    fn check_dimension(&self, unit: Unit) -> Result<(), ConversionError> {
        if unit.dimension() == self.dimension {
            return Ok(());
        }
        warn!(unit = %unit, dimension = %self.dimension, "unit rejected by form");
        Err(ConversionError::mismatch(unit, self.dimension.base_unit()))
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::length()
    }
}
