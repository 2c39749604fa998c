//! Converter configuration
//!
//! Every field has a default, so `{}` is a valid configuration and yields
//! the classic length converter (meters to kilometers, input "0").

use serde::{Deserialize, Serialize};
use thiserror::Error;
use conversor_core::ConversorError;
use conversor_units::{ConversionError, Dimension, UNITS};
use crate::display::{DisplayOptions, NumberFormat, MAX_DIGITS};
use crate::form::ConverterForm;

/// Errors raised while loading a configuration or building a form from it
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Unit(#[from] ConversionError),

    #[error("decimal and grouping separators must differ, both are '{0}'")]
    SeparatorClash(char),

    #[error("display precision {0:?} is out of range, digits must be at most {max}", max = MAX_DIGITS)]
    PrecisionOutOfRange(NumberFormat),
}

impl From<ConfigError> for ConversorError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Unit(e) => e.into(),
            other => ConversorError::config_error(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub dimension: Dimension,
    /// Source unit symbol or name; the dimension's base unit when absent
    pub source: Option<String>,
    /// Destination unit symbol or name; the unit after the source when absent
    pub destination: Option<String>,
    pub initial_input: String,
    pub display: DisplayOptions,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Length,
            source: None,
            destination: None,
            initial_input: "0".to_string(),
            display: DisplayOptions::default(),
        }
    }
}

impl ConverterConfig {
    pub fn new(dimension: Dimension) -> Self {
        Self { dimension, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_source(mut self, unit: impl Into<String>) -> Self {
        self.source = Some(unit.into());
        self
    }

    pub fn with_destination(mut self, unit: impl Into<String>) -> Self {
        self.destination = Some(unit.into());
        self
    }

    pub fn with_initial_input(mut self, input: impl Into<String>) -> Self {
        self.initial_input = input.into();
        self
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.grouping_separator == Some(self.display.decimal_separator) {
            return Err(ConfigError::SeparatorClash(self.display.decimal_separator));
        }
        let in_range = match self.display.format {
            NumberFormat::Decimal(places) => places <= MAX_DIGITS,
            NumberFormat::SigFigs(sigfigs) => (1..=MAX_DIGITS).contains(&sigfigs),
        };
        if !in_range {
            return Err(ConfigError::PrecisionOutOfRange(self.display.format));
        }
        Ok(())
    }

    /// Resolve unit names against the registry and build the form
    pub fn build(&self) -> Result<ConverterForm, ConfigError> {
        self.validate()?;

        let mut form = ConverterForm::new(self.dimension).with_display(self.display);
        if let Some(ref text) = self.source {
            form.set_source(UNITS.get(self.dimension, text)?)?;
        }
        if let Some(ref text) = self.destination {
            form.set_destination(UNITS.get(self.dimension, text)?)?;
        }
        form.set_input(self.initial_input.clone());
        Ok(form)
    }
}
