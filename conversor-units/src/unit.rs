//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use conversor_core::{AmountError, ConversorError};
use crate::Dimension;

/// A supported unit of measurement.
///
/// Every property is an exhaustive `match`, so adding a variant fails to
/// compile until its dimension, symbol, name and scale factor are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    // Length
    Millimeter,
    Centimeter,
    Decimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,

    // Mass
    Milligram,
    Gram,
    Kilogram,
    MetricTon,
    Ounce,
    Pound,
    Stone,
}

impl Unit {
    /// Every unit, grouped by dimension, each group in display order
    pub const ALL: [Unit; 16] = [
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Decimeter,
        Unit::Meter,
        Unit::Kilometer,
        Unit::Inch,
        Unit::Foot,
        Unit::Yard,
        Unit::Mile,
        Unit::Milligram,
        Unit::Gram,
        Unit::Kilogram,
        Unit::MetricTon,
        Unit::Ounce,
        Unit::Pound,
        Unit::Stone,
    ];

    /// The dimension this unit measures
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Millimeter
            | Unit::Centimeter
            | Unit::Decimeter
            | Unit::Meter
            | Unit::Kilometer
            | Unit::Inch
            | Unit::Foot
            | Unit::Yard
            | Unit::Mile => Dimension::Length,

            Unit::Milligram
            | Unit::Gram
            | Unit::Kilogram
            | Unit::MetricTon
            | Unit::Ounce
            | Unit::Pound
            | Unit::Stone => Dimension::Mass,
        }
    }

    /// The unit symbol (e.g., "m", "kg")
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Decimeter => "dm",
            Unit::Meter => "m",
            Unit::Kilometer => "km",
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Yard => "yd",
            Unit::Mile => "mi",
            Unit::Milligram => "mg",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::MetricTon => "t",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Stone => "st",
        }
    }

    /// The display name, lowercase plural (e.g., "kilometers")
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Millimeter => "millimeters",
            Unit::Centimeter => "centimeters",
            Unit::Decimeter => "decimeters",
            Unit::Meter => "meters",
            Unit::Kilometer => "kilometers",
            Unit::Inch => "inches",
            Unit::Foot => "feet",
            Unit::Yard => "yards",
            Unit::Mile => "miles",
            Unit::Milligram => "milligrams",
            Unit::Gram => "grams",
            Unit::Kilogram => "kilograms",
            Unit::MetricTon => "metric tons",
            Unit::Ounce => "ounces",
            Unit::Pound => "pounds",
            Unit::Stone => "stones",
        }
    }

    /// How many base units equal one of this unit. Always > 0.
    pub fn scale_factor(&self) -> f64 {
        match self {
            Unit::Millimeter => 0.001,
            Unit::Centimeter => 0.01,
            Unit::Decimeter => 0.1,
            Unit::Meter => 1.0,
            Unit::Kilometer => 1000.0,
            Unit::Inch => 0.0254,
            Unit::Foot => 0.3048,
            Unit::Yard => 0.9144,
            Unit::Mile => 1609.344,
            Unit::Milligram => 0.000001,
            Unit::Gram => 0.001,
            Unit::Kilogram => 1.0,
            Unit::MetricTon => 1000.0,
            Unit::Ounce => 0.028349523125,
            Unit::Pound => 0.45359237,
            Unit::Stone => 6.35029318,
        }
    }

    /// Check if this is the base unit of its dimension
    pub fn is_base(&self) -> bool {
        self.dimension().base_unit() == *self
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension() == other.dimension()
    }

    /// Express a value of this unit in base units
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale_factor()
    }

    /// Express a base-unit value in this unit
    pub fn from_base(&self, base_value: f64) -> f64 {
        base_value / self.scale_factor()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors that can occur during unit lookup and conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Unit symbol or name not present in the registry
    #[error("unknown unit: {text}{}", in_dimension(.dimension))]
    UnknownUnit {
        text: String,
        dimension: Option<Dimension>,
    },

    /// Units measure different dimensions
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    DimensionMismatch {
        from: Unit,
        to: Unit,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    /// Non-finite or unparseable amount
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// Text that is not shaped like a quantity or conversion
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

fn in_dimension(dimension: &Option<Dimension>) -> String {
    dimension.map(|d| format!(" (in {})", d)).unwrap_or_default()
}

impl ConversionError {
    pub fn unknown_unit(text: &str) -> Self {
        ConversionError::UnknownUnit { text: text.to_string(), dimension: None }
    }

    pub fn unknown_unit_in(text: &str, dimension: Dimension) -> Self {
        ConversionError::UnknownUnit { text: text.to_string(), dimension: Some(dimension) }
    }

    pub fn mismatch(from: Unit, to: Unit) -> Self {
        ConversionError::DimensionMismatch {
            from,
            to,
            from_dim: from.dimension(),
            to_dim: to.dimension(),
        }
    }
}

impl From<ConversionError> for ConversorError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownUnit { text, .. } => ConversorError::unknown_unit(&text),
            ConversionError::DimensionMismatch { from, to, .. } => {
                ConversorError::dimension_mismatch(from.symbol(), to.symbol())
            }
            ConversionError::InvalidAmount(e) => e.into(),
            ConversionError::InvalidFormat(details) => ConversorError::invalid_format(details),
        }
    }
}
