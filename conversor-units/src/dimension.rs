//! Physical dimensions
//!
//! A dimension is a class of quantity whose units are mutually convertible.
//! Each dimension has exactly one canonical base unit.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::Unit;

/// Class of physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Length [L], base unit meters
    Length,
    /// Mass [M], base unit kilograms
    Mass,
}

impl Dimension {
    /// Every dimension, in registry order
    pub const ALL: [Dimension; 2] = [Dimension::Length, Dimension::Mass];

    /// The canonical unit every scale factor in this dimension is relative to
    pub fn base_unit(&self) -> Unit {
        match self {
            Dimension::Length => Unit::Meter,
            Dimension::Mass => Unit::Kilogram,
        }
    }

    /// Lowercase dimension name
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a dimension name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension: {0}")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Dimension::ALL
            .into_iter()
            .find(|d| d.name() == lowered)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}
