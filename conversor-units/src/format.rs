//! Labels for presenting units

use crate::{Dimension, Unit};

/// Short picker label: the unit symbol ("km")
pub fn short_label(unit: Unit) -> &'static str {
    unit.symbol()
}

/// Long label: the capitalized display name ("Kilometers")
pub fn long_label(unit: Unit) -> String {
    capitalize(unit.name())
}

/// Title for a dimension's converter ("Length")
pub fn dimension_label(dimension: Dimension) -> String {
    capitalize(dimension.name())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
