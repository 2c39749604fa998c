//! Conversor Units - Unit registry and conversion engine
//!
//! Converts scalar amounts between units of the same dimension through the
//! dimension's base unit. Every unit carries a single scale factor to its
//! base unit, so adding a unit never requires pairwise conversion entries.
//!
//! Dimensions:
//! - Length (mm, cm, dm, m, km, in, ft, yd, mi), base unit meters
//! - Mass (mg, g, kg, t, oz, lb, st), base unit kilograms
//!
//! The registry is process-wide and read-only; every operation is a pure
//! function and safe to call from any thread.

mod dimension;
mod unit;
mod quantity;
mod convert;
mod format;
mod parse;
mod units;

pub use dimension::{Dimension, UnknownDimension};
pub use unit::{Unit, ConversionError};
pub use quantity::Quantity;
pub use convert::{convert, to_base, ConversionRequest};
pub use format::{short_label, long_label, dimension_label};
pub use units::{UnitRegistry, UNITS};
pub use parse::{parse_unit, parse_conversion, parse_quantity};

/// Units of a dimension in display order
pub fn list_units(dimension: Dimension) -> &'static [Unit] {
    UNITS.list_units(dimension)
}

/// The unit symbol ("km")
pub fn symbol(unit: Unit) -> &'static str {
    unit.symbol()
}

/// The lowercase display name ("kilometers")
pub fn display_name(unit: Unit) -> &'static str {
    unit.name()
}
