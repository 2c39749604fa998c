//! Conversor - headless unit converter form
//!
//! Wraps the conversion engine in the state model of a single-screen
//! converter: an amount field, "From" and "To" unit pickers and a result
//! label recomputed on every render.
//!
//! ```
//! use conversor::{ConverterForm, Unit};
//!
//! let mut form = ConverterForm::length();
//! form.set_input("5");
//! form.set_source(Unit::Kilometer).unwrap();
//! form.set_destination(Unit::Meter).unwrap();
//! assert_eq!(form.render().result, "5,000");
//! ```

mod config;
mod display;
mod form;

pub use config::{ConfigError, ConverterConfig};
pub use display::{format_number, DisplayOptions, NumberFormat};
pub use form::{ConverterForm, FormView, PickerOption};

pub use conversor_core::ConversorError;
pub use conversor_units::{
    convert, list_units, long_label, short_label, ConversionError, Dimension, Quantity, Unit,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConverterConfig, ConverterForm, DisplayOptions, FormView};
    pub use conversor_core::prelude::*;
    pub use conversor_units::{ConversionError, Dimension, Quantity, Unit};
}
