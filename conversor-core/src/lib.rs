//! Conversor Core - Fundamental types
//!
//! This crate provides the core types used throughout Conversor:
//! - amount parsing that never defaults a bad input to zero
//! - floating point tolerances for comparing converted values
//! - `ConversorError`: structured errors for the presentation layer

mod amount;
mod error;

pub use amount::{
    AmountError, Tolerances, ensure_finite, nearly_equal, parse_amount,
    parse_amount_localized,
};
pub use error::{ConversorError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AmountError, ConversorError, Tolerances};
    pub use crate::error::codes;
}
