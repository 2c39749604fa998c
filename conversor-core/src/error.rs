//! Structured errors for the presentation layer
//!
//! Engine errors are typed enums; at the outer surface they are flattened
//! into a serializable record with a machine-readable code and a hint
//! the user can act on.

use crate::AmountError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const INVALID_AMOUNT: &str = "INVALID_AMOUNT";
    pub const INVALID_FORMAT: &str = "INVALID_FORMAT";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Structured error shown next to a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversorError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ConversorError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn unknown_unit(text: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", text))
            .with_suggestion("Pick a unit from the list of supported units")
    }

    pub fn dimension_mismatch(from: &str, to: &str) -> Self {
        Self::new(codes::DIMENSION_MISMATCH,
            format!("Cannot convert {} to {}: incompatible dimensions", from, to))
            .with_suggestion("Choose source and destination units that measure the same thing")
    }

    pub fn invalid_amount(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_AMOUNT, format!("Invalid amount: {}", details.into()))
            .with_suggestion("Enter a finite number such as 12, 0.5, 1.5e3 or 1/4")
    }

    pub fn invalid_format(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_FORMAT, format!("Invalid format: {}", details.into()))
            .with_suggestion("Write an amount and a unit like '5 km', or a conversion like 'km -> mi'")
    }

    pub fn config_error(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG_ERROR, format!("Configuration error: {}", details.into()))
    }
}

impl std::fmt::Display for ConversorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConversorError {}

impl From<AmountError> for ConversorError {
    fn from(err: AmountError) -> Self {
        Self::invalid_amount(err.to_string())
    }
}
