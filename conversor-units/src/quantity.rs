//! Quantity type - a finite amount with an associated unit

use std::fmt;
use serde::{Serialize, Deserialize};
use conversor_core::ensure_finite;
use crate::{Unit, Dimension, ConversionError, convert};

/// A physical quantity. Immutable: conversions return new values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    amount: f64,
    unit: Unit,
}

impl Quantity {
    /// Create a new quantity, rejecting NaN and infinities
    pub fn new(amount: f64, unit: Unit) -> Result<Self, ConversionError> {
        let amount = ensure_finite(amount)?;
        Ok(Quantity { amount, unit })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Get the dimension of this quantity
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Check if two quantities have compatible dimensions
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Convert to another unit. Chains: `q.convert_to(a)?.convert_to(b)?`
    pub fn convert_to(&self, target: Unit) -> Result<Quantity, ConversionError> {
        let amount = convert(self.amount, self.unit, target)?;
        Ok(Quantity { amount, unit: target })
    }

    /// Convert to the base unit of this quantity's dimension
    pub fn to_base(&self) -> Result<Quantity, ConversionError> {
        self.convert_to(self.dimension().base_unit())
    }

    /// Add two quantities; the result is in `self`'s unit
    pub fn add(&self, other: &Quantity) -> Result<Quantity, ConversionError> {
        let converted = other.convert_to(self.unit)?;
        Quantity::new(self.amount + converted.amount, self.unit)
    }

    /// Subtract two quantities; the result is in `self`'s unit
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, ConversionError> {
        let converted = other.convert_to(self.unit)?;
        Quantity::new(self.amount - converted.amount, self.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conversor_core::{AmountError, nearly_equal, Tolerances};

    fn km(amount: f64) -> Quantity {
        Quantity::new(amount, Unit::Kilometer).unwrap()
    }

    fn m(amount: f64) -> Quantity {
        Quantity::new(amount, Unit::Meter).unwrap()
    }

    #[test]
    fn test_quantity_creation() {
        let q = m(5.0);
        assert_eq!(q.amount(), 5.0);
        assert_eq!(q.unit(), Unit::Meter);
        assert_eq!(q.dimension(), Dimension::Length);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            Quantity::new(f64::NAN, Unit::Meter),
            Err(ConversionError::InvalidAmount(AmountError::NonFinite(_)))
        ));
    }

    #[test]
    fn test_convert_to() {
        let converted = m(5000.0).convert_to(Unit::Kilometer).unwrap();
        assert_eq!(converted, km(5.0));
    }

    #[test]
    fn test_chained_conversion() {
        let q = Quantity::new(1.0, Unit::Mile).unwrap();
        let back = q
            .convert_to(Unit::Foot).unwrap()
            .convert_to(Unit::Centimeter).unwrap()
            .convert_to(Unit::Mile).unwrap();
        assert_eq!(back.unit(), Unit::Mile);
        assert!(nearly_equal(back.amount(), 1.0, Tolerances::default()));
    }

    #[test]
    fn test_convert_to_other_dimension_fails() {
        assert!(matches!(
            m(1.0).convert_to(Unit::Pound),
            Err(ConversionError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_to_base() {
        let base = km(5.0).to_base().unwrap();
        assert_eq!(base, m(5000.0));
    }

    #[test]
    fn test_add() {
        // 1 km + 500 m = 1.5 km
        let sum = km(1.0).add(&m(500.0)).unwrap();
        assert_eq!(sum, km(1.5));
    }

    #[test]
    fn test_sub() {
        let diff = m(1000.0).sub(&km(0.25)).unwrap();
        assert_eq!(diff, m(750.0));
    }

    #[test]
    fn test_add_incompatible() {
        let mass = Quantity::new(1.0, Unit::Gram).unwrap();
        assert!(km(1.0).add(&mass).is_err());
        assert!(!km(1.0).is_compatible(&mass));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", m(5.0)), "5 m");
        assert_eq!(format!("{}", km(1.5)), "1.5 km");
    }
}
