//! Conversion through the base unit of a dimension
//!
//! Every unit only knows its scale factor to the base unit, so any pair of
//! units in a dimension converts in two steps without a pairwise table.

use serde::{Serialize, Deserialize};
use conversor_core::{AmountError, ensure_finite};
use crate::{Unit, ConversionError};

/// Convert `amount` from one unit to another of the same dimension.
///
/// Converting a unit to itself returns `amount` unchanged.
pub fn convert(amount: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    if !from.is_compatible(&to) {
        return Err(ConversionError::mismatch(from, to));
    }
    let amount = ensure_finite(amount)?;
    if from == to {
        return Ok(amount);
    }

    let base_value = from.to_base(amount);
    let result = to.from_base(base_value);
    if result.is_finite() {
        Ok(result)
    } else {
        Err(AmountError::Overflow.into())
    }
}

/// Express `amount` of `unit` in the base unit of its dimension
pub fn to_base(amount: f64, unit: Unit) -> Result<f64, ConversionError> {
    convert(amount, unit, unit.dimension().base_unit())
}

/// A single conversion to perform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: Unit,
    pub to: Unit,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: Unit, to: Unit) -> Self {
        ConversionRequest { amount, from, to }
    }

    pub fn execute(self) -> Result<f64, ConversionError> {
        convert(self.amount, self.from, self.to)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;
    use conversor_core::{nearly_equal, Tolerances};
    use crate::units::UNITS;
    use crate::Dimension;

    fn any_unit() -> impl Strategy<Value = Unit> {
        select(Unit::ALL.to_vec())
    }

    fn same_dimension_pair() -> impl Strategy<Value = (Unit, Unit)> {
        select(Dimension::ALL.to_vec()).prop_flat_map(|dim| {
            let units = UNITS.list_units(dim).to_vec();
            (select(units.clone()), select(units))
        })
    }

    fn amount() -> impl Strategy<Value = f64> {
        -1e9_f64..1e9_f64
    }

    proptest! {
        #[test]
        fn identity_is_exact(unit in any_unit(), a in amount()) {
            prop_assert_eq!(convert(a, unit, unit), Ok(a));
        }

        #[test]
        fn round_trip_within_tolerance((u1, u2) in same_dimension_pair(), a in amount()) {
            let there = convert(a, u1, u2).unwrap();
            let back = convert(there, u2, u1).unwrap();
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(back, a, tol), "{} -> {} -> {}", a, there, back);
        }

        #[test]
        fn linear_in_scale_factors((u1, u2) in same_dimension_pair(), a in amount()) {
            let expected = a * (u1.scale_factor() / u2.scale_factor());
            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            prop_assert!(nearly_equal(convert(a, u1, u2).unwrap(), expected, tol));
        }

        #[test]
        fn cross_dimension_always_fails(u1 in any_unit(), u2 in any_unit(), a in amount()) {
            prop_assume!(u1.dimension() != u2.dimension());
            let is_mismatch = matches!(
                convert(a, u1, u2),
                Err(ConversionError::DimensionMismatch { .. })
            );
            prop_assert!(is_mismatch);
        }

        #[test]
        fn unknown_symbols_fail(text in "zz[a-z]{2,6}") {
            let is_unknown = matches!(UNITS.lookup(&text), Err(ConversionError::UnknownUnit { .. }));
            prop_assert!(is_unknown);
        }
    }
}
