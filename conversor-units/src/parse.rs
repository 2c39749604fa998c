//! Unit string parsing - parse text like "5 km" or "km -> mi"

use conversor_core::parse_amount;
use crate::{Unit, Quantity, ConversionError};
use crate::units::UNITS;

/// Parse a unit symbol or name into a Unit
///
/// Symbols are matched exactly ("km"), names case-insensitively
/// ("Kilometers", "metre", "lbs").
pub fn parse_unit(s: &str) -> Result<Unit, ConversionError> {
    UNITS.lookup(s)
}

/// Parse a conversion specification like "km->mi" or "kg to lb"
pub fn parse_conversion(s: &str) -> Result<(Unit, Unit), ConversionError> {
    // " in " must come last: "in" is also the inch symbol
    let separators = ["->", "→", " to ", " in "];

    let (from, to) = separators
        .iter()
        .find_map(|sep| s.split_once(sep))
        .ok_or_else(|| ConversionError::InvalidFormat(
            format!("'{}', expected 'unit1->unit2'", s.trim())
        ))?;

    let from_unit = parse_unit(from)?;
    let to_unit = parse_unit(to)?;

    Ok((from_unit, to_unit))
}

/// Parse a quantity string like "5 m", "100kg" or "-1.5e3 ft"
pub fn parse_quantity(s: &str) -> Result<Quantity, ConversionError> {
    let s = s.trim();

    // Find where the number ends and unit begins
    let mut split_pos = 0;
    let mut prev: Option<char> = None;

    for (i, c) in s.char_indices() {
        let is_number_char = c.is_ascii_digit()
            || c == '.'
            || c == '/'
            || ((c == '-' || c == '+') && matches!(prev, None | Some('e') | Some('E')))
            || ((c == 'e' || c == 'E') && matches!(prev, Some(p) if p.is_ascii_digit() || p == '.')
                && s[i + 1..].starts_with(|n: char| n.is_ascii_digit() || n == '-' || n == '+'));

        if !is_number_char {
            break;
        }
        split_pos = i + c.len_utf8();
        prev = Some(c);
    }

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    if unit_str.is_empty() {
        return Err(ConversionError::InvalidFormat(
            format!("'{}' has no unit, expected an amount and a unit like '5 km'", s)
        ));
    }

    let amount = parse_amount(num_str)?;
    let unit = parse_unit(unit_str)?;

    Ok(Quantity::new(amount, unit)?)
}
