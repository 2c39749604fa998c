//! Amount parsing and validation
//!
//! Amounts are plain `f64` values that are guaranteed finite.
//! Parsing never substitutes a default: blank or malformed text is an error.

use thiserror::Error;

/// Error type for amount parsing and arithmetic
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("Amount is empty")]
    Empty,

    #[error("Invalid number format: {0}")]
    Parse(String),

    #[error("Amount is not finite: {0}")]
    NonFinite(f64),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow: result too large")]
    Overflow,
}

/// Comparison tolerances for floating point results
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Check two values are equal within absolute or relative tolerance
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities
pub fn ensure_finite(value: f64) -> Result<f64, AmountError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AmountError::NonFinite(value))
    }
}

/// Parse an amount typed by a user.
/// Supports: "123", "3.14", "-42", "+.5", "1.5e2", "1/4"
pub fn parse_amount(s: &str) -> Result<f64, AmountError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }

    // Simple fraction "a/b"
    if let Some((num_str, den_str)) = s.split_once('/') {
        let num = parse_decimal(num_str.trim(), s)?;
        let den = parse_decimal(den_str.trim(), s)?;
        if den == 0.0 {
            return Err(AmountError::DivisionByZero);
        }
        let value = num / den;
        return if value.is_finite() { Ok(value) } else { Err(AmountError::Overflow) };
    }

    parse_decimal(s, s)
}

/// Parse text written with locale separators, e.g. "2.500,5" with `','`
/// as decimal and `'.'` as grouping separator.
///
/// Grouping is only accepted in the integer digits and only in groups of
/// three ("1,234,567"); "1,5" with `','` as grouping separator is an error
/// rather than 15.
pub fn parse_amount_localized(
    s: &str,
    decimal_separator: char,
    grouping_separator: Option<char>,
) -> Result<f64, AmountError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    let grouping = grouping_separator.filter(|&g| g != decimal_separator);

    let normalized = match s.split_once('/') {
        Some((num, den)) => format!(
            "{}/{}",
            normalize_part(num.trim(), decimal_separator, grouping)
                .ok_or_else(|| AmountError::Parse(s.to_string()))?,
            normalize_part(den.trim(), decimal_separator, grouping)
                .ok_or_else(|| AmountError::Parse(s.to_string()))?,
        ),
        None => normalize_part(s, decimal_separator, grouping)
            .ok_or_else(|| AmountError::Parse(s.to_string()))?,
    };
    parse_amount(&normalized).map_err(|e| match e {
        AmountError::Parse(_) => AmountError::Parse(s.to_string()),
        other => other,
    })
}

/// Rewrite one number into plain "-1234.5e3" form, `None` when malformed
fn normalize_part(part: &str, decimal_separator: char, grouping: Option<char>) -> Option<String> {
    let (mantissa, exponent) = match part.find(['e', 'E']) {
        Some(i) => part.split_at(i),
        None => (part, ""),
    };
    let (sign, mantissa) = match mantissa.strip_prefix(['-', '+']) {
        Some(rest) => (&mantissa[..1], rest),
        None => ("", mantissa),
    };
    let (int_part, frac_part) = match mantissa.split_once(decimal_separator) {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };

    let int_digits = match grouping {
        Some(g) if int_part.contains(g) => {
            let mut groups = int_part.split(g);
            let first = groups.next()?;
            if first.is_empty() || first.len() > 3 {
                return None;
            }
            let mut digits = first.to_string();
            for group in groups {
                if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                digits.push_str(group);
            }
            digits
        }
        _ => int_part.to_string(),
    };

    let stray = |text: &str| {
        grouping.is_some_and(|g| text.contains(g))
            || (decimal_separator != '.' && text.contains('.'))
    };
    if stray(&int_digits) || frac_part.is_some_and(stray) || stray(exponent) {
        return None;
    }

    let mut out = format!("{}{}", sign, int_digits);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out.push_str(exponent);
    Some(out)
}

fn parse_decimal(s: &str, original: &str) -> Result<f64, AmountError> {
    // f64::from_str also accepts "inf" and "NaN"; only digits, signs,
    // a point and an exponent marker are valid amount characters.
    let valid = !s.is_empty()
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !valid {
        return Err(AmountError::Parse(original.to_string()));
    }

    let value: f64 = s.parse()
        .map_err(|_| AmountError::Parse(original.to_string()))?;

    // "1e999" parses to infinity
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AmountError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_amount("123"), Ok(123.0));
        assert_eq!(parse_amount("  -42 "), Ok(-42.0));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_amount("3.25"), Ok(3.25));
        assert_eq!(parse_amount("+.5"), Ok(0.5));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse_amount("1.5e2"), Ok(150.0));
        assert_eq!(parse_amount("2E-3"), Ok(0.002));
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_amount("1/4"), Ok(0.25));
        assert_eq!(parse_amount(" 3 / 2 "), Ok(1.5));
        assert_eq!(parse_amount("1/0"), Err(AmountError::DivisionByZero));
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_amount("abc"), Err(AmountError::Parse(_))));
        assert!(matches!(parse_amount("1.2.3"), Err(AmountError::Parse(_))));
        assert!(matches!(parse_amount("5 km"), Err(AmountError::Parse(_))));
        assert!(matches!(parse_amount("-"), Err(AmountError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_non_finite_spellings() {
        assert!(matches!(parse_amount("NaN"), Err(AmountError::Parse(_))));
        assert!(matches!(parse_amount("inf"), Err(AmountError::Parse(_))));
        assert!(matches!(parse_amount("-infinity"), Err(AmountError::Parse(_))));
        assert_eq!(parse_amount("1e999"), Err(AmountError::Overflow));
    }

    #[test]
    fn test_parse_localized_comma_decimal() {
        assert_eq!(parse_amount_localized("1,5", ',', None), Ok(1.5));
        assert_eq!(parse_amount_localized("2.500,5", ',', Some('.')), Ok(2500.5));
        assert_eq!(parse_amount_localized("-1.000,25e2", ',', Some('.')), Ok(-100025.0));
        assert!(matches!(parse_amount_localized("1.5", ',', None), Err(AmountError::Parse(_))));
        assert!(matches!(parse_amount_localized("1.5", ',', Some('.')), Err(AmountError::Parse(_))));
        assert_eq!(parse_amount_localized("2.5", '.', Some(',')), Ok(2.5));
    }

    #[test]
    fn test_parse_localized_grouping() {
        assert_eq!(parse_amount_localized("1,000,000", '.', Some(',')), Ok(1_000_000.0));
        assert_eq!(parse_amount_localized("12,345.5", '.', Some(',')), Ok(12345.5));
        assert_eq!(parse_amount_localized("+1,000 / 4", '.', Some(',')), Ok(250.0));
        assert_eq!(parse_amount_localized("1234", '.', Some(',')), Ok(1234.0));
    }

    #[test]
    fn test_parse_localized_rejects_misplaced_grouping() {
        let bad = ["1,5", "1,2,3", "1234,567", ",500", "1,000.5,0", "1e1,000", "1,0005"];
        for text in bad {
            assert_eq!(
                parse_amount_localized(text, '.', Some(',')),
                Err(AmountError::Parse(text.to_string())),
                "{text}"
            );
        }
        assert_eq!(parse_amount_localized(" ", '.', Some(',')), Err(AmountError::Empty));
        assert_eq!(parse_amount_localized("1/0", '.', Some(',')), Err(AmountError::DivisionByZero));
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(1.0), Ok(1.0));
        assert!(matches!(ensure_finite(f64::NAN), Err(AmountError::NonFinite(_))));
        assert_eq!(
            ensure_finite(f64::NEG_INFINITY),
            Err(AmountError::NonFinite(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_nearly_equal() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }
}
