//! Number display for converted results
//!
//! The engine never rounds; rounding, separators and notation are chosen
//! here, at the point where a result becomes text.

use serde::{Deserialize, Serialize};

/// Display format for numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// At most N fraction digits, trailing zeros trimmed (default 6)
    Decimal(u32),
    /// Significant figures with scientific notation for large/small values
    SigFigs(u32),
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Decimal(6)
    }
}

/// How results are rendered as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub format: NumberFormat,
    pub decimal_separator: char,
    /// Thousands separator, `None` to disable grouping
    pub grouping_separator: Option<char>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            format: NumberFormat::default(),
            decimal_separator: '.',
            grouping_separator: Some(','),
        }
    }
}

impl DisplayOptions {
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn with_grouping_separator(mut self, separator: Option<char>) -> Self {
        self.grouping_separator = separator;
        self
    }
}

/// Values at or above this magnitude switch to scientific notation
const SCIENTIFIC_ABOVE: f64 = 1e15;

/// An f64 never carries more than 17 significant decimal digits
pub const MAX_DIGITS: u32 = 17;

/// Mantissa fraction digits, one less than `MAX_DIGITS`
const MAX_MANTISSA_DIGITS: usize = MAX_DIGITS as usize - 1;

/// Render a finite value for display
pub fn format_number(value: f64, options: &DisplayOptions) -> String {
    if value == 0.0 {
        // Also catches -0.0
        return "0".to_string();
    }

    let plain = match options.format {
        NumberFormat::Decimal(places) => {
            let places = places.min(MAX_DIGITS) as usize;
            let mantissa_digits = places.clamp(1, MAX_MANTISSA_DIGITS);
            if value.abs() >= SCIENTIFIC_ABOVE {
                return scientific(value, mantissa_digits, options);
            }
            let rounded = trim_fraction(format!("{:.prec$}", value, prec = places));
            if rounded == "0" {
                // Non-zero but below the last shown fraction digit
                return scientific(value, mantissa_digits, options);
            }
            rounded
        }
        NumberFormat::SigFigs(sigfigs) => {
            let sigfigs = sigfigs.clamp(1, MAX_DIGITS) as usize;
            let exp = value.abs().log10().floor() as i32;
            if !(-3..=4).contains(&exp) {
                return scientific(value, sigfigs - 1, options);
            }
            let decimal_places = if exp >= 0 {
                (sigfigs as i32 - exp - 1).max(0) as usize
            } else {
                sigfigs + (-exp - 1) as usize
            };
            format!("{:.prec$}", value, prec = decimal_places)
        }
    };

    localize(&plain, options)
}

/// Mantissa with `digits` fraction digits, trailing zeros trimmed: "1.5e20"
fn scientific(value: f64, digits: usize, options: &DisplayOptions) -> String {
    let formatted = format!("{:.prec$e}", value, prec = digits);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let mantissa = trim_fraction(mantissa.to_string())
                .replace('.', &options.decimal_separator.to_string());
            format!("{}e{}", mantissa, exp)
        }
        None => formatted,
    }
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Apply grouping and decimal separators to a plain "-1234.5" string
fn localize(plain: &str, options: &DisplayOptions) -> String {
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut out = String::from(sign);
    match options.grouping_separator {
        Some(sep) => out.push_str(&group_thousands(int_part, sep)),
        None => out.push_str(int_part),
    }
    if let Some(frac) = frac_part {
        out.push(options.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_number(value, &DisplayOptions::default())
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(1.609344), "1.609344");
        assert_eq!(fmt(0.005), "0.005");
        assert_eq!(fmt(-2.5), "-2.5");
    }

    #[test]
    fn test_rounds_to_fraction_digits() {
        assert_eq!(fmt(1.0 / 3.0), "0.333333");
        assert_eq!(fmt(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn test_zero_and_negative_zero() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(fmt(1234567.25), "1,234,567.25");
        assert_eq!(fmt(-1000.0), "-1,000");
        assert_eq!(fmt(999.0), "999");
    }

    #[test]
    fn test_scientific_for_extremes() {
        assert_eq!(fmt(1e20), "1e20");
        assert_eq!(fmt(1.5e-9), "1.5e-9");
    }

    #[test]
    fn test_custom_separators() {
        let options = DisplayOptions::default()
            .with_decimal_separator(',')
            .with_grouping_separator(Some('.'));
        assert_eq!(format_number(1234.5, &options), "1.234,5");

        let options = DisplayOptions::default().with_grouping_separator(None);
        assert_eq!(format_number(1234.5, &options), "1234.5");
    }

    #[test]
    fn test_sigfigs() {
        let options = DisplayOptions::default().with_format(NumberFormat::SigFigs(3));
        assert_eq!(format_number(1234.56, &options), "1,235");
        assert_eq!(format_number(0.0123456, &options), "0.0123");
        assert_eq!(format_number(6.02e23, &options), "6.02e23");
    }

    #[test]
    fn test_scientific_boundary_at_1e15() {
        assert_eq!(fmt(999_999_999_999_999.0), "999,999,999,999,999");
        assert_eq!(fmt(1e15), "1e15");
    }

    #[test]
    fn test_smallest_shown_fraction() {
        // Rounds to zero at six fraction digits, so shown in scientific form
        assert_eq!(fmt(4e-7), "4e-7");
        assert_eq!(fmt(-3e-7), "-3e-7");
        assert_eq!(fmt(1e-6), "0.000001");
    }

    #[test]
    fn test_scientific_uses_decimal_separator() {
        let options = DisplayOptions::default()
            .with_decimal_separator(',')
            .with_grouping_separator(Some('.'));
        assert_eq!(format_number(1.5e20, &options), "1,5e20");
        assert_eq!(format_number(2.5e-9, &options), "2,5e-9");

        let options = options.with_format(NumberFormat::SigFigs(3));
        assert_eq!(format_number(6.02e23, &options), "6,02e23");
    }

    #[test]
    fn test_huge_precision_is_clamped() {
        let options = DisplayOptions::default().with_format(NumberFormat::Decimal(u32::MAX));
        assert_eq!(format_number(1.5, &options), "1.5");
        let tiny = format_number(1e-30, &options);
        assert!(tiny.starts_with('1') && tiny.ends_with("e-30"), "{tiny}");

        let options = DisplayOptions::default().with_format(NumberFormat::SigFigs(u32::MAX));
        assert_eq!(format_number(1.5, &options), "1.5000000000000000");

        let options = DisplayOptions::default().with_format(NumberFormat::SigFigs(0));
        assert_eq!(format_number(1234.0, &options), "1,234");
    }

    #[test]
    fn test_options_serde() {
        let json = r#"{"format": {"sig_figs": 4}, "grouping_separator": null}"#;
        let options: DisplayOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.format, NumberFormat::SigFigs(4));
        assert_eq!(options.grouping_separator, None);
        assert_eq!(options.decimal_separator, '.');
    }
}
