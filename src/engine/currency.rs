//! Currency parsing.
//!
//! Timesheet exports write money as `$1,234.50`, `-$5` or plain numbers.
//! Anything that does not parse reads as zero so one bad cell never stops a
//! report.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::RawValue;

/// Parses a currency cell.
///
/// Numeric values pass through unchanged; text goes through
/// [`parse_currency_text`].
///
/// # Example
///
/// ```
/// use timesheet_audit::engine::parse_currency;
/// use timesheet_audit::models::RawValue;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_currency(&RawValue::Number(Decimal::new(42, 0))), Decimal::new(42, 0));
/// assert_eq!(parse_currency(&RawValue::from("$1,234.56")), Decimal::new(123456, 2));
/// ```
pub fn parse_currency(value: &RawValue) -> Decimal {
    match value {
        RawValue::Number(number) => *number,
        RawValue::Text(text) => parse_currency_text(text),
        RawValue::Missing => Decimal::ZERO,
    }
}

/// Parses currency text, stripping `$`, `,` and whitespace first.
///
/// The sign is kept (`"-$5"` is `-5`). Empty or non-numeric text is zero,
/// and so is text with `_` digit separators, which `Decimal` would
/// otherwise accept. Numbers outside `Decimal`'s range (about ±7.9e28)
/// also read as zero.
pub fn parse_currency_text(text: &str) -> Decimal {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() || cleaned.contains('_') {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .unwrap_or(Decimal::ZERO)
}
