use crate::error::CalcError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a quantity typed into a form field.
///
/// Handles formats like:
/// - "50000" -> Some(50000)
/// - "12.5" -> Some(12.5)
/// - "12,5" -> Some(12.5) (decimal comma)
/// - "" or whitespace -> None (field not provided)
///
/// Negative or non-numeric input is an error naming `field`. Amounts keep at
/// most 28 fractional digits; the calculator further rejects amounts whose
/// conversion would need more than that.
pub fn parse_amount(field: &str, s: &str) -> Result<Option<Decimal>, CalcError> {
    let s = s.trim();

    if s.is_empty() {
        return Ok(None);
    }

    let decimal = parse_decimal(s)
        .map_err(|e| CalcError::invalid_amount(field, format!("'{}' is not a number ({})", s, e)))?;

    if decimal.is_sign_negative() && !decimal.is_zero() {
        return Err(CalcError::invalid_amount(
            field,
            format!("{} is negative", decimal),
        ));
    }

    // "-0" parses as a negative zero; store it as plain zero.
    Ok(Some(decimal.abs()))
}

fn parse_decimal(s: &str) -> Result<Decimal, rust_decimal::Error> {
    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized).or_else(|_| Decimal::from_scientific(&normalized))
}
