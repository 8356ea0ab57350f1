// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact conversions from raw numeric strings to [`BigDecimal`]
//!
//! Event payloads encode amounts either as hex integers (optionally `0x`
//! prefixed) or as plain decimal digit strings. All conversions go through
//! [`BigInt`] so values of any size survive without floating-point rounding.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use crate::errors::PayloadError;

/// Trim surrounding whitespace, strip an optional `0x`/`0X` prefix and check
/// that hex digits remain
fn hex_digits(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())).then_some(digits)
}

/// Parse a base-16 string into a non-negative integer
///
/// Accepts an optional `0x`/`0X` prefix followed by one or more hex digits,
/// ignoring surrounding whitespace. Signs, inner whitespace and underscores are
/// rejected with [`PayloadError::InvalidNumber`] naming `field`.
pub fn parse_hex_integer(field: &str, raw: &str) -> Result<BigInt, PayloadError> {
    hex_digits(raw)
        .and_then(|digits| BigInt::parse_bytes(digits.as_bytes(), 16))
        .ok_or_else(|| PayloadError::invalid_number(field))
}

/// Convert a base-16 string to an integer-valued decimal (zero fractional digits)
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use lendscan::hex_to_integer_decimal;
///
/// assert_eq!(hex_to_integer_decimal("amount", "0xff").unwrap(), BigDecimal::from(255));
/// assert!(hex_to_integer_decimal("amount", "zz").is_err());
/// ```
pub fn hex_to_integer_decimal(field: &str, raw: &str) -> Result<BigDecimal, PayloadError> {
    Ok(BigDecimal::new(parse_hex_integer(field, raw)?, 0))
}

/// Convert a base-16 string to `value / 10^scale` exactly
///
/// The result carries `scale` fractional digits; no rounding takes place.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use lendscan::hex_to_scaled_decimal;
///
/// // 0x33b2e3c9fd0803ce8000000 == 10^27
/// let one = hex_to_scaled_decimal("lending_accumulator", "0x33b2e3c9fd0803ce8000000", 27).unwrap();
/// assert_eq!(one, BigDecimal::from(1));
///
/// let tiny = hex_to_scaled_decimal("debt_accumulator", "1", 27).unwrap();
/// assert_eq!(tiny, BigDecimal::from_str("1e-27").unwrap());
/// ```
pub fn hex_to_scaled_decimal(
    field: &str,
    raw: &str,
    scale: u32,
) -> Result<BigDecimal, PayloadError> {
    Ok(BigDecimal::new(
        parse_hex_integer(field, raw)?,
        i64::from(scale),
    ))
}

/// Serialize a decimal in plain notation, never with an exponent
///
/// Scaled values keep every fractional digit, so all accumulators of one scale
/// render with the same number of decimals.
pub(crate) fn serialize_plain_decimal<S>(
    value: &BigDecimal,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_plain_string())
}

/// Convert a string of ASCII decimal digits to an integer-valued decimal
///
/// Empty input, signs, whitespace and decimal points are all rejected with
/// [`PayloadError::NonNumericAmount`] naming `field`.
pub fn digits_to_decimal(field: &str, raw: &str) -> Result<BigDecimal, PayloadError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PayloadError::non_numeric_amount(field));
    }

    BigInt::parse_bytes(raw.as_bytes(), 10)
        .map(|value| BigDecimal::new(value, 0))
        .ok_or_else(|| PayloadError::non_numeric_amount(field))
}
