//! Conversion between base units (wei) and human-readable decimal amounts.

use std::str::FromStr;

use alloy::primitives::U256;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from unit conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("empty amount")]
    Empty,
    #[error("negative amounts not allowed")]
    Negative,
    #[error("too many decimal places: got {got}, max {max}")]
    TooManyDecimals { got: u32, max: u8 },
    #[error("invalid amount: {0}")]
    Invalid(String),
    #[error("amount overflows 256 bits")]
    Overflow,
    #[error("value does not fit in a decimal: {0}")]
    OutOfRange(String),
}

/// Result alias for unit conversion.
pub type Result<T> = std::result::Result<T, UnitsError>;

/// Scales a decimal amount to base units: `amount * 10^decimals`.
///
/// `to_wei(0.02, 18)` → `20_000_000_000_000_000`.
pub fn to_wei(amount: Decimal, decimals: u8) -> Result<U256> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(UnitsError::Negative);
    }

    let amount = amount.normalize();
    let scale = amount.scale();
    if scale > u32::from(decimals) {
        return Err(UnitsError::TooManyDecimals {
            got: scale,
            max: decimals,
        });
    }

    let mantissa = U256::from(amount.mantissa().unsigned_abs());
    if mantissa.is_zero() {
        return Ok(U256::ZERO);
    }
    let factor = pow10(u32::from(decimals) - scale)?;
    mantissa.checked_mul(factor).ok_or(UnitsError::Overflow)
}

/// Scales base units down to a decimal amount: `value / 10^decimals`.
///
/// Fractional digits past `Decimal`'s 28-digit scale are rounded.
pub fn to_decimal(value: U256, decimals: u8) -> Result<Decimal> {
    let formatted = format_units(value, decimals);
    Decimal::from_str(&formatted)
        .map(|d| d.normalize())
        .map_err(|e| UnitsError::OutOfRange(format!("{formatted}: {e}")))
}

/// Parse a decimal string (e.g. "1.5") into base units with the given number of decimals.
///
/// `parse_units("1.5", 18)` → `U256(1_500_000_000_000_000_000)`.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256> {
    let amount = amount.trim();
    validate_decimal(amount)?;

    let (integer, fractional) = match amount.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (amount, ""),
    };

    let decimals = usize::from(decimals);
    if fractional.len() > decimals {
        return Err(UnitsError::TooManyDecimals {
            got: fractional.len() as u32,
            max: decimals as u8,
        });
    }

    // Pad fractional part to `decimals` digits
    let padded = format!("{fractional:0<decimals$}");
    let combined = format!("{integer}{padded}");

    let combined = combined.trim_start_matches('0');
    let combined = if combined.is_empty() { "0" } else { combined };

    U256::from_str_radix(combined, 10).map_err(|_| UnitsError::Overflow)
}

/// Convert a base-unit value to a decimal string with the given number of decimals.
///
/// Always carries at least one fractional digit: `format_units(10^18, 18)` → `"1.0"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let s = value.to_string();
    let decimals = usize::from(decimals);

    if s.len() <= decimals {
        if value.is_zero() {
            return "0.0".to_string();
        }
        let zeros = decimals - s.len();
        let mut result = "0.".to_string();
        result.push_str(&"0".repeat(zeros));
        result.push_str(s.trim_end_matches('0'));
        result
    } else {
        let integer_part = &s[..s.len() - decimals];
        let fractional = s[s.len() - decimals..].trim_end_matches('0');
        if fractional.is_empty() {
            format!("{integer_part}.0")
        } else {
            format!("{integer_part}.{fractional}")
        }
    }
}

fn pow10(exp: u32) -> Result<U256> {
    U256::from(10u8)
        .checked_pow(U256::from(exp))
        .ok_or(UnitsError::Overflow)
}

/// Checks that `s` is a non-negative decimal: digits with at most one dot.
fn validate_decimal(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(UnitsError::Empty);
    }
    if s.starts_with('-') {
        return Err(UnitsError::Negative);
    }
    let mut saw_dot = false;
    let mut saw_digit = false;
    for c in s.chars() {
        if c == '.' {
            if saw_dot {
                return Err(UnitsError::Invalid("multiple decimal points".to_string()));
            }
            saw_dot = true;
        } else if c.is_ascii_digit() {
            saw_digit = true;
        } else {
            return Err(UnitsError::Invalid(format!("unexpected character '{c}'")));
        }
    }
    if !saw_digit {
        return Err(UnitsError::Invalid("no digits".to_string()));
    }
    Ok(())
}
