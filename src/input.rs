//! Operand parsing and range validation.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{config::CalculatorConfig, error::ValidationError};

/// Parses `raw` into a normalized decimal within the configured bound.
///
/// Leading and trailing whitespace is ignored; plain and scientific notation
/// are both accepted. The returned value has trailing zeros stripped.
pub fn validate_number(
    raw: &str,
    config: &CalculatorConfig,
) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    let number = parse_decimal(trimmed)
        .ok_or_else(|| ValidationError::InvalidNumber(trimmed.to_string()))?;
    if number.abs() > config.max_input_value {
        return Err(ValidationError::AboveLimit(config.max_input_value));
    }
    Ok(number.normalize())
}

/// Accepts `"12.5"` as well as `"1.25e1"`.
pub(crate) fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
}
