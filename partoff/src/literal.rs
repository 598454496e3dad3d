use crate::error::Error;

// Parse an integer literal, inferring the base from its prefix: 0x/0X means
// hexadecimal, a bare leading 0 means octal, anything else decimal.
fn parse_int(literal: &str) -> Result<u64, std::num::ParseIntError> {
    if let Some(digits) = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        u64::from_str_radix(digits, 16)
    } else if literal.len() > 1 && literal.starts_with('0') {
        u64::from_str_radix(&literal[1..], 8)
    } else {
        literal.parse()
    }
}

/// Parses a size literal into bytes. A `K` suffix scales by 1024, an `M`
/// suffix by 1024x1024. The literal is trimmed and case-insensitive.
pub fn parse_size(literal: &str) -> Result<u64, Error> {
    let invalid = || Error::InvalidSizeLiteral(literal.to_string());

    let normalized = literal.trim().to_uppercase();
    let (digits, scale) = if let Some(digits) = normalized.strip_suffix('K') {
        (digits, 1024)
    } else if let Some(digits) = normalized.strip_suffix('M') {
        (digits, 1024 * 1024)
    } else {
        (normalized.as_str(), 1)
    };

    let value = parse_int(digits).map_err(|_| invalid())?;
    value.checked_mul(scale).ok_or_else(invalid)
}

/// Parses an explicit offset literal under the same base-inferring rules.
pub fn parse_offset(literal: &str) -> Result<u64, Error> {
    parse_int(literal).map_err(|_| Error::InvalidOffsetLiteral(literal.to_string()))
}
