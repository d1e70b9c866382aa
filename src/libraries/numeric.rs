//! Text codecs for the unsigned big integers that cross the crate boundary.

use num_bigint::BigUint;
use num_traits::{Num, Zero};

use crate::error::Error;

/// Parses a base-10 unsigned integer. Only ASCII digits are accepted: no sign, no
/// separators, no surrounding whitespace.
pub fn parse_decimal(literal: &str) -> Result<BigUint, Error> {
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidNumericLiteral(literal.to_string()));
    }
    BigUint::from_str_radix(literal, 10)
        .map_err(|_e| Error::InvalidNumericLiteral(literal.to_string()))
}

/// Parses a base-16 unsigned integer with an optional `0x`/`0X` prefix.
/// A bare prefix is zero.
pub fn parse_hex(literal: &str) -> Result<BigUint, Error> {
    let digits = strip_hex_prefix(literal);
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidNumericLiteral(literal.to_string()));
    }
    BigUint::from_str_radix(digits, 16)
        .map_err(|_e| Error::InvalidNumericLiteral(literal.to_string()))
}

/// Converts a hex literal into its base-10 representation.
pub fn convert_hex_to_decimal(literal: &str) -> Result<String, Error> {
    parse_hex(literal).map(|value| value.to_str_radix(10))
}

pub(crate) fn strip_hex_prefix(literal: &str) -> &str {
    literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .unwrap_or(literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0").unwrap(), BigUint::zero());
        assert_eq!(
            parse_decimal("1450188690342344788").unwrap(),
            BigUint::from(1450188690342344788_u64)
        );
        // wider than 256 bits
        let wide = "1".repeat(100);
        assert_eq!(parse_decimal(&wide).unwrap().to_str_radix(10), wide);
    }

    #[test]
    fn test_parse_decimal_rejects_malformed_input() {
        for literal in ["", "-1", "+1", "1_000", " 1", "12a", "0x10", "1.5"] {
            assert_eq!(
                parse_decimal(literal),
                Err(Error::InvalidNumericLiteral(literal.to_string())),
                "{literal:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x10").unwrap(), BigUint::from(16u32));
        assert_eq!(parse_hex("0XfF").unwrap(), BigUint::from(255u32));
        assert_eq!(parse_hex("ff").unwrap(), BigUint::from(255u32));
        assert_eq!(parse_hex("0x").unwrap(), BigUint::zero());
        assert!(parse_hex("0xg1").is_err());
        assert!(parse_hex("0x-1").is_err());
    }

    #[test]
    fn test_convert_hex_to_decimal() {
        assert_eq!(convert_hex_to_decimal("0x0").unwrap(), "0");
        assert_eq!(
            convert_hex_to_decimal("0x1000000000000000000000000").unwrap(),
            "79228162514264337593543950336"
        );
        assert_eq!(
            convert_hex_to_decimal(
                "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            )
            .unwrap(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }
}
