//! The hex code codec. Parsing accepts `#RGB`, `#RGBA`, `#RRGGBB`, and `#RRGGBBAA`, with the
//! leading `#` optional and both letter cases allowed; the 3- and 4-digit shorthands duplicate
//! each nibble, as on the web. Output is always uppercase with a leading `#`, 6 digits for opaque
//! colors and 8 when an alpha component is present.

use regex::Regex;

use crate::error::{ColorError, ColorResult};

lazy_static! {
    static ref HEX_RE: Regex =
        Regex::new("^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
            .expect("hex regex is valid");
}

// widen a single hex nibble into a byte, e.g. 0xF -> 0xFF
fn double_nibble(nibble: u8) -> u8 {
    nibble * 16 + nibble
}

fn parse_byte(digits: &str) -> u8 {
    // the regex already guaranteed valid hex digits
    u8::from_str_radix(digits, 16).expect("regex-validated hex digits")
}

/// Parses a hex code into `(r, g, b)` and an optional alpha byte.
/// # Example
/// ```
/// # use viridian::hex::parse_hex;
/// assert_eq!(parse_hex("#FF6432").unwrap(), (255, 100, 50, None));
/// assert_eq!(parse_hex("f00").unwrap(), (255, 0, 0, None));
/// assert_eq!(parse_hex("#ff643280").unwrap(), (255, 100, 50, Some(128)));
/// ```
pub fn parse_hex(code: &str) -> ColorResult<(u8, u8, u8, Option<u8>)> {
    let captures = HEX_RE
        .captures(code)
        .ok_or_else(|| ColorError::InvalidHexCode(code.to_string()))?;
    let digits = &captures[1];
    let nibbles: Vec<u8> = digits
        .chars()
        .map(|c| c.to_digit(16).expect("regex-validated hex digit") as u8)
        .collect();
    match nibbles.len() {
        3 => Ok((
            double_nibble(nibbles[0]),
            double_nibble(nibbles[1]),
            double_nibble(nibbles[2]),
            None,
        )),
        4 => Ok((
            double_nibble(nibbles[0]),
            double_nibble(nibbles[1]),
            double_nibble(nibbles[2]),
            Some(double_nibble(nibbles[3])),
        )),
        6 => Ok((
            parse_byte(&digits[0..2]),
            parse_byte(&digits[2..4]),
            parse_byte(&digits[4..6]),
            None,
        )),
        8 => Ok((
            parse_byte(&digits[0..2]),
            parse_byte(&digits[2..4]),
            parse_byte(&digits[4..6]),
            Some(parse_byte(&digits[6..8])),
        )),
        _ => unreachable!("regex only admits 3, 4, 6, or 8 digits"),
    }
}

/// Formats channel bytes as an uppercase hex code: `#RRGGBB`, or `#RRGGBBAA` when alpha is given.
pub fn format_hex(r: u8, g: u8, b: u8, a: Option<u8>) -> String {
    match a {
        Some(alpha) => format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, alpha),
        None => format!("#{:02X}{:02X}{:02X}", r, g, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_forms() {
        assert_eq!(parse_hex("#FF6432").unwrap(), (255, 100, 50, None));
        assert_eq!(parse_hex("FF6432").unwrap(), (255, 100, 50, None));
        assert_eq!(parse_hex("#FF643280").unwrap(), (255, 100, 50, Some(128)));
        assert_eq!(parse_hex("#ff6432").unwrap(), (255, 100, 50, None));
    }

    #[test]
    fn test_parse_shorthand_doubles_nibbles() {
        assert_eq!(parse_hex("#F00").unwrap(), (255, 0, 0, None));
        assert_eq!(parse_hex("#abc").unwrap(), (170, 187, 204, None));
        assert_eq!(parse_hex("#abcd").unwrap(), (170, 187, 204, Some(221)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#1234567", "#GGGGGG", "red"].iter() {
            assert!(parse_hex(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_format_uppercase() {
        assert_eq!(format_hex(255, 100, 50, None), "#FF6432");
        assert_eq!(format_hex(255, 100, 50, Some(128)), "#FF643280");
        assert_eq!(format_hex(0, 0, 0, None), "#000000");
    }

    #[test]
    fn test_exhaustive_byte_round_trip() {
        // every byte survives format -> parse on each position
        for v in 0..=255u8 {
            let code = format_hex(v, 255 - v, v ^ 0x5A, None);
            assert_eq!(parse_hex(&code).unwrap(), (v, 255 - v, v ^ 0x5A, None));
        }
    }
}
