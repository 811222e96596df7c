//! `#RRGGBB` color codec
//!
//! Malformed input never fails loudly: it decodes to black, which is what a
//! lenient numeric parser would return for garbage.

use super::{BLACK, Rgb, rgb_from_u32};

const HEX_COLOR_LEN: usize = 7;

/// Parse a `#RRGGBB` string into a color
///
/// Returns [`BLACK`] when the string has the wrong length, lacks the `#`
/// prefix or contains non-hex digits.
pub fn parse_hex(value: &str) -> Rgb {
    let Some(digits) = value.strip_prefix('#') else {
        return BLACK;
    };
    if value.len() != HEX_COLOR_LEN {
        return BLACK;
    }
    // from_str_radix accepts a leading sign, which is not a hex digit here
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return BLACK;
    }

    u32::from_str_radix(digits, 16).map_or(BLACK, rgb_from_u32)
}
