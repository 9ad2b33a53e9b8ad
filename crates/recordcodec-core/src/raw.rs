//! Textual renderings of raw source bytes.
//!
//! Used both by the `SourceBytesBase*` field types and by renderers that
//! attach the original bytes to decoded output.

use std::fmt::Write as _;

/// Uppercase hex pairs joined by hyphens: `[0x0A, 0xFF]` → `"0A-FF"`.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        let _ = write!(out, "{b:02X}");
    }
    out
}

/// Unsigned decimal byte values joined by spaces: `[10, 255]` → `"10 255"`.
pub fn to_decimal(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bit string starting with the most significant bit of the last byte and
/// ending with the least significant bit of the first byte.
pub fn to_bits(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for b in bytes.iter().rev() {
        let _ = write!(out, "{b:08b}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_and_hyphenated() {
        assert_eq!(to_hex(&[0x01, 0x42, 0xCC, 0x6A]), "01-42-CC-6A");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn decimal_is_space_delimited() {
        assert_eq!(to_decimal(&[0, 10, 255]), "0 10 255");
    }

    #[test]
    fn bits_start_from_last_byte() {
        assert_eq!(to_bits(&[0x01, 0x80]), "1000000000000001");
        assert_eq!(to_bits(&[0x0F]), "00001111");
    }
}
