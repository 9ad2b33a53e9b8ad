//! Zoned numeric text with optional overpunch sign, and implied-decimal
//! scaling shared with the binary decoder.

use crate::text::ebcdic_trimmed;
use recordcodec_core::FieldOutcome;
use rust_decimal::Decimal;

/// Divide `value` by `10^scale` and render it without trailing fractional
/// zeros: `(43739, 2)` → `"437.39"`, `(1200, 2)` → `"12"`, `(1250, 2)` → `"12.5"`.
pub fn scaled(value: i64, scale: u8) -> String {
    Decimal::new(value, u32::from(scale)).normalize().to_string()
}

/// Digit and sign encoded by an overpunch character.
///
/// `{`, `A`..=`I` carry 0..=9 positive; `}`, `J`..=`R` carry 0..=9 negative.
fn overpunch(c: char) -> Option<(u8, bool)> {
    match c {
        '{' => Some((0, false)),
        '}' => Some((0, true)),
        'A'..='I' => Some((c as u8 - b'A' + 1, false)),
        'J'..='R' => Some((c as u8 - b'J' + 1, true)),
        _ => None,
    }
}

/// `NumericString`: EBCDIC digits, the last of which may carry an overpunch
/// sign. Anything else is a soft failure carrying the trimmed text.
pub fn numeric_text(bytes: &[u8], scale: u8) -> FieldOutcome {
    let text = ebcdic_trimmed(bytes);
    if text.is_empty() {
        return FieldOutcome::empty();
    }
    match parse_signed(&text) {
        Some(value) => FieldOutcome::ok(scaled(value, scale)),
        None => FieldOutcome::soft_fail(text),
    }
}

fn parse_signed(text: &str) -> Option<i64> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse().ok();
    }
    let mut chars = text.chars();
    let last = chars.next_back()?;
    let head = chars.as_str();
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (digit, negative) = overpunch(last)?;
    let magnitude: i64 = format!("{head}{digit}").parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
