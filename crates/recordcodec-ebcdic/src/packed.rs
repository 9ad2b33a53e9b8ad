//! Packed decimal (COMP-3) decoding.
//!
//! Two digits per byte, with the sign in the low nibble of the last byte:
//! `C` or `F` positive, `D` negative. `+38489` in six bytes reads
//! `00 00 00 38 48 9C`.
//!
//! The magnitude is accumulated into a 96-bit integer held in three 32-bit
//! lanes, which is exactly the mantissa width of [`rust_decimal::Decimal`].

use crate::codepage::is_filler;
use crate::date::cyymmdd;
use crate::text::ebcdic_trimmed;
use recordcodec_core::FieldOutcome;
use rust_decimal::Decimal;

const LANE_MASK: u64 = 0xFFFF_FFFF;

/// Why a packed value could not be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackedFault {
    /// Sign nibble other than `C`, `D` or `F`.
    BadSign(u8),
    /// Digit nibble above 9.
    BadDigit(u8),
    /// Magnitude does not fit in 96 bits.
    Overflow,
}

/// Three 32-bit lanes, least significant first.
#[derive(Debug, Default, Clone, Copy)]
struct Lanes {
    lo: u64,
    mid: u64,
    hi: u64,
}

impl Lanes {
    /// `self = self * 10 + digit`, failing on a carry out of the top lane.
    fn push_digit(&mut self, digit: u64) -> Result<(), PackedFault> {
        let mut wide = self.lo * 10 + digit;
        self.lo = wide & LANE_MASK;
        wide = self.mid * 10 + (wide >> 32);
        self.mid = wide & LANE_MASK;
        wide = self.hi * 10 + (wide >> 32);
        self.hi = wide & LANE_MASK;
        if wide >> 32 != 0 {
            return Err(PackedFault::Overflow);
        }
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.lo == 0 && self.mid == 0 && self.hi == 0
    }
}

/// Nibble `n` counted from the least significant end; nibble 0 is the sign.
fn nibble(bytes: &[u8], n: usize) -> u8 {
    let b = bytes[bytes.len() - 1 - n / 2];
    if n % 2 == 0 {
        b & 0x0F
    } else {
        b >> 4
    }
}

/// Unpack a non-empty packed field into a `Decimal` with `scale` places.
pub fn unpack(bytes: &[u8], scale: u8) -> Result<Decimal, PackedFault> {
    let negative = match nibble(bytes, 0) {
        0x0C | 0x0F => false,
        0x0D => true,
        other => return Err(PackedFault::BadSign(other)),
    };
    let mut lanes = Lanes::default();
    for n in (1..bytes.len() * 2).rev() {
        let digit = nibble(bytes, n);
        if digit > 9 {
            return Err(PackedFault::BadDigit(digit));
        }
        lanes.push_digit(u64::from(digit))?;
    }
    // Lanes are masked to 32 bits above, so the narrowing casts are exact.
    Ok(Decimal::from_parts(
        lanes.lo as u32,
        lanes.mid as u32,
        lanes.hi as u32,
        negative && !lanes.is_zero(),
        u32::from(scale),
    ))
}

/// `Packed`: filler is empty; a malformed value falls back to its CP037 text.
pub fn packed_decimal(bytes: &[u8], scale: u8) -> FieldOutcome {
    if bytes.is_empty() || is_filler(bytes) {
        return FieldOutcome::empty();
    }
    match unpack(bytes, scale) {
        Ok(value) => FieldOutcome::ok(value.to_string()),
        Err(_) => FieldOutcome::soft_fail(ebcdic_trimmed(bytes)),
    }
}

/// `PackedDate`: a scale-0 packed value read as `CYYMMDD`.
pub fn packed_date(bytes: &[u8]) -> FieldOutcome {
    let unpacked = packed_decimal(bytes, 0);
    if !unpacked.success {
        return unpacked;
    }
    cyymmdd(&unpacked.text)
}
