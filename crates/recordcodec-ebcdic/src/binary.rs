//! Unsigned big-endian binary integers (`BinaryNum`).

use crate::numeric::scaled;
use recordcodec_core::FieldOutcome;

/// Supported integer widths, chosen by field length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryWidth {
    U8,
    U16,
    U32,
}

impl BinaryWidth {
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::U8),
            2 => Some(Self::U16),
            4 => Some(Self::U32),
            _ => None,
        }
    }

    /// Read the value. Source bytes are most-significant first; they are
    /// reversed into a little-endian buffer before conversion.
    fn read(self, bytes: &[u8]) -> u32 {
        let mut le = [0u8; 4];
        for (dst, src) in le.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        match self {
            Self::U8 => u32::from(le[0]),
            Self::U16 => u32::from(u16::from_le_bytes([le[0], le[1]])),
            Self::U32 => u32::from_le_bytes(le),
        }
    }
}

/// `BinaryNum`: never a soft failure for a valid width.
///
/// Field validation guarantees a 1, 2 or 4 byte slice; any other length is
/// reported as a soft failure carrying the raw hex.
pub fn binary_integer(bytes: &[u8], scale: u8) -> FieldOutcome {
    match BinaryWidth::from_len(bytes.len()) {
        Some(width) => FieldOutcome::ok(scaled(i64::from(width.read(bytes)), scale)),
        None => FieldOutcome::soft_fail(recordcodec_core::raw::to_hex(bytes)),
    }
}
