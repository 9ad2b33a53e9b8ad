//! `EbcdicDecoder`, the `FieldDecoder` implementation for mainframe records.

use crate::codepage::ShiftCodeMapper;
use crate::{binary, date, numeric, packed, text};
use recordcodec_core::{raw, DbcsMapper, FieldDecoder, FieldOutcome, FieldType};
use std::fmt;
use std::sync::Arc;

/// Decoder for CP037-based records.
/// Thread-safe and cheap to clone; the only state is the shared DBCS mapper.
#[derive(Clone)]
pub struct EbcdicDecoder {
    mapper: Arc<dyn DbcsMapper>,
}

impl EbcdicDecoder {
    /// Decoder with the default [`ShiftCodeMapper`] (no double-byte table).
    pub fn new() -> Self {
        Self::with_mapper(Arc::new(ShiftCodeMapper::new()))
    }

    /// Decoder that hands `StringEncIbm935` fields to `mapper`.
    pub fn with_mapper(mapper: Arc<dyn DbcsMapper>) -> Self {
        Self { mapper }
    }
}

impl Default for EbcdicDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EbcdicDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EbcdicDecoder").finish_non_exhaustive()
    }
}

impl FieldDecoder for EbcdicDecoder {
    fn decode_bytes(&self, field_type: FieldType, bytes: &[u8], scale: u8) -> FieldOutcome {
        match field_type {
            FieldType::FixedText => text::fixed_text(bytes),
            FieldType::NumericText => numeric::numeric_text(bytes, scale),
            FieldType::DateText => date::date_text(bytes),
            FieldType::DateTextMmDdYy => date::date_text_mmddyy(bytes),
            FieldType::PackedDecimal => packed::packed_decimal(bytes, scale),
            FieldType::PackedDate => packed::packed_date(bytes),
            FieldType::BinaryInteger => binary::binary_integer(bytes, scale),
            FieldType::RawHex => FieldOutcome::ok(raw::to_hex(bytes)),
            FieldType::RawDecimal => FieldOutcome::ok(raw::to_decimal(bytes)),
            FieldType::RawBinary => FieldOutcome::ok(raw::to_bits(bytes)),
            FieldType::LegacyDbcsText => text::dbcs_text(self.mapper.as_ref(), bytes),
            FieldType::PlainText => text::plain_text(bytes),
        }
    }
}
