//! The core `FieldDecoder` trait and associated progress/mapper types.
//!
//! Decoders are object-safe so they can be stored as `Arc<dyn FieldDecoder>`
//! by the batch engine and shared across Rayon threads.

use crate::error::DecodeError;
use crate::record::{DecodedField, DecodedRecord};
use crate::spec::{FieldSpec, LineSpec};
use crate::types::FieldType;
use indexmap::IndexMap;
use std::sync::Arc;

/// Result of running one decoding algorithm over one field.
///
/// `success == false` is a soft failure: `text` then holds the best-effort
/// raw rendering so it can still be audited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub text: String,
    pub success: bool,
}

impl FieldOutcome {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn soft_fail(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }

    /// The empty, successful outcome used for filler and sentinel values.
    pub fn empty() -> Self {
        Self::ok(String::new())
    }
}

/// Callback invoked by the batch engine during long-running decodes.
/// `decoded` is the number of records decoded so far; `total` is the number
/// of records in the batch.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, decoded: usize, total: usize);
}

/// Blanket impl so closures can be used as progress callbacks.
impl<F: Fn(usize, usize) + Send + Sync> ProgressCallback for F {
    fn on_progress(&self, decoded: usize, total: usize) {
        self(decoded, total)
    }
}

/// Maps mixed single/double-byte legacy text to Unicode.
///
/// Failures are the mapper's own concern: it always returns some text.
pub trait DbcsMapper: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> String;
}

/// The central decoding trait.
///
/// Implementors provide [`FieldDecoder::decode_bytes`]; slicing, bounds
/// checks, and record assembly are shared default methods.
pub trait FieldDecoder: Send + Sync {
    /// Decode the bytes of one field. `bytes` is exactly the field's slice.
    fn decode_bytes(&self, field_type: FieldType, bytes: &[u8], scale: u8) -> FieldOutcome;

    /// Slice one field out of `record` and decode it.
    ///
    /// Fails fatally if the record is too short to contain the field.
    fn decode_field(
        &self,
        record: &[u8],
        spec: &Arc<FieldSpec>,
    ) -> Result<DecodedField, DecodeError> {
        let raw = record
            .get(spec.start()..spec.end())
            .ok_or_else(|| DecodeError::FieldOutOfBounds {
                field: spec.name().to_string(),
                field_type: spec.field_type(),
                start: spec.start(),
                size: spec.size(),
                available: record.len(),
            })?;
        let outcome = self.decode_bytes(spec.field_type(), raw, spec.scale());
        Ok(DecodedField::new(Arc::clone(spec), raw.to_vec(), outcome))
    }

    /// Decode every field of `line` from one record's bytes, in layout order.
    ///
    /// Any fatal field error aborts the record.
    fn decode_record(
        &self,
        record: &[u8],
        line: &Arc<LineSpec>,
    ) -> Result<DecodedRecord, DecodeError> {
        if line.is_empty() {
            return Err(DecodeError::NoFields);
        }
        let mut fields = IndexMap::with_capacity(line.field_count());
        for spec in line.fields() {
            let decoded = self.decode_field(record, spec)?;
            fields.insert(spec.name().to_string(), decoded);
        }
        Ok(DecodedRecord::new(Arc::clone(line), fields))
    }
}
