//! Decoded field and record types, the primary output of RecordCodec.

use crate::decoder::FieldOutcome;
use crate::error::DecodeError;
use crate::raw;
use crate::spec::{FieldSpec, LineSpec};
use indexmap::IndexMap;
use std::ops::Index;
use std::sync::Arc;

/// One decoded field: the bytes it came from, the text, and whether the
/// decoding algorithm recognised the bytes.
#[derive(Debug, Clone)]
pub struct DecodedField {
    spec: Arc<FieldSpec>,
    raw: Vec<u8>,
    text: String,
    success: bool,
}

impl DecodedField {
    pub fn new(spec: Arc<FieldSpec>, raw: Vec<u8>, outcome: FieldOutcome) -> Self {
        Self {
            spec,
            raw,
            text: outcome.text,
            success: outcome.success,
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// The exact bytes consumed from the record.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `false` when the field was a soft failure and `text` is a raw fallback.
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn raw_hex(&self) -> String {
        raw::to_hex(&self.raw)
    }

    pub fn raw_decimal(&self) -> String {
        raw::to_decimal(&self.raw)
    }

    pub fn raw_binary(&self) -> String {
        raw::to_bits(&self.raw)
    }
}

/// A fully decoded record, fields in layout order.
#[derive(Debug, Clone)]
pub struct DecodedRecord {
    spec: Arc<LineSpec>,
    fields: IndexMap<String, DecodedField>,
}

impl DecodedRecord {
    pub fn new(spec: Arc<LineSpec>, fields: IndexMap<String, DecodedField>) -> Self {
        Self { spec, fields }
    }

    /// The layout this record was decoded against.
    pub fn spec(&self) -> &LineSpec {
        &self.spec
    }

    /// Decoded text of a field by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Result<&str, DecodeError> {
        self.field(name).map(DecodedField::text)
    }

    pub fn field(&self, name: &str) -> Result<&DecodedField, DecodeError> {
        self.fields.get(name).ok_or_else(|| DecodeError::UnknownField {
            name: name.to_string(),
        })
    }

    /// Field by zero-based position in layout order.
    pub fn field_at(&self, index: usize) -> Result<&DecodedField, DecodeError> {
        self.fields
            .get_index(index)
            .map(|(_, f)| f)
            .ok_or(DecodeError::IndexOutOfRange {
                index,
                len: self.fields.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecodedField> {
        self.fields.values()
    }

    /// Decoded texts in layout order.
    pub fn values(&self) -> Vec<&str> {
        self.fields.values().map(DecodedField::text).collect()
    }

    /// Fields whose decoder fell back to a raw rendering.
    pub fn soft_failures(&self) -> impl Iterator<Item = &DecodedField> {
        self.fields.values().filter(|f| !f.success)
    }

    pub fn has_soft_failures(&self) -> bool {
        self.soft_failures().next().is_some()
    }
}

/// Panics if the field does not exist; use [`DecodedRecord::get`] otherwise.
impl Index<&str> for DecodedRecord {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Ok(text) => text,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Panics if the index is out of range; use [`DecodedRecord::field_at`] otherwise.
impl Index<usize> for DecodedRecord {
    type Output = DecodedField;

    fn index(&self, index: usize) -> &DecodedField {
        match self.field_at(index) {
            Ok(field) => field,
            Err(e) => panic!("{e}"),
        }
    }
}
