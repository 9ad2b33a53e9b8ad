//! Error types for the RecordCodec decode pipeline.
//!
//! Only the fatal tier lives here. Per-field soft failures are carried as
//! values in [`crate::record::DecodedField::success`].

use crate::types::FieldType;
use thiserror::Error;

/// Validation errors raised while building a `FieldSpec` or `LineSpec`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("Field name is required for a field spec")]
    EmptyName,

    #[error("Start position cannot be negative for field '{field}' (got {start})")]
    NegativeStart { field: String, start: i64 },

    #[error("Field size must be greater than zero for field '{field}' (got {size})")]
    InvalidSize { field: String, size: i64 },

    #[error("Binary field '{field}' must be 1, 2 or 4 bytes long (got {size})")]
    InvalidBinarySize { field: String, size: usize },

    #[error("Decimal scale {scale} for field '{field}' is outside 0..={max}")]
    ScaleOutOfRange { field: String, scale: i64, max: u8 },

    #[error("Line size must be greater than zero")]
    ZeroLineSize,

    #[error("Field '{field}' ends at byte {end}, past the line size of {line_size}")]
    ExceedsLine {
        field: String,
        end: usize,
        line_size: usize,
    },

    #[error("Field '{field}' is already defined in this line spec")]
    DuplicateField { field: String },
}

/// Errors that abort the decode of a single record.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(
        "Field '{field}' ({field_type}) at offset {start}+{size} falls outside the {available} available bytes"
    )]
    FieldOutOfBounds {
        field: String,
        field_type: FieldType,
        start: usize,
        size: usize,
        available: usize,
    },

    #[error("Line spec must contain at least one field")]
    NoFields,

    #[error("Field '{name}' is not defined in this record")]
    UnknownField { name: String },

    #[error("Field index {index} is out of range for a record of {len} fields")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Data length {len} is shorter than the line size {line_size}")]
    DataShorterThanLine { len: usize, line_size: usize },

    #[error("Data length {len} does not equal the line size {line_size}")]
    LineLengthMismatch { len: usize, line_size: usize },

    #[error(
        "Data bytes = {len}; line size = {line_size}; expected number of records is not a whole number"
    )]
    PartialLine { len: usize, line_size: usize },
}

/// Errors that abort a batch decode. No partial output accompanies them.
#[derive(Debug, Error)]
pub enum BatchDecodeError {
    #[error("Batch input rejected: {0}")]
    Input(#[from] DecodeError),

    #[error("Decode error at record index {index}: {source}")]
    RecordFailed {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

impl BatchDecodeError {
    /// Index of the record that aborted the batch, if the failure was
    /// record-specific.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            BatchDecodeError::RecordFailed { index, .. } => Some(*index),
            BatchDecodeError::Input(_) => None,
        }
    }
}

/// Errors from reading, writing, or registering layout descriptions.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Parse error in layout description: {0}")]
    Parse(String),

    #[error("Attribute '{attribute}' is missing in {context}")]
    MissingAttribute { attribute: String, context: String },

    #[error("'{type_name}' is not a known field type (field '{field}')")]
    UnknownFieldType { field: String, type_name: String },

    #[error("Invalid layout: {0}")]
    Spec(#[from] SpecError),

    #[error("Layout '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
