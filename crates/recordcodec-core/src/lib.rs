//! # recordcodec-core
//!
//! Core traits, types, and primitives shared across all RecordCodec crates.
//! The layout model (`FieldSpec`, `LineSpec`), the decoded record types, and
//! the `FieldDecoder` trait live here; the EBCDIC algorithms, the layout
//! parser, and the batch engine are all built on top of these interfaces.

pub mod decoder;
pub mod error;
pub mod raw;
pub mod record;
pub mod spec;
pub mod types;

pub use decoder::{DbcsMapper, FieldDecoder, FieldOutcome, ProgressCallback};
pub use error::{BatchDecodeError, DecodeError, LayoutError, SpecError};
pub use record::{DecodedField, DecodedRecord};
pub use spec::{FieldSpec, LineSpec, MAX_DECIMAL_SCALE};
pub use types::FieldType;
