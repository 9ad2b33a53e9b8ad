//! # recordcodec-ebcdic
//!
//! Field decoders for fixed-length mainframe records, implementing the
//! `FieldDecoder` trait.
//!
//! ## Implementation notes
//! - Text is CP037; a field made only of `0x00`/`0xFF` bytes is filler
//! - Packed decimals are accumulated in three 32-bit lanes and rendered
//!   through `rust_decimal`
//! - Dates go through `chrono` and always render `YYYY-MM-DD`
//! - Soft failures keep the best-effort raw text and never abort a record

pub mod binary;
pub mod codepage;
pub mod date;
pub mod decoder;
pub mod numeric;
pub mod packed;
pub mod text;

pub use codepage::{decode_cp037, is_filler, ShiftCodeMapper};
pub use decoder::EbcdicDecoder;
pub use packed::PackedFault;
