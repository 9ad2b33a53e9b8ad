//! Semantic field types.
//!
//! Each variant tells the decoder how to interpret the bytes of one field.
//! The serialized names are the ones used in layout descriptions and are
//! stable across versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a field's source bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// EBCDIC text (CP037), one byte per character.
    #[serde(rename = "String")]
    FixedText,
    /// EBCDIC text holding an unsigned or overpunch-signed integer.
    #[serde(rename = "NumericString")]
    NumericText,
    /// EBCDIC text holding a date as YYMMDD, CYYMMDD or YYYYMMDD.
    #[serde(rename = "DateString")]
    DateText,
    /// EBCDIC text holding a date as MMDDYY.
    #[serde(rename = "DateStringMMDDYY")]
    DateTextMmDdYy,
    /// COMP-3 packed decimal.
    #[serde(rename = "Packed")]
    PackedDecimal,
    /// COMP-3 packed decimal holding a CYYMMDD date.
    #[serde(rename = "PackedDate")]
    PackedDate,
    /// Unsigned big-endian integer of 1, 2 or 4 bytes.
    #[serde(rename = "BinaryNum")]
    BinaryInteger,
    /// Source bytes as hyphen-delimited uppercase hex.
    #[serde(rename = "SourceBytesBase16")]
    RawHex,
    /// Source bytes as space-delimited decimal values.
    #[serde(rename = "SourceBytesBase10")]
    RawDecimal,
    /// Source bytes as a bit string; one byte may pack eight flags.
    #[serde(rename = "SourceBytesBase2")]
    RawBinary,
    /// Mixed single/double-byte EBCDIC (IBM935-style), decoded by a `DbcsMapper`.
    #[serde(rename = "StringEncIbm935")]
    LegacyDbcsText,
    /// Single-byte ISO-8859-1 text.
    #[serde(rename = "StringUnicode")]
    PlainText,
}

impl FieldType {
    /// Every variant, in declaration order.
    pub const ALL: [FieldType; 12] = [
        FieldType::FixedText,
        FieldType::NumericText,
        FieldType::DateText,
        FieldType::DateTextMmDdYy,
        FieldType::PackedDecimal,
        FieldType::PackedDate,
        FieldType::BinaryInteger,
        FieldType::RawHex,
        FieldType::RawDecimal,
        FieldType::RawBinary,
        FieldType::LegacyDbcsText,
        FieldType::PlainText,
    ];

    /// The name used for this type in layout descriptions.
    pub fn layout_name(&self) -> &'static str {
        match self {
            FieldType::FixedText => "String",
            FieldType::NumericText => "NumericString",
            FieldType::DateText => "DateString",
            FieldType::DateTextMmDdYy => "DateStringMMDDYY",
            FieldType::PackedDecimal => "Packed",
            FieldType::PackedDate => "PackedDate",
            FieldType::BinaryInteger => "BinaryNum",
            FieldType::RawHex => "SourceBytesBase16",
            FieldType::RawDecimal => "SourceBytesBase10",
            FieldType::RawBinary => "SourceBytesBase2",
            FieldType::LegacyDbcsText => "StringEncIbm935",
            FieldType::PlainText => "StringUnicode",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layout_name())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FieldType::ALL
            .iter()
            .copied()
            .find(|t| t.layout_name() == s)
            .ok_or_else(|| format!("unknown field type: '{s}'"))
    }
}
