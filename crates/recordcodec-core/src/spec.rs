//! Layout model: the in-memory representation of a record layout.
//!
//! A `LineSpec` describes one fixed-length record; each `FieldSpec` names a
//! byte range inside it and the rule used to decode that range.

use crate::error::SpecError;
use crate::types::FieldType;
use indexmap::IndexMap;
use std::sync::Arc;

/// Upper bound for a field's decimal scale.
pub const MAX_DECIMAL_SCALE: u8 = 6;

/// Decoding contract for a single field.
///
/// Immutable once built. Two specs with equal values are still distinct
/// objects; compare with `Arc::ptr_eq` when identity matters.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    field_type: FieldType,
    start: usize,
    size: usize,
    scale: u8,
}

impl FieldSpec {
    /// Build and validate a field spec.
    ///
    /// The name is trimmed. Fails when the name is blank, the size is zero,
    /// a binary field is not 1, 2 or 4 bytes long, or the scale exceeds
    /// [`MAX_DECIMAL_SCALE`].
    pub fn new(
        name: &str,
        field_type: FieldType,
        start: usize,
        size: usize,
        scale: u8,
    ) -> Result<Self, SpecError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpecError::EmptyName);
        }
        if size == 0 {
            return Err(SpecError::InvalidSize {
                field: name.to_string(),
                size: 0,
            });
        }
        if field_type == FieldType::BinaryInteger && !matches!(size, 1 | 2 | 4) {
            return Err(SpecError::InvalidBinarySize {
                field: name.to_string(),
                size,
            });
        }
        if scale > MAX_DECIMAL_SCALE {
            return Err(SpecError::ScaleOutOfRange {
                field: name.to_string(),
                scale: i64::from(scale),
                max: MAX_DECIMAL_SCALE,
            });
        }
        Ok(Self {
            name: name.to_string(),
            field_type,
            start,
            size,
            scale,
        })
    }

    /// Build a field spec from signed values, as read from an untyped
    /// layout description. Negative values are rejected before the usual
    /// validation runs.
    pub fn from_signed(
        name: &str,
        field_type: FieldType,
        start: i64,
        size: i64,
        scale: i64,
    ) -> Result<Self, SpecError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SpecError::EmptyName);
        }
        let start = usize::try_from(start).map_err(|_| SpecError::NegativeStart {
            field: trimmed.to_string(),
            start,
        })?;
        let size = usize::try_from(size)
            .ok()
            .filter(|&s| s > 0)
            .ok_or_else(|| SpecError::InvalidSize {
                field: trimmed.to_string(),
                size,
            })?;
        let scale = u8::try_from(scale)
            .ok()
            .filter(|&s| s <= MAX_DECIMAL_SCALE)
            .ok_or_else(|| SpecError::ScaleOutOfRange {
                field: trimmed.to_string(),
                scale,
                max: MAX_DECIMAL_SCALE,
            })?;
        Self::new(trimmed, field_type, start, size, scale)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Zero-based byte offset inside the record.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of implied decimal places.
    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Exclusive end offset (`start + size`).
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.size)
    }
}

/// A fixed-length record layout: ordered fields keyed by name.
///
/// Field order is the insertion order and drives both decode order and
/// every rendered output. A `LineSpec` is never mutated once decoding
/// starts; decoders only ever borrow it.
#[derive(Debug, Clone)]
pub struct LineSpec {
    name: String,
    line_size: usize,
    fields: IndexMap<String, Arc<FieldSpec>>,
}

impl LineSpec {
    /// Placeholder written out for layouts without a name.
    pub const UNNAMED: &'static str = "No_Name";

    pub fn new(line_size: usize, name: impl Into<String>) -> Result<Self, SpecError> {
        if line_size == 0 {
            return Err(SpecError::ZeroLineSize);
        }
        Ok(Self {
            name: name.into(),
            line_size,
            fields: IndexMap::new(),
        })
    }

    /// Attach a field. Fails if it would extend past the line or if a field
    /// with the same name already exists.
    pub fn add_field(&mut self, spec: FieldSpec) -> Result<(), SpecError> {
        if spec.end() > self.line_size {
            return Err(SpecError::ExceedsLine {
                field: spec.name.clone(),
                end: spec.end(),
                line_size: self.line_size,
            });
        }
        if self.fields.contains_key(spec.name()) {
            return Err(SpecError::DuplicateField { field: spec.name.clone() });
        }
        self.fields.insert(spec.name.clone(), Arc::new(spec));
        Ok(())
    }

    /// Builder-style variant of [`LineSpec::add_field`].
    pub fn with_field(mut self, spec: FieldSpec) -> Result<Self, SpecError> {
        self.add_field(spec)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name, or [`LineSpec::UNNAMED`] when blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            Self::UNNAMED
        } else {
            &self.name
        }
    }

    pub fn line_size(&self) -> usize {
        self.line_size
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Arc<FieldSpec>> {
        self.fields.get(name)
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &Arc<FieldSpec>> {
        self.fields.values()
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str, start: usize, size: usize) -> FieldSpec {
        FieldSpec::new(name, FieldType::FixedText, start, size, 0).unwrap()
    }

    #[test]
    fn blank_name_rejected() {
        assert_eq!(
            FieldSpec::new("", FieldType::FixedText, 0, 1, 0).unwrap_err(),
            SpecError::EmptyName
        );
        assert_eq!(
            FieldSpec::new("   ", FieldType::FixedText, 0, 1, 0).unwrap_err(),
            SpecError::EmptyName
        );
    }

    #[test]
    fn name_is_trimmed() {
        let f = FieldSpec::new("  TEST ", FieldType::FixedText, 0, 1, 0).unwrap();
        assert_eq!(f.name(), "TEST");
    }

    #[test]
    fn negative_start_rejected() {
        let err = FieldSpec::from_signed("TEST", FieldType::FixedText, -1, 1, 0).unwrap_err();
        assert!(matches!(err, SpecError::NegativeStart { start: -1, .. }));
    }

    #[test]
    fn zero_and_negative_size_rejected() {
        assert!(matches!(
            FieldSpec::new("TEST", FieldType::FixedText, 0, 0, 0),
            Err(SpecError::InvalidSize { .. })
        ));
        assert!(matches!(
            FieldSpec::from_signed("TEST", FieldType::FixedText, 0, -1, 0),
            Err(SpecError::InvalidSize { size: -1, .. })
        ));
    }

    #[test]
    fn binary_width_must_be_1_2_or_4() {
        for size in [1, 2, 4] {
            assert!(FieldSpec::new("N", FieldType::BinaryInteger, 0, size, 0).is_ok());
        }
        for size in [3, 5, 8] {
            assert!(matches!(
                FieldSpec::new("N", FieldType::BinaryInteger, 0, size, 0),
                Err(SpecError::InvalidBinarySize { .. })
            ));
        }
        // Other types accept any positive width.
        assert!(FieldSpec::new("P", FieldType::PackedDecimal, 0, 3, 0).is_ok());
    }

    #[test]
    fn scale_bounds() {
        assert!(FieldSpec::new("S", FieldType::PackedDecimal, 0, 4, 6).is_ok());
        assert!(matches!(
            FieldSpec::new("S", FieldType::PackedDecimal, 0, 4, 7),
            Err(SpecError::ScaleOutOfRange { scale: 7, .. })
        ));
        assert!(matches!(
            FieldSpec::from_signed("S", FieldType::PackedDecimal, 0, 4, -1),
            Err(SpecError::ScaleOutOfRange { scale: -1, .. })
        ));
    }

    #[test]
    fn zero_line_size_rejected() {
        assert_eq!(LineSpec::new(0, "x").unwrap_err(), SpecError::ZeroLineSize);
    }

    #[test]
    fn field_must_fit_inside_line() {
        let mut line = LineSpec::new(10, "L").unwrap();
        line.add_field(text("A", 0, 10)).unwrap();
        let err = line.add_field(text("B", 5, 6)).unwrap_err();
        assert_eq!(
            err,
            SpecError::ExceedsLine {
                field: "B".into(),
                end: 11,
                line_size: 10
            }
        );
        assert_eq!(line.field_count(), 1);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut line = LineSpec::new(10, "L").unwrap();
        line.add_field(text("A", 0, 2)).unwrap();
        assert!(matches!(
            line.add_field(text("A", 2, 2)),
            Err(SpecError::DuplicateField { .. })
        ));
    }

    #[test]
    fn insertion_order_preserved() {
        let line = LineSpec::new(10, "L")
            .unwrap()
            .with_field(text("Z", 0, 1))
            .unwrap()
            .with_field(text("A", 1, 1))
            .unwrap()
            .with_field(text("M", 2, 1))
            .unwrap();
        assert_eq!(line.field_names(), vec!["Z", "A", "M"]);
    }

    #[test]
    fn unnamed_layout_display_name() {
        let line = LineSpec::new(4, "").unwrap();
        assert_eq!(line.display_name(), LineSpec::UNNAMED);
    }
}
